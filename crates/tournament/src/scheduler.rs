//! Tournament scheduler
//!
//! Generates every unordered agent pairing (an agent paired with itself
//! plays exactly once), runs each game to completion or the turn limit,
//! and folds the outcomes into the persisted standings after every game.
//!
//! Agents are untrusted: a rejected or failed move only bumps error
//! counters, and five consecutive rejections cost the agent its turn
//! instead of stalling the tournament. Games run strictly one at a time;
//! the only cross-game state is the standings aggregate.

use std::path::PathBuf;
use std::time::Duration;

use rand::seq::SliceRandom;

use game_core::{Agent, Game, MoveOutcome, Variant};

use crate::standings::{GameResult, MatchEntry, Standings, StorageError};

/// Rejections in a row before a turn is forfeited.
const ERROR_BUDGET: u32 = 5;

#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Turn limit per game; reaching it records a draw.
    pub max_turns: u32,
    /// Games per distinct pairing (self-pairings always play one).
    pub games_per_pair: u32,
    /// Pause between games, a courtesy to rate-limited agents.
    pub pause_between_games: Duration,
    /// Shuffle which seat gets which color each game.
    pub shuffle_colors: bool,
    /// Print per-game progress lines.
    pub verbose: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_turns: 50,
            games_per_pair: 2,
            pause_between_games: Duration::from_secs(2),
            shuffle_colors: true,
            verbose: true,
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Won,
    TurnLimit,
}

/// Per-game record: seats are indexed 0 = player 1, 1 = player 2.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub player1: String,
    pub player2: String,
    pub player1_color: String,
    pub winner: Option<u8>,
    pub turn_count: u32,
    pub valid_moves: [u64; 2],
    pub errors: [u64; 2],
    pub skipped_turns: [u64; 2],
    pub status: GameStatus,
}

pub struct Scheduler {
    variant: Variant,
    config: SchedulerConfig,
    standings: Standings,
    standings_path: PathBuf,
}

impl Scheduler {
    /// Load (or initialize) the standings file and build a scheduler.
    /// A corrupt file is surfaced here, before any game runs.
    pub fn new(
        variant: Variant,
        config: SchedulerConfig,
        standings_path: PathBuf,
    ) -> Result<Self, StorageError> {
        let standings = Standings::load(&standings_path)?;
        Ok(Self {
            variant,
            config,
            standings,
            standings_path,
        })
    }

    pub fn standings(&self) -> &Standings {
        &self.standings
    }

    /// Run the full pairing schedule. Standings are persisted after every
    /// completed game, so a crash mid-tournament loses at most the game
    /// in flight.
    pub fn run(&mut self, agents: &mut [Box<dyn Agent>]) -> Result<Vec<GameRecord>, StorageError> {
        let mut records = Vec::new();
        let mut game_counter = 0u32;

        for i in 0..agents.len() {
            for j in i..agents.len() {
                let games = if i == j { 1 } else { self.config.games_per_pair };
                for _ in 0..games {
                    if game_counter > 0 && !self.config.pause_between_games.is_zero() {
                        std::thread::sleep(self.config.pause_between_games);
                    }
                    game_counter += 1;

                    let record = self.run_game(agents, i, j, game_counter);
                    self.record_standings(&record)?;
                    records.push(record);
                }
            }
        }
        Ok(records)
    }

    /// Play one game between the agents at `i` (player 1) and `j`
    /// (player 2) until someone wins or the turn limit is hit.
    fn run_game(
        &mut self,
        agents: &mut [Box<dyn Agent>],
        i: usize,
        j: usize,
        game_number: u32,
    ) -> GameRecord {
        let mut colors = self.variant.default_colors();
        if self.config.shuffle_colors {
            colors.shuffle(&mut rand::thread_rng());
        }
        let player1_color = colors[0];

        // The color was just taken from the variant's own list, so
        // creation cannot fail.
        let mut game = self
            .variant
            .create(self.config.max_turns, player1_color)
            .unwrap_or_else(|e| panic!("variant rejected its own color: {}", e));

        if self.config.verbose {
            println!(
                "Game {}: {} ({}) vs {} ({})",
                game_number,
                agents[i].name(),
                colors[0],
                agents[j].name(),
                colors[1]
            );
        }

        let mut valid_moves = [0u64; 2];
        let mut errors = [0u64; 2];
        let mut skipped_turns = [0u64; 2];
        let mut consecutive = [0u32; 2];

        while !game.game_over() && game.turn_count() < self.config.max_turns {
            let player = game.current_player();
            let seat = (player - 1) as usize;

            if consecutive[seat] >= ERROR_BUDGET {
                if self.config.verbose {
                    println!(
                        "  player {} forfeits the turn after {} consecutive errors",
                        player, ERROR_BUDGET
                    );
                }
                skipped_turns[seat] += 1;
                consecutive[seat] = 0;
                game.skip_turn();
                continue;
            }

            let context = if game.move_log().is_empty() {
                String::new()
            } else {
                game.formatted_move_log()
            };

            let agent_idx = if player == 1 { i } else { j };
            let raw = match agents[agent_idx].get_move(&context) {
                Ok(token) => token,
                Err(e) => {
                    if self.config.verbose {
                        println!("  player {} failed to move: {}", player, e);
                    }
                    errors[seat] += 1;
                    consecutive[seat] += 1;
                    continue;
                }
            };

            let token = game.normalize_token(&raw);
            match game.play_move(&token) {
                MoveOutcome::Accepted { .. } | MoveOutcome::Win => {
                    valid_moves[seat] += 1;
                    consecutive[seat] = 0;
                }
                MoveOutcome::Rejected(reason) => {
                    if self.config.verbose {
                        println!("  player {} move '{}' rejected: {}", player, token, reason);
                    }
                    errors[seat] += 1;
                    consecutive[seat] += 1;
                }
            }
        }

        let winner = game.winner();
        let status = if winner.is_some() {
            GameStatus::Won
        } else {
            GameStatus::TurnLimit
        };

        if self.config.verbose {
            match winner {
                Some(player) => {
                    let name = if player == 1 { agents[i].name() } else { agents[j].name() };
                    println!("  result: {} wins after {} turns", name, game.turn_count());
                }
                None => println!("  result: draw after {} turns", game.turn_count()),
            }
        }

        GameRecord {
            player1: agents[i].name().to_string(),
            player2: agents[j].name().to_string(),
            player1_color: player1_color.to_string(),
            winner,
            turn_count: game.turn_count(),
            valid_moves,
            errors,
            skipped_turns,
            status,
        }
    }

    /// Fold one finished game into the standings and persist them.
    fn record_standings(&mut self, record: &GameRecord) -> Result<(), StorageError> {
        let seats = [
            (&record.player1, &record.player2, 1u8, 0usize),
            (&record.player2, &record.player1, 2u8, 1usize),
        ];
        for (agent, opponent, player, seat) in seats {
            let result = match record.winner {
                Some(w) if w == player => GameResult::Win,
                Some(_) => GameResult::Loss,
                None => GameResult::Draw,
            };
            self.standings.record_for(
                agent,
                MatchEntry {
                    opponent: opponent.to_string(),
                    result,
                    valid_moves: record.valid_moves[seat],
                    errors: record.errors[seat],
                },
            );
        }
        self.standings.games_played += 1;
        self.standings.touch();
        self.standings.save(&self.standings_path)
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod scheduler_tests;
