//! Generic game lifecycle
//!
//! Every variant exposes the same surface through the `Game` trait so the
//! tournament runner can drive any of them behind a `Box<dyn Game>`.
//! Variants are a closed set; `Variant` is the registry that names them,
//! lists their player colors and constructs games.

use std::fmt;

use thiserror::Error;

use crate::chess::ChessGame;
use crate::connect_four::ConnectFourGame;
use crate::error::MoveError;
use crate::tictactoe::TicTacToeGame;

/// Outcome of one `play_move` call.
///
/// Ordinary rule violations are `Rejected`, never panics or fatal errors.
/// `Win` means the game just became terminal with a winner set; `Accepted`
/// may carry a transient check annotation (chess only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Accepted { check: bool },
    Rejected(MoveError),
    Win,
}

/// Agent categories a variant can be driven by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Agent,
}

pub trait Game {
    /// Validate and apply one move token. Rejections leave the game
    /// bit-for-bit unchanged.
    fn play_move(&mut self, token: &str) -> MoveOutcome;

    /// Append-only log of canonical move tokens.
    fn move_log(&self) -> &[String];

    fn turn_count(&self) -> u32;

    fn max_turns(&self) -> u32;

    /// Whose turn it is: 1 or 2.
    fn current_player(&self) -> u8;

    /// Set once the game is terminal with a decided winner.
    fn winner(&self) -> Option<u8>;

    fn game_over(&self) -> bool;

    /// Forcibly hand the turn to the other player, counting it as spent.
    /// Used by the tournament runner when an agent exhausts its error
    /// budget.
    fn skip_turn(&mut self);

    /// Canonicalize a raw agent token before `play_move` sees it.
    /// Identity (trimmed) by default; chess strips piece letters and
    /// capture marks.
    fn normalize_token(&self, raw: &str) -> String {
        raw.trim().to_string()
    }

    /// Fixed-width text rendering of the board, top rank first, axis
    /// labels on the final line.
    fn render(&self) -> String;

    /// Move log rendered as numbered pairs: "1. e4 e5\n2. ...".
    fn formatted_move_log(&self) -> String {
        format_move_log(self.move_log())
    }
}

/// Render an append-only token log as 1-indexed move pairs. The second
/// token of the final pair is blank when the game ended mid-pair.
pub fn format_move_log(log: &[String]) -> String {
    let mut lines = Vec::with_capacity(log.len() / 2 + 1);
    for (n, pair) in log.chunks(2).enumerate() {
        let first = &pair[0];
        let second = pair.get(1).map(String::as_str).unwrap_or("");
        lines.push(format!("{}. {} {}", n + 1, first, second));
    }
    lines.join("\n")
}

#[derive(Debug, Error)]
#[error("'{color}' is not a valid color for {variant}")]
pub struct InvalidColor {
    pub variant: &'static str,
    pub color: String,
}

/// The closed set of supported games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Chess,
    TicTacToe,
    ConnectFour,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Chess, Variant::TicTacToe, Variant::ConnectFour];

    pub fn parse(name: &str) -> Option<Variant> {
        match name.to_lowercase().as_str() {
            "chess" => Some(Variant::Chess),
            "tictactoe" | "tic-tac-toe" => Some(Variant::TicTacToe),
            "connectfour" | "connect-four" | "connect4" => Some(Variant::ConnectFour),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Variant::Chess => "chess",
            Variant::TicTacToe => "tictactoe",
            Variant::ConnectFour => "connectfour",
        }
    }

    /// The two player designators, player 1's default first.
    pub fn default_colors(&self) -> [&'static str; 2] {
        match self {
            Variant::Chess => ["white", "black"],
            Variant::TicTacToe => ["x", "o"],
            Variant::ConnectFour => ["red", "yellow"],
        }
    }

    /// Agent categories this variant supports.
    pub fn player_kinds(&self) -> &'static [PlayerKind] {
        // Every variant is playable by a human at a console or by an
        // external move-proposing agent.
        &[PlayerKind::Human, PlayerKind::Agent]
    }

    /// Construct a fresh game with player 1 holding `player1_color`.
    pub fn create(
        &self,
        max_turns: u32,
        player1_color: &str,
    ) -> Result<Box<dyn Game>, InvalidColor> {
        let colors = self.default_colors();
        if !colors.contains(&player1_color) {
            return Err(InvalidColor {
                variant: self.name(),
                color: player1_color.to_string(),
            });
        }
        Ok(match self {
            Variant::Chess => Box::new(ChessGame::new(max_turns, player1_color)),
            Variant::TicTacToe => Box::new(TicTacToeGame::new(max_turns, player1_color)),
            Variant::ConnectFour => Box::new(ConnectFourGame::new(max_turns, player1_color)),
        })
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn other_player(player: u8) -> u8 {
    if player == 1 {
        2
    } else {
        1
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
