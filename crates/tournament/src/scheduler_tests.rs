use super::*;

use game_core::AgentError;

use crate::agents::{RandomAgent, ScriptedAgent};
use crate::standings::GameResult;

/// Always proposes the same (rejectable) token.
struct AlwaysInvalid {
    name: String,
}

impl Agent for AlwaysInvalid {
    fn get_move(&mut self, _context: &str) -> Result<String, AgentError> {
        Ok("z9".to_string())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("scheduler_test_{}_{}.json", name, std::process::id()));
    let _ = std::fs::remove_file(&path);
    path
}

fn quiet_config(max_turns: u32) -> SchedulerConfig {
    SchedulerConfig {
        max_turns,
        games_per_pair: 2,
        pause_between_games: Duration::ZERO,
        shuffle_colors: false,
        verbose: false,
    }
}

#[test]
fn test_scripted_fools_mate_game() {
    let path = temp_path("fools_mate");
    let mut scheduler = Scheduler::new(Variant::Chess, quiet_config(50), path.clone()).unwrap();

    let mut agents: Vec<Box<dyn Agent>> = vec![
        Box::new(ScriptedAgent::new("white-agent", &["f2-f3", "g2-g4"])),
        Box::new(ScriptedAgent::new("black-agent", &["e7-e5", "Qd8h4"])),
    ];

    let record = scheduler.run_game(&mut agents, 0, 1, 1);
    assert_eq!(record.winner, Some(2));
    assert_eq!(record.status, GameStatus::Won);
    assert_eq!(record.turn_count, 4);
    assert_eq!(record.valid_moves, [2, 2]);
    assert_eq!(record.errors, [0, 0]);
    assert_eq!(record.player1_color, "white");

    scheduler.record_standings(&record).unwrap();
    let standings = scheduler.standings();
    assert_eq!(standings.games_played, 1);
    let black = standings.stats("black-agent").unwrap();
    assert_eq!(black.wins, 1);
    assert_eq!(black.valid_moves, 2);
    assert_eq!(black.matches[0].result, GameResult::Win);
    assert_eq!(black.matches[0].opponent, "white-agent");
    let white = standings.stats("white-agent").unwrap();
    assert_eq!(white.losses, 1);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_error_budget_forces_turn_skip() {
    let path = temp_path("error_budget");
    let mut scheduler =
        Scheduler::new(Variant::TicTacToe, quiet_config(4), path.clone()).unwrap();

    let mut agents: Vec<Box<dyn Agent>> = vec![
        Box::new(AlwaysInvalid {
            name: "broken".to_string(),
        }),
        Box::new(ScriptedAgent::new("steady", &["a1", "b1"])),
    ];

    let record = scheduler.run_game(&mut agents, 0, 1, 1);
    // Each of the broken agent's turns costs exactly 5 errors, then the
    // turn is forfeited once.
    assert_eq!(record.errors[0], 10);
    assert_eq!(record.skipped_turns[0], 2);
    assert_eq!(record.valid_moves, [0, 2]);
    assert_eq!(record.winner, None);
    assert_eq!(record.status, GameStatus::TurnLimit);
    assert_eq!(record.turn_count, 4);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_agent_failure_counts_like_a_rejection() {
    let path = temp_path("agent_failure");
    let mut scheduler =
        Scheduler::new(Variant::TicTacToe, quiet_config(2), path.clone()).unwrap();

    let mut agents: Vec<Box<dyn Agent>> = vec![
        // Exhausted immediately, so every call returns an error
        Box::new(ScriptedAgent::new("empty", &[])),
        Box::new(ScriptedAgent::new("steady", &["a1"])),
    ];

    let record = scheduler.run_game(&mut agents, 0, 1, 1);
    assert_eq!(record.errors[0], 5);
    assert_eq!(record.skipped_turns[0], 1);
    assert_eq!(record.valid_moves, [0, 1]);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_pairing_schedule_and_cumulative_persistence() {
    let path = temp_path("pairings");

    let run_once = |path: &PathBuf| {
        let mut scheduler =
            Scheduler::new(Variant::TicTacToe, quiet_config(9), path.clone()).unwrap();
        let mut agents: Vec<Box<dyn Agent>> = vec![
            Box::new(RandomAgent::new("a", Variant::TicTacToe)),
            Box::new(RandomAgent::new("b", Variant::TicTacToe)),
            Box::new(RandomAgent::new("c", Variant::TicTacToe)),
        ];
        scheduler.run(&mut agents).unwrap()
    };

    // 3 self-pairings play once each, 3 distinct pairs play twice each
    let records = run_once(&path);
    assert_eq!(records.len(), 9);

    let standings = Standings::load(&path).unwrap();
    assert_eq!(standings.games_played, 9);
    let total_games: u64 = standings.models.values().map(|s| s.games).sum();
    assert_eq!(total_games, 18);

    // A second run against the same file adds, never resets
    run_once(&path);
    let standings = Standings::load(&path).unwrap();
    assert_eq!(standings.games_played, 18);
    assert_eq!(standings.stats("a").unwrap().matches.len(), 12);

    std::fs::remove_file(&path).unwrap();
}
