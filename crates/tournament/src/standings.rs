//! Cumulative standings storage and reporting
//!
//! One JSON file accumulates per-agent results across every run that
//! points at it. The file is read once at scheduler construction and
//! rewritten after each completed game; counters only ever grow. Derived
//! figures (win rate, move accuracy) are recomputed from the counters at
//! report time and never stored.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read standings file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A present-but-unparseable file is fatal: silently starting fresh
    /// would drop accumulated results.
    #[error("standings file {path} is corrupt: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to write standings file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to serialize standings: {0}")]
    Serialize(serde_json::Error),
}

/// How one game ended for one agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

/// One agent's view of one finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEntry {
    pub opponent: String,
    pub result: GameResult,
    pub valid_moves: u64,
    pub errors: u64,
}

/// Cumulative counters for one agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentStats {
    pub games: u64,
    pub wins: u64,
    pub losses: u64,
    pub draws: u64,
    pub valid_moves: u64,
    pub errors: u64,
    pub matches: Vec<MatchEntry>,
}

impl AgentStats {
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.wins as f64 / self.games as f64
    }

    pub fn move_accuracy(&self) -> f64 {
        let attempts = self.valid_moves + self.errors;
        if attempts == 0 {
            return 0.0;
        }
        self.valid_moves as f64 / attempts as f64
    }
}

/// The persisted cross-run standings file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Standings {
    pub last_updated: String,
    pub games_played: u64,
    pub models: BTreeMap<String, AgentStats>,
}

impl Standings {
    /// Load from `path`, starting fresh when no file exists yet.
    pub fn load(path: &Path) -> Result<Self, StorageError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|source| StorageError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| StorageError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the file in place. Concurrent writers are not coordinated;
    /// the last save wins.
    pub fn save(&self, path: &Path) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(self).map_err(StorageError::Serialize)?;
        std::fs::write(path, json).map_err(|source| StorageError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn stats(&self, agent: &str) -> Option<&AgentStats> {
        self.models.get(agent)
    }

    /// Fold one finished game into one agent's counters and refresh the
    /// file-level fields. Called once per seat, so `games_played` is
    /// bumped by the caller, not here.
    pub fn record_for(&mut self, agent: &str, entry: MatchEntry) {
        let stats = self.models.entry(agent.to_string()).or_default();
        stats.games += 1;
        match entry.result {
            GameResult::Win => stats.wins += 1,
            GameResult::Loss => stats.losses += 1,
            GameResult::Draw => stats.draws += 1,
        }
        stats.valid_moves += entry.valid_moves;
        stats.errors += entry.errors;
        stats.matches.push(entry);
    }

    pub fn touch(&mut self) {
        self.last_updated = chrono::Utc::now().to_rfc3339();
    }

    /// Generate a text report with derived columns.
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str("=== Standings ===\n");
        report.push_str(&format!(
            "{:<24} {:>6} {:>4} {:>4} {:>4} {:>9} {:>9}\n",
            "Agent", "Games", "W", "L", "D", "WinRate", "Accuracy"
        ));
        report.push_str(&"-".repeat(66));
        report.push('\n');

        let mut entries: Vec<_> = self.models.iter().collect();
        entries.sort_by(|a, b| {
            b.1.win_rate()
                .partial_cmp(&a.1.win_rate())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        for (name, stats) in entries {
            report.push_str(&format!(
                "{:<24} {:>6} {:>4} {:>4} {:>4} {:>8.1}% {:>8.1}%\n",
                name,
                stats.games,
                stats.wins,
                stats.losses,
                stats.draws,
                stats.win_rate() * 100.0,
                stats.move_accuracy() * 100.0
            ));
        }
        report
    }

    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "standings_tests.rs"]
mod standings_tests;
