//! Move rejection taxonomy
//!
//! Every variant reports ordinary rule violations through `MoveError`.
//! These are never fatal: a rejected move leaves the game untouched and
//! control returns to the caller, which may retry or skip.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The token does not have the shape this variant expects.
    #[error("move '{0}' is not valid")]
    Format(String),

    /// No piece occupies the start cell.
    #[error("no piece at {0}")]
    NoPiece(String),

    /// The piece at the start cell belongs to the other player.
    #[error("player {player} can only move {color} pieces")]
    WrongColor { player: u8, color: &'static str },

    /// The destination holds a piece of the mover's own color.
    #[error("cannot capture your own piece at {0}")]
    SelfCapture(String),

    /// An intermediate cell on a slider's path is occupied.
    #[error("path to {0} is blocked")]
    BlockedPath(String),

    /// The piece's movement predicate rejects the start/end pair.
    #[error("illegal move shape for piece at {0}")]
    IllegalShape(String),

    /// The move would leave the mover's own king in check.
    #[error("move leaves your own king in check")]
    SelfCheck,

    /// Tic-tac-toe: the addressed cell already holds a symbol.
    #[error("position {0} is already occupied")]
    Occupied(String),

    /// Connect-four: every row in the addressed column is filled.
    #[error("column {0} is full")]
    ColumnFull(u8),
}
