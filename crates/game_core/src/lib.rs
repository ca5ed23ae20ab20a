pub mod cell;
pub mod chess;
pub mod connect_four;
pub mod error;
pub mod game;
pub mod piece;
pub mod tictactoe;

pub use cell::Cell;
pub use chess::ChessGame;
pub use connect_four::ConnectFourGame;
pub use error::MoveError;
pub use game::{format_move_log, other_player, Game, InvalidColor, MoveOutcome, PlayerKind, Variant};
pub use piece::{Color, Piece, PieceKind};
pub use tictactoe::TicTacToeGame;

use thiserror::Error;

// =============================================================================
// Agent trait — implemented by every move proposer (scripted, random, LLM)
// =============================================================================

/// The move-proposing agent failed to produce a usable token.
///
/// The tournament runner treats this exactly like a rejected move.
#[derive(Debug, Error)]
#[error("agent failure: {0}")]
pub struct AgentError(pub String);

/// An external move proposer.
///
/// `context` is empty for the first move of a game, otherwise the
/// formatted move log. The returned token may be in a looser notation
/// than the engine accepts; `Game::normalize_token` canonicalizes it
/// before validation.
pub trait Agent {
    fn get_move(&mut self, context: &str) -> Result<String, AgentError>;

    /// Identifier used for pairing and statistics.
    fn name(&self) -> &str;
}
