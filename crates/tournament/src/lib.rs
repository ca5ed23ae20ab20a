//! Tournament runner
//!
//! This crate provides infrastructure for:
//! - Pairing move-proposing agents against each other on any game variant
//! - Running each pairing to a win, draw or turn limit with an error
//!   budget for misbehaving agents
//! - Accumulating per-agent standings in a JSON file that survives runs
//!
//! # Usage
//!
//! ```bash
//! # Round-robin three random agents at tic-tac-toe
//! cargo run -p tournament -- run tictactoe rnd1 rnd2 rnd3 --games 2
//!
//! # Show the accumulated standings
//! cargo run -p tournament -- standings
//! ```

mod agents;
mod scheduler;
mod standings;

pub use agents::*;
pub use scheduler::*;
pub use standings::*;
