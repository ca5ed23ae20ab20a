//! Board coordinates
//!
//! A `Cell` is one square on a rectangular board, addressed by 1-based
//! file/rank axes with a canonical lowercase name ("e4"). Parsing is
//! bounds-checked against the board dimensions so each variant can reuse
//! the same type (8x8 chess, 3x3 tic-tac-toe).

use std::fmt;

use crate::error::MoveError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    /// File (column), 1-based: 'a' == 1.
    pub file: i8,
    /// Rank (row), 1-based.
    pub rank: i8,
}

impl Cell {
    pub fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    /// Parse a coordinate like "e4" against a `files` x `ranks` board.
    pub fn parse(s: &str, files: i8, ranks: i8) -> Result<Self, MoveError> {
        let bad = || MoveError::Format(s.to_string());
        let b = s.as_bytes();
        if b.len() != 2 {
            return Err(bad());
        }
        let file = (b[0] as i16 - b'a' as i16 + 1) as i8;
        let rank = (b[1] as i16 - b'0' as i16) as i8;
        if !b[0].is_ascii_lowercase() || !b[1].is_ascii_digit() {
            return Err(bad());
        }
        if file < 1 || file > files || rank < 1 || rank > ranks {
            return Err(bad());
        }
        Ok(Self { file, rank })
    }

    /// Signed axis deltas `self - other`.
    pub fn dist(self, other: Cell) -> (i8, i8) {
        (self.file - other.file, self.rank - other.rank)
    }

    /// Translate by signed deltas; `None` when the result leaves the board.
    pub fn translate(self, di: i8, dj: i8, files: i8, ranks: i8) -> Option<Cell> {
        let file = self.file + di;
        let rank = self.rank + dj;
        if (1..=files).contains(&file) && (1..=ranks).contains(&rank) {
            Some(Cell { file, rank })
        } else {
            None
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = (b'a' + (self.file - 1) as u8) as char;
        write!(f, "{}{}", letter, self.rank)
    }
}

#[cfg(test)]
#[path = "cell_tests.rs"]
mod cell_tests;
