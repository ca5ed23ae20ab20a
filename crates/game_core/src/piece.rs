//! Chess pieces and per-kind movement predicates
//!
//! `Piece::can_move` answers only whether the start/end pair fits the
//! kind's movement shape. It is necessary but not sufficient: the state
//! machine additionally enforces path clearance (except for knights),
//! capture exclusivity and post-move check legality.

use crate::cell::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Rank direction this color's pawns advance in.
    pub fn advance_dir(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    /// Set once the piece has committed a move; gates the pawn double-step.
    pub has_moved: bool,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self {
            color,
            kind,
            has_moved: false,
        }
    }

    /// Movement-shape predicate, dispatched over the closed kind set.
    pub fn can_move(&self, start: Cell, end: Cell, capturing: bool) -> bool {
        let (di, dj) = end.dist(start);
        match self.kind {
            PieceKind::Pawn => self.pawn_can_move(di, dj, capturing),
            PieceKind::Rook => di == 0 || dj == 0,
            PieceKind::Knight => {
                (di.abs() == 2 && dj.abs() == 1) || (di.abs() == 1 && dj.abs() == 2)
            }
            PieceKind::Bishop => di.abs() == dj.abs(),
            PieceKind::Queen => di == 0 || dj == 0 || di.abs() == dj.abs(),
            PieceKind::King => di.abs() <= 1 && dj.abs() <= 1,
        }
    }

    fn pawn_can_move(&self, di: i8, dj: i8, capturing: bool) -> bool {
        let dir = self.color.advance_dir();
        if capturing {
            // Diagonal one step forward, and nothing else while capturing.
            di.abs() == 1 && dj == dir
        } else {
            // Straight ahead: one step, or two from the unmoved start rank.
            di == 0 && (dj == dir || (!self.has_moved && dj == 2 * dir))
        }
    }

    /// Single-character glyph for board rendering.
    pub fn symbol(&self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Pawn) => '\u{2659}',
            (Color::White, PieceKind::Rook) => '\u{2656}',
            (Color::White, PieceKind::Knight) => '\u{2658}',
            (Color::White, PieceKind::Bishop) => '\u{2657}',
            (Color::White, PieceKind::Queen) => '\u{2655}',
            (Color::White, PieceKind::King) => '\u{2654}',
            (Color::Black, PieceKind::Pawn) => '\u{265F}',
            (Color::Black, PieceKind::Rook) => '\u{265C}',
            (Color::Black, PieceKind::Knight) => '\u{265E}',
            (Color::Black, PieceKind::Bishop) => '\u{265D}',
            (Color::Black, PieceKind::Queen) => '\u{265B}',
            (Color::Black, PieceKind::King) => '\u{265A}',
        }
    }

    /// Algebraic initial used in the move log; pawns log bare squares.
    pub fn initial(&self) -> &'static str {
        match self.kind {
            PieceKind::Pawn => "",
            PieceKind::Rook => "R",
            PieceKind::Knight => "N",
            PieceKind::Bishop => "B",
            PieceKind::Queen => "Q",
            PieceKind::King => "K",
        }
    }
}

#[cfg(test)]
#[path = "piece_tests.rs"]
mod piece_tests;
