//! Chess state machine
//!
//! Sparse board: only occupied cells live in the map, each owning its
//! piece. Moving transfers the piece between entries; capturing removes
//! the opponent piece and appends it to the per-color captured list.
//!
//! Legality is layered: token shape, piece presence, color ownership,
//! capture exclusivity, path clearance (knights exempt), the per-kind
//! movement predicate, and finally post-move check safety evaluated by
//! snapshotting the board, applying the move and restoring it. A rejected
//! move leaves the game exactly as it was.
//!
//! Out of scope: castling, en-passant, promotion, and the fifty-move /
//! repetition draws.

use std::collections::BTreeMap;

use crate::cell::Cell;
use crate::error::MoveError;
use crate::game::{other_player, Game, MoveOutcome};
use crate::piece::{Color, Piece, PieceKind};

const FILES: i8 = 8;
const RANKS: i8 = 8;

pub struct ChessGame {
    max_turns: u32,
    turn_count: u32,
    current_player: u8,
    player_one: Color,
    board: BTreeMap<Cell, Piece>,
    /// Captured pieces, indexed by the captured piece's color.
    captured: [Vec<Piece>; 2],
    winner: Option<u8>,
    game_over: bool,
    move_log: Vec<String>,
}

impl ChessGame {
    /// Player 1 takes `player1_color`; anything other than "black" means
    /// white. White always moves first, so the starting player is whoever
    /// holds white.
    pub fn new(max_turns: u32, player1_color: &str) -> Self {
        let player_one = if player1_color == "black" {
            Color::Black
        } else {
            Color::White
        };
        Self {
            max_turns,
            turn_count: 0,
            current_player: if player_one == Color::White { 1 } else { 2 },
            player_one,
            board: starting_position(),
            captured: [Vec::new(), Vec::new()],
            winner: None,
            game_over: false,
            move_log: Vec::new(),
        }
    }

    pub fn color_of(&self, player: u8) -> Color {
        if player == 1 {
            self.player_one
        } else {
            self.player_one.other()
        }
    }

    pub fn piece_at(&self, cell: Cell) -> Option<&Piece> {
        self.board.get(&cell)
    }

    pub fn occupied_cells(&self) -> usize {
        self.board.len()
    }

    /// Pieces of `color` captured so far, in capture order.
    pub fn captured(&self, color: Color) -> &[Piece] {
        &self.captured[color.idx()]
    }

    fn parse_token(token: &str) -> Result<(Cell, Cell), MoveError> {
        let bad = || MoveError::Format(token.to_string());
        if !token.is_ascii() || token.len() != 5 || token.as_bytes()[2] != b'-' {
            return Err(bad());
        }
        let start = Cell::parse(&token[..2], FILES, RANKS).map_err(|_| bad())?;
        let end = Cell::parse(&token[3..], FILES, RANKS).map_err(|_| bad())?;
        Ok((start, end))
    }

    fn path_clear(&self, path: &[Cell]) -> bool {
        path.iter().all(|c| !self.board.contains_key(c))
    }

    /// True when `player`'s king is attacked by any opposing piece:
    /// shape alone for knights, shape plus a clear path for everything
    /// else.
    pub fn is_in_check(&self, player: u8) -> bool {
        let color = self.color_of(player);
        let king = match self
            .board
            .iter()
            .find(|(_, p)| p.kind == PieceKind::King && p.color == color)
        {
            Some((cell, _)) => *cell,
            None => return false,
        };

        for (&from, piece) in &self.board {
            if piece.color == color {
                continue;
            }
            if !piece.can_move(from, king, true) {
                continue;
            }
            if piece.kind == PieceKind::Knight || self.path_clear(&path_between(from, king)) {
                return true;
            }
        }
        false
    }

    /// Exhaustive escape search: try every destination for every piece of
    /// `player` (respecting capture exclusivity, path clearance and the
    /// movement predicate), simulate it on a board snapshot and see whether
    /// any resulting position is check-free.
    pub fn is_in_checkmate(&mut self, player: u8) -> bool {
        if !self.is_in_check(player) {
            return false;
        }
        let color = self.color_of(player);
        let own: Vec<(Cell, Piece)> = self
            .board
            .iter()
            .filter(|(_, p)| p.color == color)
            .map(|(c, p)| (*c, *p))
            .collect();

        for (start, piece) in own {
            for file in 1..=FILES {
                for rank in 1..=RANKS {
                    let end = Cell::new(file, rank);
                    if end == start {
                        continue;
                    }
                    let capturing = match self.board.get(&end) {
                        Some(target) if target.color == color => continue,
                        Some(_) => true,
                        None => false,
                    };
                    if piece.kind != PieceKind::Knight {
                        let path = path_between(start, end);
                        if !path.is_empty() && !self.path_clear(&path) {
                            continue;
                        }
                    }
                    if !piece.can_move(start, end, capturing) {
                        continue;
                    }

                    let snapshot = self.board.clone();
                    self.board.remove(&start);
                    self.board.insert(end, piece);
                    let still_in_check = self.is_in_check(player);
                    self.board = snapshot;

                    if !still_in_check {
                        return false;
                    }
                }
            }
        }
        true
    }
}

impl Game for ChessGame {
    fn play_move(&mut self, token: &str) -> MoveOutcome {
        let (start, end) = match Self::parse_token(token) {
            Ok(cells) => cells,
            Err(e) => return MoveOutcome::Rejected(e),
        };

        let piece = match self.board.get(&start) {
            Some(p) => *p,
            None => return MoveOutcome::Rejected(MoveError::NoPiece(start.to_string())),
        };

        let mover_color = self.color_of(self.current_player);
        if piece.color != mover_color {
            return MoveOutcome::Rejected(MoveError::WrongColor {
                player: self.current_player,
                color: mover_color.name(),
            });
        }

        let capturing = match self.board.get(&end) {
            Some(target) if target.color == piece.color => {
                return MoveOutcome::Rejected(MoveError::SelfCapture(end.to_string()))
            }
            Some(_) => true,
            None => false,
        };

        if piece.kind != PieceKind::Knight {
            let path = path_between(start, end);
            if !path.is_empty() && !self.path_clear(&path) {
                return MoveOutcome::Rejected(MoveError::BlockedPath(end.to_string()));
            }
        }

        if !piece.can_move(start, end, capturing) {
            return MoveOutcome::Rejected(MoveError::IllegalShape(start.to_string()));
        }

        // Tentative application; every path below either commits or
        // restores this snapshot.
        let snapshot = self.board.clone();
        let taken = self.board.remove(&end);
        self.board.remove(&start);
        self.board.insert(end, piece);

        if self.is_in_check(self.current_player) {
            if self.is_in_checkmate(self.current_player) {
                // A self-inflicted mate counts against the mover.
                self.winner = Some(other_player(self.current_player));
                self.game_over = true;
                self.board = snapshot;
                return MoveOutcome::Win;
            }
            self.board = snapshot;
            return MoveOutcome::Rejected(MoveError::SelfCheck);
        }

        // Commit
        if let Some(captured) = taken {
            self.captured[captured.color.idx()].push(captured);
        }
        if let Some(moved) = self.board.get_mut(&end) {
            moved.has_moved = true;
        }
        self.move_log.push(format!("{}{}", piece.initial(), end));
        self.turn_count += 1;

        let next = other_player(self.current_player);
        if self.is_in_check(next) {
            if self.is_in_checkmate(next) {
                self.winner = Some(self.current_player);
                self.game_over = true;
                return MoveOutcome::Win;
            }
            self.current_player = next;
            return MoveOutcome::Accepted { check: true };
        }

        self.current_player = next;
        MoveOutcome::Accepted { check: false }
    }

    fn move_log(&self) -> &[String] {
        &self.move_log
    }

    fn turn_count(&self) -> u32 {
        self.turn_count
    }

    fn max_turns(&self) -> u32 {
        self.max_turns
    }

    fn current_player(&self) -> u8 {
        self.current_player
    }

    fn winner(&self) -> Option<u8> {
        self.winner
    }

    fn game_over(&self) -> bool {
        self.game_over
    }

    fn skip_turn(&mut self) {
        self.turn_count += 1;
        self.current_player = other_player(self.current_player);
    }

    /// Agents answer in assorted algebraic flavors ("e2-e4", "Ng1f3",
    /// "e2xe4"). Drop the capture/dash marker before the destination
    /// square, then read the last four characters as start+end.
    fn normalize_token(&self, raw: &str) -> String {
        let mut chars: Vec<char> = raw.trim().chars().collect();
        if (chars.contains(&'x') || chars.contains(&'-')) && chars.len() >= 3 {
            let n = chars.len();
            chars.remove(n - 3);
        }
        if chars.len() < 4 {
            return chars.into_iter().collect();
        }
        let n = chars.len();
        let start: String = chars[n - 4..n - 2].iter().collect();
        let end: String = chars[n - 2..].iter().collect();
        format!("{}-{}", start, end)
    }

    fn render(&self) -> String {
        let mut rows = Vec::with_capacity(RANKS as usize + 1);
        for rank in (1..=RANKS).rev() {
            let mut row = format!("{}  ", rank);
            for file in 1..=FILES {
                match self.board.get(&Cell::new(file, rank)) {
                    Some(piece) => {
                        row.push(' ');
                        row.push(piece.symbol());
                    }
                    None => row.push_str(" \u{b7}"),
                }
            }
            rows.push(row);
        }
        let labels: String = (0..FILES as u8).map(|f| format!(" {}", (b'a' + f) as char)).collect();
        rows.push(format!("  {}", labels));
        rows.join("\n")
    }
}

/// Straight-line cells strictly between `start` and `end`, endpoint
/// exclusive. Off-board intermediates (possible for non-aligned pairs,
/// which the shape predicate rejects later anyway) are skipped.
fn path_between(start: Cell, end: Cell) -> Vec<Cell> {
    let (di, dj) = end.dist(start);
    let step_i = di.signum();
    let step_j = dj.signum();
    let steps = di.abs().max(dj.abs());

    (1..steps)
        .filter_map(|k| start.translate(step_i * k, step_j * k, FILES, RANKS))
        .collect()
}

/// Standard 32-piece opening position.
fn starting_position() -> BTreeMap<Cell, Piece> {
    use PieceKind::*;
    let back = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

    let mut board = BTreeMap::new();
    for (i, &kind) in back.iter().enumerate() {
        let file = i as i8 + 1;
        board.insert(Cell::new(file, 1), Piece::new(Color::White, kind));
        board.insert(Cell::new(file, 2), Piece::new(Color::White, Pawn));
        board.insert(Cell::new(file, 7), Piece::new(Color::Black, Pawn));
        board.insert(Cell::new(file, 8), Piece::new(Color::Black, kind));
    }
    board
}

#[cfg(test)]
#[path = "chess_tests.rs"]
mod chess_tests;
