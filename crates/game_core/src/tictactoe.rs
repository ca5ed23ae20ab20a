//! Tic-tac-toe
//!
//! 3x3 sparse board keyed by cell; a move token is the bare cell name
//! ("b2"). Win = any of the eight fixed lines fully owned by one symbol,
//! draw when all nine cells are filled.

use std::collections::BTreeMap;

use crate::cell::Cell;
use crate::error::MoveError;
use crate::game::{other_player, Game, MoveOutcome};

const SIZE: i8 = 3;

/// The eight winning lines as (file, rank) triples.
const WIN_LINES: [[(i8, i8); 3]; 8] = [
    [(1, 1), (1, 2), (1, 3)],
    [(2, 1), (2, 2), (2, 3)],
    [(3, 1), (3, 2), (3, 3)],
    [(1, 1), (2, 1), (3, 1)],
    [(1, 2), (2, 2), (3, 2)],
    [(1, 3), (2, 3), (3, 3)],
    [(1, 1), (2, 2), (3, 3)],
    [(1, 3), (2, 2), (3, 1)],
];

pub struct TicTacToeGame {
    max_turns: u32,
    turn_count: u32,
    current_player: u8,
    /// Player 1's symbol, lowercase designator 'x' or 'o'.
    player_one: char,
    board: BTreeMap<Cell, char>,
    winner: Option<u8>,
    game_over: bool,
    move_log: Vec<String>,
}

impl TicTacToeGame {
    /// Player 1 takes `player1_color` ("x" or "o"); X always opens.
    pub fn new(max_turns: u32, player1_color: &str) -> Self {
        let player_one = if player1_color == "o" { 'o' } else { 'x' };
        Self {
            max_turns,
            turn_count: 0,
            current_player: if player_one == 'x' { 1 } else { 2 },
            player_one,
            board: BTreeMap::new(),
            winner: None,
            game_over: false,
            move_log: Vec::new(),
        }
    }

    pub fn symbol_at(&self, cell: Cell) -> Option<char> {
        self.board.get(&cell).copied()
    }

    /// Uppercase board symbol owned by `player`.
    fn symbol_of(&self, player: u8) -> char {
        let lower = if player == 1 {
            self.player_one
        } else if self.player_one == 'x' {
            'o'
        } else {
            'x'
        };
        lower.to_ascii_uppercase()
    }

    fn has_won(&self, symbol: char) -> bool {
        WIN_LINES.iter().any(|line| {
            line.iter()
                .all(|&(file, rank)| self.board.get(&Cell::new(file, rank)) == Some(&symbol))
        })
    }
}

impl Game for TicTacToeGame {
    fn play_move(&mut self, token: &str) -> MoveOutcome {
        let cell = match Cell::parse(token, SIZE, SIZE) {
            Ok(c) => c,
            Err(_) => return MoveOutcome::Rejected(MoveError::Format(token.to_string())),
        };
        if self.board.contains_key(&cell) {
            return MoveOutcome::Rejected(MoveError::Occupied(token.to_string()));
        }

        let symbol = self.symbol_of(self.current_player);
        self.board.insert(cell, symbol);
        self.move_log.push(format!("{}{}", symbol, cell));

        if self.has_won(symbol) {
            self.winner = Some(self.current_player);
            self.game_over = true;
            return MoveOutcome::Win;
        }

        if self.board.len() == (SIZE * SIZE) as usize {
            self.game_over = true;
            return MoveOutcome::Accepted { check: false };
        }

        self.turn_count += 1;
        self.current_player = other_player(self.current_player);
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

    fn render(&self) -> String {
        let mut rows = Vec::with_capacity(SIZE as usize + 1);
        for rank in (1..=SIZE).rev() {
            let mut row = format!("{}  ", rank);
            for file in 1..=SIZE {
                match self.board.get(&Cell::new(file, rank)) {
                    Some(symbol) => {
                        row.push(' ');
                        row.push(*symbol);
                    }
                    None => row.push_str(" \u{b7}"),
                }
            }
            rows.push(row);
        }
        rows.push("   a b c".to_string());
        rows.join("\n")
    }
}

#[cfg(test)]
#[path = "tictactoe_tests.rs"]
mod tictactoe_tests;
