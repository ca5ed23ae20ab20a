//! Connect-four
//!
//! Dense 7x6 grid; a move names a column and the piece settles on the
//! lowest empty row. Win detection scans outward from the landed cell in
//! both directions along each of the four axes.

use crate::error::MoveError;
use crate::game::{other_player, Game, MoveOutcome};

const COLUMNS: usize = 7;
const ROWS: usize = 6;

/// Axis deltas scanned for four-in-a-row: horizontal, vertical, and the
/// two diagonals.
const DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

pub struct ConnectFourGame {
    max_turns: u32,
    turn_count: u32,
    current_player: u8,
    /// Player 1's symbol, 'R' or 'Y'.
    player_one: char,
    /// Row 0 is the top of the grid.
    board: [[Option<char>; COLUMNS]; ROWS],
    winner: Option<u8>,
    game_over: bool,
    move_log: Vec<String>,
}

impl ConnectFourGame {
    /// Player 1 takes `player1_color` ("red" or "yellow"); red opens.
    pub fn new(max_turns: u32, player1_color: &str) -> Self {
        let player_one = if player1_color == "yellow" { 'Y' } else { 'R' };
        Self {
            max_turns,
            turn_count: 0,
            current_player: if player_one == 'R' { 1 } else { 2 },
            player_one,
            board: [[None; COLUMNS]; ROWS],
            winner: None,
            game_over: false,
            move_log: Vec::new(),
        }
    }

    pub fn symbol_at(&self, row: usize, column: usize) -> Option<char> {
        self.board[row][column]
    }

    fn symbol_of(&self, player: u8) -> char {
        if player == 1 {
            self.player_one
        } else if self.player_one == 'R' {
            'Y'
        } else {
            'R'
        }
    }

    fn parse_column(token: &str) -> Result<usize, MoveError> {
        let column: usize = token
            .parse()
            .map_err(|_| MoveError::Format(token.to_string()))?;
        if !(1..=COLUMNS).contains(&column) {
            return Err(MoveError::Format(token.to_string()));
        }
        Ok(column - 1)
    }

    /// Place `symbol` in the lowest empty row of `column`, returning the
    /// row it landed in.
    fn drop_piece(&mut self, column: usize, symbol: char) -> usize {
        for row in (0..ROWS).rev() {
            if self.board[row][column].is_none() {
                self.board[row][column] = Some(symbol);
                return row;
            }
        }
        unreachable!("drop into a full column")
    }

    fn is_board_full(&self) -> bool {
        self.board[0].iter().all(|cell| cell.is_some())
    }

    /// Count the just-placed cell plus same-symbol neighbours outward in
    /// both directions along each axis.
    fn wins_at(&self, row: usize, column: usize, symbol: char) -> bool {
        for (dr, dc) in DIRECTIONS {
            let mut count = 1;
            for sign in [1i8, -1i8] {
                for step in 1..4i8 {
                    let r = row as i8 + dr * step * sign;
                    let c = column as i8 + dc * step * sign;
                    if r < 0 || r >= ROWS as i8 || c < 0 || c >= COLUMNS as i8 {
                        break;
                    }
                    if self.board[r as usize][c as usize] != Some(symbol) {
                        break;
                    }
                    count += 1;
                }
            }
            if count >= 4 {
                return true;
            }
        }
        false
    }
}

impl Game for ConnectFourGame {
    fn play_move(&mut self, token: &str) -> MoveOutcome {
        let column = match Self::parse_column(token.trim()) {
            Ok(c) => c,
            Err(e) => return MoveOutcome::Rejected(e),
        };
        if self.board[0][column].is_some() {
            return MoveOutcome::Rejected(MoveError::ColumnFull(column as u8 + 1));
        }

        let symbol = self.symbol_of(self.current_player);
        let row = self.drop_piece(column, symbol);
        self.move_log.push(format!("{}{}", symbol, column + 1));

        if self.wins_at(row, column, symbol) {
            self.winner = Some(self.current_player);
            self.game_over = true;
            return MoveOutcome::Win;
        }

        if self.is_board_full() {
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
        let mut rows = Vec::with_capacity(ROWS + 1);
        for row in 0..ROWS {
            let mut line = String::new();
            for column in 0..COLUMNS {
                line.push(' ');
                line.push(self.board[row][column].unwrap_or('\u{b7}'));
            }
            rows.push(line);
        }
        rows.push(" 1 2 3 4 5 6 7".to_string());
        rows.join("\n")
    }
}

#[cfg(test)]
#[path = "connect_four_tests.rs"]
mod connect_four_tests;
