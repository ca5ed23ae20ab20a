use super::*;

fn cell(s: &str) -> Cell {
    Cell::parse(s, 3, 3).unwrap()
}

#[test]
fn test_x_opens_regardless_of_seat() {
    let game = TicTacToeGame::new(9, "x");
    assert_eq!(game.current_player(), 1);
    let game = TicTacToeGame::new(9, "o");
    assert_eq!(game.current_player(), 2);
}

#[test]
fn test_row_win_on_third_mark() {
    let mut game = TicTacToeGame::new(9, "x");
    // X takes the bottom row while O plays elsewhere
    assert_eq!(game.play_move("a1"), MoveOutcome::Accepted { check: false });
    assert_eq!(game.play_move("a2"), MoveOutcome::Accepted { check: false });
    assert_eq!(game.play_move("b1"), MoveOutcome::Accepted { check: false });
    assert_eq!(game.play_move("b2"), MoveOutcome::Accepted { check: false });
    assert_eq!(game.play_move("c1"), MoveOutcome::Win);
    assert_eq!(game.winner(), Some(1));
    assert!(game.game_over());
    assert_eq!(game.symbol_at(cell("c1")), Some('X'));
}

#[test]
fn test_diagonal_win() {
    let mut game = TicTacToeGame::new(9, "x");
    for mv in ["a1", "a2", "b2", "b3"] {
        assert!(matches!(game.play_move(mv), MoveOutcome::Accepted { .. }));
    }
    assert_eq!(game.play_move("c3"), MoveOutcome::Win);
}

#[test]
fn test_occupied_and_format_rejections() {
    let mut game = TicTacToeGame::new(9, "x");
    assert_eq!(game.play_move("b2"), MoveOutcome::Accepted { check: false });
    assert_eq!(
        game.play_move("b2"),
        MoveOutcome::Rejected(MoveError::Occupied("b2".into()))
    );
    for token in ["d1", "a4", "b", "b22", ""] {
        assert_eq!(
            game.play_move(token),
            MoveOutcome::Rejected(MoveError::Format(token.into()))
        );
    }
    // Rejections did not hand the turn over
    assert_eq!(game.current_player(), 2);
    assert_eq!(game.turn_count(), 1);
}

#[test]
fn test_draw_when_board_fills() {
    let mut game = TicTacToeGame::new(9, "x");
    // X X O / O O X / X O X leaves no line owned by one symbol
    for mv in ["a3", "c3", "b3", "a2", "c2", "b2", "a1", "b1", "c1"] {
        let outcome = game.play_move(mv);
        assert!(
            matches!(outcome, MoveOutcome::Accepted { .. }),
            "move {} got {:?}",
            mv,
            outcome
        );
    }
    assert!(game.game_over());
    assert_eq!(game.winner(), None);
}

#[test]
fn test_move_log_symbols() {
    let mut game = TicTacToeGame::new(9, "o");
    // Player 2 holds x and opens
    assert_eq!(game.current_player(), 2);
    game.play_move("b2");
    game.play_move("a1");
    assert_eq!(game.move_log(), ["Xb2", "Oa1"]);
    assert_eq!(game.formatted_move_log(), "1. Xb2 Oa1");
}

#[test]
fn test_render_shape() {
    let mut game = TicTacToeGame::new(9, "x");
    game.play_move("a3");
    let text = game.render();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains('X'));
    assert_eq!(lines[3], "   a b c");
}
