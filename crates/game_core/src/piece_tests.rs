use super::*;

fn cell(s: &str) -> Cell {
    Cell::parse(s, 8, 8).unwrap()
}

#[test]
fn test_pawn_single_and_double_step() {
    let pawn = Piece::new(Color::White, PieceKind::Pawn);
    assert!(pawn.can_move(cell("e2"), cell("e3"), false));
    assert!(pawn.can_move(cell("e2"), cell("e4"), false));
    assert!(!pawn.can_move(cell("e2"), cell("e5"), false));

    let mut moved = pawn;
    moved.has_moved = true;
    assert!(moved.can_move(cell("e3"), cell("e4"), false));
    assert!(!moved.can_move(cell("e3"), cell("e5"), false));
}

#[test]
fn test_pawn_advances_by_color() {
    let black = Piece::new(Color::Black, PieceKind::Pawn);
    assert!(black.can_move(cell("e7"), cell("e5"), false));
    assert!(black.can_move(cell("e7"), cell("e6"), false));
    // Backwards is never legal
    assert!(!black.can_move(cell("e7"), cell("e8"), false));
    let white = Piece::new(Color::White, PieceKind::Pawn);
    assert!(!white.can_move(cell("e4"), cell("e3"), false));
}

#[test]
fn test_pawn_captures_diagonally_only() {
    let mut pawn = Piece::new(Color::White, PieceKind::Pawn);
    pawn.has_moved = true;
    assert!(pawn.can_move(cell("e4"), cell("d5"), true));
    assert!(pawn.can_move(cell("e4"), cell("f5"), true));
    // No straight captures, no non-capturing diagonals
    assert!(!pawn.can_move(cell("e4"), cell("e5"), true));
    assert!(!pawn.can_move(cell("e4"), cell("d5"), false));
}

#[test]
fn test_rook_files_and_ranks() {
    let rook = Piece::new(Color::White, PieceKind::Rook);
    assert!(rook.can_move(cell("a1"), cell("a8"), false));
    assert!(rook.can_move(cell("a1"), cell("h1"), false));
    assert!(!rook.can_move(cell("a1"), cell("b2"), false));
}

#[test]
fn test_knight_l_shape() {
    let knight = Piece::new(Color::White, PieceKind::Knight);
    assert!(knight.can_move(cell("g1"), cell("f3"), false));
    assert!(knight.can_move(cell("g1"), cell("h3"), false));
    assert!(knight.can_move(cell("d4"), cell("f5"), false));
    assert!(!knight.can_move(cell("d4"), cell("d6"), false));
    assert!(!knight.can_move(cell("d4"), cell("f6"), false));
}

#[test]
fn test_bishop_diagonals() {
    let bishop = Piece::new(Color::Black, PieceKind::Bishop);
    assert!(bishop.can_move(cell("c8"), cell("h3"), false));
    assert!(!bishop.can_move(cell("c8"), cell("c3"), false));
}

#[test]
fn test_queen_union_of_rook_and_bishop() {
    let queen = Piece::new(Color::White, PieceKind::Queen);
    assert!(queen.can_move(cell("d1"), cell("d8"), false));
    assert!(queen.can_move(cell("d1"), cell("h1"), false));
    assert!(queen.can_move(cell("d1"), cell("h5"), false));
    assert!(!queen.can_move(cell("d1"), cell("e3"), false));
}

#[test]
fn test_king_one_step() {
    let king = Piece::new(Color::White, PieceKind::King);
    assert!(king.can_move(cell("e1"), cell("e2"), false));
    assert!(king.can_move(cell("e1"), cell("d2"), false));
    assert!(!king.can_move(cell("e1"), cell("e3"), false));
    // No castling shape
    assert!(!king.can_move(cell("e1"), cell("g1"), false));
}

#[test]
fn test_symbols_and_initials() {
    assert_eq!(Piece::new(Color::White, PieceKind::King).symbol(), '\u{2654}');
    assert_eq!(Piece::new(Color::Black, PieceKind::Pawn).symbol(), '\u{265F}');
    assert_eq!(Piece::new(Color::White, PieceKind::Knight).initial(), "N");
    assert_eq!(Piece::new(Color::Black, PieceKind::Pawn).initial(), "");
}
