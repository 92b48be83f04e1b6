use minichess::board::{Board, Color, Move, Piece};
use minichess::eval::{evaluate, white_score};
use minichess::utils::parse_square;

fn sq(name: &str) -> usize {
    parse_square(name).expect("valid square")
}

fn with_side(board: &Board, side: Color) -> Board {
    let placements: Vec<_> = board
        .squares()
        .filter(|&(_, p)| p != Piece::Empty)
        .collect();
    Board::with_pieces(&placements, side).unwrap()
}

#[test]
fn test_material_difference() {
    let board = Board::start();
    assert_eq!(evaluate(&board), 0, "Initial position should be 0");

    // Black queen missing: 900 material, h2 is worth -1 to its owner
    let placements: Vec<_> = board
        .squares()
        .filter(|&(s, p)| p != Piece::Empty && s != sq("h2"))
        .collect();
    let board = Board::with_pieces(&placements, Color::White).unwrap();
    assert_eq!(evaluate(&board), 899);
    assert_eq!(evaluate(&with_side(&board, Color::Black)), -899);
}

#[test]
fn test_antisymmetric_under_side_toggle() {
    let mut board = Board::start();
    let moves = board.generate().into_moves();
    for mv in moves {
        board.make_move(mv);
        let as_white = evaluate(&with_side(&board, Color::White));
        let as_black = evaluate(&with_side(&board, Color::Black));
        assert_eq!(as_white, -as_black, "after {}", mv);
        assert_eq!(white_score(&board), as_white);
        board.unmake_move(mv);
    }
}

#[test]
fn test_centre_squares_score_higher() {
    let edge = Board::with_pieces(&[(sq("a2"), Piece::WhiteBishop)], Color::White).unwrap();
    let centre = Board::with_pieces(&[(sq("c1"), Piece::WhiteBishop)], Color::White).unwrap();
    assert_eq!(evaluate(&edge), 300 - 1);
    assert_eq!(evaluate(&centre), 300 + 8);
}

#[test]
fn test_capture_changes_score() {
    let mut board = Board::start();
    let before = white_score(&board);
    board.make_move(Move::new(sq("b2"), sq("g2"), Piece::WhiteRook, Piece::BlackBishop));
    assert_eq!(white_score(&board), before + 300);
    // Black to move now sees the loss
    assert_eq!(evaluate(&board), -(before + 300));
}
