//! Static evaluation: material plus a position-value table
//!
//! The raw sum is white-positive; `evaluate` flips it so the score is always
//! from the point of view of the side to move (negamax convention).

use crate::board::{Board, Color, BOARD_SIZE};

// ============================================================================
// POSITION VALUES
// ============================================================================
// Unchanged under a 180° turn of the playing area, so one table serves both
// colors: added for white pieces, subtracted for black ones.
pub const POSITION_VALUES: [i32; BOARD_SIZE] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
    0, -1, 0, 5, 6, 7, 8, 0, -1, 0, //
    0, -1, 0, 8, 7, 6, 5, 0, -1, 0, //
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// White-relative material and positional balance.
pub fn white_score(board: &Board) -> i32 {
    board
        .squares()
        .map(|(sq, piece)| match piece.color() {
            Some(Color::White) => piece.weight() + POSITION_VALUES[sq],
            Some(Color::Black) => piece.weight() - POSITION_VALUES[sq],
            None => 0,
        })
        .sum()
}

/// Score from the side to move's perspective.
pub fn evaluate(board: &Board) -> i32 {
    let score = white_score(board);
    match board.side() {
        Color::White => score,
        Color::Black => -score,
    }
}
