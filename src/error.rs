//! Error types for the engine boundary
//!
//! Every error is a contract violation caught before the board is touched.

use thiserror::Error;

use crate::board::{Piece, Square};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Out-of-range or sentinel square
    #[error("Invalid square index: {square} (not a playable square)")]
    InvalidSquare { square: Square },

    #[error("Cannot place {piece:?} on square {square}")]
    InvalidPlacement { square: Square, piece: Piece },

    #[error("Unknown coordinate: {text:?}")]
    UnknownCoordinate { text: String },

    #[error("Malformed move: {text:?} (expected something like b2c2)")]
    MalformedMove { text: String },

    /// Move not among the moves the side to move can play
    #[error("Illegal move: {from} to {to}")]
    IllegalMove { from: String, to: String },

    #[error("No best move available for the side to move")]
    NoBestMove,
}

pub type EngineResult<T> = Result<T, EngineError>;
