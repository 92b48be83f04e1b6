pub mod board;
pub mod error;
pub mod eval;
pub mod game;
pub mod search;
pub mod utils;

pub use board::{Board, Color, Generated, Move, MoveGuard, Piece, Square};
pub use error::{EngineError, EngineResult};
pub use game::Game;
