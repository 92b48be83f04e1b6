//! Game facade: the contract the play loop talks to
//!
//! Wraps a [`Search`] (which owns the board) and remembers the last result so
//! the caller can tell when the game is decided.

use tracing::{debug, info};

use crate::board::{Board, Color, Move, Piece, Square};
use crate::error::{EngineError, EngineResult};
use crate::search::{Search, SearchParams, SearchResult};
use crate::utils::{is_playable, square_name};

pub struct Game {
    search: Search,
    last: Option<SearchResult>,
}

impl Game {
    /// New game from the starting position.
    pub fn new(params: SearchParams) -> Self {
        Self::from_board(Board::start(), params)
    }

    pub fn from_board(board: Board, params: SearchParams) -> Self {
        Self {
            search: Search::new(board, params),
            last: None,
        }
    }

    pub fn board(&self) -> &Board {
        self.search.board()
    }

    pub fn side(&self) -> Color {
        self.search.board().side()
    }

    pub fn params(&self) -> &SearchParams {
        self.search.params()
    }

    /// Apply a move given as two squares. Only the squares are validated;
    /// whether the move is playable is the caller's business.
    pub fn apply_move(&mut self, from: Square, to: Square) -> EngineResult<Move> {
        for sq in [from, to] {
            if !is_playable(sq) {
                return Err(EngineError::InvalidSquare { square: sq });
            }
        }
        let board = self.search.board_mut();
        let mv = Move::new(from, to, board.piece_at(from), board.piece_at(to));
        board.make_move(mv);
        debug!(mv = %mv, captured = ?mv.captured, "applied move");
        Ok(mv)
    }

    /// Like [`Game::apply_move`], but the move must be one the side to move
    /// can actually play (king captures included).
    pub fn apply_legal_move(&mut self, from: Square, to: Square) -> EngineResult<Move> {
        for sq in [from, to] {
            if !is_playable(sq) {
                return Err(EngineError::InvalidSquare { square: sq });
            }
        }
        let legal = self
            .board()
            .legal_moves()
            .iter()
            .any(|mv| mv.from == from && mv.to == to);
        if !legal {
            return Err(EngineError::IllegalMove {
                from: square_name(from).unwrap_or("xx").to_string(),
                to: square_name(to).unwrap_or("xx").to_string(),
            });
        }
        self.apply_move(from, to)
    }

    /// Search without playing anything.
    pub fn think(&mut self, depth: u8) -> SearchResult {
        let result = self.search.search(depth);
        self.last = Some(result);
        result
    }

    /// Search at the configured depth and play the best move.
    pub fn engine_move(&mut self) -> EngineResult<SearchResult> {
        let depth = self.search.params().depth;
        let result = self.think(depth);
        let mv = result.best_move.ok_or(EngineError::NoBestMove)?;
        self.apply_move(mv.from, mv.to)?;
        if result.is_decisive() {
            info!(score = result.score, mv = %mv, "game decided");
        }
        Ok(result)
    }

    pub fn last_result(&self) -> Option<SearchResult> {
        self.last
    }

    pub fn last_score(&self) -> Option<i32> {
        self.last.map(|r| r.score)
    }

    /// The side whose opponent has lost its king, if any.
    pub fn winner(&self) -> Option<Color> {
        let board = self.board();
        match (
            board.king_square(Color::White),
            board.king_square(Color::Black),
        ) {
            (Some(_), None) => Some(Color::White),
            (None, Some(_)) => Some(Color::Black),
            _ => None,
        }
    }

    /// A king is gone or the last search saw a forced king capture.
    pub fn is_decided(&self) -> bool {
        self.winner().is_some() || self.last.is_some_and(|r| r.is_decisive())
    }

    pub fn piece_at(&self, sq: Square) -> Piece {
        self.board().piece_at(sq)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(SearchParams::default())
    }
}
