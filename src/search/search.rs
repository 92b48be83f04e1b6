//! Main search engine implementation
//!
//! Fixed-depth negamax over every generated move. No pruning, no ordering,
//! no transposition table: the first move reaching the best score wins.

use tracing::debug;

use super::parallel::split_root;
use super::params::SearchParams;
use super::stats::SearchStats;
use crate::board::{Board, Generated, Move};
use crate::eval::evaluate;

/// Score of a position where the side to move takes the enemy king next.
pub const WIN_SCORE: i32 = 10_000;

/// Outcome of a search from the root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Score for the side to move at the root
    pub score: i32,

    /// Best root move; None at depth 0 or when the root has no moves
    pub best_move: Option<Move>,
}

impl SearchResult {
    /// True when one side's king is taken or cannot be saved.
    pub fn is_decisive(&self) -> bool {
        self.score.abs() == WIN_SCORE
    }
}

/// Main search engine
pub struct Search {
    /// The current board position (mutated and restored during search)
    board: Board,

    /// Search parameters
    params: SearchParams,

    /// Statistics of the last search
    stats: SearchStats,

    /// Best move of the last search
    best_move: Option<Move>,
}

impl Search {
    pub fn new(board: Board, params: SearchParams) -> Self {
        Self {
            board,
            params,
            stats: SearchStats::new(),
            best_move: None,
        }
    }

    /// Create search with default parameters
    pub fn with_board(board: Board) -> Self {
        Self::new(board, SearchParams::default())
    }

    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Best move found by the most recent search
    pub fn best_move(&self) -> Option<Move> {
        self.best_move
    }

    /// Search the current position to `depth` plies.
    ///
    /// The board is left exactly as it was. With more than one configured
    /// thread the root moves are split across workers; the result is the
    /// same as the sequential walk.
    pub fn search(&mut self, depth: u8) -> SearchResult {
        self.stats.reset();
        self.stats.start_timing();

        let (score, best_move) = if self.params.threads > 1 && depth > 0 {
            split_root(&self.board, depth, self.params.threads, &mut self.stats)
        } else {
            negamax(&mut self.board, depth, &mut self.stats)
        };

        self.stats.update_timing();
        self.best_move = best_move;

        debug!(
            depth,
            score,
            best_move = %best_move.map(|mv| mv.to_string()).unwrap_or_else(|| "none".into()),
            nodes = self.stats.nodes,
            elapsed_ms = self.stats.search_time.as_millis() as u64,
            "search finished"
        );
        self.stats.log_summary();

        SearchResult { score, best_move }
    }
}

/// Negamax from the side to move's perspective.
///
/// Returns the score and the move that produced it. A capturable enemy king
/// scores `WIN_SCORE` and reports the capture; a side with no moves scores
/// `-WIN_SCORE`.
pub(crate) fn negamax(board: &mut Board, depth: u8, stats: &mut SearchStats) -> (i32, Option<Move>) {
    stats.inc_node();

    if depth == 0 {
        stats.inc_leaf_eval();
        return (evaluate(board), None);
    }

    let moves = match board.generate() {
        Generated::Moves(moves) => moves,
        Generated::KingCapture(mv) => {
            stats.inc_king_capture();
            return (WIN_SCORE, Some(mv));
        }
        Generated::NoMoves => {
            stats.inc_dead_end();
            return (-WIN_SCORE, None);
        }
    };

    let mut best: Option<(i32, Move)> = None;
    for mv in moves {
        let score = {
            let mut child = board.play(mv);
            -negamax(&mut child, depth - 1, stats).0
        };
        if best.map_or(true, |(best_score, _)| score > best_score) {
            best = Some((score, mv));
        }
    }

    best.map_or((-WIN_SCORE, None), |(score, mv)| (score, Some(mv)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, Piece};

    #[test]
    fn test_depth_zero_is_static_eval() {
        let mut search = Search::with_board(Board::start());
        let before = search.board().clone();
        let result = search.search(0);
        assert_eq!(result.score, evaluate(&before));
        assert_eq!(result.best_move, None);
        assert_eq!(search.board(), &before);
        assert_eq!(search.stats().nodes, 1);
    }

    #[test]
    fn test_dead_end_loses() {
        // White bishops on one color complex block each other completely.
        let placements = [
            (11, Piece::WhiteBishop),
            (22, Piece::WhiteBishop),
            (13, Piece::WhiteBishop),
            (24, Piece::WhiteBishop),
            (15, Piece::WhiteBishop),
            (26, Piece::WhiteBishop),
            (17, Piece::WhiteBishop),
            (28, Piece::WhiteBishop),
            (21, Piece::BlackKing),
        ];
        let board = Board::with_pieces(&placements, Color::White).unwrap();
        assert_eq!(board.generate(), Generated::NoMoves);

        let mut search = Search::with_board(board);
        let result = search.search(3);
        assert_eq!(result.score, -WIN_SCORE);
        assert_eq!(result.best_move, None);
        assert_eq!(search.stats().dead_ends, 1);
    }

    #[test]
    fn test_leaf_count_matches_perft() {
        let mut board = Board::start();
        let expected = board.perft(3);
        let mut search = Search::with_board(board);
        search.search(3);
        assert_eq!(search.stats().leaf_evals, expected);
    }
}
