//! Root-split parallel search
//!
//! The root move list is dealt round-robin to scoped worker threads. Each
//! worker owns a clone of the board, so make/unmake never crosses threads.
//! Scores are folded back in generation order, which keeps the first-best
//! tie rule of the sequential search.

use std::thread;

use tracing::debug;

use super::search::{negamax, WIN_SCORE};
use super::stats::SearchStats;
use crate::board::{Board, Generated, Move};

/// Search `board` to `depth` (at least 1) across `threads` workers.
pub(crate) fn split_root(
    board: &Board,
    depth: u8,
    threads: usize,
    stats: &mut SearchStats,
) -> (i32, Option<Move>) {
    stats.inc_node();

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

    let workers = threads.clamp(1, moves.len());
    debug!(workers, root_moves = moves.len(), "splitting root");

    let mut scores = vec![-WIN_SCORE; moves.len()];
    thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|worker| {
                let moves = &moves;
                let mut local = board.clone();
                scope.spawn(move || {
                    let mut local_stats = SearchStats::new();
                    let scored: Vec<(usize, i32)> = moves
                        .iter()
                        .enumerate()
                        .skip(worker)
                        .step_by(workers)
                        .map(|(idx, &mv)| {
                            let mut child = local.play(mv);
                            (idx, -negamax(&mut child, depth - 1, &mut local_stats).0)
                        })
                        .collect();
                    (scored, local_stats)
                })
            })
            .collect();

        for handle in handles {
            let (scored, local_stats) = handle
                .join()
                .unwrap_or_else(|payload| std::panic::resume_unwind(payload));
            for (idx, score) in scored {
                scores[idx] = score;
            }
            stats.merge(&local_stats);
        }
    });

    let mut best: Option<(i32, Move)> = None;
    for (&mv, &score) in moves.iter().zip(&scores) {
        if best.map_or(true, |(best_score, _)| score > best_score) {
            best = Some((score, mv));
        }
    }

    best.map_or((-WIN_SCORE, None), |(score, mv)| (score, Some(mv)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_matches_sequential() {
        let mut board = Board::start();
        for depth in 1..=3 {
            let mut seq_stats = SearchStats::new();
            let sequential = negamax(&mut board, depth, &mut seq_stats);

            let mut par_stats = SearchStats::new();
            let parallel = split_root(&board, depth, 4, &mut par_stats);

            assert_eq!(parallel, sequential, "depth {}", depth);
            assert_eq!(par_stats.nodes, seq_stats.nodes);
            assert_eq!(par_stats.leaf_evals, seq_stats.leaf_evals);
        }
    }
}
