//! Search statistics and performance metrics
//!
//! Tracks nodes visited, leaf evaluations, terminal cutoffs and timing.

use std::time::{Duration, Instant};

use tracing::debug;

/// Search statistics
#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    /// Total nodes visited, root included
    pub nodes: u64,

    /// Static evaluations at depth zero
    pub leaf_evals: u64,

    /// Nodes cut short because the enemy king was capturable
    pub king_captures: u64,

    /// Nodes where the side to move had nothing to play
    pub dead_ends: u64,

    /// Search start time
    pub start_time: Option<Instant>,

    /// Time spent searching
    pub search_time: Duration,

    /// Nodes per second rate
    pub nps: u64,
}

impl SearchStats {
    /// Create new empty stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Start timing
    pub fn start_timing(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Update elapsed time and NPS
    pub fn update_timing(&mut self) {
        if let Some(start) = self.start_time {
            self.search_time = start.elapsed();
            let elapsed_ms = self.search_time.as_millis() as u64;
            if elapsed_ms > 0 {
                self.nps = (self.nodes * 1000) / elapsed_ms;
            }
        }
    }

    pub fn inc_node(&mut self) {
        self.nodes += 1;
    }

    pub fn inc_leaf_eval(&mut self) {
        self.leaf_evals += 1;
    }

    pub fn inc_king_capture(&mut self) {
        self.king_captures += 1;
    }

    pub fn inc_dead_end(&mut self) {
        self.dead_ends += 1;
    }

    /// Fold counters from a worker into these stats
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.leaf_evals += other.leaf_evals;
        self.king_captures += other.king_captures;
        self.dead_ends += other.dead_ends;
    }

    /// Reset all statistics
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn log_summary(&self) {
        debug!(
            nodes = self.nodes,
            leaf_evals = self.leaf_evals,
            king_captures = self.king_captures,
            dead_ends = self.dead_ends,
            elapsed_ms = self.search_time.as_millis() as u64,
            nps = self.nps,
            "search statistics"
        );
    }
}
