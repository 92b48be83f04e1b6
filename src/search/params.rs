//! Search parameters and configuration
//!
//! The search is a fixed-depth full-width walk, so the only knobs are the
//! depth and how many threads split the root.

/// Depth the engine plays at when nobody says otherwise.
pub const DEFAULT_DEPTH: u8 = 5;

/// Search parameters for the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Search depth in plies
    pub depth: u8,

    /// Worker threads for the root split (1 = sequential)
    pub threads: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            threads: 1,
        }
    }
}

impl SearchParams {
    /// Create new search params with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set search depth in plies
    pub fn depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    /// Set worker thread count; zero is treated as one
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }
}
