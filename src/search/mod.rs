//! Search engine for the 8x2 mini chess engine
//!
//! Full-width fixed-depth negamax, optionally splitting the root across
//! threads.

pub mod parallel;
pub mod params;
pub mod search;
pub mod stats;

pub use self::params::{SearchParams, DEFAULT_DEPTH};
pub use self::search::{Search, SearchResult, WIN_SCORE};
pub use self::stats::SearchStats;
pub use crate::board::Move;
