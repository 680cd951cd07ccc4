//! Search module for the Othello AI
//!
//! Contains:
//! - Transposition cache for reusing values of transposed positions
//! - Best-first move ordering
//! - Minimax and alpha-beta search over a shared recursive walker

pub mod cache;
pub mod minimax;
pub mod ordering;

pub use cache::{CacheKey, TranspositionCache};
pub use minimax::{SearchResult, SearchStats, Searcher, INF};
pub use ordering::order_children;
