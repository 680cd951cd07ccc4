//! Transposition cache for reusing search results
//!
//! The cache maps an exact search state to its exact minimax value, so a
//! position reached through a different move order (a transposition) is
//! searched only once.
//!
//! # Example
//!
//! ```
//! use othello::board::{Board, Player};
//! use othello::search::{CacheKey, TranspositionCache};
//!
//! let mut cache = TranspositionCache::new();
//! let key = CacheKey::new(Board::initial(4), Player::Dark, Some(2));
//!
//! // Values are read back from the perspective they were written in...
//! cache.store(key.clone(), Player::Dark, 3);
//! assert_eq!(cache.probe(&key, Player::Dark), Some(3));
//!
//! // ...and negated for the other player.
//! assert_eq!(cache.probe(&key, Player::Light), Some(-3));
//! ```

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::board::{Board, Player};
use crate::eval::Evaluation;

/// Identity of a searched state.
///
/// The value of a node depends on the board, on who moves next, on how many
/// plies the search may still spend below it (`None` when unbounded), and on
/// how positions at the depth cutoff are scored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub board: Board,
    pub to_move: Player,
    pub depth: Option<u32>,
    pub evaluation: Evaluation,
}

impl CacheKey {
    /// Key for a disk-count search; see [`CacheKey::with_evaluation`].
    #[must_use]
    pub fn new(board: Board, to_move: Player, depth: Option<u32>) -> Self {
        Self {
            board,
            to_move,
            depth,
            evaluation: Evaluation::DiskCount,
        }
    }

    #[must_use]
    pub fn with_evaluation(mut self, evaluation: Evaluation) -> Self {
        self.evaluation = evaluation;
        self
    }
}

/// Process-lifetime transposition cache.
///
/// Values are stored from dark's point of view and converted on the way in
/// and out; the game is zero-sum, so the conversion is a sign flip. This lets
/// one cache serve searches rooted at either color.
///
/// Entries are never evicted or overwritten: the first value stored for a key
/// wins, and later stores for the same key are ignored.
#[derive(Debug, Clone, Default)]
pub struct TranspositionCache {
    entries: HashMap<CacheKey, i32>,
}

impl TranspositionCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a state, returning its value from `perspective`.
    #[must_use]
    pub fn probe(&self, key: &CacheKey, perspective: Player) -> Option<i32> {
        self.entries
            .get(key)
            .map(|&value| canonical(value, perspective))
    }

    /// Store a value computed from `perspective`.
    ///
    /// Returns `true` if the key was new. An existing entry is left as is.
    pub fn store(&mut self, key: CacheKey, perspective: Player, value: i32) -> bool {
        match self.entries.entry(key) {
            Entry::Occupied(entry) => {
                if *entry.get() != canonical(value, perspective) {
                    log::warn!(
                        "ignoring conflicting cache value {value} for {:?} to move (kept {})",
                        entry.key().to_move,
                        canonical(*entry.get(), perspective)
                    );
                }
                false
            }
            Entry::Vacant(entry) => {
                entry.insert(canonical(value, perspective));
                true
            }
        }
    }

    /// Number of cached states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry, e.g. before a new game.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Convert between dark's perspective and `perspective`. Self-inverse.
#[inline]
fn canonical(value: i32, perspective: Player) -> i32 {
    match perspective {
        Player::Dark => value,
        Player::Light => -value,
    }
}
