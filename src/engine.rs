//! Move selection entry point
//!
//! This module drives one top-level search request: it checks whether the
//! side to move can play at all, runs a single MAX-rooted minimax or
//! alpha-beta search as configured, and reports the chosen move with
//! statistics.
//!
//! # Example
//!
//! ```
//! use othello::{Algorithm, Board, DepthLimit, Engine, Player, SearchConfig};
//!
//! let config = SearchConfig::new(DepthLimit::Plies(4), Algorithm::AlphaBeta)
//!     .with_caching(true)
//!     .with_ordering(true);
//! let mut engine = Engine::new(config);
//!
//! let result = engine.select_move(&Board::initial(8), Player::Dark);
//! println!("Best move: {:?}", result.best_move);
//! println!("Value: {}", result.value);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use crate::board::{Board, Player, Pos};
use crate::config::{Algorithm, SearchConfig};
use crate::eval::terminal_utility;
use crate::rules::{Othello, Rules};
use crate::search::{SearchStats, Searcher, TranspositionCache};

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Move to play; `None` is a forced pass
    pub best_move: Option<Pos>,
    /// Value of the chosen move from the mover's perspective
    pub value: i32,
    /// Algorithm that produced this result
    pub algorithm: Algorithm,
    /// Time taken in milliseconds
    pub time_ms: u64,
    pub stats: SearchStats,
}

impl MoveResult {
    /// Result for a side with no legal move
    #[inline]
    fn pass(board: &Board, color: Player, algorithm: Algorithm) -> Self {
        Self {
            best_move: None,
            value: terminal_utility(board, color),
            algorithm,
            time_ms: 0,
            stats: SearchStats::default(),
        }
    }
}

/// Choose a move for `color` on `board`.
///
/// Returns a result without a move when `color` has no legal move; the caller
/// relays that as a pass. When `config.caching` is set, `cache` is consulted
/// and extended; otherwise it is left untouched.
pub fn select_move<R: Rules + ?Sized>(
    rules: &R,
    cache: &mut TranspositionCache,
    board: &Board,
    color: Player,
    config: &SearchConfig,
) -> MoveResult {
    if rules.possible_moves(board, color).is_empty() {
        log::debug!("{color} has no legal move");
        return MoveResult::pass(board, color, config.algorithm);
    }

    let start = Instant::now();
    let result = Searcher::new(rules, cache, color, *config).search(board);
    let time_ms = start.elapsed().as_millis() as u64;

    log::debug!(
        "{} depth={} -> {:?} value={} nodes={} cutoffs={} cache hits={}/{} ({}ms)",
        config.algorithm,
        config.depth_limit,
        result.best_move,
        result.value,
        result.stats.nodes,
        result.stats.cutoffs,
        result.stats.cache_hits,
        result.stats.cache_probes,
        time_ms
    );

    MoveResult {
        best_move: result.best_move,
        value: result.value,
        algorithm: config.algorithm,
        time_ms,
        stats: result.stats,
    }
}

/// Move selector that owns its rules engine and transposition cache.
///
/// The cache lives as long as the engine, so positions searched for one
/// move are reused by later moves of the same game. Call
/// [`Engine::clear_cache`] between games.
pub struct Engine<R: Rules = Othello> {
    rules: R,
    cache: TranspositionCache,
    config: SearchConfig,
}

impl Engine<Othello> {
    /// Create an engine playing standard Othello.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self::with_rules(Othello, config)
    }
}

impl<R: Rules> Engine<R> {
    /// Create an engine over a custom rules engine.
    #[must_use]
    pub fn with_rules(rules: R, config: SearchConfig) -> Self {
        Self {
            rules,
            cache: TranspositionCache::new(),
            config,
        }
    }

    /// Choose a move for `color`; see [`select_move`].
    pub fn select_move(&mut self, board: &Board, color: Player) -> MoveResult {
        select_move(&self.rules, &mut self.cache, board, color, &self.config)
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    #[must_use]
    pub fn cache(&self) -> &TranspositionCache {
        &self.cache
    }

    /// Forget every cached position.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
