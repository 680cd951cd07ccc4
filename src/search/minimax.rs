//! Minimax and alpha-beta tree search
//!
//! Both algorithms share one recursive walker. A node is *maximizing* when
//! the side to move is the root player and *minimizing* otherwise; every
//! value is expressed from the root player's perspective. Alpha-beta is the
//! same walker with cutoffs enabled.
//!
//! # Features
//!
//! - Depth limit with evaluation at the cutoff, or unbounded search to game end
//! - Transposition cache consulted before every child
//! - Best-first child ordering
//!
//! # Example
//!
//! ```
//! use othello::board::{Board, Player};
//! use othello::config::{Algorithm, DepthLimit, SearchConfig};
//! use othello::rules::Othello;
//! use othello::search::{Searcher, TranspositionCache};
//!
//! let mut cache = TranspositionCache::new();
//! let config = SearchConfig::new(DepthLimit::Plies(3), Algorithm::AlphaBeta).with_ordering(true);
//!
//! let result = Searcher::new(&Othello, &mut cache, Player::Dark, config).search(&Board::initial(4));
//! assert!(result.best_move.is_some());
//! ```

use crate::board::{Board, Player, Pos};
use crate::config::{Algorithm, SearchConfig};
use crate::eval::{evaluate, terminal_utility};
use crate::rules::Rules;

use super::{order_children, CacheKey, TranspositionCache};

/// Bound larger than any reachable score, used as the initial window
pub const INF: i32 = 1_000_000;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Child evaluations (one per child the walker asked a value for)
    pub nodes: u64,
    /// Positions scored directly: no legal move or depth exhausted
    pub leaves: u64,
    /// Alpha and beta cutoffs
    pub cutoffs: u64,
    /// Cache lookups
    pub cache_probes: u64,
    /// Cache lookups that supplied a value
    pub cache_hits: u64,
    /// New cache entries written
    pub cache_stores: u64,
}

impl SearchStats {
    /// Cache hit rate in percent
    pub fn cache_hit_rate(&self) -> f64 {
        if self.cache_probes == 0 {
            0.0
        } else {
            self.cache_hits as f64 / self.cache_probes as f64 * 100.0
        }
    }
}

/// Outcome of one rooted search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` when the root player has no legal move
    pub best_move: Option<Pos>,
    /// Value of the root from the root player's perspective
    pub value: i32,
    pub stats: SearchStats,
}

/// One search from a fixed root player.
///
/// Borrows the rules engine and, when caching is enabled, the caller's
/// transposition cache for the duration of the search.
pub struct Searcher<'a, R: Rules + ?Sized> {
    rules: &'a R,
    cache: Option<&'a mut TranspositionCache>,
    config: SearchConfig,
    root: Player,
    prune: bool,
    stats: SearchStats,
}

impl<'a, R: Rules + ?Sized> Searcher<'a, R> {
    /// The cache is only touched when `config.caching` is set.
    pub fn new(
        rules: &'a R,
        cache: &'a mut TranspositionCache,
        root: Player,
        config: SearchConfig,
    ) -> Self {
        Self {
            rules,
            cache: if config.caching { Some(cache) } else { None },
            config,
            root,
            prune: config.algorithm == Algorithm::AlphaBeta,
            stats: SearchStats::default(),
        }
    }

    /// Search `board` with the root player to move.
    ///
    /// The root is always expanded, so a depth limit of 0 behaves like 1:
    /// each immediate child is scored without further recursion.
    #[must_use]
    pub fn search(mut self, board: &Board) -> SearchResult {
        let depth = self.config.depth_limit.plies().map(|n| n.max(1));
        let (best_move, value) = self.node(board, self.root, depth, -INF, INF);

        SearchResult {
            best_move,
            value,
            stats: self.stats,
        }
    }

    /// Recursive node evaluation.
    ///
    /// Returns the chosen move (`None` at leaves) and the node value. With
    /// pruning enabled the value is fail-soft: it is exact when it lies
    /// strictly inside `(alpha, beta)`, an upper bound when `<= alpha`, and a
    /// lower bound when `>= beta`.
    fn node(
        &mut self,
        board: &Board,
        to_move: Player,
        depth: Option<u32>,
        mut alpha: i32,
        mut beta: i32,
    ) -> (Option<Pos>, i32) {
        let moves = self.rules.possible_moves(board, to_move);

        if moves.is_empty() {
            self.stats.leaves += 1;
            return (None, terminal_utility(board, self.root));
        }
        if depth == Some(0) {
            self.stats.leaves += 1;
            return (None, evaluate(board, self.root, self.config.evaluation));
        }

        let maximizing = to_move == self.root;
        let mut children: Vec<(Pos, Board)> = moves
            .into_iter()
            .map(|mv| (mv, self.rules.apply_move(board, to_move, mv)))
            .collect();
        if self.config.ordering {
            order_children(&mut children, maximizing, self.root);
        }

        let child_depth = depth.map(|d| d - 1);
        let mut best_move = None;
        let mut best = if maximizing { -INF } else { INF };

        for (mv, child) in children {
            let value = self.child_value(child, to_move.opponent(), child_depth, alpha, beta);
            log::trace!("{to_move} {mv} depth {depth:?}: {value}");

            // Strict comparison: the first of equally valued moves is kept
            if (maximizing && value > best) || (!maximizing && value < best) {
                best = value;
                best_move = Some(mv);
            }

            if !self.prune {
                continue;
            }
            if maximizing {
                if best >= beta {
                    self.stats.cutoffs += 1;
                    break;
                }
                alpha = alpha.max(best);
            } else {
                if best <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
                beta = beta.min(best);
            }
        }

        (best_move, best)
    }

    /// Value of one child, through the transposition cache when enabled.
    fn child_value(
        &mut self,
        child: Board,
        to_move: Player,
        depth: Option<u32>,
        alpha: i32,
        beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        if self.cache.is_none() {
            return self.node(&child, to_move, depth, alpha, beta).1;
        }

        let root = self.root;
        let key = CacheKey::new(child, to_move, depth).with_evaluation(self.config.evaluation);

        self.stats.cache_probes += 1;
        if let Some(value) = self.cache.as_deref().and_then(|c| c.probe(&key, root)) {
            self.stats.cache_hits += 1;
            return value;
        }

        let (reply, value) = self.node(&key.board, to_move, depth, alpha, beta);

        // Only exact values are cached: leaves always, interior nodes when no
        // cutoff could have bounded them
        let exact = !self.prune || reply.is_none() || (alpha < value && value < beta);
        if exact {
            if let Some(cache) = self.cache.as_deref_mut() {
                if cache.store(key, root, value) {
                    self.stats.cache_stores += 1;
                }
            }
        }

        value
    }
}
