//! Othello decision engine
//!
//! Given an Othello position and the player to move, the engine picks a move
//! by adversarial tree search:
//! - Minimax, or minimax with alpha-beta pruning
//! - Optional depth limit with disk-count or corner evaluation at the cutoff
//! - Optional transposition cache shared across moves of a game
//! - Optional best-first move ordering
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards (sizes 1 to 16)
//! - [`rules`]: Legal moves and disk flipping
//! - [`eval`]: Terminal utility and cutoff heuristic
//! - [`search`]: Search core, transposition cache and move ordering
//! - [`engine`]: Move selection entry point
//! - [`config`]: Search configuration and controller handshake
//! - [`protocol`]: Line protocol spoken with the game controller
//!
//! # Quick Start
//!
//! ```
//! use othello::{Algorithm, Board, DepthLimit, Engine, Player, Pos, SearchConfig};
//!
//! let config = SearchConfig::new(DepthLimit::Unbounded, Algorithm::AlphaBeta)
//!     .with_caching(true)
//!     .with_ordering(true);
//! let mut engine = Engine::new(config);
//!
//! // 4x4 Othello is small enough to solve outright
//! let result = engine.select_move(&Board::initial(4), Player::Dark);
//! assert_eq!(result.best_move, Some(Pos::new(0, 1)));
//! assert_eq!(result.value, -6);
//! ```
//!
//! # Perspective
//!
//! Every value the search reports is from the point of view of the player
//! the move is chosen for: positive favors that player.

pub mod board;
pub mod config;
pub mod engine;
pub mod eval;
pub mod protocol;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Player, Pos, MAX_BOARD_SIZE};
pub use config::{Algorithm, DepthLimit, Handshake, SearchConfig};
pub use engine::{select_move, Engine, MoveResult};
pub use eval::Evaluation;
pub use rules::{Othello, Rules};
pub use search::{SearchStats, TranspositionCache};
