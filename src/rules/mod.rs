//! Game rules for Othello
//!
//! The search core only talks to the rules through the [`Rules`] trait:
//! - legal move enumeration
//! - successor board construction
//! - raw disk counts
//!
//! [`Othello`] is the standard disk-flipping rule set.

pub mod flips;

use crate::board::{Board, Player, Pos};

// Re-exports for convenient access
pub use flips::{find_flips, is_legal_move, legal_moves, play_move};

/// Rules-engine collaborator consumed by the search.
///
/// Implementations must be pure and deterministic: the same inputs always
/// produce the same outputs, and no call mutates shared state.
pub trait Rules {
    /// Legal destinations for `player`. Empty means no legal move.
    fn possible_moves(&self, board: &Board, player: Player) -> Vec<Pos>;

    /// Successor state after `player` plays `mv`. `mv` must be one of
    /// [`Rules::possible_moves`] for the same board and player.
    fn apply_move(&self, board: &Board, player: Player, mv: Pos) -> Board;

    /// Raw disk counts `(dark, light)`.
    fn score(&self, board: &Board) -> (u32, u32) {
        board.score()
    }
}

/// Standard Othello rules on any supported board size.
#[derive(Debug, Clone, Copy, Default)]
pub struct Othello;

impl Rules for Othello {
    fn possible_moves(&self, board: &Board, player: Player) -> Vec<Pos> {
        legal_moves(board, player)
    }

    fn apply_move(&self, board: &Board, player: Player, mv: Pos) -> Board {
        play_move(board, mv, player)
    }
}
