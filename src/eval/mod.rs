//! Evaluation module for Othello positions
//!
//! Every score is expressed from an explicit perspective player:
//! positive favors the perspective, negative favors the opponent.
//! Both evaluations are antisymmetric, so swapping the perspective
//! negates the score.

pub mod heuristic;

use crate::board::{Board, Player};

pub use heuristic::{heuristic, terminal_utility, CORNER_WEIGHT};

/// How to score a non-terminal position when the depth budget runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Evaluation {
    /// Disk-count differential, same as at game end
    #[default]
    DiskCount,
    /// Corner control, falling back to disk count when no corner is taken
    CornerHeuristic,
}

/// Score a depth-cutoff position for `perspective`.
///
/// Positions where the side to move has no legal move are scored with
/// [`terminal_utility`] by the search regardless of this setting.
#[inline]
#[must_use]
pub fn evaluate(board: &Board, perspective: Player, evaluation: Evaluation) -> i32 {
    match evaluation {
        Evaluation::DiskCount => terminal_utility(board, perspective),
        Evaluation::CornerHeuristic => heuristic(board, perspective),
    }
}
