//! Utility and heuristic scoring for Othello board positions
//!
//! - Terminal utility: disk-count differential
//! - Heuristic: corner occupancy differential, normalized to ±[`CORNER_WEIGHT`]

use crate::board::{Board, Player};

/// Scale of the corner-control score
pub const CORNER_WEIGHT: i32 = 100;

/// Disk-count differential from `perspective`.
///
/// Returns `disks(perspective) - disks(opponent)`.
#[inline]
#[must_use]
pub fn terminal_utility(board: &Board, perspective: Player) -> i32 {
    let (dark, light) = board.score();
    let diff = dark as i32 - light as i32;
    match perspective {
        Player::Dark => diff,
        Player::Light => -diff,
    }
}

/// Heuristic estimate for a non-terminal position.
///
/// When at least one corner is occupied, returns
/// `CORNER_WEIGHT * (own - opp) / (own + opp)` over corner counts
/// (integer division truncates toward zero, keeping the score antisymmetric).
/// With no corner taken it falls back to [`terminal_utility`].
#[must_use]
pub fn heuristic(board: &Board, perspective: Player) -> i32 {
    let (own, opp) = corner_counts(board, perspective);

    if own + opp == 0 {
        return terminal_utility(board, perspective);
    }

    CORNER_WEIGHT * (own - opp) / (own + opp)
}

/// Corners held by `perspective` and by its opponent.
fn corner_counts(board: &Board, perspective: Player) -> (i32, i32) {
    let mut corners = board.corners().to_vec();
    // A 1x1 board has a single corner listed four times
    corners.sort();
    corners.dedup();

    corners
        .iter()
        .fold((0, 0), |(own, opp), &pos| match board.get(pos) {
            Some(p) if p == perspective => (own + 1, opp),
            Some(_) => (own, opp + 1),
            None => (own, opp),
        })
}
