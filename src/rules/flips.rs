//! Disk-flipping rules
//!
//! A move is legal when it brackets at least one contiguous line of opponent
//! disks between the placed disk and another disk of the mover. Every
//! bracketed line is flipped.

use crate::board::{Board, Player, Pos};

/// Direction vectors `(dcol, drow)` for line scanning (8 directions)
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Find the opponent disks that would flip if `player` placed a disk at `pos`.
///
/// Scans each of the eight directions for a run of opponent disks closed by a
/// disk of `player`. Open-ended runs (reaching an empty cell or the edge)
/// flip nothing.
///
/// # Returns
/// Flipped positions, grouped by direction. Empty when the move is illegal.
pub fn find_flips(board: &Board, pos: Pos, player: Player) -> Vec<Pos> {
    let size = board.size();
    let opponent = player.opponent();
    let mut flips = Vec::new();

    if !board.contains(pos) || !board.is_empty(pos) {
        return flips;
    }

    for &(dc, dr) in &DIRECTIONS {
        let mut c = pos.col as i32 + dc;
        let mut r = pos.row as i32 + dr;
        let mut run = Vec::new();

        while Pos::is_valid(c, r, size) {
            let cur = Pos::new(c as u8, r as u8);
            match board.get(cur) {
                Some(p) if p == opponent => run.push(cur),
                Some(_) => {
                    // Closed by our own disk
                    flips.extend_from_slice(&run);
                    break;
                }
                None => break,
            }
            c += dc;
            r += dr;
        }
    }

    flips
}

/// Check whether `player` may place a disk at `pos`.
#[inline]
pub fn is_legal_move(board: &Board, pos: Pos, player: Player) -> bool {
    !find_flips(board, pos, player).is_empty()
}

/// All legal moves for `player`, enumerated column by column
/// (columns outer, rows inner).
pub fn legal_moves(board: &Board, player: Player) -> Vec<Pos> {
    let size = board.size() as u8;
    let mut moves = Vec::new();

    for col in 0..size {
        for row in 0..size {
            let pos = Pos::new(col, row);
            if is_legal_move(board, pos, player) {
                moves.push(pos);
            }
        }
    }

    moves
}

/// Produce the board after `player` plays at `pos`.
///
/// The move must be legal; the search only plays moves returned by
/// [`legal_moves`].
pub fn play_move(board: &Board, pos: Pos, player: Player) -> Board {
    let flips = find_flips(board, pos, player);
    debug_assert!(
        !flips.is_empty(),
        "illegal move {pos:?} for {player} on {board}"
    );

    let mut next = board.clone();
    next.place(pos, player);
    for flipped in flips {
        next.place(flipped, player);
    }
    next
}
