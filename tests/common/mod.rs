//! Shared helpers for integration tests

#![allow(dead_code)]

use othello::rules::{Othello, Rules};
use othello::{Board, Player};

/// Play out a game from the standard start, choosing each move by index.
///
/// `choices[i] % n` picks among the `n` legal moves of the side to move.
/// A side without moves passes; the playout stops early when neither side
/// can move. Returns the reached board and the side to move.
pub fn playout(size: usize, choices: &[usize]) -> (Board, Player) {
    let rules = Othello;
    let mut board = Board::initial(size);
    let mut to_move = Player::Dark;

    for &choice in choices {
        let mut moves = rules.possible_moves(&board, to_move);
        if moves.is_empty() {
            to_move = to_move.opponent();
            moves = rules.possible_moves(&board, to_move);
            if moves.is_empty() {
                break;
            }
        }
        let mv = moves[choice % moves.len()];
        board = rules.apply_move(&board, to_move, mv);
        to_move = to_move.opponent();
    }

    (board, to_move)
}

pub fn parse(text: &str) -> Board {
    text.parse().expect("valid board text")
}
