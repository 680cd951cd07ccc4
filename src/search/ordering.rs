//! Best-first child ordering
//!
//! Searching the most promising child first tightens the alpha-beta window
//! early and lets later siblings be pruned. Children are ranked by a shallow
//! evaluation: the disk differential of the child board from the root
//! player's perspective.

use std::cmp::Reverse;

use crate::board::{Board, Player, Pos};
use crate::eval::terminal_utility;

/// Sort `children` for a node.
///
/// - maximizing node: descending shallow value (best for the root first)
/// - minimizing node: ascending shallow value (worst for the root first)
///
/// The sort is stable: children with equal values keep their enumeration
/// order, so the search stays deterministic.
pub fn order_children(children: &mut [(Pos, Board)], maximizing: bool, perspective: Player) {
    if maximizing {
        children.sort_by_cached_key(|(_, board)| Reverse(terminal_utility(board, perspective)));
    } else {
        children.sort_by_cached_key(|(_, board)| terminal_utility(board, perspective));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Othello, Rules};

    fn expand(board: &Board, player: Player) -> Vec<(Pos, Board)> {
        let rules = Othello;
        rules
            .possible_moves(board, player)
            .into_iter()
            .map(|mv| (mv, rules.apply_move(board, player, mv)))
            .collect()
    }

    fn moves(children: &[(Pos, Board)]) -> Vec<Pos> {
        children.iter().map(|(mv, _)| *mv).collect()
    }

    fn scenario() -> Board {
        // . . . .
        // . L L .
        // D L L .
        // . . . .
        "[[0, 0, 0, 0], [0, 2, 2, 0], [1, 2, 2, 0], [0, 0, 0, 0]]"
            .parse()
            .unwrap()
    }

    #[test]
    fn test_max_node_puts_best_first() {
        let mut children = expand(&scenario(), Player::Dark);
        assert_eq!(moves(&children), vec![Pos::new(2, 0), Pos::new(3, 2)]);

        order_children(&mut children, true, Player::Dark);
        assert_eq!(moves(&children), vec![Pos::new(3, 2), Pos::new(2, 0)]);
    }

    #[test]
    fn test_min_node_puts_worst_for_root_first() {
        let mut children = expand(&scenario(), Player::Dark);

        // Dark moving at a min node means light is the root player
        order_children(&mut children, false, Player::Light);
        assert_eq!(moves(&children), vec![Pos::new(3, 2), Pos::new(2, 0)]);

        order_children(&mut children, false, Player::Dark);
        assert_eq!(moves(&children), vec![Pos::new(2, 0), Pos::new(3, 2)]);
    }

    #[test]
    fn test_ties_keep_enumeration_order() {
        // All four opening moves flip exactly one disk
        let mut children = expand(&Board::initial(4), Player::Dark);
        let before = moves(&children);

        order_children(&mut children, true, Player::Dark);
        assert_eq!(moves(&children), before);

        order_children(&mut children, false, Player::Dark);
        assert_eq!(moves(&children), before);
    }
}
