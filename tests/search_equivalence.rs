//! Equivalence of the search variants over positions reachable on 4x4

mod common;

use common::playout;
use othello::eval::{heuristic, terminal_utility};
use othello::{
    select_move, Algorithm, Board, DepthLimit, Evaluation, Othello, Player, Pos, SearchConfig,
    TranspositionCache,
};
use proptest::prelude::*;

/// Deepest fixed limit exercised by the properties
const MAX_LIMIT: i64 = 4;

/// Unbounded searches only below this many empty cells
const UNBOUNDED_EMPTIES: u32 = 9;

fn limit_for(board: &Board, limit: i64) -> DepthLimit {
    if limit < 0 && board.empty_count() > UNBOUNDED_EMPTIES {
        DepthLimit::Plies(MAX_LIMIT as u32)
    } else {
        DepthLimit::from(limit)
    }
}

fn fresh(board: &Board, color: Player, config: SearchConfig) -> othello::MoveResult {
    let mut cache = TranspositionCache::new();
    select_move(&Othello, &mut cache, board, color, &config)
}

fn arb_evaluation() -> impl Strategy<Value = Evaluation> {
    prop::sample::select(vec![Evaluation::DiskCount, Evaluation::CornerHeuristic])
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 48, .. ProptestConfig::default() })]

    #[test]
    fn prop_alphabeta_matches_minimax(
        choices in prop::collection::vec(0usize..16, 0..12),
        limit in -1i64..=MAX_LIMIT,
        evaluation in arb_evaluation(),
        ordering in any::<bool>(),
        caching in any::<bool>(),
    ) {
        let (board, color) = playout(4, &choices);
        let depth = limit_for(&board, limit);

        let minimax = SearchConfig::new(depth, Algorithm::Minimax)
            .with_ordering(ordering)
            .with_evaluation(evaluation);
        let reference = fresh(&board, color, minimax);

        for ab_ordering in [false, true] {
            let alphabeta = SearchConfig::new(depth, Algorithm::AlphaBeta)
                .with_ordering(ab_ordering)
                .with_caching(caching)
                .with_evaluation(evaluation);
            let result = fresh(&board, color, alphabeta);

            prop_assert_eq!(result.value, reference.value);
            prop_assert!(result.stats.nodes <= reference.stats.nodes);
            if ab_ordering == ordering {
                prop_assert_eq!(result.best_move, reference.best_move);
            }
        }
    }

    #[test]
    fn prop_caching_preserves_result(
        choices in prop::collection::vec(0usize..16, 0..12),
        limit in -1i64..=MAX_LIMIT,
        algorithm in prop::sample::select(vec![Algorithm::Minimax, Algorithm::AlphaBeta]),
        ordering in any::<bool>(),
    ) {
        let (board, color) = playout(4, &choices);
        let config = SearchConfig::new(limit_for(&board, limit), algorithm).with_ordering(ordering);

        let plain = fresh(&board, color, config);
        let cached = fresh(&board, color, config.with_caching(true));
        prop_assert_eq!(cached.best_move, plain.best_move);
        prop_assert_eq!(cached.value, plain.value);
    }

    #[test]
    fn prop_warm_cache_matches_fresh_cache(
        warmup in prop::collection::vec(0usize..16, 0..12),
        choices in prop::collection::vec(0usize..16, 0..12),
        limit in -1i64..=MAX_LIMIT,
        algorithm in prop::sample::select(vec![Algorithm::Minimax, Algorithm::AlphaBeta]),
    ) {
        let config = |board: &Board| {
            SearchConfig::new(limit_for(board, limit), algorithm)
                .with_caching(true)
                .with_ordering(true)
        };

        // Fill the cache from an unrelated position first
        let mut cache = TranspositionCache::new();
        let (warm_board, warm_color) = playout(4, &warmup);
        select_move(&Othello, &mut cache, &warm_board, warm_color, &config(&warm_board));

        let (board, color) = playout(4, &choices);
        let warm = select_move(&Othello, &mut cache, &board, color, &config(&board));
        let cold = fresh(&board, color, config(&board));

        prop_assert_eq!(warm.best_move, cold.best_move);
        prop_assert_eq!(warm.value, cold.value);
    }

    #[test]
    fn prop_search_is_deterministic(
        choices in prop::collection::vec(0usize..16, 0..12),
        limit in 0i64..=3,
    ) {
        let (board, color) = playout(4, &choices);
        let config = SearchConfig::new(DepthLimit::from(limit), Algorithm::AlphaBeta)
            .with_ordering(true);

        let first = fresh(&board, color, config);
        let second = fresh(&board, color, config);
        prop_assert_eq!(first.best_move, second.best_move);
        prop_assert_eq!(first.value, second.value);
        prop_assert_eq!(first.stats, second.stats);
    }

    #[test]
    fn prop_evaluations_are_antisymmetric(
        choices in prop::collection::vec(0usize..16, 0..12),
    ) {
        let (board, _) = playout(4, &choices);
        prop_assert_eq!(
            terminal_utility(&board, Player::Dark),
            -terminal_utility(&board, Player::Light)
        );
        prop_assert_eq!(heuristic(&board, Player::Dark), -heuristic(&board, Player::Light));
    }

    #[test]
    fn prop_chosen_move_is_legal(
        choices in prop::collection::vec(0usize..16, 0..12),
        limit in 0i64..=2,
    ) {
        let (board, color) = playout(4, &choices);
        let result = fresh(&board, color, SearchConfig::new(DepthLimit::from(limit), Algorithm::AlphaBeta));
        let moves = othello::rules::legal_moves(&board, color);

        match result.best_move {
            Some(mv) => prop_assert!(moves.contains(&mv)),
            None => prop_assert!(moves.is_empty()),
        }
    }
}

#[test]
fn test_solved_opening_is_symmetric() {
    let board = Board::initial(4);
    let config = SearchConfig::new(DepthLimit::Unbounded, Algorithm::AlphaBeta).with_ordering(true);

    let dark = fresh(&board, Player::Dark, config);
    let light = fresh(&board, Player::Light, config);
    assert_eq!(dark.value, -6);
    assert_eq!(light.value, -6);
    assert_eq!(dark.best_move, Some(Pos::new(0, 1)));
}

#[test]
fn test_6x6_fixed_depths() {
    let board = Board::initial(6);
    for (limit, value) in [(1, 3), (2, 0), (3, 3)] {
        let config = SearchConfig::new(DepthLimit::Plies(limit), Algorithm::Minimax);
        let result = fresh(&board, Player::Dark, config);
        assert_eq!(result.best_move, Some(Pos::new(1, 2)), "depth {limit}");
        assert_eq!(result.value, value, "depth {limit}");
    }

    let deep = fresh(&board, Player::Dark, SearchConfig::new(DepthLimit::Plies(3), Algorithm::Minimax));
    assert_eq!(deep.stats.nodes, 72);
}

#[test]
fn test_ordering_prunes_scenario_no_worse() {
    let board = common::parse("[[0, 0, 0, 0], [0, 2, 2, 0], [1, 2, 2, 0], [0, 0, 0, 0]]");

    for depth in [DepthLimit::Plies(1), DepthLimit::Unbounded] {
        let minimax = fresh(&board, Player::Dark, SearchConfig::new(depth, Algorithm::Minimax));
        let alphabeta = fresh(
            &board,
            Player::Dark,
            SearchConfig::new(depth, Algorithm::AlphaBeta).with_ordering(true),
        );

        assert_eq!(alphabeta.value, minimax.value, "{depth}");
        assert!(alphabeta.stats.nodes <= minimax.stats.nodes, "{depth}");
    }

    // Depth 1 scores both replies and keeps the two-disk flip
    let shallow = fresh(
        &board,
        Player::Dark,
        SearchConfig::new(DepthLimit::Plies(1), Algorithm::AlphaBeta).with_ordering(true),
    );
    assert_eq!(shallow.best_move, Some(Pos::new(3, 2)));
    assert_eq!(shallow.value, 2);
    assert_eq!(shallow.stats.nodes, 2);
}
