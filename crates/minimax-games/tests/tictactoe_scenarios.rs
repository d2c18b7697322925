//! Tic-tac-toe search scenarios

mod common;

use common::{board, chosen_cell, init_logger, search};
use minimax_core::contract::check_all;
use minimax_core::{
    MoveSelector, Score, SearchConfig, SearchConfigBuilder, SearchError, Side, TtPolicy,
    select_move,
};
use minimax_games::{Mark, TicTacToe};

fn all_configs(depth: u8) -> [SearchConfig; 4] {
    [
        SearchConfig::plain(depth),
        SearchConfig::alpha_beta(depth),
        SearchConfig::full(depth),
        SearchConfigBuilder::default()
            .depth(depth)
            .tt_policy(TtPolicy::StateOnly)
            .build(),
    ]
}

#[test]
fn test_forced_win_in_one() {
    init_logger();
    // O threatens cells 3 and 6, X completes the bottom row first
    let pos = board("OXO/.OO/.XX x");
    for config in all_configs(2) {
        let outcome = search(&pos, config);
        assert_eq!(chosen_cell(&pos, &outcome), 6, "{config:?}");
        assert_eq!(outcome.score, Score::WIN);
        assert_eq!(outcome.best.winner(), Some(Mark::X));
    }
}

#[test]
fn test_min_side_takes_win() {
    init_logger();
    let pos = board("XX./OO./X..");
    assert_eq!(pos.to_move(), Mark::O);
    for config in all_configs(1) {
        let outcome = search(&pos, config);
        assert_eq!(chosen_cell(&pos, &outcome), 5, "{config:?}");
        assert_eq!(outcome.score, Score::LOSS);
    }
}

#[test]
fn test_blocks_immediate_threat() {
    init_logger();
    let pos = board("OO./X../... x");
    for config in all_configs(2) {
        let outcome = search(&pos, config);
        assert_eq!(chosen_cell(&pos, &outcome), 2, "{config:?}");
        assert!(!outcome.score.is_loss());
    }
}

#[test]
fn test_full_depth_is_draw() {
    init_logger();
    let root = TicTacToe::new();
    for config in [SearchConfig::alpha_beta(9), SearchConfig::full(9)] {
        let outcome = search(&root, config);
        assert_eq!(outcome.score, Score::DRAW, "{config:?}");
        assert!(!outcome.score.is_decisive());
        // every opening draws, the first one listed wins the tie
        assert_eq!(chosen_cell(&root, &outcome), 0);
    }
}

#[test]
fn test_shallow_search_is_heuristic() {
    init_logger();
    let root = TicTacToe::new();
    let outcome = search(&root, SearchConfig::full(1));
    assert_eq!(chosen_cell(&root, &outcome), 4);
    assert_eq!(outcome.score, Score::new(4));
    assert!(outcome.score.is_heuristic());
    assert_ne!(outcome.score, Score::DRAW);
}

#[test]
fn test_tie_break_prefers_first_successor() {
    init_logger();
    // every corner reply scores 1 for O, edges score 2
    let pos = board(".../.X./...");
    assert_eq!(pos.to_move(), Mark::O);
    for config in all_configs(1) {
        for _ in 0..3 {
            let outcome = search(&pos, config);
            assert_eq!(chosen_cell(&pos, &outcome), 0, "{config:?}");
            assert_eq!(outcome.score, Score::new(1));
        }
    }
}

#[test]
fn test_repeated_searches_are_identical() {
    init_logger();
    let pos = board("X../.O./..X o");
    let first = search(&pos, SearchConfig::full(6));
    for _ in 0..3 {
        let again = search(&pos, SearchConfig::full(6));
        assert_eq!(again.best, first.best);
        assert_eq!(again.score, first.score);
        assert_eq!(again.stats.nodes, first.stats.nodes);
        assert_eq!(again.stats.tt_hits, first.stats.tt_hits);
    }
}

#[test]
fn test_pruning_and_table_agree_with_plain_minimax() {
    init_logger();
    let positions = [
        TicTacToe::new(),
        TicTacToe::starting_with(Mark::O),
        board("X../.../..."),
        board("X../.O./..X o"),
        board("XO./.X./..O x"),
    ];
    for pos in &positions {
        for depth in 1..=5 {
            let [plain, rest @ ..] = all_configs(depth).map(|config| search(pos, config));
            for outcome in &rest {
                assert_eq!(outcome.score, plain.score, "{pos} depth {depth}");
                assert_eq!(outcome.best, plain.best, "{pos} depth {depth}");
            }
            assert!(rest[0].stats.nodes <= plain.stats.nodes);
        }
    }
}

#[test]
fn test_select_move_convenience() {
    init_logger();
    let pos = board("OXO/.OO/.XX x");
    let best = select_move(&pos, Side::Max, 3).unwrap();
    assert_eq!(pos.move_to(&best), Some(6));
}

#[test]
fn test_finished_game_has_no_moves() {
    init_logger();
    let won = board("XXX/OO./... o");
    assert!(matches!(
        select_move(&won, Side::Min, 3),
        Err(SearchError::NoMovesAvailable)
    ));

    let drawn = board("XOX/XOO/OXX");
    assert!(matches!(
        select_move(&drawn, drawn.side_to_move(), 1),
        Err(SearchError::NoMovesAvailable)
    ));
}

#[test]
fn test_invalid_depth_is_rejected() {
    init_logger();
    let root = TicTacToe::new();
    assert!(matches!(
        select_move(&root, Side::Max, 0),
        Err(SearchError::InvalidDepth { depth: 0, .. })
    ));
    assert!(matches!(
        select_move(&root, Side::Max, SearchConfig::MAX_DEPTH + 1),
        Err(SearchError::InvalidDepth { .. })
    ));
}

#[test]
fn test_out_of_range_evaluator_is_reported() {
    init_logger();
    let selector = MoveSelector::with_evaluator(SearchConfig::full(2), |_: &TicTacToe, _: Side| {
        Score::new(40_000)
    });
    let err = selector.select(&TicTacToe::new(), Side::Max).unwrap_err();
    assert!(matches!(err, SearchError::EvaluationOutOfRange { raw: 40_000 }));
}

#[test]
fn test_config_from_toml() {
    init_logger();
    let config = SearchConfig::from_toml_str(
        r#"
        depth = 9
        tt_policy = "state_only"
        "#,
    )
    .unwrap();
    let outcome = search(&TicTacToe::new(), config);
    assert_eq!(outcome.score, Score::DRAW);
    assert_eq!(outcome.depth, 9);
}

#[test]
fn test_evaluation_contract_holds_everywhere() {
    init_logger();
    // all positions reachable with X moving first
    let checked = check_all(&TicTacToe::new(), Side::Max, 9).unwrap();
    assert_eq!(checked, 5478);

    let checked_o = check_all(&TicTacToe::starting_with(Mark::O), Side::Min, 9).unwrap();
    assert_eq!(checked_o, 5478);
}
