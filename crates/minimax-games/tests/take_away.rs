//! Take-away: full solutions and table effectiveness

mod common;

use minimax_core::contract::check_all;
use minimax_core::{MoveSelector, Score, SearchConfig, SearchConfigBuilder, SearchOutcome, Side};
use minimax_games::TakeAway;

fn search(game: &TakeAway, config: SearchConfig) -> SearchOutcome<TakeAway> {
    MoveSelector::new(config)
        .select(game, game.to_move())
        .unwrap_or_else(|e| panic!("search of {game} failed: {e}"))
}

#[test]
fn test_full_depth_finds_zero_nim_sum_move() {
    common::init_logger();
    let game = TakeAway::new(&[3, 3, 3]);
    let outcome = search(&game, SearchConfig::full(9));
    assert_eq!(outcome.score, Score::WIN);
    assert_eq!(outcome.best.heaps(), &[0, 3, 3]);
    assert_eq!(outcome.best.grundy(), 0);
}

#[test]
fn test_lost_position_keeps_first_move() {
    common::init_logger();
    let game = TakeAway::new(&[4]);
    let outcome = search(&game, SearchConfig::full(4));
    assert_eq!(outcome.score, Score::LOSS);
    assert_eq!(outcome.best.heaps(), &[3]);
}

#[test]
fn test_min_side_win() {
    common::init_logger();
    let game = TakeAway::new(&[2, 1]).with_side_to_move(Side::Min);
    let outcome = search(&game, SearchConfig::full(3));
    assert_eq!(outcome.score, Score::LOSS);
    assert_eq!(outcome.best.grundy(), 0);
}

#[test]
fn test_estimate_guides_shallow_search() {
    common::init_logger();
    let game = TakeAway::new(&[5]);
    let outcome = search(&game, SearchConfig::full(1));
    assert_eq!(outcome.best.heaps(), &[4]);
    assert_eq!(outcome.score, Score::new(100));
}

#[test]
fn test_table_cuts_nodes_without_changing_result() {
    common::init_logger();
    let game = TakeAway::new(&[2, 2, 2]);
    let plain = search(&game, SearchConfig::plain(6));
    let cached = search(
        &game,
        SearchConfigBuilder::default().depth(6).pruning(false).build(),
    );

    assert_eq!(cached.score, plain.score);
    assert_eq!(cached.best, plain.best);
    assert!(cached.stats.tt_hits > 0);
    assert!(
        cached.stats.nodes < plain.stats.nodes,
        "cached={} plain={}",
        cached.stats.nodes,
        plain.stats.nodes
    );
}

#[test]
fn test_table_is_transparent_under_pruning() {
    common::init_logger();
    let game = TakeAway::new(&[3, 2, 1]);
    for depth in 1..=6 {
        let pruned = search(&game, SearchConfig::alpha_beta(depth));
        let full = search(&game, SearchConfig::full(depth));
        assert_eq!(full.score, pruned.score, "depth {depth}");
        assert_eq!(full.best, pruned.best, "depth {depth}");
    }
}

#[test]
fn test_contract_holds() {
    common::init_logger();
    let checked = check_all(&TakeAway::new(&[3, 2, 1]), Side::Max, 6).unwrap();
    assert!(checked > 1);
}
