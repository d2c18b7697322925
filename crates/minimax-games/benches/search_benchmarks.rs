//! Search benchmarks
//!
//! Compares plain minimax, alpha-beta and alpha-beta with a transposition
//! table on the bundled games.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use minimax_core::{MoveSelector, SearchConfig, Side};
use minimax_games::{GameTree, TakeAway, TicTacToe, TreeShape};
use std::hint::black_box;
use std::time::Duration;

/// Tic-tac-toe positions for benchmarking
struct BenchPosition {
    name: &'static str,
    board: &'static str,
    depth: u8,
}

const BENCH_POSITIONS: &[BenchPosition] = &[
    BenchPosition {
        name: "empty",
        board: ".../.../...",
        depth: 6,
    },
    BenchPosition {
        name: "opening",
        board: "X../.O./...",
        depth: 7,
    },
    BenchPosition {
        name: "midgame",
        board: "XO./.X./..O x",
        depth: 5,
    },
];

fn configs(depth: u8) -> [(&'static str, SearchConfig); 3] {
    [
        ("plain", SearchConfig::plain(depth)),
        ("alpha_beta", SearchConfig::alpha_beta(depth)),
        ("alpha_beta_tt", SearchConfig::full(depth)),
    ]
}

fn bench_tictactoe(c: &mut Criterion) {
    let mut group = c.benchmark_group("tictactoe");
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(20);

    for bench_pos in BENCH_POSITIONS {
        let pos: TicTacToe = bench_pos.board.parse().unwrap();
        for (label, config) in configs(bench_pos.depth) {
            let selector = MoveSelector::new(config);
            group.bench_with_input(BenchmarkId::new(label, bench_pos.name), &pos, |b, pos| {
                b.iter(|| black_box(selector.select(pos, pos.side_to_move()).unwrap()));
            });
        }
    }

    group.finish();
}

fn bench_take_away(c: &mut Criterion) {
    let mut group = c.benchmark_group("take_away");
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(20);

    let game = TakeAway::new(&[3, 3, 2]);
    for depth in [4u8, 6] {
        for (label, config) in configs(depth) {
            let selector = MoveSelector::new(config);
            group.bench_with_input(BenchmarkId::new(label, depth), &game, |b, game| {
                b.iter(|| black_box(selector.select(game, Side::Max).unwrap()));
            });
        }
    }

    group.finish();
}

fn bench_random_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_tree");
    group.sample_size(30);

    let shape = TreeShape {
        layers: 8,
        width: 64,
        max_branch: 6,
        ..TreeShape::default()
    };
    let tree = GameTree::random(0x5EED, &shape);
    let root = tree.root();
    for (label, config) in configs(8) {
        let selector = MoveSelector::new(config);
        group.bench_function(label, |b| {
            b.iter(|| black_box(selector.select(&root, Side::Max).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tictactoe, bench_take_away, bench_random_tree);
criterion_main!(benches);
