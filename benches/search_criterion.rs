use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use drop_four::game_state::board_state::BoardState;
use drop_four::search::minimax::choose_move;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    key: &'static str,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "empty_board",
        key: "////// r",
    },
    BenchCase {
        name: "midgame",
        key: "/r/y/rry/ry/y/ r",
    },
];

const DEPTHS: &[u8] = &[2, 4, 6];

fn bench_choose_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("choose_move");

    for case in CASES {
        let board = BoardState::from_key(case.key).expect("bench key parses");
        let player = board.side_to_move();

        for &depth in DEPTHS {
            group.bench_with_input(BenchmarkId::new(case.name, depth), &depth, |b, &depth| {
                b.iter(|| choose_move(black_box(&board), depth, player));
            });
        }
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(30)
        .measurement_time(Duration::from_secs(5));
    targets = bench_choose_move
}
criterion_main!(benches);
