use cozy_chess::Board;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use evaluation::HCE;
use hce::{EvalParams, Evaluator};
use utils::Position;

/// Perft positions from https://github.com/AndyGrant/Ethereal/blob/master/src/perft/standard.epd
const POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "rnbqkb1r/ppppp1pp/7n/4Pp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
];

fn bench_uncached(c: &mut Criterion) {
    // single-slot caches: clearing them costs nothing next to an evaluation
    let mut evaluator = Evaluator::with_cache_size(EvalParams::default(), 1);
    let mut group = c.benchmark_group("evaluate/uncached");

    for fen in POSITIONS {
        let board: Board = fen.parse().unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(fen), &board, |b, board| {
            let position = Position::new(board);
            b.iter(|| {
                evaluator.clear_eval_cache();
                evaluator.clear_pawn_cache();
                black_box(evaluator.evaluate(black_box(&position)))
            })
        });
    }

    group.finish();
}

fn bench_cached(c: &mut Criterion) {
    let mut evaluator = Evaluator::default();
    let mut group = c.benchmark_group("evaluate/cached");

    for fen in POSITIONS {
        let board: Board = fen.parse().unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(fen), &board, |b, board| {
            let position = Position::new(board);
            evaluator.evaluate(&position);
            b.iter(|| black_box(evaluator.evaluate(black_box(&position))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_uncached, bench_cached);
criterion_main!(benches);
