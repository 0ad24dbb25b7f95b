use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stackfall::core::{Board, Piece, PieceConfig, PieceRandomizer, RandomAlgorithm};
use stackfall::types::{Direction, PieceKind};

fn bench_spawn(c: &mut Criterion) {
    let config = PieceConfig::default();

    c.bench_function("spawn_piece", |b| {
        b.iter(|| Piece::new(black_box(PieceKind::T), &config))
    });
}

fn bench_try_translate(c: &mut Criterion) {
    let config = PieceConfig::default();
    let board = Board::new();
    let mut piece = Piece::new(PieceKind::L, &config);

    c.bench_function("try_translate", |b| {
        b.iter(|| {
            piece.try_translate(&board, black_box(Direction::Left));
            piece.try_translate(&board, black_box(Direction::Right));
        })
    });
}

fn bench_try_rotate_with_kick(c: &mut Criterion) {
    let config = PieceConfig::default();
    let board = Board::new();
    let mut piece = Piece::new(PieceKind::T, &config);
    piece.rotate(1, &config);
    piece.place_at(-1, 10);

    c.bench_function("try_rotate_wall_kick", |b| {
        b.iter(|| {
            let mut p = piece.clone();
            p.try_rotate(&board, black_box(-1), &config)
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let config = PieceConfig::default();
    let mut board = Board::new();
    for y in 16..20 {
        board.fill_row(y, PieceKind::I, &[(y % 10) as i8]);
    }
    let piece = Piece::new(PieceKind::I, &config);

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            let mut p = piece.clone();
            p.hard_drop(black_box(&board))
        })
    });
}

fn bench_fair_bag(c: &mut Criterion) {
    let mut queue = PieceRandomizer::new(RandomAlgorithm::FairBag, 12345);

    c.bench_function("fair_bag_next", |b| b.iter(|| queue.next_kind()));
}

criterion_group!(
    benches,
    bench_spawn,
    bench_try_translate,
    bench_try_rotate_with_kick,
    bench_hard_drop,
    bench_fair_bag
);
criterion_main!(benches);
