//! Benchmarks for move generation and perft.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::board::{Color, GameState, GameStateBuilder, Piece, Square};

fn middlegame() -> GameState {
    let mut state = GameState::new();
    for notation in ["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "d2d3", "f8c5"] {
        if let Ok(mv) = state.parse_move(notation) {
            state.make_move(&mv);
        }
    }
    state
}

fn castling_position() -> GameState {
    GameStateBuilder::new()
        .piece(Square(0, 0), Color::Black, Piece::Rook)
        .piece(Square(0, 4), Color::Black, Piece::King)
        .piece(Square(0, 7), Color::Black, Piece::Rook)
        .piece(Square(7, 0), Color::White, Piece::Rook)
        .piece(Square(7, 4), Color::White, Piece::King)
        .piece(Square(7, 7), Color::White, Piece::Rook)
        .all_castling_rights()
        .build()
        .expect("both kings placed")
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let mut board = GameState::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| board.perft(black_box(depth)))
        });
    }

    let mut rooks = castling_position();
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("castling", depth), &depth, |b, &depth| {
            b.iter(|| rooks.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = GameState::new();
    group.bench_function("pseudo_legal_startpos", |b| {
        b.iter(|| black_box(startpos.all_possible_moves()))
    });

    let mut legal_start = GameState::new();
    group.bench_function("legal_startpos", |b| {
        b.iter(|| black_box(legal_start.valid_moves()))
    });

    let mut open = middlegame();
    group.bench_function("legal_middlegame", |b| {
        b.iter(|| black_box(open.valid_moves()))
    });

    group.finish();
}

fn bench_make_undo(c: &mut Criterion) {
    let mut state = middlegame();
    let moves = state.valid_moves();
    c.bench_function("make_undo_all", |b| {
        b.iter(|| {
            for mv in &moves {
                state.make_move(mv);
                state.undo_move();
            }
        })
    });
}

criterion_group!(benches, bench_perft, bench_movegen, bench_make_undo);
criterion_main!(benches);
