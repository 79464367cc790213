use criterion::{black_box, criterion_group, criterion_main, Criterion};
use voxtris::core::{Field, Game};
use voxtris::types::{Axis, Color, Spin, GRID_DEPTH, GRID_WIDTH};

const GRAY: Color = Color::new(0.5, 0.5, 0.5);

fn fill_layer(field: &mut Field, y: i8) {
    for z in 0..GRID_DEPTH as i8 {
        for x in 0..GRID_WIDTH as i8 {
            field.set(x, y, z, Some(GRAY));
        }
    }
}

fn bench_tick(c: &mut Criterion) {
    let mut game = Game::new(12345);
    game.start();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            game.tick(black_box(16));
        })
    });
}

fn bench_layer_clear(c: &mut Criterion) {
    c.bench_function("clear_4_layers", |b| {
        b.iter(|| {
            let mut field = Field::new();
            for y in 0..4 {
                fill_layer(&mut field, y);
            }
            field.clear_full_layers()
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut game = Game::new(12345);
    game.start();

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            game.spawn();
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut game = Game::new(12345);
    game.start();

    c.bench_function("try_move", |b| {
        b.iter(|| game.try_move(black_box(1), 0, 0))
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut game = Game::new(12345);
    game.start();

    c.bench_function("try_rotate", |b| {
        b.iter(|| game.try_rotate(Axis::Y, Spin::Ccw))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_layer_clear,
    bench_piece_spawn,
    bench_try_move,
    bench_try_rotate
);
criterion_main!(benches);
