use criterion::{criterion_group, criterion_main, Criterion};
use std::collections::HashSet;
use std::hint::black_box;
use common::games::SessionRng;
use common::games::snake::{sample_free_cell, Cell, Direction, FieldSize, SnakeError, SnakeGameState};

const TURNS: [Direction; 4] = [Direction::Down, Direction::Right, Direction::Up, Direction::Right];

fn bench_hundred_ticks() -> usize {
    let mut state = SnakeGameState::new(FieldSize::new(600, 300, 30), SessionRng::new(42));
    for step in 0..100 {
        if step % 5 == 0 {
            state.set_direction(TURNS[(step / 5) % TURNS.len()]);
        }
        black_box(state.tick());
    }
    state.score()
}

fn bench_sample_on_crowded_field() -> Result<Cell, SnakeError> {
    let field = FieldSize::new(3000, 3000, 30);
    let occupied: HashSet<Cell> = field.cells().filter(|cell| cell.column % 10 != 3).collect();
    let mut rng = SessionRng::new(42);
    black_box(sample_free_cell(black_box(&field), black_box(&occupied), &mut rng))
}

fn tick_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("snake");

    group.bench_function("hundred_ticks", |b| {
        b.iter(|| black_box(bench_hundred_ticks()))
    });

    group.bench_function("sample_free_cell_crowded", |b| {
        b.iter(bench_sample_on_crowded_field)
    });

    group.finish();
}

criterion_group!(benches, tick_bench);
criterion_main!(benches);
