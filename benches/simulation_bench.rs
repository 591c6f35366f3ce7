use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ball_physics::{
    Arena, Ball, Color, EngineConfig, Height, Material, PhysicsEngine, Radius, Vec2, Weight,
    Width,
};

const ARENA_WIDTH: u32 = 640;
const ARENA_HEIGHT: u32 = 480;

// --- Helper for filling the arena with a loose grid of moving balls ---
fn fill_ball_pit(engine: &mut PhysicsEngine, num_balls: usize) {
    let radius = 4;
    let spacing = 12.0;
    let per_row = (f64::from(ARENA_WIDTH) / spacing) as usize - 1;

    for i in 0..num_balls {
        let col = i % per_row;
        let row = i / per_row;
        let position = Vec2::new(spacing * (col as f64 + 1.0), spacing * (row as f64 + 1.0));
        let velocity = Vec2::new((i as f64 * 97.0) % 1000.0 - 500.0, (i as f64 * 61.0) % 400.0 - 200.0);
        let ball = Ball::new(position, velocity, Color::WHITE, Radius::new(radius))
            .with_weight(Weight::new(2 * radius + 1).unwrap())
            .with_material(Material::new(0.0, 0.6));
        engine.add(ball);
    }
}

// Simulate a fixed number of frames from a fresh pit
fn run_ball_pit_bench(config: EngineConfig, num_balls: usize) {
    let arena = Arena::new(Width::new(ARENA_WIDTH), Height::new(ARENA_HEIGHT));
    let mut engine = PhysicsEngine::with_config(config).unwrap();
    fill_ball_pit(&mut engine, num_balls);

    let dt = 1.0 / 60.0;
    let frames = 30;
    for _ in 0..frames {
        engine.update(black_box(dt), &arena);
    }
}

// Benchmark for a pit of balls falling under gravity
fn bench_ball_pit(c: &mut Criterion) {
    let mut group = c.benchmark_group("ball_pit");

    for num_balls in [100, 500, 1500].iter() {
        group.bench_with_input(criterion::BenchmarkId::from_parameter(num_balls), num_balls, |b, &n| {
            b.iter(|| run_ball_pit_bench(EngineConfig::default(), black_box(n)));
        });
    }
    group.finish();
}

// Benchmark of quad-tree leaf capacity on a fixed crowd
fn bench_quad_tree_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("quad_tree_capacity");

    for capacity in [2, 8, 32].iter() {
        group.bench_with_input(criterion::BenchmarkId::from_parameter(capacity), capacity, |b, &capacity| {
            let mut config = EngineConfig::default();
            config.quad_tree.capacity = capacity;
            b.iter(|| run_ball_pit_bench(config, black_box(1000)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ball_pit, bench_quad_tree_capacity);
criterion_main!(benches);
