use ball_physics::collision::collides_with;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ball_physics::{
    Arena, Ball, Color, EngineConfig, Height, Material, PhysicsEngine, Radius, Vec2, Weight,
    Width,
};

const EPSILON: f64 = 1e-9;

fn arena(width: u32, height: u32) -> Arena {
    Arena::new(Width::new(width), Height::new(height))
}

fn no_gravity() -> EngineConfig {
    EngineConfig {
        gravity: 0.0,
        ..EngineConfig::default()
    }
}

/// Deterministic spread of balls with assorted speeds, none overlapping.
fn scatter(engine: &mut PhysicsEngine, cols: usize, rows: usize, spacing: f64, radius: u32) {
    for row in 0..rows {
        for col in 0..cols {
            let i = (row * cols + col) as f64;
            let position = Vec2::new(spacing * (col as f64 + 1.0), spacing * (row as f64 + 1.0));
            let velocity = Vec2::new((i * 37.0) % 400.0 - 200.0, (i * 53.0) % 300.0 - 150.0);
            let friction = 0.1 + (i * 0.07) % 0.75;
            let ball = Ball::new(position, velocity, Color::rgb(i as u8, 0, 0), Radius::new(radius))
                .with_weight(Weight::new(2 * radius + 1).unwrap())
                .with_material(Material::new(0.0, friction));
            engine.add(ball);
        }
    }
}

#[test]
fn live_balls_end_every_frame_inside_the_arena() {
    let arena = arena(200, 150);
    let mut engine = PhysicsEngine::new();
    scatter(&mut engine, 6, 4, 25.0, 4);

    for frame in 0..120 {
        engine.update(1.0 / 60.0, &arena);
        for ball in engine.balls().iter().filter(|b| !b.is_dead()) {
            assert!(
                arena.contains(ball.position()),
                "frame {}: ball escaped to {:?}",
                frame,
                ball.position()
            );
        }
    }
}

/// A ball like the ones the demo drops at the cursor.
fn random_ball(rng: &mut StdRng, position: Vec2) -> Ball {
    let radius: u32 = rng.random_range(2..=10);
    Ball::new(
        position,
        Vec2::new(rng.random_range(-1500.0..=1500.0), rng.random_range(-500.0..=500.0)),
        Color::WHITE,
        Radius::new(radius),
    )
    .with_weight(Weight::new(2 * radius + 1).unwrap())
    .with_material(Material::new(0.0, rng.random_range(0.1..=0.85)))
}

fn assert_all_contained(engine: &PhysicsEngine, arena: &Arena, frame: usize) {
    for ball in engine.balls().iter().filter(|b| !b.is_dead()) {
        assert!(
            arena.contains(ball.position()),
            "frame {}: ball escaped to {:?}",
            frame,
            ball.position()
        );
    }
}

#[test]
fn balls_dropped_into_a_pile_stay_inside_the_arena() {
    let arena = arena(640, 480);
    let mut engine = PhysicsEngine::new();
    let mut rng = StdRng::seed_from_u64(0xba11);

    for frame in 0..600 {
        if engine.balls().len() < 200 {
            for _ in 0..10 {
                engine.add(random_ball(&mut rng, Vec2::new(320.0, 30.0)));
            }
        }
        engine.update(1.0 / 60.0, &arena);
        assert_all_contained(&engine, &arena, frame);
    }
    assert_eq!(engine.alive_count(), 200);
}

#[test]
fn overcrowded_arena_keeps_every_ball_inside() {
    let arena = arena(120, 120);
    let mut engine = PhysicsEngine::new();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..300 {
        let position = Vec2::new(rng.random_range(10.0..110.0), rng.random_range(10.0..110.0));
        engine.add(random_ball(&mut rng, position));
    }

    for frame in 0..10 {
        engine.update(1.0 / 60.0, &arena);
        assert_all_contained(&engine, &arena, frame);
    }
}

#[test]
fn point_ball_fired_into_far_edges_stays_inside() {
    let arena = arena(100, 100);
    let mut engine = PhysicsEngine::with_config(no_gravity()).unwrap();
    engine.add(
        Ball::new(Vec2::new(99.0, 50.0), Vec2::new(100.0, 0.0), Color::WHITE, Radius::new(0))
            .with_material(Material::new(0.0, 0.0)),
    );
    engine.add(
        Ball::new(Vec2::new(50.0, 99.0), Vec2::new(0.0, 100.0), Color::WHITE, Radius::new(0))
            .with_material(Material::new(0.0, 0.0)),
    );

    for frame in 0..5 {
        engine.update(1.0 / 60.0, &arena);
        assert_all_contained(&engine, &arena, frame);
    }
    // Friction 0 keeps the velocity, so both stay pinned against their edge.
    assert!((engine.balls()[0].position().x - 100.0).abs() < EPSILON);
    assert!((engine.balls()[1].position().y - 100.0).abs() < EPSILON);
}

#[test]
fn wall_bounce_keeps_ball_in_and_reverses_it() {
    let arena = arena(100, 100);
    let mut engine = PhysicsEngine::with_config(no_gravity()).unwrap();
    engine.add(
        Ball::new(Vec2::new(2.0, 50.0), Vec2::new(-100.0, 0.0), Color::WHITE, Radius::new(5))
            .with_material(Material::new(0.0, 1.0)),
    );
    engine.update(0.004, &arena);

    let ball = &engine.balls()[0];
    assert_eq!(ball.velocity().x, 100.0);
    assert!(ball.position().x >= 5.0);
    assert!((ball.position().y - 50.0).abs() < EPSILON);
}

#[test]
fn equal_mass_head_on_collision_swaps_velocities() {
    let arena = arena(200, 100);
    let mut engine = PhysicsEngine::with_config(no_gravity()).unwrap();
    let weight = Weight::new(1).unwrap();
    engine.add(
        Ball::new(Vec2::new(80.0, 50.0), Vec2::new(100.0, 0.0), Color::WHITE, Radius::new(5))
            .with_weight(weight),
    );
    engine.add(
        Ball::new(Vec2::new(120.0, 50.0), Vec2::new(-100.0, 0.0), Color::WHITE, Radius::new(5))
            .with_weight(weight),
    );

    // 0.3s of closing at 200 units/s covers the 30 unit gap with room to spare.
    for _ in 0..18 {
        engine.update(1.0 / 60.0, &arena);
    }

    let (a, b) = (&engine.balls()[0], &engine.balls()[1]);
    assert!((a.velocity().x - -100.0).abs() < EPSILON);
    assert!((b.velocity().x - 100.0).abs() < EPSILON);
    assert!(a.position().x < b.position().x);
    assert!(a.position().distance(b.position()) >= 10.0 - EPSILON);
}

#[test]
fn compaction_only_fires_at_threshold_and_keeps_order() {
    let arena = arena(400, 400);
    let config = EngineConfig {
        cull_dead_threshold: 5,
        ..no_gravity()
    };
    let mut engine = PhysicsEngine::with_config(config).unwrap();
    for i in 0..10u8 {
        engine.add(Ball::new(
            Vec2::new(20.0 + 30.0 * f64::from(i), 200.0),
            Vec2::ZERO,
            Color::rgb(i, i, i),
            Radius::new(3),
        ));
    }

    for index in [0, 2, 4, 6] {
        engine.balls_mut()[index].set_dead(true);
    }
    for _ in 0..5 {
        engine.update(1.0 / 60.0, &arena);
        assert_eq!(engine.balls().len(), 10);
    }

    engine.balls_mut()[8].set_dead(true);
    engine.update(1.0 / 60.0, &arena);

    let survivors: Vec<(u8, f64)> = engine
        .balls()
        .iter()
        .map(|b| (b.color().r, b.position().x))
        .collect();
    assert_eq!(
        survivors,
        vec![(1, 50.0), (3, 110.0), (5, 170.0), (7, 230.0), (9, 290.0)]
    );
    assert_eq!(engine.alive_count(), 5);
}

#[test]
fn point_balls_overlap_only_when_coincident() {
    let point = |x: f64, y: f64| Ball::new(Vec2::new(x, y), Vec2::ZERO, Color::WHITE, Radius::new(0));
    let a = point(10.0, 10.0);
    assert!(a.single_point());
    assert!(collides_with(&a, &point(10.0, 10.0)));
    assert!(!collides_with(&a, &point(10.0, 10.5)));

    // In the engine, two separate points never disturb each other.
    let arena = arena(50, 50);
    let mut engine = PhysicsEngine::with_config(no_gravity()).unwrap();
    engine.add(point(10.0, 10.0));
    engine.add(point(11.0, 10.0));
    engine.update(1.0 / 60.0, &arena);
    assert_eq!(engine.balls()[0].position(), Vec2::new(10.0, 10.0));
    assert_eq!(engine.balls()[1].position(), Vec2::new(11.0, 10.0));
}

#[test]
fn ball_at_rest_on_the_floor_stays_put() {
    let arena = arena(100, 100);
    let mut engine = PhysicsEngine::new();
    engine.add(
        Ball::new(Vec2::new(50.0, 95.0), Vec2::ZERO, Color::WHITE, Radius::new(5))
            .with_material(Material::new(0.0, 0.5)),
    );
    for _ in 0..60 {
        engine.update(1.0 / 60.0, &arena);
    }
    let ball = &engine.balls()[0];
    assert!((ball.position().y - 95.0).abs() < 1e-6);
    assert!(arena.contains(ball.position()));
}

#[test]
fn quad_tree_regions_tile_the_arena() {
    let arena = arena(300, 200);
    let config = EngineConfig {
        quad_tree: ball_physics::QuadTreeConfig {
            capacity: 2,
            ..Default::default()
        },
        ..EngineConfig::default()
    };
    let mut engine = PhysicsEngine::with_config(config).unwrap();
    scatter(&mut engine, 8, 5, 30.0, 3);
    engine.update(1.0 / 60.0, &arena);

    let tree = engine.current_quad_tree().unwrap();
    assert!(tree.all_regions().len() > 1);
    let area: u64 = tree.leaf_regions().iter().map(|r| r.area()).sum();
    assert_eq!(area, 300 * 200);
}
