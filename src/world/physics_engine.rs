use tracing::{debug, trace};

use crate::collision::{
    clamp_to_arena, collides_with, dynamic_collision_response, impacts_world_bounds,
    static_collision_response, world_collision_response, CollisionPair, QuadTree, WorldImpact,
};
use crate::config::EngineConfig;
use crate::diagnostics::{FrameTimings, Stopwatch};
use crate::error::Result;
use crate::integration::integrator;
use crate::objects::Ball;
use crate::world::Arena;

/// Edge responses allowed per ball per step: one for each edge kind.
const MAX_EDGE_RESPONSES: usize = 4;

/// Owns the ball collection and steps it.
///
/// A frame is split into `slices` equal time slices. In each slice every
/// live ball gets the slice duration as its time budget, then up to
/// `max_steps` inner steps integrate, rebuild the quad-tree, separate
/// overlapping balls, charge each ball for the distance it really covered
/// and exchange impulses. A ball stopped short by a collision keeps the rest
/// of its budget for the next inner step.
#[derive(Debug)]
pub struct PhysicsEngine {
    balls: Vec<Ball>,
    // Indices in here are only valid until `balls` is next resized.
    quad_tree: Option<QuadTree>,
    // Pairs found by the current inner step's detection pass
    collision_pairs: Vec<CollisionPair>,
    config: EngineConfig,
    timings: FrameTimings,
}

impl PhysicsEngine {
    /// Creates an empty engine with the default configuration.
    pub fn new() -> Self {
        Self {
            balls: Vec::new(),
            quad_tree: None,
            collision_pairs: Vec::new(),
            config: EngineConfig::default(),
            timings: FrameTimings::default(),
        }
    }

    /// Creates an empty engine after validating `config`.
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Adds a fully built ball to the collection.
    pub fn add(&mut self, ball: Ball) {
        self.balls.push(ball);
    }

    /// Empties the collection right away.
    pub fn remove_all(&mut self) {
        debug!(removed = self.balls.len(), "removing all balls");
        self.balls.clear();
        self.quad_tree = None;
        self.collision_pairs.clear();
    }

    /// All balls, dead ones included. Callers filter on [`Ball::is_dead`].
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    /// Mutable view of the balls, e.g. to mark some dead. The collection
    /// itself can't be resized through it.
    pub fn balls_mut(&mut self) -> &mut [Ball] {
        &mut self.balls
    }

    pub fn alive_count(&self) -> usize {
        self.balls.iter().filter(|ball| !ball.is_dead()).count()
    }

    /// The quad-tree built by the last inner step, for drawing its regions.
    /// `None` before the first detection pass and after any compaction.
    pub fn current_quad_tree(&self) -> Option<&QuadTree> {
        self.quad_tree.as_ref()
    }

    /// Phase timings captured during the last `update`.
    pub fn timings(&self) -> &FrameTimings {
        &self.timings
    }

    /// Advances the simulation by `dt` seconds inside `arena`.
    pub fn update(&mut self, dt: f64, arena: &Arena) {
        let slices = self.config.slices;
        let max_steps = self.config.max_steps;
        let slice_time = dt / slices as f64;

        self.timings.reset(slices * max_steps);
        let mut stopwatch_all = Stopwatch::new();
        let mut stopwatch = Stopwatch::new();
        let mut steps_run = 0;

        for _ in 0..slices {
            stopwatch_all.start();
            for ball in self.balls.iter_mut().filter(|ball| !ball.is_dead()) {
                ball.set_remaining_time(slice_time);
            }

            for _ in 0..max_steps {
                if !self.integrate_step(arena) {
                    // Every ball has spent its budget for this slice.
                    break;
                }
                steps_run += 1;

                stopwatch.start();
                self.rebuild_quad_tree(arena);
                stopwatch.stop();
                self.timings.record_tree_build(stopwatch.elapsed());

                stopwatch.start();
                self.detect_and_separate();
                self.contain_separated(arena);
                self.consume_time();
                self.resolve_impulses();
                stopwatch.stop();
                self.timings.record_collision(stopwatch.elapsed());
            }

            stopwatch_all.stop();
            self.timings.record_update(stopwatch_all.elapsed());
        }

        self.cull_dead();

        trace!(
            dt,
            steps_run,
            balls = self.balls.len(),
            elapsed_us = self.timings.total().as_micros() as u64,
            "frame updated"
        );
    }

    /// Moves every live ball that still has budget and keeps it inside the
    /// arena. Returns false if no ball had budget left.
    fn integrate_step(&mut self, arena: &Arena) -> bool {
        let gravity = self.config.gravity;
        let rest_threshold = self.config.rest_velocity_threshold;
        let mut any_moving = false;

        for ball in self.balls.iter_mut() {
            if ball.is_dead() || ball.remaining_time() <= 0.0 {
                continue;
            }
            any_moving = true;

            integrator::integrate(ball, gravity, rest_threshold);
            keep_in_bounds(ball, arena);
        }

        any_moving
    }

    /// Rebuilds the quad-tree from the post-integration positions of all
    /// live balls.
    fn rebuild_quad_tree(&mut self, arena: &Arena) {
        let limits = self.config.quad_tree;
        let tree = self.quad_tree.get_or_insert_with(|| {
            QuadTree::with_limits(arena.region(), limits.capacity, limits.max_depth)
        });
        tree.clear(arena.region());

        for (index, ball) in self.balls.iter().enumerate() {
            if !ball.is_dead() {
                tree.insert(index, ball.bounding_box());
            }
        }
    }

    /// Pushes overlapping live balls apart and records each overlapping pair
    /// for the impulse pass.
    fn detect_and_separate(&mut self) {
        self.collision_pairs.clear();
        let Some(tree) = self.quad_tree.as_ref() else {
            return;
        };
        let balls = &mut self.balls;
        let pairs = &mut self.collision_pairs;

        for index in 0..balls.len() {
            if balls[index].is_dead() {
                continue;
            }
            let query = balls[index].bounding_box();
            tree.for_each_in(&query, |other| {
                if other == index || balls[other].is_dead() {
                    return;
                }
                let (a, b) = pair_mut(balls, index, other);
                if a.bounding_box().overlaps(&b.bounding_box()) && collides_with(a, b) {
                    static_collision_response(a, b);
                    pairs.push(CollisionPair::new(index, other));
                }
            });
        }
    }

    /// Separation can shove a ball lying against an edge through it. Put
    /// every live ball back inside; velocities are left alone.
    fn contain_separated(&mut self, arena: &Arena) {
        if self.collision_pairs.is_empty() {
            return;
        }
        for ball in self.balls.iter_mut().filter(|ball| !ball.is_dead()) {
            clamp_to_arena(ball, arena);
        }
    }

    /// Charges each moving ball for the share of its intended motion it
    /// actually achieved this step.
    fn consume_time(&mut self) {
        for ball in self.balls.iter_mut() {
            if ball.is_dead() || ball.remaining_time() <= 0.0 {
                continue;
            }
            let intended_speed = ball.velocity().magnitude();
            let actual_distance = ball.position().distance(ball.previous_position());
            let actual_time = if intended_speed > 0.0 {
                actual_distance / intended_speed
            } else {
                0.0
            };
            ball.set_remaining_time(ball.remaining_time() - actual_time);
        }
    }

    /// Exchanges impulses for every recorded pair whose balls are both alive.
    fn resolve_impulses(&mut self) {
        for pair in &self.collision_pairs {
            let (a, b) = pair_mut(&mut self.balls, pair.body_a_idx, pair.body_b_idx);
            if !a.is_dead() && !b.is_dead() {
                dynamic_collision_response(a, b);
            }
        }
    }

    /// Drops dead balls once enough have piled up. Survivors keep their
    /// relative order.
    fn cull_dead(&mut self) {
        let dead_count = self.balls.len() - self.alive_count();
        if dead_count < self.config.cull_dead_threshold {
            return;
        }
        self.balls.retain(|ball| !ball.is_dead());
        // Stored indices now point at the wrong balls.
        self.quad_tree = None;
        self.collision_pairs.clear();
        debug!(removed = dead_count, remaining = self.balls.len(), "compacted dead balls");
    }
}

impl Default for PhysicsEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies edge responses until the ball is inside on both axes.
fn keep_in_bounds(ball: &mut Ball, arena: &Arena) {
    for _ in 0..MAX_EDGE_RESPONSES {
        let impact = impacts_world_bounds(ball, arena);
        if impact == WorldImpact::None {
            return;
        }
        world_collision_response(impact, ball, arena);
    }
}

/// Mutable references to two distinct balls.
fn pair_mut(balls: &mut [Ball], i: usize, j: usize) -> (&mut Ball, &mut Ball) {
    assert_ne!(i, j, "a ball can't collide with itself");
    if i < j {
        let (head, tail) = balls.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = balls.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}
