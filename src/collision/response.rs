use crate::collision::detection::{impacts_world_bounds, WorldImpact};
use crate::math::vec2::Vec2;
use crate::objects::Ball;
use crate::world::Arena;

/// Distance substituted for coincident centers in the impulse pass. It
/// leaves the normal at zero, so the pair is skipped.
const COINCIDENT_DISTANCE: f64 = 0.1;

/// Pushes two overlapping balls apart along the line between their centers,
/// each by half the penetration depth regardless of weight.
///
/// Coincident centers have no separating direction and are left alone; the
/// impulse pass drifts them apart.
pub fn static_collision_response(a: &mut Ball, b: &mut Ball) {
    let collision_vector = a.position() - b.position();
    let distance = collision_vector.magnitude();
    if distance == 0.0 {
        return;
    }
    // Negative while overlapping
    let overlap = 0.5 * (distance - a.radius().as_f64() - b.radius().as_f64());
    let direction = collision_vector / distance;
    *a.position_mut() -= direction * overlap;
    *b.position_mut() += direction * overlap;
}

/// Mass-weighted elastic impulse along the line of centers. Pairs already
/// moving apart are left untouched.
pub fn dynamic_collision_response(a: &mut Ball, b: &mut Ball) {
    let collision_vector = b.position() - a.position();
    let mut distance = collision_vector.magnitude();
    if distance == 0.0 {
        distance = COINCIDENT_DISTANCE;
    }
    let normal = collision_vector / distance;
    let relative_velocity = a.velocity() - b.velocity();
    let speed = relative_velocity.dot(normal);
    if speed < 0.0 {
        return;
    }

    let weight_a = a.weight().as_f64();
    let weight_b = b.weight().as_f64();
    let impulse = 2.0 * speed / (weight_a + weight_b);
    *a.velocity_mut() -= normal * impulse * weight_b;
    *b.velocity_mut() += normal * impulse * weight_a;
}

/// Moves a ball back onto the edge it crossed and bounces it.
///
/// The reflected normal component is scaled by the ball's friction:
/// `v -= n * (2 * v·n) * friction`. A friction of 1 is a full elastic
/// bounce; a friction of 0 leaves the velocity as it was.
pub fn world_collision_response(impact: WorldImpact, ball: &mut Ball, arena: &Arena) {
    debug_assert!(
        impact != WorldImpact::None && impacts_world_bounds(ball, arena) == impact,
        "world_collision_response called for {:?} without that impact",
        impact
    );

    let radius = ball.radius().as_f64();
    let right = upper_limit(arena.width().as_f64(), radius);
    let bottom = upper_limit(arena.height().as_f64(), radius);
    let position = ball.position_mut();
    let normal = match impact {
        WorldImpact::Left => {
            position.x = radius;
            Vec2::new(1.0, 0.0)
        }
        WorldImpact::Right => {
            position.x = right;
            Vec2::new(-1.0, 0.0)
        }
        WorldImpact::Top => {
            position.y = radius;
            Vec2::new(0.0, 1.0)
        }
        WorldImpact::Bottom => {
            position.y = bottom;
            Vec2::new(0.0, -1.0)
        }
        WorldImpact::None => return,
    };

    let friction = ball.material().friction;
    let d = 2.0 * ball.velocity().dot(normal);
    *ball.velocity_mut() -= normal * d * friction;
}

/// Pulls a ball back inside the arena without touching its velocity.
///
/// Used after positional decoupling, which can push a ball resting against
/// an edge through it.
pub fn clamp_to_arena(ball: &mut Ball, arena: &Arena) {
    let radius = ball.radius().as_f64();
    let right = upper_limit(arena.width().as_f64(), radius);
    let bottom = upper_limit(arena.height().as_f64(), radius);
    let position = ball.position_mut();
    // A ball wider than the arena ends up at the origin side.
    position.x = position.x.max(radius).min(right).max(0.0);
    position.y = position.y.max(radius).min(bottom).max(0.0);
}

/// Largest center coordinate along an axis of length `extent` for a ball of
/// `radius`. Stays strictly below `extent`, which the arena excludes.
fn upper_limit(extent: f64, radius: f64) -> f64 {
    (extent - radius).min(just_below(extent))
}

fn just_below(value: f64) -> f64 {
    if value > 0.0 {
        f64::from_bits(value.to_bits() - 1)
    } else {
        value
    }
}
