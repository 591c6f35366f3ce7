use crate::math::vec2::Vec2;
use crate::objects::Ball;

/// Advances a ball over its remaining time budget using semi-implicit Euler.
///
/// Order matters: the step start is recorded, gravity is added to the
/// velocity, a velocity whose squared magnitude is under `rest_threshold`
/// is snapped to zero, and only then is the position moved.
pub fn integrate(ball: &mut Ball, gravity: f64, rest_threshold: f64) {
    let dt = ball.remaining_time();
    ball.mark_step_start();

    ball.velocity_mut().y += gravity * dt;

    if ball.velocity().magnitude_squared() < rest_threshold {
        *ball.velocity_mut() = Vec2::ZERO;
    }

    let displacement = ball.velocity() * dt;
    *ball.position_mut() += displacement;
}
