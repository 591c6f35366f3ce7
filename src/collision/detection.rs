use crate::objects::Ball;
use crate::world::Arena;

/// Whether two balls' circles overlap or touch.
///
/// Two zero-radius balls only collide when their centers coincide.
pub fn collides_with(a: &Ball, b: &Ball) -> bool {
    let distance_sq = a.position().distance_squared(b.position());
    let radii_sum = a.radius().as_f64() + b.radius().as_f64();
    distance_sq <= radii_sum * radii_sum
}

/// Which arena edge a ball has crossed. At most one edge is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldImpact {
    None,
    Left,
    Right,
    Top,
    Bottom,
}

/// Reports the first edge the ball's circle pokes through, checking right,
/// left, bottom, then top. `y` grows downward, so `Top` is `y - r < 0`.
pub fn impacts_world_bounds(ball: &Ball, arena: &Arena) -> WorldImpact {
    let position = ball.position();
    let radius = ball.radius().as_f64();
    if position.x + radius > arena.width().as_f64() {
        return WorldImpact::Right;
    }
    if position.x - radius < 0.0 {
        return WorldImpact::Left;
    }
    if position.y + radius > arena.height().as_f64() {
        return WorldImpact::Bottom;
    }
    if position.y - radius < 0.0 {
        return WorldImpact::Top;
    }
    WorldImpact::None
}
