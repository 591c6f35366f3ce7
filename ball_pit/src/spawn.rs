use ball_physics::{Ball, Color, Material, Radius, Vec2, Weight};
use rand::Rng;

/// Balls dropped per frame while the mouse button is held.
pub const BALLS_PER_DROP: usize = 10;

/// A random ball at `position`. Heavier balls are bigger: weight is `2r + 1`.
pub fn random_ball<R: Rng>(rng: &mut R, position: Vec2) -> Ball {
    let velocity = Vec2::new(
        rng.random_range(-1500.0..=1500.0),
        rng.random_range(-500.0..=500.0),
    );
    let color = Color::rgb(rng.random(), rng.random(), rng.random());
    let radius: u32 = rng.random_range(2..=10);
    let material = Material::new(0.0, rng.random_range(0.1..=0.85));

    Ball::new(position, velocity, color, Radius::new(radius))
        .with_weight(Weight::new(radius * 2 + 1).unwrap_or_default())
        .with_material(material)
}
