//! Defines physical material properties.

/// Surface properties of a ball.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Speed below which a ball would cling to what it touches. Carried for
    /// spawners; the solver does not read it.
    pub stickiness: f64,
    /// Scales the reflected velocity when a ball bounces off an arena edge.
    /// 1 is a full elastic bounce.
    pub friction: f64,
}

impl Material {
    /// Creates a new material with the given stickiness and friction.
    pub fn new(stickiness: f64, friction: f64) -> Self {
        Material {
            stickiness,
            friction,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Material {
            stickiness: 150.0,
            friction: 0.85,
        }
    }
}
