use crate::collision::AABB;
use crate::common::{Color, Material, Radius, Weight};
use crate::math::vec2::Vec2;

/// A circular point-mass body. No rotation, no angular velocity.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    // Primary state
    position: Vec2,
    previous_position: Vec2, // Position at the start of the current inner step
    velocity: Vec2,

    // Shape, mass and surface
    color: Color,
    radius: Radius,
    weight: Weight,
    material: Material,

    // Time still to simulate in the current slice (seconds)
    remaining_time: f64,
    dead: bool,
}

impl Ball {
    /// Creates a live ball with weight 1 and the default material.
    pub fn new(position: Vec2, velocity: Vec2, color: Color, radius: Radius) -> Self {
        Self {
            position,
            previous_position: position,
            velocity,
            color,
            radius,
            weight: Weight::default(),
            material: Material::default(),
            remaining_time: 0.0,
            dead: false,
        }
    }

    pub fn with_weight(mut self, weight: Weight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn position_mut(&mut self) -> &mut Vec2 {
        &mut self.position
    }

    pub fn previous_position(&self) -> Vec2 {
        self.previous_position
    }

    /// Records the current position as the start of a step.
    pub(crate) fn mark_step_start(&mut self) {
        self.previous_position = self.position;
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn velocity_mut(&mut self) -> &mut Vec2 {
        &mut self.velocity
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn radius(&self) -> Radius {
        self.radius
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn remaining_time(&self) -> f64 {
        self.remaining_time
    }

    pub fn set_remaining_time(&mut self, time: f64) {
        self.remaining_time = time;
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Marks the ball dead (or alive). The engine only ever sets this to
    /// true; dead balls are skipped until the next compaction drops them.
    pub fn set_dead(&mut self, dead: bool) {
        self.dead = dead;
    }

    /// A zero-radius ball, drawn as a single pixel.
    pub fn single_point(&self) -> bool {
        self.radius.get() == 0
    }

    /// `position ± radius` on both axes.
    pub fn bounding_box(&self) -> AABB {
        AABB::around(self.position, self.radius.as_f64())
    }
}
