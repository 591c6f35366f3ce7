//! Per-phase timing capture for one `PhysicsEngine::update` call.

use std::time::Duration;

/// Timing series recorded during the most recent frame.
#[derive(Debug, Clone, Default)]
pub struct FrameTimings {
    update_times: Vec<Duration>,     // One per outer slice
    tree_build_times: Vec<Duration>, // One per inner step that ran detection
    collision_times: Vec<Duration>,  // One per inner step that ran detection
}

impl FrameTimings {
    /// Clears all series and reserves room for `steps` entries in each.
    pub fn reset(&mut self, steps: usize) {
        self.update_times.clear();
        self.tree_build_times.clear();
        self.collision_times.clear();
        self.update_times.reserve(steps);
        self.tree_build_times.reserve(steps);
        self.collision_times.reserve(steps);
    }

    pub fn record_update(&mut self, elapsed: Duration) {
        self.update_times.push(elapsed);
    }

    pub fn record_tree_build(&mut self, elapsed: Duration) {
        self.tree_build_times.push(elapsed);
    }

    pub fn record_collision(&mut self, elapsed: Duration) {
        self.collision_times.push(elapsed);
    }

    pub fn update_times(&self) -> &[Duration] {
        &self.update_times
    }

    pub fn tree_build_times(&self) -> &[Duration] {
        &self.tree_build_times
    }

    pub fn collision_times(&self) -> &[Duration] {
        &self.collision_times
    }

    /// Sum of the per-slice update times.
    pub fn total(&self) -> Duration {
        self.update_times.iter().sum()
    }
}
