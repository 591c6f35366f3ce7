//! Engine tuning knobs, loadable from JSON.
//!
//! Every field has a default, so a partial document only overrides what it
//! names:
//!
//! ```json
//! {
//!   "slices": 4,
//!   "max_steps": 4,
//!   "gravity": 981.0,
//!   "rest_velocity_threshold": 0.005,
//!   "cull_dead_threshold": 50,
//!   "quad_tree": { "capacity": 8, "max_depth": 8 }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::collision::quad_tree::{DEFAULT_CAPACITY, DEFAULT_MAX_DEPTH};
use crate::common::Level;
use crate::error::{PhysicsError, Result};

/// Split limits for the per-step quad-tree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadTreeConfig {
    /// References a leaf holds before it splits.
    pub capacity: usize,
    /// Deepest level a node may be created at.
    pub max_depth: Level,
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Outer slices per frame; each gets `dt / slices` of time budget.
    pub slices: usize,
    /// Cap on inner steps per slice.
    pub max_steps: usize,
    /// Downward acceleration in arena units per second squared (+y is down).
    pub gravity: f64,
    /// Squared speed below which a ball's velocity is snapped to zero.
    pub rest_velocity_threshold: f64,
    /// Dead balls tolerated before the collection is compacted.
    pub cull_dead_threshold: usize,
    pub quad_tree: QuadTreeConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            slices: 4,
            max_steps: 4,
            gravity: 981.0,
            rest_velocity_threshold: 0.005,
            cull_dead_threshold: 50,
            quad_tree: QuadTreeConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Parses and validates a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects settings the stepping loop cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.slices == 0 {
            return Err(PhysicsError::InvalidConfig("slices must be at least 1".into()));
        }
        if self.max_steps == 0 {
            return Err(PhysicsError::InvalidConfig("max_steps must be at least 1".into()));
        }
        if self.quad_tree.capacity == 0 {
            return Err(PhysicsError::InvalidConfig(
                "quad_tree.capacity must be at least 1".into(),
            ));
        }
        if !self.gravity.is_finite() {
            return Err(PhysicsError::InvalidConfig("gravity must be finite".into()));
        }
        Ok(())
    }
}
