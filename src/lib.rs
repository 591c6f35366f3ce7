//! Real-time 2D simulation of circular balls in a rectangular arena.
//!
//! Each frame is sub-stepped with a per-ball time budget, and a quad-tree
//! rebuilt every inner step narrows ball-ball collision checks.

pub mod collision;
pub mod common;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod integration;
pub mod math;
pub mod objects;
pub mod world;

// Re-export key types for easier use
pub use collision::{QuadTree, Region, AABB};
pub use common::{Color, Column, Height, Level, Material, Radius, Row, Weight, Width};
pub use config::{EngineConfig, QuadTreeConfig};
pub use diagnostics::FrameTimings;
pub use error::PhysicsError;
pub use math::vec2::Vec2;
pub use objects::Ball;
pub use world::{Arena, PhysicsEngine};
