pub mod arena;
pub mod physics_engine;

pub use arena::Arena;
pub use physics_engine::PhysicsEngine;
