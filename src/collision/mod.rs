pub mod aabb;
pub mod detection;
pub mod manifold;
pub mod quad_tree;
pub mod response;

// Re-export key types
pub use aabb::AABB;
pub use detection::{collides_with, impacts_world_bounds, WorldImpact};
pub use manifold::CollisionPair;
pub use quad_tree::{QuadTree, Region};
pub use response::{
    clamp_to_arena, dynamic_collision_response, static_collision_response,
    world_collision_response,
};
