//! The rectangular bounds balls are confined to.

use crate::collision::quad_tree::Region;
use crate::common::{Column, Height, Row, Width};
use crate::math::vec2::Vec2;

/// The rectangle `[0, width) × [0, height)`.
///
/// Resizing with [`Arena::set`] does not move balls that end up outside the
/// new bounds; they are corrected the next time they move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Arena {
    width: Width,
    height: Height,
}

impl Arena {
    pub fn new(width: Width, height: Height) -> Self {
        Self { width, height }
    }

    pub fn set(&mut self, width: Width, height: Height) {
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> Width {
        self.width
    }

    pub fn height(&self) -> Height {
        self.height
    }

    /// Whether the discrete cell `(row, col)` lies inside the arena.
    pub fn bounded(&self, row: Row, col: Column) -> bool {
        if row.get() < 0 || col.get() < 0 {
            return false;
        }
        // Both are non-negative here, so the widening casts are lossless.
        (row.get() as u32) < self.height.get() && (col.get() as u32) < self.width.get()
    }

    /// Whether a continuous point lies inside the arena.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0
            && point.y >= 0.0
            && point.x < self.width.as_f64()
            && point.y < self.height.as_f64()
    }

    /// The root region a quad-tree over this arena covers.
    pub fn region(&self) -> Region {
        Region::new(0, 0, self.width, self.height)
    }
}
