//! Strongly-typed scalar wrappers so widths, radii, rows and the like can't
//! be mixed up at call sites.

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::error::{PhysicsError, Result};

macro_rules! unit {
    ($(#[$meta:meta])* $name:ident($repr:ty)) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name($repr);

        impl $name {
            pub const fn new(value: $repr) -> Self {
                Self(value)
            }

            pub const fn get(self) -> $repr {
                self.0
            }
        }

        impl From<$repr> for $name {
            fn from(value: $repr) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

unit!(
    /// Horizontal extent in arena units.
    Width(u32)
);
unit!(
    /// Vertical extent in arena units.
    Height(u32)
);
unit!(
    /// Ball radius. Zero is legal and marks a single-point ball.
    Radius(u32)
);
unit!(
    /// Discrete vertical coordinate. May be negative; the arena rejects it.
    Row(i32)
);
unit!(
    /// Discrete horizontal coordinate. May be negative; the arena rejects it.
    Column(i32)
);
unit!(
    /// Quad-tree depth label. The root is level 0.
    Level(u32)
);

impl Width {
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl Height {
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl Radius {
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl Level {
    /// The level one step deeper in the tree.
    pub fn deeper(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Collision mass of a ball. Always strictly positive, since the impulse
/// exchange divides by the summed weight of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Weight(NonZeroU32);

impl Weight {
    /// Creates a weight, rejecting zero.
    pub fn new(value: u32) -> Result<Self> {
        NonZeroU32::new(value).map(Self).ok_or(PhysicsError::ZeroWeight)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0.get())
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self(NonZeroU32::MIN)
    }
}

impl TryFrom<u32> for Weight {
    type Error = PhysicsError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Weight> for u32 {
    fn from(weight: Weight) -> Self {
        weight.get()
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
