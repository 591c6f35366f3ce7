pub mod color;
pub mod material;
pub mod units;

pub use color::Color;
pub use material::Material;
pub use units::{Column, Height, Level, Radius, Row, Weight, Width};
