//! Coordinate and geometry types.
//!
//! Canonical space:
//! - integer pixels
//! - origin top-left
//! - +X right, +Y down

mod point;
mod rect;
mod size;
mod vec2;

pub use point::Point;
pub use rect::IRect;
pub use size::Size;
pub use vec2::Vec2;
