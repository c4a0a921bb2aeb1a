//! Pixel surfaces.
//!
//! Responsibilities:
//! - own RGBA8 pixel storage (`PixelBuffer`)
//! - provide bounds-safe blit and fill primitives
//! - define the draw-target contract (`Canvas`) the scene composites onto

mod canvas;
mod pixel_buffer;

pub use canvas::Canvas;
pub use pixel_buffer::PixelBuffer;
