//! Facet engine crate.
//!
//! A small software-rendered 2D engine: a scene of owned entities advanced once
//! per frame and composited onto a pixel canvas in z-order.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod surface;
pub mod time;
