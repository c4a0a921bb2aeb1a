//! Time subsystem.
//!
//! `FrameClock` measures wall time between frames. A real-time driver ticks it
//! once per frame and passes `FrameTime::dt` to `Scene::update`.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
