//! Scene: entity ownership, per-frame update, and z-ordered compositing.
//!
//! Responsibilities:
//! - own the background image and every added entity
//! - defer entity destruction to the start of the next update
//! - let entities add/remove entities from inside their own update
//! - composite background then entities (ascending z) onto a `Canvas`

mod blit;
mod ctx;
mod entity;
#[allow(clippy::module_inception)]
mod scene;
mod z_index;

pub use blit::{Blit, background_blit, entity_blit};
pub use ctx::SceneCtx;
pub use entity::{Entity, EntityId};
pub use scene::{DrawStats, Scene, UpdateStats};
pub use z_index::ZIndex;
