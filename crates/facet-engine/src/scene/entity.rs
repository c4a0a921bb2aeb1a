use core::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::coords::{Point, Vec2};
use crate::surface::PixelBuffer;

use super::{SceneCtx, ZIndex};

/// Identity of an entity owned by a [`Scene`](super::Scene).
///
/// Handed out on insertion from a process-wide counter, so an id is never
/// reused and never names an entity of another scene.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct EntityId(u64);

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

impl EntityId {
    pub(crate) fn fresh() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entity#{}", self.0)
    }
}

/// Game object contract consumed by the scene.
///
/// The scene owns every entity it holds and calls these uniformly; it never
/// knows the concrete type.
pub trait Entity {
    /// Advances the entity by `dt` seconds.
    ///
    /// `ctx` lets the entity add or remove entities (itself included). Those
    /// requests take effect after every entity in this frame has been updated.
    fn update(&mut self, dt: f32, ctx: &mut SceneCtx<'_>);

    /// Image to composite, if the entity is visible at all.
    fn surface(&self) -> Option<&PixelBuffer>;

    fn z_index(&self) -> ZIndex;

    /// Top-left corner on the target, in pixels.
    fn position(&self) -> Point;

    /// Per-axis factor applied to the surface size when computing the
    /// destination rectangle.
    fn scale(&self) -> Vec2 {
        Vec2::ONE
    }
}
