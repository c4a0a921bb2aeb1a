use std::collections::HashMap;

use crate::surface::{Canvas, PixelBuffer};

use super::ctx::Deferred;
use super::{Entity, EntityId, SceneCtx, background_blit, entity_blit};

/// Counters for one `Scene::update` call.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct UpdateStats {
    /// Entities dropped in the garbage phase.
    pub destroyed: usize,
    /// Entities whose `update` ran.
    pub updated: usize,
    /// Entities added by entities during this update.
    pub added: usize,
    /// Entities moved to pending by entities during this update.
    pub removed: usize,
}

/// Counters for one `Scene::draw` call.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct DrawStats {
    pub background: bool,
    /// Entities blitted onto the target.
    pub drawn: usize,
    /// Entities with a surface that failed the visibility test.
    pub skipped: usize,
}

/// Owner of a background image and a set of entities.
///
/// Lifecycle of an entity:
/// 1. `add_entity` moves it in and returns its id
/// 2. it is updated once per `update` while active
/// 3. `remove_entity` moves it to the pending list
/// 4. it is dropped at the start of the next `update`
///
/// Dropping the scene drops the background and every active and pending
/// entity.
///
/// Draw order between entities with equal z is unspecified and may differ
/// from frame to frame.
#[derive(Default)]
pub struct Scene {
    background: Option<PixelBuffer>,
    active: HashMap<EntityId, Box<dyn Entity>>,
    pending: Vec<Box<dyn Entity>>,

    /// Requests issued through `SceneCtx` during the current update.
    deferred: Vec<Deferred>,
    /// Reused per-frame buffers.
    snapshot: Vec<EntityId>,
    paint_order: Vec<EntityId>,
}

impl Scene {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the background, returning the previous one.
    ///
    /// The scene owns its background; a replaced image is handed back and is
    /// dropped if the caller ignores it. `None` clears the background.
    pub fn set_background(&mut self, image: Option<PixelBuffer>) -> Option<PixelBuffer> {
        if let Some(img) = &image {
            log::debug!("scene background set ({}x{})", img.width(), img.height());
        } else {
            log::debug!("scene background cleared");
        }
        std::mem::replace(&mut self.background, image)
    }

    #[inline]
    pub fn background(&self) -> Option<&PixelBuffer> {
        self.background.as_ref()
    }

    /// Takes ownership of `entity` and makes it active.
    pub fn add_entity(&mut self, entity: impl Entity + 'static) -> EntityId {
        self.add_boxed(Box::new(entity))
    }

    pub fn add_boxed(&mut self, entity: Box<dyn Entity>) -> EntityId {
        let id = EntityId::fresh();
        self.insert(id, entity);
        id
    }

    /// Moves an active entity to the pending list. It stays alive until the
    /// start of the next `update`.
    ///
    /// Ignored when `id` is not active (never added, or already removed).
    pub fn remove_entity(&mut self, id: EntityId) {
        match self.active.remove(&id) {
            Some(entity) => {
                log::trace!("{id} removed, pending destruction");
                self.pending.push(entity);
            }
            None => log::trace!("remove of inactive {id} ignored"),
        }
    }

    /// Number of active entities.
    #[inline]
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    /// Number of removed entities not yet dropped.
    #[inline]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Advances the scene by one frame.
    ///
    /// 1. drops every pending entity
    /// 2. snapshots the active ids
    /// 3. calls `Entity::update(dt, ..)` on each snapshot member
    /// 4. applies the add/remove requests those calls made, in issue order
    ///
    /// Entities added in step 4 are not updated this frame but are drawn by the
    /// following `draw`. Entities removed in step 4 are dropped by the next
    /// `update`.
    pub fn update(&mut self, dt: f32) -> UpdateStats {
        let mut stats = UpdateStats {
            destroyed: self.collect_garbage(),
            ..UpdateStats::default()
        };

        self.snapshot.clear();
        self.snapshot.extend(self.active.keys().copied());

        let Self { active, deferred, snapshot, .. } = self;
        for &id in snapshot.iter() {
            if let Some(entity) = active.get_mut(&id) {
                let mut ctx = SceneCtx::new(id, deferred);
                entity.update(dt, &mut ctx);
                stats.updated += 1;
            }
        }

        let mut requests = std::mem::take(&mut self.deferred);
        for request in requests.drain(..) {
            match request {
                Deferred::Add(id, entity) => {
                    self.insert(id, entity);
                    stats.added += 1;
                }
                Deferred::Remove(id) => {
                    let before = self.pending.len();
                    self.remove_entity(id);
                    stats.removed += self.pending.len() - before;
                }
            }
        }
        // Hand the allocation back for the next frame.
        self.deferred = requests;

        stats
    }

    /// Composites the scene onto `target` and presents the whole target.
    ///
    /// The background goes first at its native size from the top-left corner,
    /// then each entity with a surface in ascending z order. See
    /// [`entity_blit`] for the visibility and clip rules.
    pub fn draw<C: Canvas + ?Sized>(&mut self, target: &mut C) -> DrawStats {
        let mut stats = DrawStats::default();
        let target_size = target.size();

        if let Some(image) = &self.background {
            let plan = background_blit(image.size(), target_size);
            target.blit(image, plan.src, plan.dst);
            stats.background = true;
        }

        self.paint_order.clear();
        self.paint_order.extend(self.active.keys().copied());
        let active = &self.active;
        self.paint_order.sort_unstable_by_key(|id| active[id].z_index());

        for id in &self.paint_order {
            let entity = &active[id];
            let Some(surface) = entity.surface() else {
                continue;
            };
            match entity_blit(entity.position(), surface.size(), entity.scale(), target_size) {
                Some(plan) => {
                    target.blit(surface, plan.src, plan.dst);
                    stats.drawn += 1;
                }
                None => stats.skipped += 1,
            }
        }

        target.present(target_size.to_rect());
        stats
    }

    fn insert(&mut self, id: EntityId, entity: Box<dyn Entity>) {
        log::trace!("{id} added");
        self.active.insert(id, entity);
    }

    /// Drops every pending entity. Returns how many were dropped.
    fn collect_garbage(&mut self) -> usize {
        let n = self.pending.len();
        if n > 0 {
            log::debug!("dropping {n} removed entities");
            self.pending.clear();
        }
        n
    }
}

impl Drop for Scene {
    fn drop(&mut self) {
        log::debug!(
            "scene dropped with {} active and {} pending entities",
            self.active.len(),
            self.pending.len()
        );
    }
}
