use super::{Entity, EntityId};

/// Scene mutation requested while entities are being updated.
pub(crate) enum Deferred {
    Add(EntityId, Box<dyn Entity>),
    Remove(EntityId),
}

/// Per-entity view of the scene during [`Scene::update`](super::Scene::update).
///
/// Requests are queued and applied in issue order once the update pass over
/// the frame's snapshot is finished.
pub struct SceneCtx<'a> {
    current: EntityId,
    queue: &'a mut Vec<Deferred>,
}

impl<'a> SceneCtx<'a> {
    pub(crate) fn new(current: EntityId, queue: &'a mut Vec<Deferred>) -> Self {
        Self { current, queue }
    }

    /// Id of the entity being updated.
    #[inline]
    pub fn id(&self) -> EntityId {
        self.current
    }

    /// Queues `entity` for insertion. It is not updated this frame but is
    /// drawn by the next `draw`.
    pub fn add_entity(&mut self, entity: impl Entity + 'static) -> EntityId {
        self.add_boxed(Box::new(entity))
    }

    pub fn add_boxed(&mut self, entity: Box<dyn Entity>) -> EntityId {
        let id = EntityId::fresh();
        self.queue.push(Deferred::Add(id, entity));
        id
    }

    /// Queues removal of `id`. Ignored if `id` is not active when applied.
    pub fn remove_entity(&mut self, id: EntityId) {
        self.queue.push(Deferred::Remove(id));
    }

    /// Queues removal of the entity being updated.
    pub fn remove_self(&mut self) {
        self.remove_entity(self.current);
    }
}
