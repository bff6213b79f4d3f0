//! Deferred structural changes: tags collected during a read pass and
//! inserted afterwards by an exclusive system.
//!
//! Iteration never changes an entity's archetype. Systems push
//! `(entity, tag)` pairs into a [`TagQueue`], and [`apply_tag_queue`]
//! inserts them on a single thread once the read pass has finished.

use bevy_ecs::prelude::*;

/// Pending `(entity, tag)` insertions for one tag component type.
#[derive(Resource)]
pub struct TagQueue<C: Component> {
    pending: Vec<(Entity, C)>,
}

impl<C: Component> Default for TagQueue<C> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<C: Component> TagQueue<C> {
    /// Queue a tag for `entity`. Applied on the next flush.
    pub fn enqueue(&mut self, entity: Entity, tag: C) {
        self.pending.push((entity, tag));
    }

    /// Insert every queued tag. Entities that were despawned, or already
    /// carry a `C`, are skipped so each entity is tagged at most once.
    ///
    /// Returns the number of tags actually inserted.
    pub fn flush(&mut self, world: &mut World) -> usize {
        let mut applied = 0;
        for (entity, tag) in self.pending.drain(..) {
            let Ok(mut entity_mut) = world.get_entity_mut(entity) else {
                tracing::debug!(?entity, "skipping tag for despawned entity");
                continue;
            };
            if entity_mut.contains::<C>() {
                tracing::debug!(?entity, "entity already tagged");
                continue;
            }
            entity_mut.insert(tag);
            applied += 1;
        }
        applied
    }

    /// Returns the number of pending tags.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if there are no pending tags.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Exclusive system that flushes [`TagQueue<C>`].
///
/// Chain it after the system that fills the queue so the structural
/// change lands before anything else queries for `C`.
pub fn apply_tag_queue<C: Component>(world: &mut World) {
    if !world.contains_resource::<TagQueue<C>>() {
        return;
    }
    world.resource_scope(|world, mut queue: Mut<TagQueue<C>>| {
        let applied = queue.flush(world);
        if applied > 0 {
            tracing::trace!(applied, tag = std::any::type_name::<C>(), "applied queued tags");
        }
    });
}
