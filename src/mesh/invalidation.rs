use std::cell::OnceCell;

use crate::bounding_volume::Aabb;
use crate::math::Real;
use crate::mesh::{ConsumerId, ConsumerSignals, DirtyFlags};

/// Tracks the staleness of everything derived from the mesh buffers.
///
/// It caches the bounding volume of the position buffer and forwards the dirty
/// signals to the registered consumers. Consumers are identified by handles and
/// drain their own signals; no reference to them is kept.
#[derive(Clone, Debug, Default)]
pub struct MeshInvalidator {
    volume: OnceCell<Option<Aabb>>,
    consumers: Vec<Option<ConsumerSignals>>,
}

impl MeshInvalidator {
    /// Creates an invalidator without consumers and with a stale volume.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the cached bounding volume as stale and notifies every consumer.
    pub fn invalidate_volume(&mut self) {
        let _ = self.volume.take();
        for signals in self.consumers.iter_mut().flatten() {
            signals.volume_invalidated = true;
        }
    }

    /// Returns `true` if the bounding volume must be recomputed before use.
    pub fn is_volume_stale(&self) -> bool {
        self.volume.get().is_none()
    }

    /// The bounding volume of `positions`, recomputed only if it was invalidated.
    ///
    /// `positions` must be the buffer the cache was invalidated for.
    pub fn bounding_volume(&self, positions: &[Real]) -> Option<Aabb> {
        *self
            .volume
            .get_or_init(|| Aabb::from_flat_coords(positions))
    }

    /// Adds `flags` to the pending signals of every consumer.
    pub fn signal(&mut self, flags: DirtyFlags) {
        for signals in self.consumers.iter_mut().flatten() {
            signals.dirty |= flags;
        }
    }

    /// Registers a new consumer. It starts without pending signals.
    pub fn register_consumer(&mut self) -> ConsumerId {
        if let Some(free) = self.consumers.iter().position(Option::is_none) {
            self.consumers[free] = Some(ConsumerSignals::default());
            ConsumerId(free as u32)
        } else {
            self.consumers.push(Some(ConsumerSignals::default()));
            ConsumerId(self.consumers.len() as u32 - 1)
        }
    }

    /// Removes a consumer. Returns `false` if it was not registered.
    pub fn unregister_consumer(&mut self, id: ConsumerId) -> bool {
        self.consumers
            .get_mut(id.0 as usize)
            .and_then(Option::take)
            .is_some()
    }

    /// Returns and clears the pending signals of a consumer.
    ///
    /// Returns `None` if the consumer is not registered.
    pub fn take_signals(&mut self, id: ConsumerId) -> Option<ConsumerSignals> {
        self.consumers
            .get_mut(id.0 as usize)
            .and_then(Option::as_mut)
            .map(core::mem::take)
    }
}
