//! # Per-widget persistent state
//!
//! Immediate-mode widgets are plain function calls, so anything that must
//! outlive a frame (which handle a drag prefers, whether a popup is open) is
//! stored in a [`StateRegistry`] keyed by the widget id and the value's type.
//!
//! The registry counts frames. Every [`StateRegistry::remember`] call marks its
//! entry alive for the current frame, and [`StateRegistry::collect`] drops
//! entries that have not been touched for the configured number of frames.
//! A widget that stops being submitted therefore loses its state and starts
//! fresh when it reappears.
//!
//! ```
//! use duoslide_ui::{id::WidgetId, state::StateRegistry};
//!
//! let mut registry = StateRegistry::default();
//! let id = WidgetId::ROOT.child("counter");
//!
//! registry.begin_frame();
//! let count = registry.remember(id, || 0u32);
//! count.with_mut(|c| *c += 1);
//!
//! registry.begin_frame();
//! assert_eq!(registry.remember(id, || 0u32).get(), 1);
//! ```

use std::{
    any::{Any, TypeId},
    sync::Arc,
};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::id::WidgetId;

/// Handle to a value stored in a [`StateRegistry`].
///
/// The handle shares ownership of the value, so it stays usable while the
/// context that produced it is borrowed mutably for drawing.
pub struct State<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> State<T> {
    /// Runs `f` with a shared reference to the value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.read())
    }

    /// Runs `f` with a mutable reference to the value.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Returns a copy of the value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.with(Clone::clone)
    }

    /// Replaces the value.
    pub fn set(&self, value: T) {
        self.with_mut(|slot| *slot = value);
    }
}

#[derive(Hash, Eq, PartialEq, Clone, Copy)]
struct SlotKey {
    id: WidgetId,
    type_id: TypeId,
}

struct SlotEntry {
    value: Arc<dyn Any + Send + Sync>,
    last_alive_epoch: u64,
}

/// Storage for per-widget state, owned by the [`GuiContext`](crate::context::GuiContext).
#[derive(Default)]
pub struct StateRegistry {
    slots: FxHashMap<SlotKey, SlotEntry>,
    epoch: u64,
}

impl StateRegistry {
    /// Starts a new frame.
    pub fn begin_frame(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Returns the state of type `T` for `id`, creating it with `init` the
    /// first time (or after it was collected).
    pub fn remember<T>(&mut self, id: WidgetId, init: impl FnOnce() -> T) -> State<T>
    where
        T: Send + Sync + 'static,
    {
        let key = SlotKey {
            id,
            type_id: TypeId::of::<T>(),
        };
        let epoch = self.epoch;

        if let Some(entry) = self.slots.get_mut(&key) {
            entry.last_alive_epoch = epoch;
            // The key includes the TypeId, so the downcast always succeeds.
            if let Ok(inner) = Arc::clone(&entry.value).downcast::<RwLock<T>>() {
                return State { inner };
            }
        }

        let inner = Arc::new(RwLock::new(init()));
        self.slots.insert(
            key,
            SlotEntry {
                value: inner.clone(),
                last_alive_epoch: epoch,
            },
        );
        State { inner }
    }

    /// Returns true if state of type `T` exists for `id`.
    pub fn contains<T: 'static>(&self, id: WidgetId) -> bool {
        self.slots.contains_key(&SlotKey {
            id,
            type_id: TypeId::of::<T>(),
        })
    }

    /// Drops every state stored for `id`, whatever its type.
    pub fn forget(&mut self, id: WidgetId) {
        self.slots.retain(|key, _| key.id != id);
    }

    /// Drops entries not touched during the last `retain_frames` frames and
    /// returns how many were removed. `retain_frames == 1` keeps only entries
    /// touched in the current frame.
    pub fn collect(&mut self, retain_frames: u64) -> usize {
        let epoch = self.epoch;
        let before = self.slots.len();
        self.slots
            .retain(|_, entry| epoch.wrapping_sub(entry.last_alive_epoch) < retain_frames.max(1));
        let evicted = before - self.slots.len();
        if evicted > 0 {
            trace!(evicted, "collected widget state");
        }
        evicted
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Drops everything.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.epoch = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_id_different_types_are_independent() {
        let mut registry = StateRegistry::default();
        let id = WidgetId::ROOT.child("slider");
        registry.begin_frame();
        registry.remember(id, || 1u8).set(7);
        registry.remember(id, String::new).set("x".into());

        assert_eq!(registry.remember(id, || 0u8).get(), 7);
        assert_eq!(registry.remember(id, String::new).get(), "x");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn handles_share_the_value() {
        let mut registry = StateRegistry::default();
        let id = WidgetId::ROOT.child("shared");
        registry.begin_frame();
        let a = registry.remember(id, || 0i32);
        let b = a.clone();
        a.set(5);
        assert_eq!(b.get(), 5);
    }

    #[test]
    fn untouched_entries_are_collected() {
        let mut registry = StateRegistry::default();
        let kept = WidgetId::ROOT.child("kept");
        let dropped = WidgetId::ROOT.child("dropped");

        registry.begin_frame();
        registry.remember(kept, || 1i32).set(10);
        registry.remember(dropped, || 2i32).set(20);
        assert_eq!(registry.collect(1), 0);

        registry.begin_frame();
        registry.remember(kept, || 1i32);
        assert_eq!(registry.collect(1), 1);
        assert!(registry.contains::<i32>(kept));
        assert!(!registry.contains::<i32>(dropped));

        registry.begin_frame();
        assert_eq!(registry.remember(dropped, || 2i32).get(), 2);
    }

    #[test]
    fn retention_window_keeps_recent_entries() {
        let mut registry = StateRegistry::default();
        let id = WidgetId::ROOT.child("popup");
        registry.begin_frame();
        registry.remember(id, || true);

        registry.begin_frame();
        assert_eq!(registry.collect(3), 0);
        registry.begin_frame();
        assert_eq!(registry.collect(3), 0);
        registry.begin_frame();
        assert_eq!(registry.collect(3), 1);
    }

    #[test]
    fn forget_removes_all_types() {
        let mut registry = StateRegistry::default();
        let id = WidgetId::ROOT.child("w");
        registry.begin_frame();
        registry.remember(id, || 0u8);
        registry.remember(id, || 0u16);
        registry.forget(id);
        assert!(registry.is_empty());
    }
}
