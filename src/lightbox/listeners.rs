// SPDX-License-Identifier: MPL-2.0
//! Listener registry with explicit handles.
//!
//! Every registration returns a [`ListenerHandle`]; the only way to stop a
//! listener from receiving events is to pass that handle back to
//! [`ListenerRegistry::unregister`].

use super::node::OverlayId;
use std::collections::BTreeMap;

/// Opaque token identifying one registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerHandle(u64);

/// Event class a listener subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Viewport size changes.
    Resize,
    /// Intrinsic image dimensions became known.
    ImageLoad,
    Keyboard,
    Wheel,
}

/// A registered listener, scoped to one overlay and bound to the index that
/// overlay presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listener {
    pub kind: ListenerKind,
    pub overlay: OverlayId,
    pub index: usize,
}

impl Listener {
    #[must_use]
    pub fn new(kind: ListenerKind, overlay: OverlayId, index: usize) -> Self {
        Self {
            kind,
            overlay,
            index,
        }
    }
}

/// Keyboard and wheel handles registered for one presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavListeners {
    pub keyboard: ListenerHandle,
    pub wheel: ListenerHandle,
}

/// Registered listeners, iterated in registration order.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    next_handle: u64,
    listeners: BTreeMap<ListenerHandle, Listener>,
}

impl ListenerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` and returns the handle needed to remove it.
    pub fn register(&mut self, listener: Listener) -> ListenerHandle {
        let handle = ListenerHandle(self.next_handle);
        self.next_handle += 1;
        self.listeners.insert(handle, listener);
        log::trace!("Registered {:?} listener {:?}", listener.kind, handle);
        handle
    }

    /// Removes a registration. Returns `false` if the handle was unknown.
    pub fn unregister(&mut self, handle: ListenerHandle) -> bool {
        let removed = self.listeners.remove(&handle).is_some();
        if removed {
            log::trace!("Unregistered listener {:?}", handle);
        }
        removed
    }

    #[must_use]
    pub fn get(&self, handle: ListenerHandle) -> Option<&Listener> {
        self.listeners.get(&handle)
    }

    #[must_use]
    pub fn contains(&self, handle: ListenerHandle) -> bool {
        self.listeners.contains_key(&handle)
    }

    /// Snapshot of the listeners of `kind`, in registration order.
    #[must_use]
    pub fn of_kind(&self, kind: ListenerKind) -> Vec<(ListenerHandle, Listener)> {
        self.listeners
            .iter()
            .filter(|(_, listener)| listener.kind == kind)
            .map(|(handle, listener)| (*handle, *listener))
            .collect()
    }

    #[must_use]
    pub fn count(&self, kind: ListenerKind) -> usize {
        self.listeners
            .values()
            .filter(|listener| listener.kind == kind)
            .count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlay(id: u64) -> OverlayId {
        OverlayId::from_raw(id)
    }

    #[test]
    fn register_returns_distinct_handles() {
        let mut registry = ListenerRegistry::new();
        let a = registry.register(Listener::new(ListenerKind::Keyboard, overlay(0), 0));
        let b = registry.register(Listener::new(ListenerKind::Keyboard, overlay(0), 0));
        assert_ne!(a, b);
        assert_eq!(registry.count(ListenerKind::Keyboard), 2);
    }

    #[test]
    fn unregister_is_idempotent() {
        let mut registry = ListenerRegistry::new();
        let handle = registry.register(Listener::new(ListenerKind::Wheel, overlay(1), 2));
        assert!(registry.unregister(handle));
        assert!(!registry.unregister(handle));
        assert!(registry.is_empty());
    }

    #[test]
    fn handles_are_not_reused() {
        let mut registry = ListenerRegistry::new();
        let first = registry.register(Listener::new(ListenerKind::Resize, overlay(0), 0));
        registry.unregister(first);
        let second = registry.register(Listener::new(ListenerKind::Resize, overlay(1), 0));
        assert_ne!(first, second);
        assert!(!registry.contains(first));
    }

    #[test]
    fn of_kind_preserves_registration_order() {
        let mut registry = ListenerRegistry::new();
        registry.register(Listener::new(ListenerKind::Keyboard, overlay(0), 4));
        registry.register(Listener::new(ListenerKind::Wheel, overlay(0), 4));
        registry.register(Listener::new(ListenerKind::Keyboard, overlay(1), 7));

        let indices: Vec<_> = registry
            .of_kind(ListenerKind::Keyboard)
            .into_iter()
            .map(|(_, listener)| listener.index)
            .collect();
        assert_eq!(indices, vec![4, 7]);
    }
}
