// SPDX-License-Identifier: MPL-2.0
//! Overlay lifecycle controller.
//!
//! Owns the single [`OverlayState`]. Presenting an index always tears the
//! previous overlay down first, so the stage never holds more than one
//! overlay node and the registry never holds listeners of a stale one.

use super::layout::{self, LayoutParameters};
use super::listeners::{Listener, ListenerHandle, ListenerKind, NavListeners};
use super::node::{OverlayId, OverlayNode, Visibility};
use super::stage::Stage;
use crate::gallery::Gallery;
use iced::Size;

/// Observable lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPhase {
    Closed,
    Open(usize),
}

/// Bookkeeping for the presentation currently shown.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct OverlayState {
    active_index: Option<usize>,
    overlay: Option<OverlayId>,
    resize_listener: Option<ListenerHandle>,
    image_listener: Option<ListenerHandle>,
    nav_listeners: Option<NavListeners>,
}

impl OverlayState {
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    #[must_use]
    pub fn overlay(&self) -> Option<OverlayId> {
        self.overlay
    }

    #[must_use]
    pub fn resize_listener(&self) -> Option<ListenerHandle> {
        self.resize_listener
    }

    #[must_use]
    pub fn image_listener(&self) -> Option<ListenerHandle> {
        self.image_listener
    }

    #[must_use]
    pub fn nav_listeners(&self) -> Option<NavListeners> {
        self.nav_listeners
    }
}

#[derive(Debug, Default)]
pub struct Controller {
    state: OverlayState,
}

impl Controller {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> OverlayPhase {
        self.state
            .active_index
            .map_or(OverlayPhase::Closed, OverlayPhase::Open)
    }

    /// Presents the thumbnail at `index`. Returns `false` without touching
    /// anything when the index is out of range.
    pub fn present(
        &mut self,
        stage: &mut Stage,
        gallery: &Gallery,
        index: usize,
        viewport: Size,
        params: &LayoutParameters,
    ) -> bool {
        let (Some(entry), Some(last_index)) = (gallery.get(index), gallery.last_index()) else {
            log::debug!("Ignoring present({index}): gallery has {} entries", gallery.len());
            return false;
        };

        self.teardown(stage);

        let mut node = OverlayNode::build(entry, last_index);
        node.set_visibility(Visibility::Hidden);
        let id = stage.attach(node);

        if let Some(node) = stage.overlay_mut(id) {
            layout::layout(node, viewport, params);
        }
        stage.set_active_element(id);
        if let Some(node) = stage.overlay_mut(id) {
            node.set_visibility(Visibility::Visible);
        }

        let listeners = stage.listeners_mut();
        self.state.image_listener =
            Some(listeners.register(Listener::new(ListenerKind::ImageLoad, id, index)));
        self.state.resize_listener =
            Some(listeners.register(Listener::new(ListenerKind::Resize, id, index)));
        self.state.nav_listeners = Some(NavListeners {
            keyboard: listeners.register(Listener::new(ListenerKind::Keyboard, id, index)),
            wheel: listeners.register(Listener::new(ListenerKind::Wheel, id, index)),
        });
        self.state.overlay = Some(id);
        self.state.active_index = Some(index);

        log::debug!("Presented index {index} as {id:?}");
        true
    }

    /// Tears down the current overlay, if any, and returns to `Closed`.
    pub fn close(&mut self, stage: &mut Stage) {
        self.teardown(stage);
        if let Some(index) = self.state.active_index.take() {
            log::debug!("Closed overlay for index {index}");
        }
    }

    /// Detaches the node and unregisters every listener of the current
    /// presentation. Safe to call any number of times.
    fn teardown(&mut self, stage: &mut Stage) {
        if let Some(id) = self.state.overlay.take() {
            stage.detach(id);
        }

        let listeners = stage.listeners_mut();
        for handle in [
            self.state.resize_listener.take(),
            self.state.image_listener.take(),
        ]
        .into_iter()
        .flatten()
        {
            listeners.unregister(handle);
        }
        if let Some(nav) = self.state.nav_listeners.take() {
            listeners.unregister(nav.keyboard);
            listeners.unregister(nav.wheel);
        }
    }

    /// Re-runs layout on the current overlay. Returns `false` while closed.
    pub fn relayout(&mut self, stage: &mut Stage, viewport: Size, params: &LayoutParameters) -> bool {
        let Some(node) = self.state.overlay.and_then(|id| stage.overlay_mut(id)) else {
            return false;
        };
        layout::layout(node, viewport, params);
        true
    }

    /// Applies the intrinsic size of the image shown by `overlay` and re-runs
    /// layout. Dropped unless the image-load listener for that overlay is
    /// still registered.
    pub fn image_loaded(
        &mut self,
        stage: &mut Stage,
        overlay: OverlayId,
        natural: Size,
        viewport: Size,
        params: &LayoutParameters,
    ) -> bool {
        let bound = self
            .state
            .image_listener
            .and_then(|handle| stage.listeners().get(handle))
            .is_some_and(|listener| listener.overlay == overlay);
        if !bound {
            log::trace!("Dropping image-load notification for stale {overlay:?}");
            return false;
        }

        let Some(node) = stage.overlay_mut(overlay) else {
            return false;
        };
        node.figure.image.set_natural_size(natural);
        layout::layout(node, viewport, params);
        true
    }
}
