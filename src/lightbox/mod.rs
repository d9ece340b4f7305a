// SPDX-License-Identifier: MPL-2.0
//! The lightbox: gallery, stage and overlay controller behind one facade.
//!
//! # Architecture
//!
//! ```text
//!  input ──► router ──► Route ──► Controller::present / close
//!                                     │
//!                                     ├─► Stage (attach/detach node)
//!                                     ├─► layout::layout
//!                                     └─► ListenerRegistry (register/unregister)
//! ```
//!
//! Keyboard, wheel, resize and image-load input only reach the router through
//! listeners registered on the stage by the current presentation. Once the
//! overlay is torn down those listeners are gone and the input is ignored.

pub mod controller;
pub mod layout;
pub mod listeners;
pub mod node;
pub mod router;
pub mod shortcuts;
pub mod stage;

pub use controller::{Controller, OverlayPhase, OverlayState};
pub use layout::LayoutParameters;
pub use listeners::{ListenerHandle, ListenerKind};
pub use node::{ControlKind, OverlayId, OverlayNode};
pub use router::Route;
pub use shortcuts::{match_shortcut, Shortcut};
pub use stage::Stage;

use crate::gallery::Gallery;
use iced::keyboard::{Key, Modifiers};
use iced::mouse::ScrollDelta;
use iced::Size;

/// Element of an overlay that received a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Control(ControlKind),
    /// The container itself, outside the figure.
    Backdrop,
    /// Anywhere inside the figure.
    Figure,
}

/// Geometry inputs for a layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEnv {
    pub viewport: Size,
    pub params: LayoutParameters,
}

impl LayoutEnv {
    #[must_use]
    pub fn new(viewport: Size, params: LayoutParameters) -> Self {
        Self { viewport, params }
    }
}

#[derive(Debug, Default)]
pub struct Lightbox {
    gallery: Gallery,
    stage: Stage,
    controller: Controller,
}

impl Lightbox {
    #[must_use]
    pub fn new(gallery: Gallery) -> Self {
        Self {
            gallery,
            stage: Stage::new(),
            controller: Controller::new(),
        }
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    #[must_use]
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    #[must_use]
    pub fn state(&self) -> &OverlayState {
        self.controller.state()
    }

    #[must_use]
    pub fn phase(&self) -> OverlayPhase {
        self.controller.phase()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase() != OverlayPhase::Closed
    }

    /// The attached overlay, if one is shown.
    #[must_use]
    pub fn overlay(&self) -> Option<(OverlayId, &OverlayNode)> {
        let id = self.controller.state().overlay()?;
        self.stage.overlay(id).map(|node| (id, node))
    }

    /// Swaps in a freshly scanned gallery, closing any open overlay first.
    pub fn replace_gallery(&mut self, gallery: Gallery) {
        self.close();
        self.gallery = gallery;
    }

    pub fn present(&mut self, index: usize, env: &LayoutEnv) -> bool {
        self.controller
            .present(&mut self.stage, &self.gallery, index, env.viewport, &env.params)
    }

    pub fn close(&mut self) {
        self.controller.close(&mut self.stage);
    }

    /// Re-runs layout on the open overlay with fresh parameters.
    pub fn relayout(&mut self, env: &LayoutEnv) -> bool {
        self.controller
            .relayout(&mut self.stage, env.viewport, &env.params)
    }

    pub fn thumbnail_clicked(&mut self, index: usize, env: &LayoutEnv) -> bool {
        let route = router::route_thumbnail(index, self.gallery.len());
        self.apply(route, env)
    }

    /// Click inside `overlay`. Clicks on a stale overlay are ignored.
    pub fn pointer(&mut self, overlay: OverlayId, target: PointerTarget, env: &LayoutEnv) -> bool {
        if self.controller.state().overlay() != Some(overlay) {
            log::trace!("Ignoring click on stale {overlay:?}");
            return false;
        }
        let Some(index) = self.controller.state().active_index() else {
            return false;
        };

        let route = match target {
            PointerTarget::Control(control) => {
                router::route_control(control, index, self.gallery.len())
            }
            PointerTarget::Backdrop => Route::Close,
            PointerTarget::Figure => Route::Ignore,
        };
        self.apply(route, env)
    }

    /// Dispatches a key press to the registered keyboard listeners.
    pub fn key_pressed(&mut self, key: &Key, env: &LayoutEnv) -> bool {
        let mut handled = false;
        for (handle, listener) in self.stage.listeners().of_kind(ListenerKind::Keyboard) {
            if !self.stage.listeners().contains(handle) {
                continue;
            }
            let route = router::route_key(key, listener.index, self.gallery.len());
            handled |= self.apply(route, env);
        }
        handled
    }

    /// Dispatches a wheel event. Returns whether the default scroll must be
    /// suppressed.
    pub fn wheel(&mut self, delta: ScrollDelta, modifiers: Modifiers, env: &LayoutEnv) -> bool {
        let mut suppress = false;
        for (handle, listener) in self.stage.listeners().of_kind(ListenerKind::Wheel) {
            if !self.stage.listeners().contains(handle) {
                continue;
            }
            let outcome = router::route_wheel(delta, modifiers, listener.index, self.gallery.len());
            suppress |= outcome.suppress_default;
            self.apply(outcome.route, env);
        }
        suppress
    }

    /// Whether the content under the overlay must stop scrolling with the
    /// given modifiers held.
    #[must_use]
    pub fn suppresses_scroll(&self, modifiers: Modifiers) -> bool {
        self.stage.listeners().count(ListenerKind::Wheel) > 0 && !router::is_zoom_intent(modifiers)
    }

    /// Dispatches a viewport change to the registered resize listeners.
    pub fn resized(&mut self, env: &LayoutEnv) -> bool {
        let mut handled = false;
        for (handle, _) in self.stage.listeners().of_kind(ListenerKind::Resize) {
            if self.stage.listeners().contains(handle) {
                handled |= self.relayout(env);
            }
        }
        handled
    }

    /// Delivers the decoded intrinsic size of the image shown by `overlay`.
    pub fn image_loaded(&mut self, overlay: OverlayId, natural: Size, env: &LayoutEnv) -> bool {
        self.controller
            .image_loaded(&mut self.stage, overlay, natural, env.viewport, &env.params)
    }

    fn apply(&mut self, route: Route, env: &LayoutEnv) -> bool {
        match route {
            Route::Present(index) => self.present(index, env),
            Route::Close => {
                let was_open = self.is_open();
                self.close();
                was_open
            }
            Route::Ignore => false,
        }
    }
}
