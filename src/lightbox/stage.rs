// SPDX-License-Identifier: MPL-2.0
//! The host surface overlays attach to.

use super::listeners::ListenerRegistry;
use super::node::{OverlayId, OverlayNode};

/// Attached overlay nodes, the active-element marker and the listener
/// registry of the host surface.
#[derive(Debug, Default)]
pub struct Stage {
    next_id: u64,
    overlays: Vec<(OverlayId, OverlayNode)>,
    active_element: Option<OverlayId>,
    listeners: ListenerRegistry,
}

impl Stage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches `node` on top of any existing overlays.
    pub fn attach(&mut self, node: OverlayNode) -> OverlayId {
        let id = OverlayId::from_raw(self.next_id);
        self.next_id += 1;
        self.overlays.push((id, node));
        id
    }

    /// Detaches the node, clearing the active-element marker if it pointed at it.
    pub fn detach(&mut self, id: OverlayId) -> Option<OverlayNode> {
        let position = self.overlays.iter().position(|(other, _)| *other == id)?;
        if self.active_element == Some(id) {
            self.active_element = None;
        }
        Some(self.overlays.remove(position).1)
    }

    #[must_use]
    pub fn overlay(&self, id: OverlayId) -> Option<&OverlayNode> {
        self.overlays
            .iter()
            .find(|(other, _)| *other == id)
            .map(|(_, node)| node)
    }

    pub fn overlay_mut(&mut self, id: OverlayId) -> Option<&mut OverlayNode> {
        self.overlays
            .iter_mut()
            .find(|(other, _)| *other == id)
            .map(|(_, node)| node)
    }

    /// Attached overlays, bottom to top.
    pub fn overlays(&self) -> impl Iterator<Item = (OverlayId, &OverlayNode)> {
        self.overlays.iter().map(|(id, node)| (*id, node))
    }

    #[must_use]
    pub fn attached_count(&self) -> usize {
        self.overlays.len()
    }

    /// Marks an attached node as the sole active element.
    pub fn set_active_element(&mut self, id: OverlayId) -> bool {
        if self.overlay(id).is_none() {
            return false;
        }
        self.active_element = Some(id);
        true
    }

    #[must_use]
    pub fn active_element(&self) -> Option<OverlayId> {
        self.active_element
    }

    #[must_use]
    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    pub fn listeners_mut(&mut self) -> &mut ListenerRegistry {
        &mut self.listeners
    }
}
