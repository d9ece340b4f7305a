// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! view takes a `ViewContext` and emits its own `Message`, which the
//! application maps into its top-level message.
//!
//! - [`gallery_view`] - Header and thumbnail grid
//! - [`overlay_view`] - Lightbox overlay layer
//! - [`widgets`] - Custom Iced widgets (scroll guard)
//! - [`styles`] - Centralized styling (buttons, containers, overlay)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod gallery_view;
pub mod overlay_view;
pub mod styles;
pub mod widgets;
