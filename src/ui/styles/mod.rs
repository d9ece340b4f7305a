// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the gallery and the overlay.

pub mod button;
pub mod container;
pub mod overlay;
