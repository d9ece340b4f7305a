// SPDX-License-Identifier: MPL-2.0
//! `iced_lightbox` is a directory gallery with a lightbox overlay, built with
//! the Iced GUI framework.
//!
//! The gallery scanner turns a directory listing into indexed thumbnails.
//! Activating a thumbnail presents a single overlay which is laid out against
//! the window and navigated with its controls, the arrow keys or the mouse
//! wheel.

#![doc(html_root_url = "https://docs.rs/iced_lightbox/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod lightbox;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
