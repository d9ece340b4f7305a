// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::gallery::Gallery;
use crate::lightbox::OverlayId;
use crate::ui::gallery_view;
use crate::ui::overlay_view;
use iced::Size;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery_view::Message),
    Overlay(overlay_view::Message),
    /// Native keyboard, wheel or window event.
    RawEvent(iced::Event),
    /// Intrinsic dimensions probed for the image shown by `overlay`.
    ImageLoaded {
        overlay: OverlayId,
        result: Result<Size, Error>,
    },
    /// Result of listing and scanning a directory.
    DirectoryScanned {
        path: PathBuf,
        result: Result<Gallery, Error>,
    },
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Directory to open; defaults to the current directory.
    pub path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_LIGHTBOX_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Pixel ratio used to keep overlay controls at a constant physical size.
    /// Takes precedence over the `[layout] zoom` setting.
    pub zoom: Option<f32>,
}
