// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Every path that may present a new overlay goes through
//! [`App::after_route`], which starts the dimension probe for the overlay
//! that ended up attached.

use super::{App, Message};
use crate::config;
use crate::error::Error;
use crate::gallery::Gallery;
use crate::lightbox::{match_shortcut, OverlayId, Shortcut};
use crate::ui::gallery_view;
use iced::{event, keyboard, mouse, window, Size, Task};
use std::path::{Path, PathBuf};

const CONFIG_SAVE_WARNING_KEY: &str = "notification-config-save-error";

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Gallery(message) => {
            match gallery_view::update(message, app.lightbox.gallery()) {
                gallery_view::Event::None => Task::none(),
                gallery_view::Event::Present(index) => {
                    let before = app.lightbox.state().overlay();
                    let env = app.layout_env();
                    app.lightbox.thumbnail_clicked(index, &env);
                    app.after_route(before)
                }
                gallery_view::Event::OpenDirectory(path) => app.scan_directory(path),
                gallery_view::Event::Toggle(shortcut) => {
                    app.apply_shortcut(shortcut);
                    Task::none()
                }
            }
        }
        Message::Overlay(message) => {
            let before = app.lightbox.state().overlay();
            let env = app.layout_env();
            app.lightbox.pointer(message.overlay, message.target, &env);
            app.after_route(before)
        }
        Message::RawEvent(event) => app.handle_raw_event(event),
        Message::ImageLoaded { overlay, result } => {
            match result {
                Ok(size) => {
                    let env = app.layout_env();
                    app.lightbox.image_loaded(overlay, size, &env);
                }
                Err(err) => log::warn!("Could not read image dimensions: {}", err),
            }
            Task::none()
        }
        Message::DirectoryScanned { path, result } => {
            app.apply_scan(&path, result);
            Task::none()
        }
    }
}

impl App {
    fn handle_raw_event(&mut self, event: event::Event) -> Task<Message> {
        match event {
            event::Event::Window(
                window::Event::Resized(size) | window::Event::Opened { size, .. },
            ) => {
                self.viewport = size;
                let env = self.layout_env();
                self.lightbox.resized(&env);
                Task::none()
            }
            event::Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers)) => {
                self.modifiers = modifiers;
                Task::none()
            }
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                self.modifiers = modifiers;
                if let Some(shortcut) = match_shortcut(&key, modifiers) {
                    self.apply_shortcut(shortcut);
                    return Task::none();
                }
                let before = self.lightbox.state().overlay();
                let env = self.layout_env();
                self.lightbox.key_pressed(&key, &env);
                self.after_route(before)
            }
            event::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                let before = self.lightbox.state().overlay();
                let env = self.layout_env();
                self.lightbox.wheel(delta, self.modifiers, &env);
                self.after_route(before)
            }
            _ => Task::none(),
        }
    }

    /// Starts the dimension probe when routing attached a new overlay.
    fn after_route(&self, before: Option<OverlayId>) -> Task<Message> {
        match self.lightbox.overlay() {
            Some((overlay, node)) if Some(overlay) != before => {
                probe_dimensions(overlay, node.figure.image.path().to_path_buf())
            }
            _ => Task::none(),
        }
    }

    /// Flips a setting, persists it and re-lays out the open overlay.
    fn apply_shortcut(&mut self, shortcut: Shortcut) {
        let enabled = match shortcut {
            Shortcut::ToggleFitToScreen => self.config.layout.toggle_fit_to_screen(),
            Shortcut::ToggleFilenames => self.config.labels.toggle_filenames(),
            Shortcut::ToggleFolders => self.config.labels.toggle_folders(),
        };
        log::info!("{:?} -> {}", shortcut, enabled);

        if let Err(err) = config::save(&self.config) {
            log::warn!("Failed to save settings: {}", err);
            self.config_warning = Some(CONFIG_SAVE_WARNING_KEY);
        }

        let env = self.layout_env();
        self.lightbox.relayout(&env);
    }

    /// Lists and scans `path` off the UI thread.
    pub(super) fn scan_directory(&self, path: PathBuf) -> Task<Message> {
        let sort_order = self.config.gallery.sort_order.unwrap_or_default();
        let scan_path = path.clone();
        Task::perform(
            async move {
                tokio::task::spawn_blocking(move || Gallery::from_directory(&scan_path, sort_order))
                    .await
                    .map_err(|e| Error::Io(e.to_string()))?
            },
            move |result| Message::DirectoryScanned {
                path: path.clone(),
                result,
            },
        )
    }

    fn apply_scan(&mut self, path: &Path, result: Result<Gallery, Error>) {
        match result {
            Ok(gallery) => {
                self.scan_error = None;
                self.lightbox.replace_gallery(gallery);
            }
            Err(err) => {
                log::warn!("Failed to open {}: {}", path.display(), err);
                let path = path.display().to_string();
                let error = err.to_string();
                self.scan_error = Some(self.i18n.tr_with_args(
                    "gallery-scan-error",
                    &[("path", path.as_str()), ("error", error.as_str())],
                ));
                self.lightbox.replace_gallery(Gallery::default());
            }
        }
    }
}

/// Reads the intrinsic size of the image at `path` without decoding it.
fn probe_dimensions(overlay: OverlayId, path: PathBuf) -> Task<Message> {
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || image_rs::image_dimensions(&path))
                .await
                .map_err(|e| Error::Image(e.to_string()))?
                .map(|(width, height)| Size::new(width as f32, height as f32))
                .map_err(Error::from)
        },
        move |result| Message::ImageLoaded { overlay, result },
    )
}
