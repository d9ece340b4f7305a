// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct wires the gallery grid and the lightbox together and
//! translates messages into side effects like config persistence, directory
//! scanning or image dimension probing. All state lives here and is mutated
//! only from `update`.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::lightbox::{LayoutEnv, LayoutParameters, Lightbox};
use iced::keyboard::Modifiers;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    lightbox: Lightbox,
    /// Last known window size.
    viewport: Size,
    /// Modifiers currently held, needed to classify wheel events.
    modifiers: Modifiers,
    /// Zoom signal from the command line.
    zoom_override: Option<f32>,
    /// Translation key of a configuration warning shown in the header.
    config_warning: Option<&'static str>,
    /// Localized error shown instead of the grid.
    scan_error: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("viewport", &self.viewport)
            .field("phase", &self.lightbox.phase())
            .field("thumbnails", &self.lightbox.gallery().len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 360;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires `Fn` for boot; flags are consumed on the first call only.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            config: Config::default(),
            lightbox: Lightbox::default(),
            viewport: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            modifiers: Modifiers::empty(),
            zoom_override: None,
            config_warning: None,
            scan_error: None,
        }
    }
}

impl App {
    /// Loads the configuration and starts scanning the requested directory.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let app = App {
            i18n,
            config,
            zoom_override: flags.zoom,
            config_warning: config_warning.map(|_| config::CONFIG_LOAD_WARNING_KEY),
            ..Self::default()
        };

        let directory = flags
            .path
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        let task = app.scan_directory(directory);
        (app, task)
    }

    fn title(&self) -> String {
        match self
            .lightbox
            .gallery()
            .directory()
            .and_then(|dir| dir.file_name())
        {
            Some(name) => {
                let name = name.to_string_lossy();
                self.i18n
                    .tr_with_args("window-title-directory", &[("directory", name.as_ref())])
            }
            None => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            lightbox: &self.lightbox,
            labels: &self.config.labels,
            fit_to_screen: self.config.layout.fit_to_screen(),
            warning: self.config_warning,
            scan_error: self.scan_error.as_deref(),
            suppress_scroll: self.lightbox.suppresses_scroll(self.modifiers),
        })
    }

    /// Geometry inputs sampled from the current configuration.
    fn layout_env(&self) -> LayoutEnv {
        let params = LayoutParameters::from(&self.config.layout)
            .with_zoom(self.zoom_override)
            .with_caption(self.config.labels.show_filenames());
        LayoutEnv::new(self.viewport, params)
    }
}
