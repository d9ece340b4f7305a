// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[layout]` - Lightbox geometry (scale factors, vertical offset, fit-to-screen, zoom)
//! - `[labels]` - Thumbnail label presentation and folder visibility
//! - `[gallery]` - Directory listing order
//!
//! Every value is optional; missing values fall back to [`defaults`].
//!
//! # Examples
//!
//! ```no_run
//! use iced_lightbox::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Flip a setting
//! config.layout.toggle_fit_to_screen();
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key shown when the settings file exists but cannot be read.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    ModifiedDate,
    CreatedDate,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Lightbox geometry settings, sampled on every layout pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Fraction of the viewport width available to the image.
    #[serde(default = "default_width_factor", skip_serializing_if = "Option::is_none")]
    pub width_factor: Option<f32>,

    /// Fraction of the viewport height available to the image.
    #[serde(default = "default_height_factor", skip_serializing_if = "Option::is_none")]
    pub height_factor: Option<f32>,

    /// Multiplier applied to the vertical centering offset.
    #[serde(
        default = "default_vertical_offset",
        skip_serializing_if = "Option::is_none"
    )]
    pub vertical_offset: Option<f32>,

    /// Scale the image to fill the available height instead of bounding it.
    #[serde(default = "default_fit_to_screen", skip_serializing_if = "Option::is_none")]
    pub fit_to_screen: Option<bool>,

    /// Pixel ratio used to keep overlay controls at a constant physical size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<f32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width_factor: default_width_factor(),
            height_factor: default_height_factor(),
            vertical_offset: default_vertical_offset(),
            fit_to_screen: default_fit_to_screen(),
            zoom: None,
        }
    }
}

impl LayoutConfig {
    #[must_use]
    pub fn fit_to_screen(&self) -> bool {
        self.fit_to_screen.unwrap_or(false)
    }

    /// Flips fit-to-screen mode and returns the new value.
    pub fn toggle_fit_to_screen(&mut self) -> bool {
        let value = !self.fit_to_screen();
        self.fit_to_screen = Some(value);
        value
    }
}

/// Thumbnail label settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabelConfig {
    /// Show file names under (or above) the thumbnails.
    #[serde(default = "default_true", skip_serializing_if = "Option::is_none")]
    pub show_filenames: Option<bool>,

    /// Show folder entries in the gallery.
    #[serde(default = "default_true", skip_serializing_if = "Option::is_none")]
    pub show_folders: Option<bool>,

    /// Place labels above the thumbnails instead of below.
    #[serde(default = "default_false", skip_serializing_if = "Option::is_none")]
    pub names_above: Option<bool>,

    /// Shorten long labels with an ellipsis.
    #[serde(default = "default_true", skip_serializing_if = "Option::is_none")]
    pub truncate_names: Option<bool>,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            show_filenames: Some(true),
            show_folders: Some(true),
            names_above: Some(false),
            truncate_names: Some(true),
        }
    }
}

impl LabelConfig {
    #[must_use]
    pub fn show_filenames(&self) -> bool {
        self.show_filenames.unwrap_or(true)
    }

    #[must_use]
    pub fn show_folders(&self) -> bool {
        self.show_folders.unwrap_or(true)
    }

    #[must_use]
    pub fn names_above(&self) -> bool {
        self.names_above.unwrap_or(false)
    }

    #[must_use]
    pub fn truncate_names(&self) -> bool {
        self.truncate_names.unwrap_or(true)
    }

    /// Flips filename visibility and returns the new value.
    pub fn toggle_filenames(&mut self) -> bool {
        let value = !self.show_filenames();
        self.show_filenames = Some(value);
        value
    }

    /// Flips folder visibility and returns the new value.
    pub fn toggle_folders(&mut self) -> bool {
        let value = !self.show_folders();
        self.show_folders = Some(value);
        value
    }
}

/// Directory listing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GalleryConfig {
    /// Order of entries in the gallery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub labels: LabelConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,
}

fn default_width_factor() -> Option<f32> {
    Some(DEFAULT_WIDTH_FACTOR)
}

fn default_height_factor() -> Option<f32> {
    Some(DEFAULT_HEIGHT_FACTOR)
}

fn default_vertical_offset() -> Option<f32> {
    Some(DEFAULT_VERTICAL_OFFSET)
}

fn default_fit_to_screen() -> Option<bool> {
    Some(false)
}

fn default_true() -> Option<bool> {
    Some(true)
}

fn default_false() -> Option<bool> {
    Some(false)
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Failed to load {}: {}", path.display(), err);
                    return (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        config.layout.width_factor = Some(0.5);
        config.layout.zoom = Some(1.5);
        config.labels.names_above = Some(true);
        config.gallery.sort_order = Some(SortOrder::ModifiedDate);

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[layout]\nfit_to_screen = true\n").expect("write failed");

        let loaded = load_from_path(&config_path).expect("load failed");
        assert!(loaded.layout.fit_to_screen());
        assert_eq!(loaded.layout.width_factor, Some(DEFAULT_WIDTH_FACTOR));
        assert!(loaded.labels.show_filenames());
        assert!(loaded.labels.show_folders());
    }

    #[test]
    fn load_with_override_warns_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = valid = toml")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING_KEY));
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn toggles_flip_and_report_new_value() {
        let mut config = Config::default();
        assert!(config.layout.toggle_fit_to_screen());
        assert!(!config.layout.toggle_fit_to_screen());
        assert!(!config.labels.toggle_filenames());
        assert!(!config.labels.toggle_folders());
        assert!(config.labels.toggle_folders());
    }

    #[test]
    fn sort_order_uses_kebab_case() {
        let parsed: GalleryConfig =
            toml::from_str("sort_order = \"created-date\"").expect("parse failed");
        assert_eq!(parsed.sort_order, Some(SortOrder::CreatedDate));
    }
}
