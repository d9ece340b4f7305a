// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Layout**: Lightbox scale factors, vertical offset and zoom bounds
//! - **Chrome**: Fixed sizes reserved around the enlarged image
//! - **Labels**: Thumbnail label presentation

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Default fraction of the viewport width the enlarged image may use.
pub const DEFAULT_WIDTH_FACTOR: f32 = 0.9;

/// Default fraction of the viewport height the enlarged image may use.
pub const DEFAULT_HEIGHT_FACTOR: f32 = 0.8;

/// Scale factors must stay strictly above this value.
pub const MIN_SCALE_FACTOR: f32 = 0.0;

/// Scale factors may not exceed the full viewport.
pub const MAX_SCALE_FACTOR: f32 = 1.0;

/// Default multiplier applied to the vertical centering offset (1.0 = centered).
pub const DEFAULT_VERTICAL_OFFSET: f32 = 1.0;

/// Upper bound for the vertical offset multiplier.
pub const MAX_VERTICAL_OFFSET: f32 = 2.0;

/// Zoom signals outside this range are treated as unavailable.
pub const MIN_ZOOM: f32 = 0.25;
pub const MAX_ZOOM: f32 = 8.0;

// ==========================================================================
// Chrome Defaults
// ==========================================================================

/// Height reserved below the image for the caption line.
pub const CAPTION_HEIGHT: f32 = 32.0;

/// Height of the strip reserved above the image for the close control in
/// fit-to-screen mode.
pub const CLOSE_STRIP_HEIGHT: f32 = 44.0;

/// On-screen size of the close / previous / next controls at zoom 1.0.
pub const CONTROL_SIZE: f32 = 40.0;

// ==========================================================================
// Label Defaults
// ==========================================================================

/// Labels longer than this are shortened when truncation is enabled.
pub const MAX_LABEL_CHARS: usize = 28;

/// Width of a thumbnail tile in the gallery grid.
pub const THUMBNAIL_TILE_SIZE: f32 = 168.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_WIDTH_FACTOR > MIN_SCALE_FACTOR);
    assert!(DEFAULT_WIDTH_FACTOR <= MAX_SCALE_FACTOR);
    assert!(DEFAULT_HEIGHT_FACTOR > MIN_SCALE_FACTOR);
    assert!(DEFAULT_HEIGHT_FACTOR <= MAX_SCALE_FACTOR);

    assert!(DEFAULT_VERTICAL_OFFSET >= 0.0);
    assert!(DEFAULT_VERTICAL_OFFSET <= MAX_VERTICAL_OFFSET);

    assert!(MIN_ZOOM > 0.0);
    assert!(MAX_ZOOM > MIN_ZOOM);

    assert!(CAPTION_HEIGHT > 0.0);
    assert!(CLOSE_STRIP_HEIGHT >= CONTROL_SIZE);

    // Room for at least "a…b.ext"
    assert!(MAX_LABEL_CHARS >= 8);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_factor_defaults_are_valid() {
        assert_eq!(DEFAULT_WIDTH_FACTOR, 0.9);
        assert_eq!(DEFAULT_HEIGHT_FACTOR, 0.8);
        assert!(DEFAULT_WIDTH_FACTOR <= MAX_SCALE_FACTOR);
        assert!(DEFAULT_HEIGHT_FACTOR <= MAX_SCALE_FACTOR);
    }

    #[test]
    fn vertical_offset_default_centers() {
        assert_eq!(DEFAULT_VERTICAL_OFFSET, 1.0);
    }

    #[test]
    fn close_strip_fits_control() {
        assert!(CLOSE_STRIP_HEIGHT >= CONTROL_SIZE);
    }
}
