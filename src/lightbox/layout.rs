// SPDX-License-Identifier: MPL-2.0
//! Layout engine for the overlay figure.
//!
//! Two modes:
//!
//! - **Bounded** (default): the image is scaled down (never up) to fit
//!   `viewport × factors`, centered horizontally, and placed vertically at
//!   `((viewport.h − (image.h + caption.h)) / 2) × vertical_offset`.
//! - **Fit to screen**: the image fills the viewport minus the caption and
//!   close strip along whichever axis constrains it.
//!
//! A hidden caption reserves no height in either mode.
//!
//! Every numeric property goes through [`StyleValue::set`], so a value that
//! cannot be computed yet (unknown intrinsic size) leaves the previous one in
//! place. The engine holds no state; running it twice with the same inputs
//! yields the same node.
//!
//! [`StyleValue::set`]: super::node::StyleValue::set

use super::node::{FitAxis, OverlayNode};
use crate::config::{
    LayoutConfig, CAPTION_HEIGHT, CLOSE_STRIP_HEIGHT, CONTROL_SIZE, DEFAULT_HEIGHT_FACTOR,
    DEFAULT_VERTICAL_OFFSET, DEFAULT_WIDTH_FACTOR, MAX_SCALE_FACTOR, MAX_VERTICAL_OFFSET,
    MAX_ZOOM, MIN_SCALE_FACTOR, MIN_ZOOM,
};
use iced::Size;

/// Inputs of one layout pass, sampled from the configuration each time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParameters {
    pub width_factor: f32,
    pub height_factor: f32,
    pub vertical_offset: f32,
    pub fit_to_screen: bool,
    /// Pixel ratio, if known.
    pub zoom: Option<f32>,
    /// Render the caption under the image.
    pub show_caption: bool,
}

impl Default for LayoutParameters {
    fn default() -> Self {
        Self {
            width_factor: DEFAULT_WIDTH_FACTOR,
            height_factor: DEFAULT_HEIGHT_FACTOR,
            vertical_offset: DEFAULT_VERTICAL_OFFSET,
            fit_to_screen: false,
            zoom: None,
            show_caption: true,
        }
    }
}

impl From<&LayoutConfig> for LayoutParameters {
    fn from(config: &LayoutConfig) -> Self {
        Self {
            width_factor: sanitize_factor(config.width_factor, DEFAULT_WIDTH_FACTOR),
            height_factor: sanitize_factor(config.height_factor, DEFAULT_HEIGHT_FACTOR),
            vertical_offset: config
                .vertical_offset
                .filter(|v| v.is_finite() && *v >= 0.0)
                .map_or(DEFAULT_VERTICAL_OFFSET, |v| v.min(MAX_VERTICAL_OFFSET)),
            fit_to_screen: config.fit_to_screen(),
            zoom: sanitize_zoom(config.zoom),
            show_caption: true,
        }
    }
}

impl LayoutParameters {
    /// Replaces the zoom signal when `zoom` is a usable value.
    #[must_use]
    pub fn with_zoom(mut self, zoom: Option<f32>) -> Self {
        if let Some(zoom) = sanitize_zoom(zoom) {
            self.zoom = Some(zoom);
        }
        self
    }

    #[must_use]
    pub fn with_caption(mut self, show_caption: bool) -> Self {
        self.show_caption = show_caption;
        self
    }

    /// Height reserved for the caption strip.
    #[must_use]
    pub fn caption_height(&self) -> f32 {
        if self.show_caption {
            CAPTION_HEIGHT
        } else {
            0.0
        }
    }

    /// Edge length of the overlay controls.
    #[must_use]
    pub fn control_size(&self) -> f32 {
        self.zoom.map_or(CONTROL_SIZE, |zoom| CONTROL_SIZE / zoom)
    }
}

fn sanitize_factor(value: Option<f32>, default: f32) -> f32 {
    value
        .filter(|f| f.is_finite() && *f > MIN_SCALE_FACTOR && *f <= MAX_SCALE_FACTOR)
        .unwrap_or(default)
}

fn sanitize_zoom(value: Option<f32>) -> Option<f32> {
    value.filter(|z| z.is_finite() && (MIN_ZOOM..=MAX_ZOOM).contains(z))
}

/// Computes and applies the geometry of `node` for `viewport`.
pub fn layout(node: &mut OverlayNode, viewport: Size, params: &LayoutParameters) {
    let caption = &mut node.figure.caption;
    caption.visible = params.show_caption;
    caption.height.set(params.caption_height());

    if params.fit_to_screen {
        layout_fit(node, viewport, params);
    } else {
        layout_bounded(node, viewport, params);
    }

    let control_size = params.control_size();
    for control in node.controls_mut() {
        control.size.set(control_size);
    }
}

fn layout_bounded(node: &mut OverlayNode, viewport: Size, params: &LayoutParameters) {
    let max_width = viewport.width * params.width_factor;
    let max_height = viewport.height * params.height_factor;
    let figure = &mut node.figure;

    figure.image.fit = None;
    figure.image.max_width.set(max_width);
    figure.image.max_height.set(max_height);

    let (width, height) = bounded_size(figure.image.natural_size(), max_width, max_height);
    figure.image.width.set(width);
    figure.image.height.set(height);
    figure.caption.width.set(width);
    figure.width.set(width);

    figure.left.set(non_negative((viewport.width - width) / 2.0));
    let caption_height = params.caption_height();
    figure
        .top
        .set(non_negative((viewport.height - (height + caption_height)) / 2.0) * params.vertical_offset);
}

fn layout_fit(node: &mut OverlayNode, viewport: Size, params: &LayoutParameters) {
    let available_width = viewport.width;
    let available_height = viewport.height - params.caption_height() - CLOSE_STRIP_HEIGHT;
    let figure = &mut node.figure;

    figure.image.max_width.clear();
    figure.image.max_height.clear();

    let image_ratio = figure
        .image
        .natural_size()
        .map_or(f32::NAN, |size| size.width / size.height);
    let axis = fit_axis(image_ratio, available_width / available_height);
    figure.image.fit = axis;

    let (width, height) = match axis {
        Some(FitAxis::Width) => (available_width, available_width / image_ratio),
        Some(FitAxis::Height) => (available_height * image_ratio, available_height),
        None => (f32::NAN, f32::NAN),
    };
    figure.image.width.set(width);
    figure.image.height.set(height);
    figure.caption.width.set(width);
    figure.width.set(width);

    figure.left.set(non_negative((viewport.width - width) / 2.0));
    figure
        .top
        .set(CLOSE_STRIP_HEIGHT + non_negative((available_height - height) / 2.0));
}

/// Picks the constraining axis: full width when the image is wider than the
/// available area, full height otherwise. `None` while either ratio is unknown.
#[must_use]
pub fn fit_axis(image_ratio: f32, area_ratio: f32) -> Option<FitAxis> {
    let usable = |ratio: f32| ratio.is_finite() && ratio > 0.0;
    if !(usable(image_ratio) && usable(area_ratio)) {
        return None;
    }
    if image_ratio > area_ratio {
        Some(FitAxis::Width)
    } else {
        Some(FitAxis::Height)
    }
}

/// Intrinsic size scaled down to fit the maxima. NaN while the intrinsic
/// size is unknown.
fn bounded_size(natural: Option<Size>, max_width: f32, max_height: f32) -> (f32, f32) {
    let Some(natural) = natural.filter(|size| size.width > 0.0 && size.height > 0.0) else {
        return (f32::NAN, f32::NAN);
    };
    if !(max_width.is_finite() && max_height.is_finite()) {
        return (f32::NAN, f32::NAN);
    }

    let scale = (max_width / natural.width)
        .min(max_height / natural.height)
        .clamp(0.0, 1.0);
    (natural.width * scale, natural.height * scale)
}

/// Floors at zero while letting NaN through.
fn non_negative(value: f32) -> f32 {
    if value < 0.0 {
        0.0
    } else {
        value
    }
}
