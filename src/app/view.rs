// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The gallery is always the base layer; an attached overlay is stacked
//! above it.

use super::Message;
use crate::config::LabelConfig;
use crate::i18n::fluent::I18n;
use crate::lightbox::Lightbox;
use crate::ui::{gallery_view, overlay_view};
use iced::widget::Stack;
use iced::{Element, Length};

/// Contextual data needed to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub lightbox: &'a Lightbox,
    pub labels: &'a LabelConfig,
    pub fit_to_screen: bool,
    /// Translation key of a warning to show in the header.
    pub warning: Option<&'static str>,
    pub scan_error: Option<&'a str>,
    pub suppress_scroll: bool,
}

/// Renders the gallery and, if presented, the overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let gallery = gallery_view::view(gallery_view::ViewContext {
        i18n: ctx.i18n,
        gallery: ctx.lightbox.gallery(),
        labels: ctx.labels,
        fit_to_screen: ctx.fit_to_screen,
        warning: ctx.warning.map(|key| ctx.i18n.tr(key)),
        error: ctx.scan_error.map(str::to_string),
        suppress_scroll: ctx.suppress_scroll,
    })
    .map(Message::Gallery);

    let Some((overlay, node)) = ctx.lightbox.overlay() else {
        return gallery;
    };

    let layer = overlay_view::view(overlay_view::ViewContext {
        i18n: ctx.i18n,
        overlay,
        node,
    })
    .map(Message::Overlay);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(gallery)
        .push(layer)
        .into()
}
