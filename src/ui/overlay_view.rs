// SPDX-License-Identifier: MPL-2.0
//! Renders an attached [`OverlayNode`] as a layer above the gallery.
//!
//! The backdrop fills the window and reports clicks that land on it directly.
//! The figure and the controls capture their own presses, so a click inside
//! them never reaches the backdrop.

use crate::config::{CAPTION_HEIGHT, CONTROL_SIZE};
use crate::i18n::fluent::I18n;
use crate::lightbox::node::{Control, ControlKind};
use crate::lightbox::{OverlayId, OverlayNode, PointerTarget};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Handle;
use iced::widget::{
    button, column, container, image, mouse_area, text, tooltip, Column, Space, Stack,
};
use iced::{ContentFit, Element, Length, Padding};

/// Contextual data needed to render the overlay.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub overlay: OverlayId,
    pub node: &'a OverlayNode,
}

/// A press inside the overlay, tagged with the overlay it was rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message {
    pub overlay: OverlayId,
    pub target: PointerTarget,
}

/// Render the overlay. Hidden nodes render as an empty layer.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if !ctx.node.is_visible() {
        return Space::new().into();
    }

    let figure = &ctx.node.figure;
    let offset = Padding {
        top: figure.top.get().unwrap_or(0.0),
        left: figure.left.get().unwrap_or(0.0),
        right: 0.0,
        bottom: 0.0,
    };
    let positioned = container(build_figure(&ctx))
        .padding(offset)
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(positioned)
        .push(
            container(control_button(&ctx, &ctx.node.close))
                .padding(spacing::XS)
                .width(Length::Fill)
                .align_x(Horizontal::Right),
        );

    if let Some(previous) = &ctx.node.previous {
        layers = layers.push(
            container(control_button(&ctx, previous))
                .padding(spacing::MD)
                .height(Length::Fill)
                .align_y(Vertical::Center),
        );
    }
    if let Some(next) = &ctx.node.next {
        layers = layers.push(
            container(control_button(&ctx, next))
                .padding(spacing::MD)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Right)
                .align_y(Vertical::Center),
        );
    }

    mouse_area(
        container(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message {
        overlay: ctx.overlay,
        target: PointerTarget::Backdrop,
    })
    .into()
}

fn build_figure<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let figure = &ctx.node.figure;
    let node_image = &figure.image;

    let picture: Element<'a, Message> = match (node_image.width.get(), node_image.height.get()) {
        (Some(width), Some(height)) => image(Handle::from_path(node_image.path()))
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Fill)
            .into(),
        _ => container(
            column![
                text(node_image.alt()).size(typography::BODY),
                text(ctx.i18n.tr("overlay-loading")).size(typography::CAPTION),
            ]
            .spacing(spacing::XXS),
        )
        .padding(spacing::LG)
        .into(),
    };

    let mut content = Column::new().push(picture);
    if figure.caption.visible {
        let height = figure.caption.height.get().unwrap_or(CAPTION_HEIGHT);
        content = content.push(
            container(text(figure.caption.text()).size(typography::CAPTION))
                .width(figure.caption.width.get().map_or(Length::Shrink, Length::Fixed))
                .height(Length::Fixed(height))
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .style(styles::overlay::caption),
        );
    }

    mouse_area(
        container(content)
            .width(figure.width.get().map_or(Length::Shrink, Length::Fixed))
            .style(styles::overlay::figure),
    )
    .on_press(Message {
        overlay: ctx.overlay,
        target: PointerTarget::Figure,
    })
    .into()
}

fn control_button<'a>(ctx: &ViewContext<'a>, control: &Control) -> Element<'a, Message> {
    let size = control.size.get().unwrap_or(CONTROL_SIZE);
    let (glyph, label_key) = match control.kind() {
        ControlKind::Close => ("✕", "overlay-close"),
        ControlKind::Previous => ("‹", "overlay-previous"),
        ControlKind::Next => ("›", "overlay-next"),
    };

    let control_button = button(
        text(glyph)
            .size(size * 0.5)
            .width(Length::Fill)
            .height(Length::Fill)
            .center(),
    )
    .width(Length::Fixed(size))
    .height(Length::Fixed(size))
    .padding(0)
    .style(styles::button::overlay_control)
    .on_press(Message {
        overlay: ctx.overlay,
        target: PointerTarget::Control(control.kind()),
    });

    tooltip(
        control_button,
        text(ctx.i18n.tr(label_key)).size(typography::CAPTION),
        tooltip::Position::Bottom,
    )
    .gap(spacing::XXS)
    .into()
}
