// SPDX-License-Identifier: MPL-2.0
//! Overlay styles: backdrop, figure and caption.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, GRAY_200, GRAY_900, WHITE},
    radius, shadow,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dimmed layer covering the whole window.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Frame around the enlarged image and its caption.
pub fn figure(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(GRAY_900)),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

pub fn caption(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(GRAY_200),
        ..Default::default()
    }
}
