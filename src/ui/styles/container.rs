// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Header bar, derived from the theme background so it reads in light and
/// dark modes.
pub fn header(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}

/// Placeholder square shown while a thumbnail is not decoded yet.
pub fn thumbnail_frame(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.strong.color)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Inline warning line in the header.
pub fn warning(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(palette::WARNING_500),
        ..Default::default()
    }
}

/// Error line replacing the grid when a directory cannot be listed.
pub fn error(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(palette::ERROR_500),
        ..Default::default()
    }
}
