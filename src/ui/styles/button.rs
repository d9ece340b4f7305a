// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Header toggle. `active` renders the brand color.
pub fn toggle(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if !active {
            return button::secondary(theme, status);
        }
        let background = match status {
            button::Status::Hovered => palette::PRIMARY_400,
            _ => palette::PRIMARY_500,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Thumbnail and folder tiles: flat until hovered.
pub fn tile(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.extended_palette().background.base.text;
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::TILE_HOVER,
            ..palette::PRIMARY_500
        })),
        _ => None,
    };
    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Overlay controls (close, previous, next).
pub fn overlay_control(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::CONTROL_HOVER,
        button::Status::Pressed => opacity::CONTROL_PRESSED,
        _ => opacity::CONTROL,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: shadow::MD,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_control_darkens_on_hover() {
        let theme = Theme::Dark;
        let idle = overlay_control(&theme, button::Status::Active);
        let hovered = overlay_control(&theme, button::Status::Hovered);
        let alpha = |style: button::Style| match style.background {
            Some(Background::Color(color)) => color.a,
            _ => 0.0,
        };
        assert!(alpha(hovered) > alpha(idle));
    }

    #[test]
    fn idle_tile_has_no_background() {
        assert!(tile(&Theme::Light, button::Status::Active).background.is_none());
    }
}
