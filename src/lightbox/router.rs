// SPDX-License-Identifier: MPL-2.0
//! Maps pointer, keyboard and wheel input to index transitions.
//!
//! Routing is pure: each function takes the index the listener was bound to
//! and the gallery length, and returns a [`Route`] for the lightbox to apply.

use super::node::ControlKind;
use iced::keyboard::{self, key::Named, Key};
use iced::mouse::ScrollDelta;

/// Outcome of routing one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Present(usize),
    Close,
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Result of routing a wheel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelRoute {
    pub route: Route,
    /// Whether the default scroll of the content under the overlay must be
    /// suppressed.
    pub suppress_default: bool,
}

/// Steps one position from `index`, staying within `0..len`.
#[must_use]
pub fn step(index: usize, direction: Direction, len: usize) -> Route {
    let target = match direction {
        Direction::Previous => index.checked_sub(1),
        Direction::Next => index.checked_add(1).filter(|next| *next < len),
    };
    target.map_or(Route::Ignore, Route::Present)
}

/// Click on an overlay control.
#[must_use]
pub fn route_control(control: ControlKind, index: usize, len: usize) -> Route {
    match control {
        ControlKind::Close => Route::Close,
        ControlKind::Previous => step(index, Direction::Previous, len),
        ControlKind::Next => step(index, Direction::Next, len),
    }
}

/// Click on a thumbnail in the gallery grid.
#[must_use]
pub fn route_thumbnail(index: usize, len: usize) -> Route {
    if index < len {
        Route::Present(index)
    } else {
        Route::Ignore
    }
}

#[must_use]
pub fn route_key(key: &Key, index: usize, len: usize) -> Route {
    match key {
        Key::Named(Named::ArrowLeft | Named::PageUp) => step(index, Direction::Previous, len),
        Key::Named(Named::ArrowRight | Named::PageDown) => step(index, Direction::Next, len),
        Key::Named(Named::Escape) => Route::Close,
        _ => Route::Ignore,
    }
}

/// Zoom-intent modifiers let the wheel through untouched.
#[must_use]
pub fn is_zoom_intent(modifiers: keyboard::Modifiers) -> bool {
    modifiers.control() || modifiers.command()
}

/// Vertical wheel delta, positive when scrolling downward.
#[must_use]
pub fn wheel_delta_y(delta: ScrollDelta) -> f32 {
    match delta {
        ScrollDelta::Lines { y, .. } | ScrollDelta::Pixels { y, .. } => -y,
    }
}

#[must_use]
pub fn route_wheel(
    delta: ScrollDelta,
    modifiers: keyboard::Modifiers,
    index: usize,
    len: usize,
) -> WheelRoute {
    if is_zoom_intent(modifiers) {
        return WheelRoute {
            route: Route::Ignore,
            suppress_default: false,
        };
    }

    let delta_y = wheel_delta_y(delta);
    let route = if delta_y < 0.0 {
        step(index, Direction::Previous, len)
    } else if delta_y > 0.0 {
        step(index, Direction::Next, len)
    } else {
        Route::Ignore
    };

    WheelRoute {
        route,
        suppress_default: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::Modifiers;

    fn lines(y: f32) -> ScrollDelta {
        ScrollDelta::Lines { x: 0.0, y }
    }

    #[test]
    fn step_respects_bounds() {
        assert_eq!(step(0, Direction::Previous, 3), Route::Ignore);
        assert_eq!(step(2, Direction::Next, 3), Route::Ignore);
        assert_eq!(step(1, Direction::Previous, 3), Route::Present(0));
        assert_eq!(step(1, Direction::Next, 3), Route::Present(2));
    }

    #[test]
    fn keys_map_to_routes() {
        let left = Key::Named(Named::ArrowLeft);
        let page_up = Key::Named(Named::PageUp);
        let right = Key::Named(Named::ArrowRight);
        let page_down = Key::Named(Named::PageDown);
        let escape = Key::Named(Named::Escape);

        assert_eq!(route_key(&left, 2, 5), Route::Present(1));
        assert_eq!(route_key(&page_up, 2, 5), Route::Present(1));
        assert_eq!(route_key(&right, 2, 5), Route::Present(3));
        assert_eq!(route_key(&page_down, 2, 5), Route::Present(3));
        assert_eq!(route_key(&escape, 2, 5), Route::Close);
        assert_eq!(route_key(&Key::Character("a".into()), 2, 5), Route::Ignore);
    }

    #[test]
    fn keys_are_no_ops_past_the_ends() {
        assert_eq!(route_key(&Key::Named(Named::ArrowLeft), 0, 5), Route::Ignore);
        assert_eq!(route_key(&Key::Named(Named::ArrowRight), 4, 5), Route::Ignore);
    }

    #[test]
    fn wheel_down_goes_next_and_up_goes_previous() {
        // Wheel rotated toward the user reports negative y, i.e. downward.
        let down = route_wheel(lines(-1.0), Modifiers::empty(), 1, 3);
        assert_eq!(down.route, Route::Present(2));
        assert!(down.suppress_default);

        let up = route_wheel(lines(1.0), Modifiers::empty(), 1, 3);
        assert_eq!(up.route, Route::Present(0));
        assert!(up.suppress_default);
    }

    #[test]
    fn wheel_with_zoom_intent_is_ignored() {
        let outcome = route_wheel(lines(-1.0), Modifiers::CTRL, 1, 3);
        assert_eq!(outcome.route, Route::Ignore);
        assert!(!outcome.suppress_default);
    }

    #[test]
    fn wheel_at_bounds_still_suppresses_scroll() {
        let outcome = route_wheel(lines(-3.0), Modifiers::empty(), 2, 3);
        assert_eq!(outcome.route, Route::Ignore);
        assert!(outcome.suppress_default);
    }

    #[test]
    fn pixel_deltas_share_the_sign_convention() {
        assert!(wheel_delta_y(ScrollDelta::Pixels { x: 0.0, y: -12.0 }) > 0.0);
        assert!(wheel_delta_y(lines(2.0)) < 0.0);
    }

    #[test]
    fn controls_and_thumbnails_route() {
        assert_eq!(route_control(ControlKind::Close, 0, 1), Route::Close);
        assert_eq!(route_control(ControlKind::Next, 0, 2), Route::Present(1));
        assert_eq!(route_control(ControlKind::Previous, 0, 2), Route::Ignore);
        assert_eq!(route_thumbnail(1, 2), Route::Present(1));
        assert_eq!(route_thumbnail(2, 2), Route::Ignore);
    }
}
