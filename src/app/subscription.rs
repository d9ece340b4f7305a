// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native events to `App::update`:
//! - window open/resize events always (they carry the viewport size)
//! - wheel events always, even when a widget captured them
//! - keyboard events only when no widget captured them

use super::Message;
use iced::{event, keyboard, mouse, window, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| route(event, status))
}

fn route(event: event::Event, status: event::Status) -> Option<Message> {
    match &event {
        event::Event::Window(window::Event::Resized(_) | window::Event::Opened { .. }) => {
            Some(Message::RawEvent(event))
        }
        event::Event::Mouse(mouse::Event::WheelScrolled { .. }) => Some(Message::RawEvent(event)),
        event::Event::Keyboard(keyboard::Event::ModifiersChanged(_)) => {
            Some(Message::RawEvent(event))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed { .. }) => match status {
            event::Status::Ignored => Some(Message::RawEvent(event)),
            event::Status::Captured => None,
        },
        _ => None,
    }
}
