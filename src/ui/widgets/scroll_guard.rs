// SPDX-License-Identifier: MPL-2.0
//! Scroll guard for the gallery grid.
//!
//! While the overlay is open the wheel steps between images, so the grid
//! underneath must not move. The guard is transparent when `suppress` is off.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Rectangle, Size};

/// Grid wrapper; drops `WheelScrolled` before it reaches the content when
/// `suppress` is set.
pub struct ScrollGuard<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    suppress: bool,
}

impl<'a, Message, Theme, Renderer> ScrollGuard<'a, Message, Theme, Renderer> {
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            suppress: false,
        }
    }

    #[must_use]
    pub fn suppress(mut self, suppress: bool) -> Self {
        self.suppress = suppress;
        self
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for ScrollGuard<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if self.suppress && is_wheel_event(event) {
            return;
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<ScrollGuard<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(guard: ScrollGuard<'a, Message, Theme, Renderer>) -> Self {
        Self::new(guard)
    }
}

/// Guards `content`, typically the gallery `scrollable`.
pub fn scroll_guard<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    suppress: bool,
) -> ScrollGuard<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    ScrollGuard::new(content).suppress(suppress)
}

fn is_wheel_event(event: &Event) -> bool {
    matches!(event, Event::Mouse(mouse::Event::WheelScrolled { .. }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suppression_is_opt_in() {
        let guard: ScrollGuard<'_, (), iced::Theme, iced::Renderer> =
            ScrollGuard::new(iced::widget::text("grid"));
        assert!(!guard.suppress);
        assert!(guard.suppress(true).suppress);
    }

    #[test]
    fn only_wheel_events_are_guarded() {
        let guarded = [
            mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 },
            mouse::ScrollDelta::Pixels { x: 0.0, y: -4.0 },
        ];
        for delta in guarded {
            assert!(is_wheel_event(&Event::Mouse(mouse::Event::WheelScrolled {
                delta
            })));
        }

        let passed_through = [
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            Event::Keyboard(iced::keyboard::Event::ModifiersChanged(
                iced::keyboard::Modifiers::CTRL,
            )),
        ];
        for event in &passed_through {
            assert!(!is_wheel_event(event));
        }
    }
}
