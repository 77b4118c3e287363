// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that floats an optional popup below its content.
//!
//! The popup is drawn as an overlay: it takes no space in the surrounding
//! layout and is flipped above the anchor when there is no room below.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Point, Rectangle, Size, Vector};

/// Content with a popup anchored to its bottom-left corner.
pub struct PopupAnchor<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    popup: Option<Element<'a, Message, Theme, Renderer>>,
    gap: f32,
}

impl<'a, Message, Theme, Renderer> PopupAnchor<'a, Message, Theme, Renderer> {
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            popup: None,
            gap: 0.0,
        }
    }

    /// Sets the popup; `None` keeps it hidden.
    #[must_use]
    pub fn popup(mut self, popup: Option<Element<'a, Message, Theme, Renderer>>) -> Self {
        self.popup = popup;
        self
    }

    /// Vertical distance between the content and the popup.
    #[must_use]
    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    fn elements(&self) -> Vec<&Element<'a, Message, Theme, Renderer>> {
        std::iter::once(&self.content).chain(&self.popup).collect()
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for PopupAnchor<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn size_hint(&self) -> Size<Length> {
        self.content.as_widget().size_hint()
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
        self.elements().into_iter().map(widget::Tree::new).collect()
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&self.elements());
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
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        let mut children = tree.children.iter_mut();

        let content = self.content.as_widget_mut().overlay(
            children.next()?,
            layout,
            renderer,
            viewport,
            translation,
        );

        let popup = match (self.popup.as_mut(), children.next()) {
            (Some(popup), Some(popup_tree)) => {
                Some(overlay::Element::new(Box::new(Popup {
                    position: layout.position() + translation,
                    anchor: layout.bounds(),
                    gap: self.gap,
                    popup,
                    tree: popup_tree,
                })))
            }
            _ => None,
        };

        if content.is_some() || popup.is_some() {
            Some(overlay::Group::with_children(content.into_iter().chain(popup).collect()).overlay())
        } else {
            None
        }
    }
}

impl<'a, Message, Theme, Renderer> From<PopupAnchor<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(anchor: PopupAnchor<'a, Message, Theme, Renderer>) -> Self {
        Self::new(anchor)
    }
}

/// Helper function to anchor an optional popup below `content`.
pub fn popup_anchor<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    popup: Option<Element<'a, Message, Theme, Renderer>>,
) -> PopupAnchor<'a, Message, Theme, Renderer> {
    PopupAnchor::new(content).popup(popup)
}

/// Top-left corner of a popup of `size` anchored to `anchor` inside a
/// window of `bounds`. Prefers below, flips above when it would overflow
/// the bottom edge and is clamped horizontally.
pub fn place(anchor: Rectangle, size: Size, gap: f32, bounds: Size) -> Point {
    let below = anchor.y + anchor.height + gap;
    let above = anchor.y - gap - size.height;
    let y = if below + size.height > bounds.height && above >= 0.0 {
        above
    } else {
        below
    };
    let max_x = (bounds.width - size.width).max(0.0);
    Point::new(anchor.x.clamp(0.0, max_x), y)
}

struct Popup<'a, 'b, Message, Theme, Renderer> {
    position: Point,
    anchor: Rectangle,
    gap: f32,
    popup: &'b mut Element<'a, Message, Theme, Renderer>,
    tree: &'b mut widget::Tree,
}

impl<Message, Theme, Renderer> overlay::Overlay<Message, Theme, Renderer>
    for Popup<'_, '_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn layout(&mut self, renderer: &Renderer, bounds: Size) -> layout::Node {
        let node = self.popup.as_widget_mut().layout(
            self.tree,
            renderer,
            &layout::Limits::new(Size::ZERO, bounds),
        );
        let anchor = Rectangle::new(self.position, self.anchor.size());
        let size = node.size();
        node.move_to(place(anchor, size, self.gap, bounds))
    }

    fn draw(
        &self,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
    ) {
        self.popup.as_widget().draw(
            self.tree,
            renderer,
            theme,
            style,
            layout,
            cursor,
            &layout.bounds(),
        );
    }

    fn update(
        &mut self,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
    ) {
        self.popup.as_widget_mut().update(
            self.tree,
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            &layout.bounds(),
        );
    }

    fn mouse_interaction(
        &self,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        if !cursor.is_over(layout.bounds()) {
            return mouse::Interaction::None;
        }

        // Claim the cursor so widgets under the popup stay inert.
        self.popup
            .as_widget()
            .mouse_interaction(self.tree, layout, cursor, &layout.bounds(), renderer)
            .max(mouse::Interaction::Idle)
    }
}
