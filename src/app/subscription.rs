// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window-level pointer tracking is only subscribed while it is needed: when
//! a date picker popup is open (outside clicks close it) or a card is being
//! dragged (release ends the drag, movement drives auto-scroll). Iced drops
//! the listener as soon as the condition clears.

use super::Message;
use crate::config::NOTIFICATION_TICK_MS;
use iced::{event, mouse, time, window, Subscription};
use std::time::Duration;

/// Resize events are always needed to size the auto-scroll bands.
pub fn create_window_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Pointer events while a popup is open or a drag is in progress.
pub fn create_pointer_subscription(popup_open: bool, dragging: bool) -> Subscription<Message> {
    if !popup_open && !dragging {
        return Subscription::none();
    }

    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(Message::PointerPressed)
        }
        event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PointerReleased)
        }
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::CursorMoved(position))
        }
        _ => None,
    })
}

/// Periodic tick while toasts are visible or queued.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(NOTIFICATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
