// SPDX-License-Identifier: MPL-2.0
//! Visible and queued toasts.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;
use std::time::Instant;

/// Toasts shown at once; the rest wait in a queue.
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    Tick,
}

#[derive(Debug, Default)]
pub struct Manager {
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Error => tracing::error!(key = notification.key(), "notification"),
            Severity::Warning => tracing::warn!(key = notification.key(), "notification"),
            Severity::Success | Severity::Info => {
                tracing::debug!(key = notification.key(), "notification");
            }
        }

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Returns `true` if a toast with `id` existed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote(Instant::now());
            true
        } else if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            true
        } else {
            false
        }
    }

    pub fn tick(&mut self, now: Instant) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.is_expired(now));
        if self.visible.len() != before {
            self.promote(now);
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
            Message::Tick => self.tick(Instant::now()),
        }
    }

    /// Drops toasts whose key starts with `prefix`, e.g. stale load errors
    /// once a document opened successfully.
    pub fn clear_matching(&mut self, prefix: &str) {
        self.visible.retain(|n| !n.key().starts_with(prefix));
        self.queue.retain(|n| !n.key().starts_with(prefix));
        self.promote(Instant::now());
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Drives the tick subscription.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn promote(&mut self, now: Instant) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(mut next) = self.queue.pop_front() else {
                break;
            };
            next.mark_shown(now);
            self.visible.push_back(next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn overflow_is_queued_then_promoted() {
        let mut manager = Manager::new();
        let first = Notification::error("first");
        let first_id = first.id();
        manager.push(first);
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::error(format!("more-{i}")));
        }
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);

        assert!(manager.dismiss(first_id));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn tick_removes_expired_but_keeps_errors() {
        let mut manager = Manager::new();
        manager.push(Notification::success("saved"));
        manager.push(Notification::error("failed"));

        manager.tick(Instant::now() + Duration::from_secs(10));
        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.visible().next().map(Notification::key), Some("failed"));
    }

    #[test]
    fn dismiss_unknown_id_is_false() {
        let mut manager = Manager::new();
        assert!(!manager.dismiss(Notification::info("x").id()));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn clear_matching_keeps_other_keys() {
        let mut manager = Manager::new();
        manager.push(Notification::error("notification-open-error"));
        manager.push(Notification::success("notification-save-success"));
        manager.clear_matching("notification-open-");
        assert_eq!(manager.visible_count(), 1);
        assert_eq!(
            manager.visible().next().map(Notification::key),
            Some("notification-save-success")
        );
    }

    #[test]
    fn update_dismiss_message() {
        let mut manager = Manager::new();
        let n = Notification::warning("w");
        let id = n.id();
        manager.push(n);
        manager.update(Message::Dismiss(id));
        assert!(!manager.has_notifications());
    }
}
