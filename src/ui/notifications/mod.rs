// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Short-lived messages shown in the bottom-right corner after loading or
//! saving a CV and when settings could not be read. Text is stored as an
//! i18n key and resolved at render time, so toasts follow language changes.
//!
//! - [`notification`] - A single toast and its severity
//! - [`manager`] - Visible/queued toasts and auto-dismiss on tick
//! - [`toast`] - Rendering

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
