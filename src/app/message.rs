// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::form;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::settings;
use iced::{Point, Size};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. Component messages are
/// forwarded; the remaining variants come from dialogs and subscriptions.
#[derive(Debug, Clone)]
pub enum Message {
    Form(form::Message),
    Navbar(navbar::Message),
    Settings(settings::Message),
    Notification(notifications::NotificationMessage),
    /// Result of the Open dialog (`None` when cancelled).
    OpenDialogResult(Option<PathBuf>),
    /// Result of the Save As dialog (`None` when cancelled).
    SaveAsDialogResult(Option<PathBuf>),
    /// Left button pressed anywhere in the window.
    PointerPressed,
    /// Left button released anywhere in the window.
    PointerReleased,
    CursorMoved(Point),
    WindowResized(Size),
    /// Periodic tick for toast auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `pt-BR`).
    pub lang: Option<String>,
    /// Optional CV document to open on startup.
    pub file_path: Option<String>,
    /// Data directory override (state file).
    /// Takes precedence over `ICED_CV_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Config directory override (`settings.toml`).
    /// Takes precedence over `ICED_CV_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
