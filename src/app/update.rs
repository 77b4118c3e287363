// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers receive an [`UpdateContext`] holding mutable borrows of the
//! application state, so each one only touches what it needs and can be
//! exercised without a running window.

use super::persisted_state::AppState;
use super::{persistence, Message, Screen};
use crate::cv::{storage, CvDocument};
use crate::i18n::fluent::I18n;
use crate::ui::form;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::sections::Event as SectionEvent;
use crate::ui::settings::{self, Event as SettingsEvent};
use crate::ui::state::drag_reorder::{autoscroll_delta, AutoscrollSettings};
use crate::ui::theming::ThemeMode;
use chrono::NaiveDate;
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{operation, Id};
use iced::{Point, Task};
use std::path::{Path, PathBuf};

/// Suffix appended to file names chosen without an extension.
const SAVE_SUFFIX: &str = "cv.toml";

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub settings: &'a mut settings::State,
    pub document: &'a mut CvDocument,
    pub document_path: &'a mut Option<PathBuf>,
    pub dirty: &'a mut bool,
    pub form: &'a mut form::State,
    pub today: NaiveDate,
    pub autoscroll: AutoscrollSettings,
    pub window_height: &'a mut f32,
    pub theme_mode: &'a mut ThemeMode,
    pub app_state: &'a mut AppState,
    pub notifications: &'a mut notifications::Manager,
    pub config_dir: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
}

pub fn handle_form_message(ctx: &mut UpdateContext<'_>, message: form::Message) -> Task<Message> {
    if ctx.form.update(message, ctx.document, ctx.today) == SectionEvent::Changed {
        *ctx.dirty = true;
    }
    Task::none()
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, *ctx.screen == Screen::Settings) {
        NavbarEvent::NewDocument => {
            new_document(ctx);
            Task::none()
        }
        NavbarEvent::OpenDocument => open_dialog(ctx.app_state.last_directory.clone()),
        NavbarEvent::SaveDocument => match ctx.document_path.clone() {
            Some(path) => {
                save_document(ctx, path);
                Task::none()
            }
            None => save_as_dialog(
                ctx.app_state.last_directory.clone(),
                suggested_file_name(ctx.document),
            ),
        },
        NavbarEvent::SaveDocumentAs => save_as_dialog(
            ctx.app_state.last_directory.clone(),
            suggested_file_name(ctx.document),
        ),
        NavbarEvent::OpenSettings => {
            ctx.form.close_popups();
            *ctx.screen = Screen::Settings;
            Task::none()
        }
        NavbarEvent::CloseSettings => {
            *ctx.screen = Screen::Editor;
            Task::none()
        }
    }
}

pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match ctx.settings.update(message, ctx.i18n.current_locale()) {
        SettingsEvent::None => {}
        SettingsEvent::LanguageChanged(locale) => {
            persistence::apply_language_change(
                ctx.i18n,
                locale,
                *ctx.theme_mode,
                ctx.config_dir.clone(),
                ctx.notifications,
            );
        }
        SettingsEvent::ThemeModeChanged(mode) => {
            *ctx.theme_mode = mode;
            if let Some(key) = persistence::persist_preferences(
                mode,
                ctx.i18n.current_locale(),
                ctx.config_dir.clone(),
            ) {
                ctx.notifications.push(Notification::warning(key));
            }
        }
    }
    Task::none()
}

pub fn handle_open_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    if let Some(path) = path {
        load_document(ctx, path);
    }
    Task::none()
}

pub fn handle_save_as_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    if let Some(path) = path {
        save_document(ctx, with_document_extension(path));
    }
    Task::none()
}

pub fn handle_pointer_pressed(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.form.pointer_pressed();
    Task::none()
}

pub fn handle_pointer_released(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.form.pointer_released(ctx.document, ctx.today) == SectionEvent::Changed {
        *ctx.dirty = true;
    }
    Task::none()
}

/// Scrolls the form when the pointer is dragged near a window edge.
pub fn handle_cursor_moved(ctx: &mut UpdateContext<'_>, position: Point) -> Task<Message> {
    if !ctx.form.is_dragging() {
        return Task::none();
    }
    match autoscroll_delta(position.y, *ctx.window_height, ctx.autoscroll) {
        Some(delta) => operation::scroll_by(
            Id::new(form::SCROLLABLE_ID),
            AbsoluteOffset { x: 0.0, y: delta },
        ),
        None => Task::none(),
    }
}

/// Starts a fresh, unsaved document.
pub fn new_document(ctx: &mut UpdateContext<'_>) {
    *ctx.document = CvDocument::default();
    *ctx.document_path = None;
    *ctx.dirty = false;
    ctx.form.reset(ctx.document, ctx.today);
    *ctx.screen = Screen::Editor;
    ctx.app_state.forget_document();
    persistence::persist_state(ctx.app_state, ctx.data_dir.clone(), ctx.notifications);
    tracing::info!("started new document");
}

/// Replaces the current document with the one at `path`. On failure the
/// current document is left untouched.
pub fn load_document(ctx: &mut UpdateContext<'_>, path: PathBuf) {
    match storage::load_from_path(&path) {
        Ok(document) => {
            *ctx.document = document;
            *ctx.dirty = false;
            ctx.form.reset(ctx.document, ctx.today);
            *ctx.screen = Screen::Editor;
            ctx.app_state.remember_document(&path);
            persistence::persist_state(ctx.app_state, ctx.data_dir.clone(), ctx.notifications);
            ctx.notifications.clear_matching("notification-open-error");
            ctx.notifications.push(
                Notification::success("notification-open-success")
                    .with_arg("name", display_name(&path)),
            );
            *ctx.document_path = Some(path);
        }
        Err(err) => {
            tracing::error!(path = %path.display(), %err, "failed to open document");
            ctx.notifications.push(
                Notification::error("notification-open-error")
                    .with_arg("name", display_name(&path))
                    .with_arg("reason", ctx.i18n.tr(err.i18n_key())),
            );
        }
    }
}

/// Writes the document to `path`, which becomes its location on success.
pub fn save_document(ctx: &mut UpdateContext<'_>, path: PathBuf) {
    match storage::save_to_path(ctx.document, &path) {
        Ok(()) => {
            *ctx.dirty = false;
            ctx.app_state.remember_document(&path);
            persistence::persist_state(ctx.app_state, ctx.data_dir.clone(), ctx.notifications);
            ctx.notifications.push(
                Notification::success("notification-save-success")
                    .with_arg("name", display_name(&path)),
            );
            *ctx.document_path = Some(path);
        }
        Err(err) => {
            tracing::error!(path = %path.display(), %err, "failed to save document");
            ctx.notifications.push(
                Notification::error("notification-save-error")
                    .with_arg("name", display_name(&path))
                    .with_arg("reason", ctx.i18n.tr(err.i18n_key())),
            );
        }
    }
}

fn open_dialog(last_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .add_filter("CV", &[storage::DOCUMENT_EXTENSION]);
            if let Some(dir) = last_directory.filter(|dir| dir.exists()) {
                dialog = dialog.set_directory(dir);
            }
            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::OpenDialogResult,
    )
}

fn save_as_dialog(last_directory: Option<PathBuf>, file_name: String) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_file_name(file_name)
                .add_filter("CV", &[storage::DOCUMENT_EXTENSION]);
            if let Some(dir) = last_directory.filter(|dir| dir.exists()) {
                dialog = dialog.set_directory(dir);
            }
            dialog.save_file().await.map(|h| h.path().to_path_buf())
        },
        Message::SaveAsDialogResult,
    )
}

/// `ana-souza.cv.toml` from the full name, `cv.cv.toml` when unnamed.
fn suggested_file_name(document: &CvDocument) -> String {
    let slug: String = document
        .personal
        .full_name
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-')
        .collect();
    let stem = if slug.is_empty() { "cv" } else { slug.as_str() };
    format!("{stem}.{SAVE_SUFFIX}")
}

fn with_document_extension(mut path: PathBuf) -> PathBuf {
    if path.extension().is_none() {
        path.set_extension(SAVE_SUFFIX);
    }
    path
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
