// SPDX-License-Identifier: MPL-2.0
//! Preference and state persistence.
//!
//! Failures never interrupt editing: they are logged and surfaced as warning
//! toasts through the returned i18n key.

use super::persisted_state::AppState;
use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{Manager, Notification};
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

const CONFIG_SAVE_ERROR: &str = "notification-config-save-error";

/// Writes the theme mode and UI language to `settings.toml`, keeping the
/// other sections of an existing file.
pub fn persist_preferences(
    theme_mode: ThemeMode,
    locale: &LanguageIdentifier,
    config_dir: Option<PathBuf>,
) -> Option<&'static str> {
    let (mut cfg, _) = config::load_with_override(config_dir.clone());
    cfg.general.theme_mode = theme_mode;
    cfg.general.language = Some(locale.to_string());

    match config::save_with_override(&cfg, config_dir) {
        Ok(()) => {
            tracing::debug!(?theme_mode, %locale, "saved preferences");
            None
        }
        Err(err) => {
            tracing::warn!(%err, "failed to save preferences");
            Some(CONFIG_SAVE_ERROR)
        }
    }
}

/// Switches the UI language and persists the choice.
pub fn apply_language_change(
    i18n: &mut I18n,
    locale: LanguageIdentifier,
    theme_mode: ThemeMode,
    config_dir: Option<PathBuf>,
    notifications: &mut Manager,
) {
    i18n.set_locale(locale);
    tracing::info!(locale = %i18n.current_locale(), "UI language changed");
    if let Some(key) = persist_preferences(theme_mode, i18n.current_locale(), config_dir) {
        notifications.push(Notification::warning(key));
    }
}

/// Saves `state`, turning a failure into a warning toast.
pub fn persist_state(state: &AppState, data_dir: Option<PathBuf>, notifications: &mut Manager) {
    if let Some(key) = state.save_to(data_dir) {
        notifications.push(Notification::warning(key));
    }
}
