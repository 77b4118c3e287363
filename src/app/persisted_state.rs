// SPDX-License-Identifier: MPL-2.0
//! Application state persistence using CBOR format.
//!
//! This module handles session state that should survive restarts but is not
//! user-configurable (unlike preferences in `settings.toml`): the document
//! that was open last and the directory the file dialogs should start in.
//!
//! # Path Resolution
//!
//! 1. Use `load_from()`/`save_to()` with explicit path override
//! 2. Set `ICED_CV_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Application state that persists across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Document that was open when the application last saved state.
    /// Reopened on startup when no path is given on the command line.
    #[serde(default)]
    pub last_document: Option<PathBuf>,

    /// Last directory used by the Open/Save dialogs.
    #[serde(default)]
    pub last_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads application state from the default location.
    ///
    /// Returns a tuple of (state, optional_warning). If loading fails, returns
    /// default state with the i18n key of a warning for the notification area.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads application state from a custom directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(state) => (state, None),
                    Err(err) => {
                        tracing::warn!(path = %path.display(), %err, "cannot parse state file");
                        (
                            Self::default(),
                            Some("notification-state-parse-error".to_string()),
                        )
                    }
                }
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "cannot read state file");
                (
                    Self::default(),
                    Some("notification-state-read-error".to_string()),
                )
            }
        }
    }

    /// Saves application state to the default location.
    ///
    /// Returns the i18n key of a warning if saving failed.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves application state to a custom directory.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-state-dir-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if let Err(err) = ciborium::into_writer(self, writer) {
                    tracing::warn!(path = %path.display(), %err, "cannot write state file");
                    return Some("notification-state-write-error".to_string());
                }
                None
            }
            Err(_) => Some("notification-state-create-error".to_string()),
        }
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }

    /// Records `file_path` as the current document and its parent as the
    /// dialog directory.
    pub fn remember_document(&mut self, file_path: &Path) {
        self.last_document = Some(file_path.to_path_buf());
        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                self.last_directory = Some(parent.to_path_buf());
            }
        }
    }

    /// Forgets the current document (e.g. after "New").
    pub fn forget_document(&mut self) {
        self.last_document = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_state_is_empty() {
        let state = AppState::default();
        assert!(state.last_document.is_none());
        assert!(state.last_directory.is_none());
    }

    #[test]
    fn remember_document_extracts_parent() {
        let mut state = AppState::default();
        state.remember_document(Path::new("/home/user/cv/main.toml"));
        assert_eq!(
            state.last_document,
            Some(PathBuf::from("/home/user/cv/main.toml"))
        );
        assert_eq!(state.last_directory, Some(PathBuf::from("/home/user/cv")));
    }

    #[test]
    fn remember_relative_file_keeps_previous_directory() {
        let mut state = AppState {
            last_directory: Some(PathBuf::from("/docs")),
            ..AppState::default()
        };
        state.remember_document(Path::new("cv.toml"));
        assert_eq!(state.last_directory, Some(PathBuf::from("/docs")));
    }

    #[test]
    fn forget_document_keeps_directory() {
        let mut state = AppState::default();
        state.remember_document(Path::new("/a/b.toml"));
        state.forget_document();
        assert!(state.last_document.is_none());
        assert_eq!(state.last_directory, Some(PathBuf::from("/a")));
    }

    #[test]
    fn save_to_and_load_from_custom_directory() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let original = AppState {
            last_document: Some(PathBuf::from("/test/cv.toml")),
            last_directory: Some(PathBuf::from("/test")),
        };

        assert!(original.save_to(Some(base_dir.clone())).is_none());
        assert!(base_dir.join(STATE_FILE).exists());

        let (loaded, warning) = AppState::load_from(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(original, loaded);
    }

    #[test]
    fn load_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("create temp dir");
        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn load_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join(STATE_FILE), "not valid cbor data").expect("write file");

        let (state, warning) = AppState::load_from(Some(base_dir));
        assert_eq!(warning.as_deref(), Some("notification-state-parse-error"));
        assert_eq!(state, AppState::default());
    }
}
