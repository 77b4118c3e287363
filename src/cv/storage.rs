// SPDX-License-Identifier: MPL-2.0
//! Loading and saving CV documents as TOML files.
//!
//! Documents are plain TOML so they stay diffable and hand-editable. Unknown
//! keys are ignored and missing sections default to empty, so files written by
//! older versions keep loading.

use super::CvDocument;
use crate::error::{DocumentError, Result};
use std::fs;
use std::path::Path;

/// File extension proposed by the save dialog.
pub const DOCUMENT_EXTENSION: &str = "toml";

/// Loads a document from `path`.
pub fn load_from_path(path: &Path) -> Result<CvDocument> {
    let content = fs::read_to_string(path)?;
    let document = toml::from_str::<CvDocument>(&content)
        .map_err(|err| DocumentError::Malformed(err.to_string()))?;
    tracing::info!(path = %path.display(), "loaded CV document");
    Ok(document)
}

/// Saves `document` to `path`, creating parent directories as needed.
pub fn save_to_path(document: &CvDocument, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(document)
        .map_err(|err| DocumentError::Serialize(err.to_string()))?;
    fs::write(path, content)?;
    tracing::info!(path = %path.display(), "saved CV document");
    Ok(())
}
