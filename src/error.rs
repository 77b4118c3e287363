// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Document(DocumentError),
    State(String),
}

/// Specific error types for CV document loading and saving.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone)]
pub enum DocumentError {
    /// The file could not be parsed as a CV document.
    Malformed(String),

    /// The document could not be serialized.
    Serialize(String),

    /// No path is associated with the document yet.
    NoPath,
}

impl DocumentError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DocumentError::Malformed(_) => "error-document-malformed",
            DocumentError::Serialize(_) => "error-document-serialize",
            DocumentError::NoPath => "error-document-no-path",
        }
    }
}

impl Error {
    /// Returns the i18n message key used when surfacing this error in a toast.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Document(e) => e.i18n_key(),
            Error::State(_) => "error-state",
        }
    }
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::Malformed(msg) => write!(f, "Malformed document: {}", msg),
            DocumentError::Serialize(msg) => write!(f, "Cannot serialize document: {}", msg),
            DocumentError::NoPath => write!(f, "Document has no file path"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Document(e) => write!(f, "Document Error: {}", e),
            Error::State(e) => write!(f, "State Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<DocumentError> for Error {
    fn from(err: DocumentError) -> Self {
        Error::Document(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
