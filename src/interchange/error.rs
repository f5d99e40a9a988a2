//! Error and status types for scene imports.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::parser::ParseError;

/// Errors that can occur while detecting or importing a scene collection.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The path does not name an existing file.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// No registered format recognises the file.
    #[error("File not recognised: {}", .0.display())]
    FileNotRecognized(PathBuf),

    /// The file exists but could not be read as UTF-8 text.
    #[error("Could not open {}: {source}", .path.display())]
    FileWontOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The legacy text could not be parsed into a tree.
    #[error("Conversion error: {0}")]
    Conversion(#[from] ParseError),

    /// The tree parsed but does not have the shape the format requires.
    #[error("Invalid {format} document: {message}")]
    Invalid {
        format: &'static str,
        message: String,
    },

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The named format is not registered.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),
}

impl ImportError {
    /// Create a file-won't-open error.
    pub fn wont_open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileWontOpen {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid document error.
    pub fn invalid(format: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            format,
            message: message.into(),
        }
    }

    /// Create an unknown format error.
    pub fn unknown_format(name: impl Into<String>) -> Self {
        Self::UnknownFormat(name.into())
    }

    /// The status code a host reports for this error.
    pub fn status(&self) -> ImportStatus {
        match self {
            Self::FileNotFound(_) => ImportStatus::FileNotFound,
            Self::FileNotRecognized(_) => ImportStatus::FileNotRecognized,
            Self::FileWontOpen { .. } => ImportStatus::FileWontOpen,
            Self::Conversion(_) | Self::Invalid { .. } => ImportStatus::ErrorDuringConversion,
            Self::Json(_) | Self::UnknownFormat(_) => ImportStatus::UnknownError,
        }
    }
}

/// Outcome code of an import, as shown to users by an import dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImportStatus {
    Success,
    FileNotFound,
    FileNotRecognized,
    FileWontOpen,
    ErrorDuringConversion,
    UnknownError,
}

impl ImportStatus {
    pub fn from_result<T>(result: &Result<T, ImportError>) -> Self {
        match result {
            Ok(_) => Self::Success,
            Err(err) => err.status(),
        }
    }

    pub fn is_success(self) -> bool {
        self == Self::Success
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::FileNotFound => "file not found",
            Self::FileNotRecognized => "file not recognized",
            Self::FileWontOpen => "file won't open",
            Self::ErrorDuringConversion => "error during conversion",
            Self::UnknownError => "unknown error",
        }
    }
}

impl std::fmt::Display for ImportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
