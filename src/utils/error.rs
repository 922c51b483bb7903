//! Error types for the image converter.
//!
//! Provides a closed error taxonomy using `thiserror`. Each variant carries
//! the source path it relates to (where one exists) plus the underlying
//! message, so callers and tests can match on kind instead of substrings.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Main error type for the converter.
///
/// Per-file variants (`Decode`, `Encode`, `NotFound`) are reported through the
/// batch error callback and never abort a run; `Directory`, `Validation` and
/// `Worker` are fatal to the attempt and surface before any background work.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ConvertError {
    /// Source file unreadable or not a decodable image
    #[error("failed to decode {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },

    /// Target encoder rejected the processed image
    #[error("failed to encode {}: {message}", path.display())]
    Encode { path: PathBuf, message: String },

    /// Output directory cannot be created or is not a directory
    #[error("cannot create output directory {}: {message}", path.display())]
    Directory { path: PathBuf, message: String },

    /// Source path vanished between selection and processing
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Bad user input (empty selection, non-numeric or zero dimensions)
    #[error("invalid input: {message}")]
    Validation { message: String },

    /// Batch worker lifecycle error (run already in flight, join failure)
    #[error("worker error: {message}")]
    Worker { message: String },
}

/// Convenience result type for converter operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

// Helper methods for error creation
impl ConvertError {
    pub fn decode(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub fn encode(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Encode {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub fn directory(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Directory {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    pub fn worker(msg: impl Into<String>) -> Self {
        Self::Worker {
            message: msg.into(),
        }
    }

    /// Path the error relates to, if the variant carries one.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Decode { path, .. }
            | Self::Encode { path, .. }
            | Self::Directory { path, .. }
            | Self::NotFound { path } => Some(path),
            Self::Validation { .. } | Self::Worker { .. } => None,
        }
    }
}
