//! Core types for conversion settings and results.

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format directive for a conversion.
///
/// `KeepOriginal` re-encodes in the source's decoded format and exists for
/// "resize without format change" use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum OutputFormat {
    KeepOriginal,
    Jpeg,
    Png,
}

impl OutputFormat {
    /// Output file extension, where the directive fixes one.
    /// `KeepOriginal` keeps the source's own extension instead.
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            Self::Jpeg => Some("jpg"),
            Self::Png => Some("png"),
            Self::KeepOriginal => None,
        }
    }
}

/// Result of a successful single-file conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    /// Path of the file written under the output directory
    pub output_path: PathBuf,
}

/// Final summary of a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    /// Number of files converted successfully
    pub succeeded: usize,
    /// Total number of files in the batch
    pub total: usize,
}
