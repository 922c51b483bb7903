//! Conversion request and batch job definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::OutputFormat;
use crate::utils::{self, ConvertError, ConvertResult};

/// One unit of work for the conversion pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRequest {
    /// Path to the source image file
    pub source_path: PathBuf,
    /// Directory the output is written into
    pub output_dir: PathBuf,
    /// Target width in pixels
    pub target_width: Option<u32>,
    /// Target height in pixels
    pub target_height: Option<u32>,
    /// Output format directive
    pub output_format: OutputFormat,
}

impl ConversionRequest {
    /// Resize target, honored only when both dimensions are set.
    /// A partial spec (one of the two) skips resizing entirely.
    pub fn resize_target(&self) -> Option<(u32, u32)> {
        match (self.target_width, self.target_height) {
            (Some(w), Some(h)) => Some((w, h)),
            _ => None,
        }
    }

    /// Base name of the source file for progress display.
    pub fn file_name(&self) -> String {
        utils::display_name(&self.source_path)
    }
}

/// Immutable ordered sequence of requests sharing one output directory,
/// resize target and format directive.
///
/// Built once before a run starts and handed to the batch worker by value;
/// the worker never reaches back into caller-owned mutable state.
#[derive(Debug, Clone)]
pub struct BatchJob {
    requests: Vec<ConversionRequest>,
}

impl BatchJob {
    pub fn new(
        sources: Vec<PathBuf>,
        output_dir: PathBuf,
        target_width: Option<u32>,
        target_height: Option<u32>,
        output_format: OutputFormat,
    ) -> ConvertResult<Self> {
        if sources.is_empty() {
            return Err(ConvertError::validation("No input files selected"));
        }
        utils::validate_dimensions(target_width, target_height)?;

        let requests = sources
            .into_iter()
            .map(|source_path| ConversionRequest {
                source_path,
                output_dir: output_dir.clone(),
                target_width,
                target_height,
                output_format,
            })
            .collect();

        Ok(Self { requests })
    }

    pub fn requests(&self) -> &[ConversionRequest] {
        &self.requests
    }

    /// All requests share one output directory; expose it for the
    /// pre-run directory check.
    pub fn output_dir(&self) -> &PathBuf {
        &self.requests[0].output_dir
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}
