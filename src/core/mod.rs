//! Core application types.
//!
//! This module contains the fundamental types used throughout the crate:
//! - [`ConversionRequest`] / [`BatchJob`]: inputs to the pipeline and worker
//! - [`OutputFormat`]: output format directive
//! - [`ConversionResult`] / [`BatchSummary`]: conversion outcomes
//! - [`BatchEvent`]: progress reporting for batch runs

mod job;
mod progress;
mod types;

pub use job::{BatchJob, ConversionRequest};
pub use progress::BatchEvent;
pub use types::{BatchSummary, ConversionResult, OutputFormat};
