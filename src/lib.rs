// Module declarations in dependency order
pub mod core;
pub mod processing;
pub mod utils;
pub mod worker;

// Public exports for external consumers
pub use crate::core::{
    BatchEvent, BatchJob, BatchSummary, ConversionRequest, ConversionResult, OutputFormat,
};
pub use crate::processing::convert;
pub use crate::utils::{ConvertError, ConvertResult, ensure_output_directory, parse_dimension};
pub use crate::worker::{BatchHandle, BatchSink, BatchWorker, CancelToken};
