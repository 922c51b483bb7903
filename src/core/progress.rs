//! Progress events emitted by the batch worker.

use serde::Serialize;

use crate::utils::ConvertError;

/// One callback unit from a batch run.
///
/// Events are emitted in strict input-list order: a start tick, then either a
/// success tick or a `FileError`, per file, with `Complete` always last.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BatchEvent {
    /// Progress tick. `completed` counts fully processed files, so the start
    /// tick for file `i` (1-based) carries `i - 1` and its success tick `i`.
    Progress {
        completed: usize,
        total: usize,
        current_file: String,
    },
    /// A single file failed; the batch continues.
    FileError {
        file_name: String,
        error: ConvertError,
    },
    /// The run finished. Emitted exactly once, after all other events.
    Complete { succeeded: usize, total: usize },
}

impl BatchEvent {
    /// Progress percentage (0-100) for display.
    pub fn percentage(&self) -> usize {
        let (done, total) = match self {
            Self::Progress {
                completed, total, ..
            } => (*completed, *total),
            Self::FileError { .. } => return 0,
            Self::Complete { total, .. } => (*total, *total),
        };
        if total > 0 { (done * 100) / total } else { 0 }
    }
}
