//! Batch worker: drives the conversion pipeline over an ordered job on one
//! dedicated background thread and reports progress through a sink.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};

use crossbeam_channel::Sender;
use tracing::{debug, info, warn};

use crate::core::{BatchEvent, BatchJob, BatchSummary};
use crate::processing;
use crate::utils::{self, ConvertError, ConvertResult};

/// Observer for batch progress.
///
/// Callbacks arrive in strict input-list order from the worker thread: one
/// start tick, then either a success tick or a file error, per file, with
/// `on_complete` invoked exactly once at the end.
pub trait BatchSink: Send + 'static {
    /// Progress tick. `completed` counts fully processed files, so the start
    /// tick for file `i` (1-based) reports `i - 1` and its success tick `i`.
    fn on_progress(&self, completed: usize, total: usize, current_file: &str);
    /// A single file failed; the run continues with the next file.
    fn on_file_error(&self, file_name: &str, error: ConvertError);
    /// The run finished, possibly with failures or after cancellation.
    fn on_complete(&self, succeeded: usize, total: usize);
}

/// Delivery over an event channel: the presentation loop drains the receiver
/// on its own thread, which preserves the ordering guarantee. A dropped
/// receiver does not abort the run.
impl BatchSink for Sender<BatchEvent> {
    fn on_progress(&self, completed: usize, total: usize, current_file: &str) {
        let _ = self.send(BatchEvent::Progress {
            completed,
            total,
            current_file: current_file.to_string(),
        });
    }

    fn on_file_error(&self, file_name: &str, error: ConvertError) {
        let _ = self.send(BatchEvent::FileError {
            file_name: file_name.to_string(),
            error,
        });
    }

    fn on_complete(&self, succeeded: usize, total: usize) {
        let _ = self.send(BatchEvent::Complete { succeeded, total });
    }
}

/// Cancellation signal checked between files.
///
/// On cancel the worker finishes the current file, reports its outcome, then
/// stops and still invokes `on_complete` with the partial count.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Spawns batch runs, one at a time.
#[derive(Debug, Clone, Default)]
pub struct BatchWorker {
    busy: Arc<AtomicBool>,
}

struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl BatchWorker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a batch run on a dedicated background thread.
    ///
    /// The output directory is created here, before any background work, so a
    /// directory failure is fatal to the attempt rather than per-file. While
    /// a run is in flight further `spawn` calls are rejected.
    pub fn spawn<S: BatchSink>(&self, job: BatchJob, sink: S) -> ConvertResult<BatchHandle> {
        utils::ensure_output_directory(job.output_dir())?;

        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(ConvertError::worker("a batch run is already in flight"));
        }

        info!("Starting batch of {} files", job.len());

        let cancel = CancelToken::new();
        let thread_cancel = cancel.clone();
        let guard = BusyGuard(Arc::clone(&self.busy));

        let handle = thread::spawn(move || {
            let _guard = guard;
            run(&job, &sink, &thread_cancel)
        });

        Ok(BatchHandle { cancel, handle })
    }
}

/// Handle to an in-flight batch run.
#[derive(Debug)]
pub struct BatchHandle {
    cancel: CancelToken,
    handle: JoinHandle<BatchSummary>,
}

impl BatchHandle {
    /// Request cancellation; takes effect between files.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the run to finish and return its summary.
    pub fn join(self) -> ConvertResult<BatchSummary> {
        self.handle
            .join()
            .map_err(|_| ConvertError::worker("batch thread panicked"))
    }
}

/// The sequential batch loop. Strictly in input order, one file at a time;
/// a single file's failure never aborts the run.
fn run<S: BatchSink>(job: &BatchJob, sink: &S, cancel: &CancelToken) -> BatchSummary {
    let total = job.len();
    let mut succeeded = 0;

    for (index, request) in job.requests().iter().enumerate() {
        if cancel.is_cancelled() {
            info!("Batch cancelled after {} of {} files", index, total);
            break;
        }

        let file_name = request.file_name();
        sink.on_progress(index, total, &file_name);

        // Checked independently of the pipeline's decode failure to give
        // vanished files a specific error.
        if !utils::file_exists(&request.source_path) {
            warn!("File not found: {}", request.source_path.display());
            sink.on_file_error(&file_name, ConvertError::not_found(&request.source_path));
            continue;
        }

        match processing::convert(request) {
            Ok(result) => {
                succeeded += 1;
                debug!(
                    "Converted {}/{}: {}",
                    index + 1,
                    total,
                    result.output_path.display()
                );
                sink.on_progress(index + 1, total, &file_name);
            }
            Err(err) => {
                warn!("Failed to convert {}: {}", file_name, err);
                sink.on_file_error(&file_name, err);
            }
        }
    }

    if succeeded < total {
        warn!("Batch completed with failures: {}/{} succeeded", succeeded, total);
    } else {
        info!("Batch completed: {}/{} succeeded", succeeded, total);
    }
    sink.on_complete(succeeded, total);

    BatchSummary { succeeded, total }
}
