mod batch;

pub use batch::{BatchHandle, BatchSink, BatchWorker, CancelToken};
