//! Pipeline error types.

use thiserror::Error;
use thumbly_processing::ThumbnailError;
use thumbly_storage::StorageError;

/// Failure of a batch invocation.
///
/// Any stage error short-circuits the whole batch; there is no per-record
/// recovery or local retry. Configuration problems are caught at startup by
/// `Config::validate` and the storage factory, not here.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Event decode failed: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Object transfer failed: {0}")]
    Transfer(#[from] StorageError),

    #[error("Thumbnail generation failed: {0}")]
    Generation(#[from] ThumbnailError),

    #[error("Scratch storage failed: {0}")]
    Scratch(#[from] std::io::Error),
}
