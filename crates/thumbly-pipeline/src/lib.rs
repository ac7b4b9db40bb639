//! Thumbly Pipeline Library
//!
//! The per-batch processing pipeline: event decoding, scoped scratch storage,
//! thumbnail generation, and upload, aggregated into one response per batch.
//!
//! Failure semantics are all-or-nothing: records are processed sequentially in
//! arrival order and the first error at any stage aborts the invocation with
//! no partial response. Recovery is the caller's redelivery mechanism.

pub mod error;
pub mod event;
pub mod pipeline;
pub mod scratch;

// Re-export commonly used types
pub use error::PipelineError;
pub use event::S3Event;
pub use pipeline::ThumbnailPipeline;
pub use scratch::TransferredObject;
