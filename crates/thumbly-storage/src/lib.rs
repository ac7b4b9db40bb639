//! Thumbly Storage Library
//!
//! This crate provides the storage abstraction used by the thumbnail pipeline
//! and implementations for S3 and the local filesystem.
//!
//! Unlike a single-bucket setup, every operation names its bucket explicitly:
//! the pipeline reads from whatever source bucket an event record points at and
//! writes to the configured target bucket. Destination key derivation is
//! centralized in the `keys` module so the `thumbnails/` prefix is applied in
//! exactly one place.

pub mod factory;
pub mod keys;
pub mod local;
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use keys::thumbnail_key;
pub use local::LocalStorage;
pub use s3::S3Storage;
pub use thumbly_core::StorageBackend;
pub use traits::{Storage, StorageError, StorageResult, UploadStatus};
