//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must implement.

use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Transport-level result of a successful write.
///
/// `text` is the status text reported by the backend, when it reports one.
/// Backends built on `object_store` do not surface the raw status line and
/// report `200`/`None` on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadStatus {
    pub code: u16,
    pub text: Option<String>,
}

impl UploadStatus {
    pub fn ok() -> Self {
        UploadStatus {
            code: 200,
            text: None,
        }
    }
}

/// Storage abstraction trait
///
/// All storage backends (S3, local filesystem) must implement this trait.
/// This allows the pipeline to work with any storage backend without coupling
/// to specific implementation details. Operations are not retried here; a
/// failure propagates to the caller.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Download the full byte content of an object.
    async fn download(&self, bucket: &str, key: &str) -> StorageResult<Vec<u8>>;

    /// Upload an object under the given key, returning the transport status
    /// reported by the backend.
    async fn upload(&self, bucket: &str, key: &str, data: Vec<u8>) -> StorageResult<UploadStatus>;

    /// Check if an object exists.
    async fn exists(&self, bucket: &str, key: &str) -> StorageResult<bool>;
}
