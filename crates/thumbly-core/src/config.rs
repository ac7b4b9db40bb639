//! Configuration module
//!
//! Configuration is read from the environment once at startup and handed to the
//! pipeline at construction. Nothing reads the environment per invocation.

use std::env;
use std::path::PathBuf;

use anyhow::Context;

use crate::storage_types::StorageBackend;

/// Pipeline configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Bucket the generated thumbnails are written to (`TARGET_BUCKET`).
    pub target_bucket: String,
    pub storage_backend: StorageBackend,
    pub s3_region: Option<String>,
    /// Custom endpoint for S3-compatible providers (MinIO, DigitalOcean Spaces, etc.)
    pub s3_endpoint: Option<String>,
    pub local_storage_path: Option<String>,
    /// Root directory under which per-notification scratch directories are created.
    pub scratch_root: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let target_bucket = env::var("TARGET_BUCKET")
            .context("TARGET_BUCKET is not set; the pipeline needs a destination bucket")?;

        let storage_backend = env::var("STORAGE_BACKEND")
            .ok()
            .map(|s| s.parse())
            .transpose()?
            .unwrap_or(StorageBackend::S3);

        let scratch_root = env::var("SCRATCH_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| env::temp_dir());

        Ok(Config {
            target_bucket,
            storage_backend,
            s3_region: env::var("S3_REGION")
                .or_else(|_| env::var("AWS_REGION"))
                .ok(),
            s3_endpoint: env::var("S3_ENDPOINT").ok(),
            local_storage_path: env::var("LOCAL_STORAGE_PATH").ok(),
            scratch_root,
        })
    }

    /// Validate the configuration once at startup.
    ///
    /// Backend-specific settings (region, local path) are checked by the
    /// storage factory when the backend is built.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.target_bucket.trim().is_empty() {
            anyhow::bail!("TARGET_BUCKET must not be empty");
        }
        Ok(())
    }
}
