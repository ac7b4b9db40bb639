//! Scoped scratch storage for in-flight objects.
//!
//! Each notification gets its own scratch directory under the configured
//! scratch root. The directory and everything staged in it are removed when
//! the handle is dropped, on every exit path including failure, so nothing
//! accumulates across invocations.

use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use thumbly_core::constants::SCRATCH_THUMBNAIL_PREFIX;
use tokio::fs;

/// Downloaded source bytes staged on disk for one notification.
pub struct TransferredObject {
    dir: TempDir,
    source_path: PathBuf,
}

impl TransferredObject {
    /// Stage downloaded bytes at `<scratch>/<key>`, creating the scratch root
    /// and any intermediate directories as needed.
    pub async fn stage(scratch_root: &Path, key: &str, data: &[u8]) -> io::Result<Self> {
        validate_key(key)?;

        fs::create_dir_all(scratch_root).await?;
        let dir = tempfile::Builder::new()
            .prefix("thumbly-")
            .tempdir_in(scratch_root)?;

        let source_path = dir.path().join(key);
        if let Some(parent) = source_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&source_path, data).await?;

        Ok(TransferredObject { dir, source_path })
    }

    /// Path of the staged source bytes.
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Stage the generated thumbnail at `<scratch>/thumbnail-<key>` and return
    /// its path.
    pub async fn stage_thumbnail(&self, key: &str, data: &[u8]) -> io::Result<PathBuf> {
        let path = self
            .dir
            .path()
            .join(format!("{}{}", SCRATCH_THUMBNAIL_PREFIX, key));
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&path, data).await?;
        Ok(path)
    }
}

/// Keys come straight from event records; keep them inside the scratch
/// directory.
fn validate_key(key: &str) -> io::Result<()> {
    if key.is_empty() || key.starts_with('/') || key.split('/').any(|segment| segment == "..") {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid object key for scratch staging: {}", key),
        ));
    }
    Ok(())
}
