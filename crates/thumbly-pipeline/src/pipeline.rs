//! Per-batch pipeline orchestration.
//!
//! Records are processed sequentially in arrival order. Each record moves
//! through download -> scratch staging -> thumbnail generation -> upload, and
//! contributes one outcome to the batch response. The first error at any stage
//! aborts the invocation; no partial response is returned.

use crate::error::PipelineError;
use crate::event::S3Event;
use crate::scratch::TransferredObject;
use std::path::PathBuf;
use std::sync::Arc;
use thumbly_core::constants::{DEFAULT_UPLOAD_MESSAGE, THUMBNAIL_HEIGHT, THUMBNAIL_WIDTH};
use thumbly_core::{BatchResponse, Config, Notification, UploadOutcome};
use thumbly_processing::Thumbnailer;
use thumbly_storage::{thumbnail_key, Storage};
use tokio::fs;

/// The thumbnail pipeline.
///
/// The target bucket and scratch root are injected at construction from
/// validated configuration; nothing is read from the environment per
/// invocation.
pub struct ThumbnailPipeline {
    storage: Arc<dyn Storage>,
    thumbnailer: Arc<dyn Thumbnailer>,
    target_bucket: String,
    scratch_root: PathBuf,
}

impl ThumbnailPipeline {
    pub fn new(storage: Arc<dyn Storage>, thumbnailer: Arc<dyn Thumbnailer>, config: &Config) -> Self {
        ThumbnailPipeline {
            storage,
            thumbnailer,
            target_bucket: config.target_bucket.clone(),
            scratch_root: config.scratch_root.clone(),
        }
    }

    /// Decode a raw event payload and process the batch.
    pub async fn handle_json(&self, payload: &str) -> Result<BatchResponse, PipelineError> {
        let event: S3Event = serde_json::from_str(payload)?;
        self.handle(&event).await
    }

    /// Process one decoded batch.
    pub async fn handle(&self, event: &S3Event) -> Result<BatchResponse, PipelineError> {
        let notifications = event.notifications();
        tracing::info!(record_count = notifications.len(), "Processing event batch");

        let mut response = BatchResponse::default();
        for notification in &notifications {
            let outcome = self.process(notification).await?;
            response.record(outcome);
        }

        tracing::info!(outcome_count = response.len(), "Event batch processed");
        Ok(response)
    }

    async fn process(&self, notification: &Notification) -> Result<UploadOutcome, PipelineError> {
        let Notification {
            source_bucket,
            source_key,
        } = notification;

        tracing::info!(
            bucket = %source_bucket,
            key = %source_key,
            "Downloading source object"
        );
        let data = self.storage.download(source_bucket, source_key).await?;
        let staged = TransferredObject::stage(&self.scratch_root, source_key, &data).await?;

        let source = fs::read(staged.source_path()).await?;
        let thumbnail = self
            .thumbnailer
            .thumbnail(&source, THUMBNAIL_WIDTH, THUMBNAIL_HEIGHT)?;
        let thumbnail_path = staged.stage_thumbnail(source_key, &thumbnail).await?;
        tracing::info!(
            key = %source_key,
            thumbnail_path = %thumbnail_path.display(),
            "Created thumbnail"
        );

        let destination_key = thumbnail_key(source_key);
        tracing::info!(
            bucket = %self.target_bucket,
            key = %destination_key,
            "Uploading thumbnail"
        );
        let payload = fs::read(&thumbnail_path).await?;
        let status = self
            .storage
            .upload(&self.target_bucket, &destination_key, payload)
            .await?;

        // `staged` is dropped here, removing the scratch directory.
        Ok(UploadOutcome {
            file_name: source_key.clone(),
            target_bucket: self.target_bucket.clone(),
            status: status.code,
            message: status
                .text
                .unwrap_or_else(|| DEFAULT_UPLOAD_MESSAGE.to_string()),
        })
    }
}
