//! Thumbly handler
//!
//! Reads one event batch as JSON (from a file argument or stdin), runs the
//! thumbnail pipeline against the configured storage backend, and prints the
//! aggregated response as JSON.
//! Run with: TARGET_BUCKET=xxx thumbly-handler [event.json]

use anyhow::Context;
use std::io::Read;
use std::sync::Arc;
use thumbly_core::Config;
use thumbly_pipeline::ThumbnailPipeline;
use thumbly_processing::ImageThumbnailer;
use thumbly_storage::create_storage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "thumbly=info".into()),
        )
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate()?;

    let storage = create_storage(&config)
        .await
        .context("Failed to build storage backend")?;
    let pipeline = ThumbnailPipeline::new(storage, Arc::new(ImageThumbnailer), &config);

    let payload = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read event from {}", path))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read event from stdin")?;
            buffer
        }
    };

    let response = pipeline.handle_json(&payload).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
