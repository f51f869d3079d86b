use std::io::Read;
use std::time::Duration;

use anyhow::{Context, Result};
use propwx_core::Config;
use propwx_store::SqliteSummaryStore;
use propwx_weather::ArchiveClient;
use propwx_worker::{QueueEvent, Worker};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    propwx_core::init()?;

    let (config, _validation) = Config::load_validated()?;

    let payload = read_payload()?;
    let event = QueueEvent::from_json(&payload)?;

    if let Some(parent) = config.database.path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create database directory")?;
    }

    let archive = ArchiveClient::new(Duration::from_secs(config.archive.timeout_secs))?
        .with_base_url(config.archive.base_url.clone());
    let store = SqliteSummaryStore::open(&config.database.path)?;
    let worker = Worker::new(archive, store);

    tracing::info!("Processing batch of {} messages", event.len());

    let outcome = worker.process_batch(&event).await?;

    tracing::info!(
        "Batch complete: {} messages, {} summary rows written",
        outcome.messages,
        outcome.rows_written
    );

    Ok(())
}

/// Read the batch event payload from the file named by the first argument,
/// or from stdin when invoked without one.
fn read_payload() -> Result<String> {
    if let Some(path) = std::env::args().nth(1) {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read event file: {}", path));
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read event payload from stdin")?;
    Ok(buffer)
}
