pub mod config;
pub mod message;

pub use config::{Config, ValidationResult};
pub use message::{FetchRequest, MessageError};

use anyhow::Result;

/// Initialize logging for the worker process.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::debug!("propwx core initialized");
    Ok(())
}
