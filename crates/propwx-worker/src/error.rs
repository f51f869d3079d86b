//! Worker error union.

use propwx_core::MessageError;
use propwx_store::StoreError;
use propwx_weather::{FetchError, ShapeError};
use thiserror::Error;

/// Top-level error for one invocation.
///
/// Any failing step fails the whole batch; there is no partial-success
/// reporting.
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("Message error: {0}")]
    Message(#[from] MessageError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Input shape error: {0}")]
    Shape(#[from] ShapeError),

    #[error("Persistence error: {0}")]
    Store(#[from] StoreError),
}
