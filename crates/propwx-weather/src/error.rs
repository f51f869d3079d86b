//! Weather crate error types.

use thiserror::Error;

/// Errors raised while fetching from the archive API.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Archive API returned status {status}")]
    Status { status: u16 },

    #[error("Invalid archive response: {0}")]
    Decode(String),
}

/// Errors raised while converting the API's parallel hourly arrays into
/// structured samples.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// A value array does not line up with the time array.
    #[error("Hourly series length mismatch: {field} has {actual} entries, time has {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A timestamp that does not start with a valid calendar date-time.
    #[error("Invalid hourly timestamp: {0}")]
    InvalidTimestamp(String),
}
