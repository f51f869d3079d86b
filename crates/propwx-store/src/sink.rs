//! Summary sink trait and error types.

use chrono::NaiveDate;
use thiserror::Error;

use crate::record::DailyRecord;

/// Errors that can occur during summary sink operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Storage error (database open/query failure).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A median value that cannot be represented as a decimal.
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

impl StoreError {
    /// Create a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Create an invalid value error.
    pub fn invalid_value(message: impl Into<String>) -> Self {
        Self::InvalidValue(message.into())
    }
}

/// Result type for summary sink operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Trait for daily summary sinks.
///
/// Implementations don't need to be Sync; one invocation owns its sink.
pub trait SummarySink: Send {
    /// Insert a summary, replacing any existing row for the same
    /// (property_id, date) pair.
    fn upsert(&self, record: &DailyRecord) -> StoreResult<()>;

    /// Get the stored summary for a property and date.
    ///
    /// Returns `None` if no row exists.
    fn get(&self, property_id: &str, date: NaiveDate) -> StoreResult<Option<DailyRecord>>;

    /// List all summaries for a property, ordered ascending by date.
    fn list_for_property(&self, property_id: &str) -> StoreResult<Vec<DailyRecord>>;

    /// Total number of stored summary rows.
    fn count(&self) -> StoreResult<usize>;
}
