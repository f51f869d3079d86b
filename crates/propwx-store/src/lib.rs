//! Daily summary persistence for propwx.
//!
//! Summaries are keyed by (property_id, date); writing the same key again
//! overwrites the previous row, so re-processing a request is idempotent.

pub mod record;
pub mod sink;
pub mod sqlite;

pub use record::{decimal_from_f64, DailyRecord};
pub use sink::{StoreError, StoreResult, SummarySink};
pub use sqlite::SqliteSummaryStore;
