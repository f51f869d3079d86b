//! Historical weather for propwx.
//!
//! Fetches hourly archive data from the Open-Meteo archive API and
//! aggregates it into per-day median summaries.

pub mod aggregate;
pub mod archive;
pub mod error;
pub mod types;

pub use aggregate::aggregate_daily;
pub use archive::ArchiveClient;
pub use error::{FetchError, ShapeError};
pub use types::{ArchiveResponse, DailySummary, HourlySample, HourlySeries};
