use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::ShapeError;

/// One hourly observation, joined from the API's parallel arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlySample {
    pub timestamp: NaiveDateTime,
    pub temperature: f64,
    pub humidity: f64,
}

/// Per-day aggregate produced from a group of hourly samples.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub median_temperature: f64,
    pub median_humidity: f64,
}

/// Top-level archive API response.
#[derive(Debug, Clone, Deserialize)]
pub struct ArchiveResponse {
    pub hourly: HourlySeries,
}

/// The `hourly` block of an archive response: three parallel arrays,
/// implicitly joined by index.
#[derive(Debug, Clone, Deserialize)]
pub struct HourlySeries {
    pub time: Vec<String>,
    #[serde(rename = "temperature_2m")]
    pub temperatures: Vec<f64>,
    #[serde(rename = "relative_humidity_2m")]
    pub humidities: Vec<f64>,
}

impl HourlySeries {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Join the parallel arrays into structured samples.
    ///
    /// The index-joined representation is validated here, once, so the
    /// aggregation step never has to reason about mismatched arrays.
    ///
    /// # Errors
    /// Returns `ShapeError::LengthMismatch` if a value array does not match
    /// the time array, or `ShapeError::InvalidTimestamp` for an entry that
    /// is not an ISO 8601 date-time.
    pub fn into_samples(self) -> Result<Vec<HourlySample>, ShapeError> {
        let expected = self.time.len();

        if self.temperatures.len() != expected {
            return Err(ShapeError::LengthMismatch {
                field: "temperature_2m",
                expected,
                actual: self.temperatures.len(),
            });
        }
        if self.humidities.len() != expected {
            return Err(ShapeError::LengthMismatch {
                field: "relative_humidity_2m",
                expected,
                actual: self.humidities.len(),
            });
        }

        self.time
            .into_iter()
            .zip(self.temperatures)
            .zip(self.humidities)
            .map(|((raw, temperature), humidity)| {
                Ok(HourlySample {
                    timestamp: parse_timestamp(&raw)?,
                    temperature,
                    humidity,
                })
            })
            .collect()
    }
}

/// Parse an archive timestamp.
///
/// The archive API emits minute resolution ("2024-01-01T00:00"); second
/// resolution is accepted as well.
fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, ShapeError> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| ShapeError::InvalidTimestamp(raw.to_string()))
}
