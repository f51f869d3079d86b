//! Stored summary record and decimal conversion.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::sink::{StoreError, StoreResult};

/// One stored daily summary row.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRecord {
    pub property_id: String,
    pub date: NaiveDate,
    pub median_temperature: Decimal,
    pub median_humidity: Decimal,
}

impl DailyRecord {
    /// Build a record from computed medians.
    ///
    /// # Errors
    /// Returns `StoreError::InvalidValue` for a median that has no decimal
    /// representation (non-finite, or beyond decimal range).
    pub fn new(
        property_id: impl Into<String>,
        date: NaiveDate,
        median_temperature: f64,
        median_humidity: f64,
    ) -> StoreResult<Self> {
        Ok(Self {
            property_id: property_id.into(),
            date,
            median_temperature: decimal_from_f64(median_temperature)?,
            median_humidity: decimal_from_f64(median_humidity)?,
        })
    }
}

/// Convert a float to an exact decimal.
///
/// Parses the float's shortest round-trip rendering, so the stored value is
/// the decimal a caller would read off the printed number rather than the
/// underlying binary expansion.
pub fn decimal_from_f64(value: f64) -> StoreResult<Decimal> {
    Decimal::from_str(&value.to_string())
        .map_err(|e| StoreError::invalid_value(format!("{}: {}", value, e)))
}
