//! Queue message types.
//!
//! A queue entry carries one fetch request: which property, where it is,
//! and the date range to backfill. The payload is validated here at the
//! boundary so later stages only see well-formed requests.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while decoding or validating a queue message.
#[derive(Debug, Error)]
pub enum MessageError {
    /// Body was not valid JSON or is missing required fields.
    #[error("Malformed message body: {0}")]
    Decode(String),

    /// property_id was empty or whitespace-only.
    #[error("property_id must not be empty")]
    EmptyPropertyId,

    /// Latitude or longitude outside its valid range.
    #[error("{field} out of range: {value}")]
    CoordinateOutOfRange { field: &'static str, value: f64 },

    /// start_date is after end_date.
    #[error("start_date {start} is after end_date {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}

/// One fetch request, as carried by a queue entry body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchRequest {
    pub property_id: String,
    pub lat: f64,
    pub lon: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl FetchRequest {
    /// Decode a request from a JSON message body and validate it.
    ///
    /// # Errors
    /// Returns `MessageError::Decode` for malformed JSON or missing fields,
    /// and the specific validation variant for out-of-range values.
    pub fn from_json(body: &str) -> Result<Self, MessageError> {
        let request: FetchRequest =
            serde_json::from_str(body).map_err(|e| MessageError::Decode(e.to_string()))?;
        request.validate()?;
        Ok(request)
    }

    /// Validate field values.
    pub fn validate(&self) -> Result<(), MessageError> {
        if self.property_id.trim().is_empty() {
            return Err(MessageError::EmptyPropertyId);
        }

        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(MessageError::CoordinateOutOfRange {
                field: "lat",
                value: self.lat,
            });
        }

        if !self.lon.is_finite() || !(-180.0..=180.0).contains(&self.lon) {
            return Err(MessageError::CoordinateOutOfRange {
                field: "lon",
                value: self.lon,
            });
        }

        if self.start_date > self.end_date {
            return Err(MessageError::InvalidDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    fn valid_body() -> &'static str {
        r#"{
            "property_id": "prop-42",
            "lat": 52.52,
            "lon": 13.41,
            "start_date": "2024-01-01",
            "end_date": "2024-01-31"
        }"#
    }

    #[test]
    fn test_decode_valid_body() {
        let request = FetchRequest::from_json(valid_body()).unwrap();
        assert_eq!(request.property_id, "prop-42");
        assert_eq!(request.lat, 52.52);
        assert_eq!(request.lon, 13.41);
        assert_eq!(request.start_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(request.end_date, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
    }

    #[test]
    fn test_decode_missing_field() {
        let result = FetchRequest::from_json(r#"{"property_id": "p", "lat": 1.0}"#);
        assert!(matches!(result, Err(MessageError::Decode(_))));
    }

    #[test]
    fn test_decode_invalid_json() {
        let result = FetchRequest::from_json("not json");
        assert!(matches!(result, Err(MessageError::Decode(_))));
    }

    #[test]
    fn test_decode_bad_date_format() {
        let body = r#"{
            "property_id": "p",
            "lat": 0.0,
            "lon": 0.0,
            "start_date": "01/01/2024",
            "end_date": "2024-01-31"
        }"#;
        let result = FetchRequest::from_json(body);
        assert!(matches!(result, Err(MessageError::Decode(_))));
    }

    #[test]
    fn test_empty_property_id() {
        let mut request = FetchRequest::from_json(valid_body()).unwrap();
        request.property_id = "   ".to_string();
        assert!(matches!(request.validate(), Err(MessageError::EmptyPropertyId)));
    }

    #[test]
    fn test_latitude_out_of_range() {
        let mut request = FetchRequest::from_json(valid_body()).unwrap();
        request.lat = 90.5;
        let err = request.validate().unwrap_err();
        assert!(matches!(
            err,
            MessageError::CoordinateOutOfRange { field: "lat", .. }
        ));
    }

    #[test]
    fn test_longitude_out_of_range() {
        let mut request = FetchRequest::from_json(valid_body()).unwrap();
        request.lon = -181.0;
        let err = request.validate().unwrap_err();
        assert!(matches!(
            err,
            MessageError::CoordinateOutOfRange { field: "lon", .. }
        ));
    }

    #[test]
    fn test_non_finite_coordinate() {
        let mut request = FetchRequest::from_json(valid_body()).unwrap();
        request.lat = f64::NAN;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_reversed_date_range() {
        let mut request = FetchRequest::from_json(valid_body()).unwrap();
        request.start_date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        request.end_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(matches!(
            request.validate(),
            Err(MessageError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_single_day_range_is_valid() {
        let mut request = FetchRequest::from_json(valid_body()).unwrap();
        request.start_date = request.end_date;
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_boundary_coordinates_are_valid() {
        let mut request = FetchRequest::from_json(valid_body()).unwrap();
        request.lat = -90.0;
        request.lon = 180.0;
        assert!(request.validate().is_ok());
    }
}
