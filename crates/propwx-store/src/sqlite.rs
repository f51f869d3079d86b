//! SQLite-based summary storage.
//!
//! This module provides `SqliteSummaryStore`, the SQLite implementation of
//! the `SummarySink` trait. Medians are stored as TEXT decimal strings so
//! the persisted digits are exactly the computed decimals.

use std::path::Path;
use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection};
use rust_decimal::Decimal;

use crate::record::DailyRecord;
use crate::sink::{StoreError, StoreResult, SummarySink};

/// SQLite-based daily summary storage.
pub struct SqliteSummaryStore {
    conn: Connection,
}

impl SqliteSummaryStore {
    /// Open (or create) the summary database at the given path.
    ///
    /// # Errors
    /// Returns `StoreError::Storage` if the database cannot be opened or the
    /// schema cannot be created.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let conn = Connection::open(path).map_err(|e| StoreError::storage(e.to_string()))?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Create an in-memory store (tests, ephemeral runs).
    ///
    /// # Errors
    /// Returns `StoreError::Storage` if the in-memory database cannot be
    /// created.
    pub fn in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| StoreError::storage(e.to_string()))?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Initialize the database schema.
    fn init_schema(&self) -> StoreResult<()> {
        self.conn
            .execute_batch(
                r#"
                CREATE TABLE IF NOT EXISTS historical_weather (
                    property_id TEXT NOT NULL,
                    date TEXT NOT NULL,
                    median_temperature TEXT NOT NULL,
                    median_humidity TEXT NOT NULL,
                    updated_at TEXT NOT NULL,
                    PRIMARY KEY (property_id, date)
                );
                "#,
            )
            .map_err(|e| StoreError::storage(e.to_string()))?;
        Ok(())
    }

    /// Convert a database row to a DailyRecord.
    fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<DailyRecord> {
        let property_id: String = row.get(0)?;
        let date_str: String = row.get(1)?;
        let temperature_str: String = row.get(2)?;
        let humidity_str: String = row.get(3)?;

        let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?;
        let median_temperature = Decimal::from_str(&temperature_str)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;
        let median_humidity = Decimal::from_str(&humidity_str)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

        Ok(DailyRecord {
            property_id,
            date,
            median_temperature,
            median_humidity,
        })
    }
}

impl SummarySink for SqliteSummaryStore {
    fn upsert(&self, record: &DailyRecord) -> StoreResult<()> {
        let updated_at = Utc::now().to_rfc3339();

        self.conn
            .execute(
                r#"
                INSERT INTO historical_weather (property_id, date, median_temperature, median_humidity, updated_at)
                VALUES (?1, ?2, ?3, ?4, ?5)
                ON CONFLICT (property_id, date) DO UPDATE SET
                    median_temperature = excluded.median_temperature,
                    median_humidity = excluded.median_humidity,
                    updated_at = excluded.updated_at
                "#,
                params![
                    record.property_id,
                    record.date.to_string(),
                    record.median_temperature.to_string(),
                    record.median_humidity.to_string(),
                    updated_at,
                ],
            )
            .map_err(|e| StoreError::storage(e.to_string()))?;

        tracing::debug!(
            "Upserted summary for {} on {}",
            record.property_id,
            record.date
        );
        Ok(())
    }

    fn get(&self, property_id: &str, date: NaiveDate) -> StoreResult<Option<DailyRecord>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT property_id, date, median_temperature, median_humidity
                 FROM historical_weather WHERE property_id = ?1 AND date = ?2",
            )
            .map_err(|e| StoreError::storage(e.to_string()))?;

        let mut rows = stmt
            .query(params![property_id, date.to_string()])
            .map_err(|e| StoreError::storage(e.to_string()))?;

        match rows.next().map_err(|e| StoreError::storage(e.to_string()))? {
            Some(row) => Ok(Some(
                Self::row_to_record(row).map_err(|e| StoreError::storage(e.to_string()))?,
            )),
            None => Ok(None),
        }
    }

    fn list_for_property(&self, property_id: &str) -> StoreResult<Vec<DailyRecord>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT property_id, date, median_temperature, median_humidity
                 FROM historical_weather
                 WHERE property_id = ?1
                 ORDER BY date ASC",
            )
            .map_err(|e| StoreError::storage(e.to_string()))?;

        let rows = stmt
            .query_map(params![property_id], Self::row_to_record)
            .map_err(|e| StoreError::storage(e.to_string()))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::storage(e.to_string()))
    }

    fn count(&self) -> StoreResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM historical_weather", [], |row| row.get(0))
            .map_err(|e| StoreError::storage(e.to_string()))?;
        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    fn create_test_store() -> SqliteSummaryStore {
        SqliteSummaryStore::in_memory().expect("Failed to create in-memory store")
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn record(property_id: &str, day: &str, temperature: f64, humidity: f64) -> DailyRecord {
        DailyRecord::new(property_id, date(day), temperature, humidity).unwrap()
    }

    #[test]
    fn test_upsert_and_get() {
        let store = create_test_store();

        store.upsert(&record("prop-1", "2024-01-01", 15.0, 60.0)).unwrap();

        let stored = store.get("prop-1", date("2024-01-01")).unwrap().unwrap();
        assert_eq!(stored.property_id, "prop-1");
        assert_eq!(stored.median_temperature, Decimal::from_str("15").unwrap());
        assert_eq!(stored.median_humidity, Decimal::from_str("60").unwrap());
    }

    #[test]
    fn test_get_missing_returns_none() {
        let store = create_test_store();
        assert!(store.get("prop-1", date("2024-01-01")).unwrap().is_none());
    }

    #[test]
    fn test_upsert_overwrites_existing_row() {
        let store = create_test_store();

        store.upsert(&record("prop-1", "2024-01-01", 15.0, 60.0)).unwrap();
        store.upsert(&record("prop-1", "2024-01-01", 16.5, 55.0)).unwrap();

        assert_eq!(store.count().unwrap(), 1);
        let stored = store.get("prop-1", date("2024-01-01")).unwrap().unwrap();
        assert_eq!(stored.median_temperature, Decimal::from_str("16.5").unwrap());
        assert_eq!(stored.median_humidity, Decimal::from_str("55").unwrap());
    }

    #[test]
    fn test_rows_are_keyed_by_property_and_date() {
        let store = create_test_store();

        store.upsert(&record("prop-1", "2024-01-01", 1.0, 10.0)).unwrap();
        store.upsert(&record("prop-1", "2024-01-02", 2.0, 20.0)).unwrap();
        store.upsert(&record("prop-2", "2024-01-01", 3.0, 30.0)).unwrap();

        assert_eq!(store.count().unwrap(), 3);
    }

    #[test]
    fn test_list_for_property_ordered_by_date() {
        let store = create_test_store();

        store.upsert(&record("prop-1", "2024-01-03", 3.0, 30.0)).unwrap();
        store.upsert(&record("prop-1", "2024-01-01", 1.0, 10.0)).unwrap();
        store.upsert(&record("prop-1", "2024-01-02", 2.0, 20.0)).unwrap();
        store.upsert(&record("prop-2", "2024-01-01", 9.0, 90.0)).unwrap();

        let rows = store.list_for_property("prop-1").unwrap();
        let dates: Vec<NaiveDate> = rows.iter().map(|r| r.date).collect();

        assert_eq!(dates, vec![date("2024-01-01"), date("2024-01-02"), date("2024-01-03")]);
    }

    #[test]
    fn test_stored_text_preserves_decimal_digits() {
        let store = create_test_store();

        store.upsert(&record("prop-1", "2024-01-01", 60.5, 0.1)).unwrap();

        let raw: (String, String) = store
            .conn
            .query_row(
                "SELECT median_temperature, median_humidity FROM historical_weather",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();

        assert_eq!(raw.0, "60.5");
        assert_eq!(raw.1, "0.1");
    }

    #[test]
    fn test_open_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weather.db");

        {
            let store = SqliteSummaryStore::open(&path).unwrap();
            store.upsert(&record("prop-1", "2024-01-01", 15.0, 60.0)).unwrap();
        }

        let store = SqliteSummaryStore::open(&path).unwrap();
        assert_eq!(store.count().unwrap(), 1);
        assert!(store.get("prop-1", date("2024-01-01")).unwrap().is_some());
    }
}
