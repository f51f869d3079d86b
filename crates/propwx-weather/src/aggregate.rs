//! Daily aggregation of hourly samples.
//!
//! Groups hourly observations by calendar date and reduces each group to
//! its median temperature and median humidity. Pure computation; shape
//! validation happens upstream in [`crate::types::HourlySeries::into_samples`].

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::types::{DailySummary, HourlySample};

/// Statistical median of a sample.
///
/// Middle value of the sorted sample for odd sizes; arithmetic mean of the
/// two middle values for even sizes. Returns `None` for an empty slice.
pub fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = values.len();
    if n % 2 == 0 {
        Some((values[n / 2 - 1] + values[n / 2]) / 2.0)
    } else {
        Some(values[n / 2])
    }
}

/// Aggregate hourly samples into one summary per calendar day.
///
/// Temperature and humidity medians are computed independently per group.
/// The result is ordered ascending by date; with no samples it is empty.
pub fn aggregate_daily(samples: &[HourlySample]) -> Vec<DailySummary> {
    let mut groups: BTreeMap<NaiveDate, (Vec<f64>, Vec<f64>)> = BTreeMap::new();

    for sample in samples {
        let (temperatures, humidities) = groups.entry(sample.timestamp.date()).or_default();
        temperatures.push(sample.temperature);
        humidities.push(sample.humidity);
    }

    groups
        .into_iter()
        .filter_map(|(date, (mut temperatures, mut humidities))| {
            let median_temperature = median(&mut temperatures)?;
            let median_humidity = median(&mut humidities)?;
            Some(DailySummary {
                date,
                median_temperature,
                median_humidity,
            })
        })
        .collect()
}
