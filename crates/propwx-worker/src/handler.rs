//! The fetch → aggregate → store handler.

use propwx_core::FetchRequest;
use propwx_store::{DailyRecord, SummarySink};
use propwx_weather::{aggregate_daily, ArchiveClient};

use crate::error::WorkerError;
use crate::event::QueueEvent;

/// Result of a successfully processed batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Messages processed.
    pub messages: usize,
    /// Summary rows written across all messages.
    pub rows_written: usize,
}

/// Processes queued fetch requests against injected collaborators.
pub struct Worker<S: SummarySink> {
    archive: ArchiveClient,
    sink: S,
}

impl<S: SummarySink> Worker<S> {
    pub fn new(archive: ArchiveClient, sink: S) -> Self {
        Self { archive, sink }
    }

    /// Get a reference to the summary sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Process every message in a batch, in order.
    ///
    /// All-or-nothing: the first failing message aborts the batch and the
    /// error propagates to the caller. Messages already processed keep
    /// their rows; re-delivery overwrites them.
    ///
    /// # Errors
    /// Returns the first `WorkerError` raised by any message.
    pub async fn process_batch(&self, event: &QueueEvent) -> Result<BatchOutcome, WorkerError> {
        let mut rows_written = 0;

        for (index, record) in event.records.iter().enumerate() {
            let request = FetchRequest::from_json(&record.body)?;
            tracing::info!(
                "Processing message {} of {} (property {})",
                index + 1,
                event.len(),
                request.property_id
            );
            rows_written += self.process_message(&request).await?;
        }

        Ok(BatchOutcome {
            messages: event.len(),
            rows_written,
        })
    }

    /// Process one fetch request: fetch, aggregate, store.
    ///
    /// Returns the number of summary rows written.
    ///
    /// # Errors
    /// Returns `WorkerError::Fetch` for archive failures, `WorkerError::Shape`
    /// for a malformed hourly series, and `WorkerError::Store` for
    /// persistence failures.
    pub async fn process_message(&self, request: &FetchRequest) -> Result<usize, WorkerError> {
        let series = self
            .archive
            .fetch_hourly(request.lat, request.lon, request.start_date, request.end_date)
            .await?;

        let samples = series.into_samples()?;
        let summaries = aggregate_daily(&samples);

        for summary in &summaries {
            let record = DailyRecord::new(
                &request.property_id,
                summary.date,
                summary.median_temperature,
                summary.median_humidity,
            )?;
            self.sink.upsert(&record)?;
        }

        tracing::info!(
            "Stored {} daily summaries for property {}",
            summaries.len(),
            request.property_id
        );
        Ok(summaries.len())
    }
}
