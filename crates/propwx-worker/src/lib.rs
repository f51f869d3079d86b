//! Batch worker for propwx.
//!
//! Wires the three steps of one invocation together: decode queued fetch
//! requests, pull hourly history from the archive, aggregate to daily
//! medians, and upsert the summaries. Collaborators are injected so the
//! whole path runs against a mock archive and an in-memory store in tests.

pub mod error;
pub mod event;
pub mod handler;

pub use error::WorkerError;
pub use event::{QueueEvent, QueueRecord};
pub use handler::{BatchOutcome, Worker};
