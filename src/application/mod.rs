//! Application layer - orchestration of the lecture lifecycle core.
//!
//! Control flow per inbound signal:
//! ingestor → transition engine → {notification fan-out, history logger},
//! all on the task handling the inbound call. No background loop.

mod fanout;
mod handle_event;
mod history_logger;
mod ingest;

pub use fanout::NotificationFanout;
pub use handle_event::{EventError, LectureEventService};
pub use history_logger::HistoryLogger;
pub use ingest::{EventIngestor, IngestError, IngestOutcome, RawEvent};
