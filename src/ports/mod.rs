//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the lecture lifecycle core and the outside world. Adapters implement
//! these ports.
//!
//! - `LectureRepository` - Lecture lookup and the compare-and-set
//!   serialization primitive
//! - `NotificationStore` - Durable notification sink
//! - `RealtimeTransport` - Live, at-most-once publish to per-lecture topics
//! - `HistoryStore` - Append-only audit sink
//! - `TransitionDeduplicator` - Idempotency tracking for redelivered events

mod deduplicator;
mod history_store;
mod lecture_repository;
mod notification_store;
mod realtime_transport;

pub use deduplicator::TransitionDeduplicator;
pub use history_store::HistoryStore;
pub use lecture_repository::LectureRepository;
pub use notification_store::NotificationStore;
pub use realtime_transport::{lecture_topic, RealtimeTransport};
