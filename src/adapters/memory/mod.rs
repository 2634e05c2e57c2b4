//! In-memory adapters.
//!
//! Deterministic, lock-based implementations of the persistence-facing
//! ports. Used by the test suite and by single-process embeddings; a
//! database-backed deployment supplies its own adapters for these ports.

mod deduplicator;
mod history_store;
mod lecture_repository;
mod notification_store;

pub use deduplicator::InMemoryDeduplicator;
pub use history_store::InMemoryHistoryStore;
pub use lecture_repository::InMemoryLectureRepository;
pub use notification_store::InMemoryNotificationStore;
