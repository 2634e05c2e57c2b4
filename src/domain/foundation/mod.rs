//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the lecture lifecycle domain.

mod errors;
mod ids;
mod lecture_status;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{HistoryEntryId, LectureId, NotificationId, SlideDeckId, UserId};
pub use lecture_status::LectureStatus;
pub use timestamp::Timestamp;
