//! Notification store port (durable sink).

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, LectureId, UserId};
use crate::domain::lecture::NotificationRecord;

/// Port for persisting notification records.
///
/// The fan-out treats this sink as best-effort observability on top of the
/// committed status transition: a create failure is logged and swallowed by
/// the caller, never propagated.
#[async_trait]
pub trait NotificationStore: Send + Sync {
    /// Create an unread notification for the recipient.
    async fn create(
        &self,
        recipient: &UserId,
        lecture_id: Option<LectureId>,
        lecture_title: Option<String>,
        title: &str,
        message: &str,
    ) -> Result<NotificationRecord, DomainError>;
}
