//! Durable notification records.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{LectureId, NotificationId, Timestamp, UserId};

/// A persisted notification for later retrieval.
///
/// Created by the fan-out component; after creation only the read flag is
/// ever mutated, by a read-acknowledgement operation outside this core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub id: NotificationId,
    pub user_id: UserId,
    pub lecture_id: Option<LectureId>,
    pub lecture_title: Option<String>,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub created_at: Timestamp,
}

impl NotificationRecord {
    /// Creates an unread notification for the given recipient.
    pub fn new(
        user_id: UserId,
        lecture_id: Option<LectureId>,
        lecture_title: Option<String>,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            user_id,
            lecture_id,
            lecture_title,
            title: title.into(),
            message: message.into(),
            read: false,
            created_at: Timestamp::now(),
        }
    }
}
