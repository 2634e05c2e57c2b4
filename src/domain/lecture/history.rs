//! Immutable audit history for lecture activity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{HistoryEntryId, LectureId, Timestamp, UserId};

/// Action tag recorded with every history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HistoryAction {
    Created,
    Updated,
    Deleted,
    SlideUploaded,
    SlideProcessed,
    RecordingStarted,
    RecordingCompleted,
}

impl std::fmt::Display for HistoryAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HistoryAction::Created => "CREATED",
            HistoryAction::Updated => "UPDATED",
            HistoryAction::Deleted => "DELETED",
            HistoryAction::SlideUploaded => "SLIDE_UPLOADED",
            HistoryAction::SlideProcessed => "SLIDE_PROCESSED",
            HistoryAction::RecordingStarted => "RECORDING_STARTED",
            HistoryAction::RecordingCompleted => "RECORDING_COMPLETED",
        };
        write!(f, "{}", s)
    }
}

/// Payload for appending a history entry; the store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewHistoryEntry {
    pub user_id: Option<UserId>,
    pub lecture_id: Option<LectureId>,
    pub action: HistoryAction,
    pub description: String,
}

/// An audit record. Never updated or deleted once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: HistoryEntryId,
    pub user_id: Option<UserId>,
    pub lecture_id: Option<LectureId>,
    pub action: HistoryAction,
    pub description: String,
    pub created_at: Timestamp,
}

impl HistoryEntry {
    /// Materializes an entry from its append payload.
    pub fn from_new(new: NewHistoryEntry) -> Self {
        Self {
            id: HistoryEntryId::new(),
            user_id: new.user_id,
            lecture_id: new.lecture_id,
            action: new.action,
            description: new.description,
            created_at: Timestamp::now(),
        }
    }
}
