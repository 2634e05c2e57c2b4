//! History logger - appends accepted transitions to the audit log.

use std::sync::Arc;

use crate::domain::foundation::{LectureId, UserId};
use crate::domain::lecture::{Command, HistoryEntry, NewHistoryEntry};
use crate::ports::HistoryStore;

/// Appends `AppendHistory` commands as immutable rows.
///
/// Always succeeds from the core's perspective: a store failure is logged
/// and swallowed, never propagated to the transition's caller.
pub struct HistoryLogger {
    store: Arc<dyn HistoryStore>,
}

impl HistoryLogger {
    /// Creates a new logger over the store.
    pub fn new(store: Arc<dyn HistoryStore>) -> Self {
        Self { store }
    }

    /// Appends a history command for the lecture.
    ///
    /// Returns the stored entry when the append succeeded, `None` when the
    /// command was not a history command or the store failed.
    pub async fn append(
        &self,
        command: &Command,
        lecture_id: LectureId,
        acting_user: Option<UserId>,
    ) -> Option<HistoryEntry> {
        let Command::AppendHistory {
            action,
            description,
        } = command
        else {
            return None;
        };

        let entry = NewHistoryEntry {
            user_id: acting_user,
            lecture_id: Some(lecture_id),
            action: *action,
            description: description.clone(),
        };

        match self.store.append(entry).await {
            Ok(stored) => Some(stored),
            Err(err) => {
                tracing::warn!(
                    lecture_id = %lecture_id,
                    error = %err,
                    "Failed to append history entry; transition stands"
                );
                None
            }
        }
    }
}
