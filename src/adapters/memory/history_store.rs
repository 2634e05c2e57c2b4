//! In-memory history store (append-only).

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, LectureId};
use crate::domain::lecture::{HistoryEntry, NewHistoryEntry};
use crate::ports::HistoryStore;

/// Vec-backed append-only audit log. No update or delete surface exists.
pub struct InMemoryHistoryStore {
    entries: RwLock<Vec<HistoryEntry>>,
}

impl InMemoryHistoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Returns all entries in append order (for assertions).
    pub async fn entries(&self) -> Vec<HistoryEntry> {
        self.entries.read().await.clone()
    }

    /// Returns entries referencing a lecture.
    pub async fn entries_for(&self, lecture_id: &LectureId) -> Vec<HistoryEntry> {
        self.entries
            .read()
            .await
            .iter()
            .filter(|e| e.lecture_id.as_ref() == Some(lecture_id))
            .cloned()
            .collect()
    }
}

impl Default for InMemoryHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryStore for InMemoryHistoryStore {
    async fn append(&self, entry: NewHistoryEntry) -> Result<HistoryEntry, DomainError> {
        let stored = HistoryEntry::from_new(entry);
        self.entries.write().await.push(stored.clone());
        Ok(stored)
    }
}
