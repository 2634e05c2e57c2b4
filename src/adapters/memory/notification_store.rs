//! In-memory notification store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, LectureId, UserId};
use crate::domain::lecture::NotificationRecord;
use crate::ports::NotificationStore;

/// Vec-backed notification store.
pub struct InMemoryNotificationStore {
    records: RwLock<Vec<NotificationRecord>>,
}

impl InMemoryNotificationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Returns all stored records (for assertions).
    pub async fn records(&self) -> Vec<NotificationRecord> {
        self.records.read().await.clone()
    }

    /// Returns records addressed to a user.
    pub async fn records_for(&self, user: &UserId) -> Vec<NotificationRecord> {
        self.records
            .read()
            .await
            .iter()
            .filter(|r| &r.user_id == user)
            .cloned()
            .collect()
    }
}

impl Default for InMemoryNotificationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationStore for InMemoryNotificationStore {
    async fn create(
        &self,
        recipient: &UserId,
        lecture_id: Option<LectureId>,
        lecture_title: Option<String>,
        title: &str,
        message: &str,
    ) -> Result<NotificationRecord, DomainError> {
        let record =
            NotificationRecord::new(recipient.clone(), lecture_id, lecture_title, title, message);
        self.records.write().await.push(record.clone());
        Ok(record)
    }
}
