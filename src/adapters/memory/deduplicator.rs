//! In-memory transition deduplicator.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, LectureId};
use crate::domain::lecture::{EventFingerprint, TransitionResult};
use crate::ports::TransitionDeduplicator;

/// Per-lecture fingerprint map.
pub struct InMemoryDeduplicator {
    seen: RwLock<HashMap<LectureId, HashMap<EventFingerprint, TransitionResult>>>,
}

impl InMemoryDeduplicator {
    /// Creates an empty deduplicator.
    pub fn new() -> Self {
        Self {
            seen: RwLock::new(HashMap::new()),
        }
    }

    /// Number of fingerprints currently tracked for a lecture.
    pub async fn tracked(&self, lecture_id: &LectureId) -> usize {
        self.seen
            .read()
            .await
            .get(lecture_id)
            .map(|m| m.len())
            .unwrap_or(0)
    }
}

impl Default for InMemoryDeduplicator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransitionDeduplicator for InMemoryDeduplicator {
    async fn find(
        &self,
        lecture_id: &LectureId,
        fingerprint: &EventFingerprint,
    ) -> Result<Option<TransitionResult>, DomainError> {
        Ok(self
            .seen
            .read()
            .await
            .get(lecture_id)
            .and_then(|m| m.get(fingerprint))
            .cloned())
    }

    async fn record(
        &self,
        lecture_id: &LectureId,
        fingerprint: &EventFingerprint,
        result: &TransitionResult,
    ) -> Result<(), DomainError> {
        self.seen
            .write()
            .await
            .entry(*lecture_id)
            .or_default()
            .insert(fingerprint.clone(), result.clone());
        Ok(())
    }

    async fn invalidate(&self, lecture_id: &LectureId) -> Result<(), DomainError> {
        self.seen.write().await.remove(lecture_id);
        Ok(())
    }
}
