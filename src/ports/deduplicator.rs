//! Transition deduplicator port - idempotency for redelivered events.
//!
//! The external processing service retries delivery, so the same completion
//! signal can arrive more than once. The ingestor consults this port before
//! running the engine: a known fingerprint returns the prior result without
//! re-running the transition, which prevents duplicate notifications and
//! history rows.
//!
//! When an accepted transition changes the status, previously recorded
//! fingerprints for that lecture are invalidated: the state has moved on, so
//! an old signal is no longer "the same event" (e.g. the final analysis row
//! it referred to has been deleted). A stale redelivery after invalidation
//! simply fails the registry check instead.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, LectureId};
use crate::domain::lecture::{EventFingerprint, TransitionResult};

/// Port for tracking accepted transitions by event fingerprint.
#[async_trait]
pub trait TransitionDeduplicator: Send + Sync {
    /// Look up a previously accepted result for this fingerprint.
    async fn find(
        &self,
        lecture_id: &LectureId,
        fingerprint: &EventFingerprint,
    ) -> Result<Option<TransitionResult>, DomainError>;

    /// Record an accepted result under its fingerprint.
    ///
    /// Called AFTER side effects have been dispatched, so a redelivery that
    /// races the first delivery re-runs the engine rather than observing a
    /// half-finished result.
    async fn record(
        &self,
        lecture_id: &LectureId,
        fingerprint: &EventFingerprint,
        result: &TransitionResult,
    ) -> Result<(), DomainError>;

    /// Drop all recorded fingerprints for a lecture.
    ///
    /// Called when a transition changes the lecture's status.
    async fn invalidate(&self, lecture_id: &LectureId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deduplicator_is_object_safe() {
        fn _accepts_dyn(_dedup: &dyn TransitionDeduplicator) {}
    }
}
