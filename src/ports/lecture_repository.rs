//! Lecture repository port.
//!
//! Lookup plus the per-lecture serialization primitive. Transitions for the
//! same lecture must not both read the same previous status and commit
//! independently; `compare_and_set_status` is how the event service enforces
//! a single winner per read-decide-write step.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, LectureId, LectureStatus};
use crate::domain::lecture::Lecture;

/// Repository port for Lecture persistence.
#[async_trait]
pub trait LectureRepository: Send + Sync {
    /// Find a lecture by its ID. Returns `None` if not found.
    async fn get(&self, id: &LectureId) -> Result<Option<Lecture>, DomainError>;

    /// Check if a lecture exists.
    async fn exists(&self, id: &LectureId) -> Result<bool, DomainError>;

    /// Persist a new lecture.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, lecture: &Lecture) -> Result<(), DomainError>;

    /// Atomically set the status to `next` if it currently equals `expected`.
    ///
    /// Returns `true` if the swap happened, `false` if the stored status no
    /// longer matches `expected` (a concurrent transition won). Callers retry
    /// with a fresh read on `false`.
    ///
    /// Implementable with optimistic row versioning, a per-id mutex table, or
    /// a single-writer task per lecture; the contract only requires that two
    /// racing swaps for one lecture cannot both succeed from the same
    /// `expected` value.
    async fn compare_and_set_status(
        &self,
        id: &LectureId,
        expected: LectureStatus,
        next: LectureStatus,
    ) -> Result<bool, DomainError>;
}
