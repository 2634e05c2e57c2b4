//! Status registry - the single authority on legal transitions.
//!
//! All ambiguity about "what happens when" is resolved in this table, not
//! scattered across callers. Notable entries:
//!
//! - A failed slide processing keeps the lecture in `SlideUpload` but is
//!   still an accepted event (a failure notification goes out).
//! - `RecordingSaved` leaves the status unchanged; recordings accumulate per
//!   slide page, and the move to `Analyzing` is a separate explicit user
//!   action outside the event set this core models.
//! - `InfoInput` accepts no events at all; the upload flow sets
//!   `SlideUpload` directly.

use thiserror::Error;

use crate::domain::foundation::LectureStatus;

use super::events::TransitionEventKind;

/// An event that is not valid for the lecture's current status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("event '{event}' is not legal while lecture is in status {from}")]
pub struct IllegalTransition {
    pub from: LectureStatus,
    pub event: &'static str,
}

/// Defines the finite set of legal `(status, event)` pairs.
pub struct StatusRegistry;

impl StatusRegistry {
    /// Returns the status that results from applying `event` in `current`.
    ///
    /// Any pair not listed is an `IllegalTransition`.
    pub fn next_status(
        current: LectureStatus,
        event: &TransitionEventKind,
    ) -> Result<LectureStatus, IllegalTransition> {
        use LectureStatus::*;
        use TransitionEventKind::*;

        match (current, event) {
            (SlideUpload, SlideProcessed { success: true, .. }) => Ok(Recording),
            (SlideUpload, SlideProcessed { success: false, .. }) => Ok(SlideUpload),
            (Recording, RecordingSaved { .. }) => Ok(Recording),
            (Analyzing, AnalysisCompleted { .. }) => Ok(Completed),
            (Completed, AnalysisDeleted) => Ok(Analyzing),
            (from, event) => Err(IllegalTransition {
                from,
                event: event.tag(),
            }),
        }
    }
}
