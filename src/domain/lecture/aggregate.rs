//! Lecture aggregate root.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{LectureId, LectureStatus, SlideDeckId, Timestamp, UserId};

/// A lecture recording session and its lifecycle status.
///
/// Owned exclusively by its creator. The status field is mutated only through
/// the transition engine (via the repository's compare-and-set); title and
/// description edits happen through content endpoints outside this core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lecture {
    /// Unique identifier.
    pub id: LectureId,

    /// Owner reference. `None` once the owning account has been deleted;
    /// notifications are silently skipped in that case.
    pub owner: Option<UserId>,

    /// Display title, echoed into notification records.
    pub title: String,

    /// Slide deck attached via the upload flow, if any.
    pub slide_deck_id: Option<SlideDeckId>,

    /// Current lifecycle status. Never null after creation.
    pub status: LectureStatus,

    /// When the lecture was created.
    pub created_at: Timestamp,

    /// When the lecture was last modified.
    pub updated_at: Timestamp,
}

impl Lecture {
    /// Creates a new lecture in the `InfoInput` stage.
    pub fn new(owner: UserId, title: impl Into<String>) -> Self {
        let now = Timestamp::now();
        Self {
            id: LectureId::new(),
            owner: Some(owner),
            title: title.into(),
            slide_deck_id: None,
            status: LectureStatus::InfoInput,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attaches a slide deck and moves the lecture to `SlideUpload`.
    ///
    /// This models the external upload flow, which sets the status directly
    /// rather than going through the transition engine.
    pub fn attach_slide_deck(&mut self, deck: SlideDeckId) {
        self.slide_deck_id = Some(deck);
        self.status = LectureStatus::SlideUpload;
        self.updated_at = Timestamp::now();
    }

    /// Applies an already-decided status.
    ///
    /// Called by repository adapters after a successful compare-and-set and by
    /// the event service to refresh its local copy. All decisions about
    /// whether the change is legal belong to the transition engine.
    pub fn apply_status(&mut self, next: LectureStatus) {
        self.status = next;
        self.updated_at = Timestamp::now();
    }
}
