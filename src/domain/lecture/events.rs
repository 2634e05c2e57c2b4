//! Transition events - normalized completion signals from external collaborators.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::foundation::LectureId;

/// What happened to a lecture, as reported by an external collaborator.
///
/// A closed tagged variant rather than scattered boolean flags, so the
/// transition engine's match is exhaustive and checked at compile time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransitionEventKind {
    /// The slide-processing service finished (or failed) a deck.
    SlideProcessed {
        success: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        slide_count: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        failure_reason: Option<String>,
    },
    /// A per-slide-page recording was saved by the client.
    RecordingSaved {
        #[serde(skip_serializing_if = "Option::is_none")]
        slide_page: Option<u32>,
    },
    /// The analysis service produced a final score for the lecture.
    AnalysisCompleted { score: u32 },
    /// A previously completed analysis was deleted.
    AnalysisDeleted,
}

impl TransitionEventKind {
    /// Stable tag for logging and dedup keys.
    pub fn tag(&self) -> &'static str {
        match self {
            TransitionEventKind::SlideProcessed { .. } => "slide_processed",
            TransitionEventKind::RecordingSaved { .. } => "recording_saved",
            TransitionEventKind::AnalysisCompleted { .. } => "analysis_completed",
            TransitionEventKind::AnalysisDeleted => "analysis_deleted",
        }
    }

    /// Whether the end user should be notified about this event.
    ///
    /// Recording saves and analysis deletion are internal bookkeeping.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            TransitionEventKind::SlideProcessed { .. }
                | TransitionEventKind::AnalysisCompleted { .. }
        )
    }
}

/// A validated event targeting a specific lecture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEvent {
    pub lecture_id: LectureId,
    pub kind: TransitionEventKind,
}

impl TransitionEvent {
    /// Creates an event for the given lecture.
    pub fn new(lecture_id: LectureId, kind: TransitionEventKind) -> Self {
        Self { lecture_id, kind }
    }

    /// Computes the idempotency fingerprint for this event.
    pub fn fingerprint(&self) -> EventFingerprint {
        EventFingerprint::of(&self.kind)
    }
}

/// Idempotency key: event kind plus a hash of its payload.
///
/// Redeliveries from the external processing service carry identical
/// payloads, so two events with the same fingerprint are the same signal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventFingerprint {
    pub kind: String,
    pub payload_hash: String,
}

impl EventFingerprint {
    /// Fingerprints an event kind by hashing its canonical JSON form.
    pub fn of(kind: &TransitionEventKind) -> Self {
        let payload = serde_json::to_string(kind)
            .expect("event kinds serialize to JSON without failure");
        let digest = Sha256::digest(payload.as_bytes());
        Self {
            kind: kind.tag().to_string(),
            payload_hash: format!("{:x}", digest),
        }
    }
}
