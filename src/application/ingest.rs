//! Event ingestor - normalizes external signals and guards redelivery.
//!
//! Validation happens here, before anything reaches the engine: unknown
//! lectures and malformed payloads are rejected, and a fingerprint already
//! recorded by the deduplicator short-circuits to the prior result. The
//! ingestor itself mutates nothing.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{DomainError, LectureId};
use crate::domain::lecture::{EventFingerprint, Lecture, TransitionEvent, TransitionEventKind, TransitionResult};
use crate::ports::{LectureRepository, TransitionDeduplicator};

/// Inbound wire payload from an external collaborator, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RawEvent {
    SlideProcessed {
        success: bool,
        #[serde(default)]
        slide_count: Option<u32>,
        #[serde(default)]
        failure_reason: Option<String>,
    },
    RecordingSaved {
        #[serde(default)]
        slide_page: Option<u32>,
    },
    AnalysisCompleted {
        #[serde(default)]
        score: Option<u32>,
    },
    AnalysisDeleted,
}

/// Rejections raised before the engine runs.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("lecture {0} not found")]
    UnknownLecture(LectureId),

    #[error("malformed event payload: {0}")]
    MalformedPayload(String),

    #[error(transparent)]
    Internal(#[from] DomainError),
}

/// Result of ingesting a raw event.
#[derive(Debug)]
pub enum IngestOutcome {
    /// A new signal, ready for the engine.
    Fresh {
        lecture: Lecture,
        event: TransitionEvent,
        fingerprint: EventFingerprint,
    },
    /// Redelivery of an already-accepted signal; reuse the prior outcome.
    Duplicate(TransitionResult),
}

/// Normalizes external signals into `TransitionEvent`s.
pub struct EventIngestor {
    lectures: Arc<dyn LectureRepository>,
    dedup: Arc<dyn TransitionDeduplicator>,
}

impl EventIngestor {
    /// Creates a new ingestor.
    pub fn new(
        lectures: Arc<dyn LectureRepository>,
        dedup: Arc<dyn TransitionDeduplicator>,
    ) -> Self {
        Self { lectures, dedup }
    }

    /// Validates and normalizes a raw event for the given lecture.
    pub async fn ingest(
        &self,
        lecture_id: LectureId,
        raw: RawEvent,
    ) -> Result<IngestOutcome, IngestError> {
        let lecture = self
            .lectures
            .get(&lecture_id)
            .await?
            .ok_or(IngestError::UnknownLecture(lecture_id))?;

        let kind = Self::normalize(raw)?;
        let event = TransitionEvent::new(lecture_id, kind);
        let fingerprint = event.fingerprint();

        if let Some(prior) = self.dedup.find(&lecture_id, &fingerprint).await? {
            tracing::debug!(
                lecture_id = %lecture_id,
                event = %fingerprint.kind,
                "Duplicate event delivery, returning prior result"
            );
            return Ok(IngestOutcome::Duplicate(prior));
        }

        Ok(IngestOutcome::Fresh {
            lecture,
            event,
            fingerprint,
        })
    }

    /// Checks required fields per event kind.
    fn normalize(raw: RawEvent) -> Result<TransitionEventKind, IngestError> {
        match raw {
            RawEvent::SlideProcessed {
                success,
                slide_count,
                failure_reason,
            } => Ok(TransitionEventKind::SlideProcessed {
                success,
                slide_count,
                failure_reason,
            }),
            RawEvent::RecordingSaved { slide_page } => {
                Ok(TransitionEventKind::RecordingSaved { slide_page })
            }
            RawEvent::AnalysisCompleted { score } => match score {
                Some(score) => Ok(TransitionEventKind::AnalysisCompleted { score }),
                None => Err(IngestError::MalformedPayload(
                    "analysis_completed requires a score".to_string(),
                )),
            },
            RawEvent::AnalysisDeleted => Ok(TransitionEventKind::AnalysisDeleted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryDeduplicator, InMemoryLectureRepository};
    use crate::domain::foundation::{LectureStatus, UserId};

    async fn ingestor_with(lecture: &Lecture) -> (EventIngestor, Arc<InMemoryDeduplicator>) {
        let repo = Arc::new(InMemoryLectureRepository::new());
        let dedup = Arc::new(InMemoryDeduplicator::new());
        repo.insert(lecture).await.unwrap();
        (EventIngestor::new(repo, dedup.clone()), dedup)
    }

    fn lecture_in(status: LectureStatus) -> Lecture {
        let mut lecture = Lecture::new(UserId::new("user-1").unwrap(), "Lecture");
        lecture.apply_status(status);
        lecture
    }

    #[tokio::test]
    async fn unknown_lecture_is_rejected() {
        let repo = Arc::new(InMemoryLectureRepository::new());
        let dedup = Arc::new(InMemoryDeduplicator::new());
        let ingestor = EventIngestor::new(repo, dedup);

        let result = ingestor
            .ingest(LectureId::new(), RawEvent::AnalysisDeleted)
            .await;

        assert!(matches!(result, Err(IngestError::UnknownLecture(_))));
    }

    #[tokio::test]
    async fn analysis_completed_without_score_is_malformed() {
        let lecture = lecture_in(LectureStatus::Analyzing);
        let (ingestor, _) = ingestor_with(&lecture).await;

        let result = ingestor
            .ingest(lecture.id, RawEvent::AnalysisCompleted { score: None })
            .await;

        assert!(matches!(result, Err(IngestError::MalformedPayload(_))));
    }

    #[tokio::test]
    async fn fresh_event_is_normalized() {
        let lecture = lecture_in(LectureStatus::SlideUpload);
        let (ingestor, _) = ingestor_with(&lecture).await;

        let outcome = ingestor
            .ingest(
                lecture.id,
                RawEvent::SlideProcessed {
                    success: true,
                    slide_count: Some(8),
                    failure_reason: None,
                },
            )
            .await
            .unwrap();

        match outcome {
            IngestOutcome::Fresh { event, .. } => {
                assert_eq!(event.lecture_id, lecture.id);
                assert_eq!(event.kind.tag(), "slide_processed");
            }
            IngestOutcome::Duplicate(_) => panic!("expected fresh event"),
        }
    }

    #[tokio::test]
    async fn recorded_fingerprint_short_circuits_to_prior_result() {
        let lecture = lecture_in(LectureStatus::Analyzing);
        let (ingestor, dedup) = ingestor_with(&lecture).await;

        let event = TransitionEvent::new(
            lecture.id,
            TransitionEventKind::AnalysisCompleted { score: 70 },
        );
        let prior = TransitionResult {
            accepted: true,
            previous_status: LectureStatus::Analyzing,
            new_status: LectureStatus::Completed,
            commands: Vec::new(),
        };
        dedup
            .record(&lecture.id, &event.fingerprint(), &prior)
            .await
            .unwrap();

        let outcome = ingestor
            .ingest(lecture.id, RawEvent::AnalysisCompleted { score: Some(70) })
            .await
            .unwrap();

        match outcome {
            IngestOutcome::Duplicate(result) => assert_eq!(result, prior),
            IngestOutcome::Fresh { .. } => panic!("expected duplicate"),
        }
    }

    #[test]
    fn raw_event_deserializes_from_tagged_json() {
        let raw: RawEvent = serde_json::from_str(
            r#"{"kind": "slide_processed", "success": false, "failure_reason": "corrupt file"}"#,
        )
        .unwrap();

        assert_eq!(
            raw,
            RawEvent::SlideProcessed {
                success: false,
                slide_count: None,
                failure_reason: Some("corrupt file".to_string()),
            }
        );
    }

    #[test]
    fn raw_analysis_completed_score_is_optional_on_the_wire() {
        let raw: RawEvent = serde_json::from_str(r#"{"kind": "analysis_completed"}"#).unwrap();
        assert_eq!(raw, RawEvent::AnalysisCompleted { score: None });
    }
}
