//! Lecture event service - the entry point for external completion signals.
//!
//! One synchronous run per inbound signal: ingest → engine → commit →
//! {fan-out, history} → dedup record. The commit step serializes concurrent
//! transitions per lecture with a bounded compare-and-set retry loop; across
//! different lectures everything proceeds in parallel.

use std::sync::Arc;

use thiserror::Error;

use crate::config::EngineConfig;
use crate::domain::foundation::{DomainError, LectureId};
use crate::domain::lecture::{Command, TransitionEngine, TransitionResult};
use crate::ports::{
    HistoryStore, LectureRepository, NotificationStore, RealtimeTransport, TransitionDeduplicator,
};

use super::fanout::NotificationFanout;
use super::history_logger::HistoryLogger;
use super::ingest::{EventIngestor, IngestError, IngestOutcome, RawEvent};

/// Errors surfaced to the calling collaborator (e.g. the processing webhook).
///
/// Illegal transitions are NOT an error here: they come back as a
/// `TransitionResult` with `accepted: false` so the caller can produce a
/// clear client-visible rejection.
#[derive(Debug, Error)]
pub enum EventError {
    #[error("lecture {0} not found")]
    UnknownLecture(LectureId),

    #[error("malformed event payload: {0}")]
    MalformedPayload(String),

    #[error("transition conflict for lecture {lecture_id} after {attempts} attempts")]
    Conflict {
        lecture_id: LectureId,
        attempts: u32,
    },

    #[error(transparent)]
    Internal(#[from] DomainError),
}

impl From<IngestError> for EventError {
    fn from(err: IngestError) -> Self {
        match err {
            IngestError::UnknownLecture(id) => EventError::UnknownLecture(id),
            IngestError::MalformedPayload(reason) => EventError::MalformedPayload(reason),
            IngestError::Internal(inner) => EventError::Internal(inner),
        }
    }
}

/// Orchestrates the full transition pipeline for one lecture event.
pub struct LectureEventService {
    lectures: Arc<dyn LectureRepository>,
    dedup: Arc<dyn TransitionDeduplicator>,
    ingestor: EventIngestor,
    fanout: NotificationFanout,
    history: HistoryLogger,
    cas_retry_limit: u32,
}

impl LectureEventService {
    /// Wires the service from its collaborators.
    pub fn new(
        lectures: Arc<dyn LectureRepository>,
        notifications: Arc<dyn NotificationStore>,
        realtime: Arc<dyn RealtimeTransport>,
        history_store: Arc<dyn HistoryStore>,
        dedup: Arc<dyn TransitionDeduplicator>,
        config: &EngineConfig,
    ) -> Self {
        Self {
            ingestor: EventIngestor::new(lectures.clone(), dedup.clone()),
            fanout: NotificationFanout::new(notifications, realtime),
            history: HistoryLogger::new(history_store),
            lectures,
            dedup,
            cas_retry_limit: config.cas_retry_limit,
        }
    }

    /// Handles one completion signal for a lecture.
    ///
    /// Used by the slide-processing completion path, the recording-save path,
    /// and the analysis completion/deletion paths.
    pub async fn handle_event(
        &self,
        lecture_id: LectureId,
        raw: RawEvent,
    ) -> Result<TransitionResult, EventError> {
        let (mut lecture, event, fingerprint) =
            match self.ingestor.ingest(lecture_id, raw).await? {
                IngestOutcome::Duplicate(prior) => return Ok(prior),
                IngestOutcome::Fresh {
                    lecture,
                    event,
                    fingerprint,
                } => (lecture, event, fingerprint),
            };

        // Read-decide-write under per-lecture exclusion: the compare-and-set
        // only commits if the status we decided from is still current.
        let mut attempts = 0;
        let result = loop {
            let result = TransitionEngine::apply(&lecture, &event);

            if !result.accepted {
                tracing::info!(
                    lecture_id = %lecture_id,
                    status = %result.previous_status,
                    event = %event.kind.tag(),
                    "Rejected illegal transition"
                );
                return Ok(result);
            }

            let swapped = self
                .lectures
                .compare_and_set_status(&lecture_id, result.previous_status, result.new_status)
                .await?;
            if swapped {
                break result;
            }

            attempts += 1;
            if attempts >= self.cas_retry_limit {
                return Err(EventError::Conflict {
                    lecture_id,
                    attempts,
                });
            }

            // A concurrent transition won; re-read and decide again.
            lecture = self
                .lectures
                .get(&lecture_id)
                .await?
                .ok_or(EventError::UnknownLecture(lecture_id))?;
        };

        lecture.apply_status(result.new_status);
        tracing::info!(
            lecture_id = %lecture_id,
            from = %result.previous_status,
            to = %result.new_status,
            event = %event.kind.tag(),
            "Lecture transition committed"
        );

        for command in &result.commands {
            match command {
                Command::AppendHistory { .. } => {
                    self.history
                        .append(command, lecture_id, lecture.owner.clone())
                        .await;
                }
                Command::EmitNotification { .. } => {
                    self.fanout.dispatch(command, &lecture).await;
                }
            }
        }

        // The status moved on, so fingerprints recorded under the old status
        // no longer describe duplicates of anything.
        if result.status_changed() {
            if let Err(err) = self.dedup.invalidate(&lecture_id).await {
                tracing::warn!(lecture_id = %lecture_id, error = %err, "Dedup invalidation failed");
            }
        }
        if let Err(err) = self.dedup.record(&lecture_id, &fingerprint, &result).await {
            tracing::warn!(lecture_id = %lecture_id, error = %err, "Dedup record failed");
        }

        Ok(result)
    }
}
