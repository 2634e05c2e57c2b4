//! Transition engine - pure decision function for status changes.
//!
//! The engine is the only component allowed to decide a lecture's new status.
//! It consults the status registry, then builds the list of side-effect
//! commands for the fan-out and history components. It holds no state of its
//! own: no timers, no retries, no memory between calls.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{LectureStatus, UserId};

use super::aggregate::Lecture;
use super::events::{TransitionEvent, TransitionEventKind};
use super::history::HistoryAction;
use super::registry::StatusRegistry;

/// Notification template: slide processing succeeded.
pub const SLIDE_PROCESSED_SUCCESS_TITLE: &str = "Slide processing completed";
pub const SLIDE_PROCESSED_SUCCESS_MESSAGE: &str =
    "Your slide deck has been processed successfully. You can now start recording.";

/// Notification template: slide processing failed.
pub const SLIDE_PROCESSED_FAILURE_TITLE: &str = "Slide processing failed";
pub const SLIDE_PROCESSED_FAILURE_MESSAGE: &str =
    "Slide processing failed. Please try uploading again.";

/// Notification template: analysis results available.
pub const ANALYSIS_COMPLETED_TITLE: &str = "Lecture analysis completed";
pub const ANALYSIS_COMPLETED_MESSAGE: &str = "Your lecture analysis is ready to review.";

/// A side effect the caller must execute after a transition is committed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Notify the lecture owner through both sinks.
    EmitNotification {
        title: String,
        message: String,
        /// Resolved from the lecture owner; `None` when the owner has been
        /// deleted, in which case the fan-out silently skips delivery.
        recipient: Option<UserId>,
    },
    /// Append an immutable audit entry.
    AppendHistory {
        action: HistoryAction,
        description: String,
    },
}

/// Output of applying an event to a lecture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionResult {
    pub accepted: bool,
    pub previous_status: LectureStatus,
    pub new_status: LectureStatus,
    pub commands: Vec<Command>,
}

impl TransitionResult {
    /// A rejected transition: state untouched, no side effects.
    fn rejected(status: LectureStatus) -> Self {
        Self {
            accepted: false,
            previous_status: status,
            new_status: status,
            commands: Vec::new(),
        }
    }

    /// True if the lecture status actually changed.
    pub fn status_changed(&self) -> bool {
        self.previous_status != self.new_status
    }
}

/// Pure function from `(Lecture, TransitionEvent)` to `TransitionResult`.
pub struct TransitionEngine;

impl TransitionEngine {
    /// Applies a validated event to the lecture's current status.
    ///
    /// Illegal events produce `accepted: false` with an empty command list;
    /// the caller surfaces that as a client-visible error and leaves the
    /// lecture untouched.
    pub fn apply(lecture: &Lecture, event: &TransitionEvent) -> TransitionResult {
        let current = lecture.status;

        let new_status = match StatusRegistry::next_status(current, &event.kind) {
            Ok(next) => next,
            Err(_) => return TransitionResult::rejected(current),
        };

        let mut commands = vec![Command::AppendHistory {
            action: Self::history_action(&event.kind),
            description: Self::describe(&event.kind),
        }];

        if event.kind.is_user_facing() {
            let (title, message) = Self::notification_text(&event.kind);
            commands.push(Command::EmitNotification {
                title: title.to_string(),
                message: message.to_string(),
                recipient: lecture.owner.clone(),
            });
        }

        TransitionResult {
            accepted: true,
            previous_status: current,
            new_status,
            commands,
        }
    }

    /// History action tag derived from the event kind.
    fn history_action(kind: &TransitionEventKind) -> HistoryAction {
        match kind {
            TransitionEventKind::SlideProcessed { .. } => HistoryAction::SlideProcessed,
            TransitionEventKind::RecordingSaved { .. } => HistoryAction::RecordingCompleted,
            TransitionEventKind::AnalysisCompleted { .. } => HistoryAction::Updated,
            TransitionEventKind::AnalysisDeleted => HistoryAction::Updated,
        }
    }

    /// Free-text description for the audit log.
    fn describe(kind: &TransitionEventKind) -> String {
        match kind {
            TransitionEventKind::SlideProcessed {
                success: true,
                slide_count,
                ..
            } => match slide_count {
                Some(count) => format!("Slide deck processed ({} pages)", count),
                None => "Slide deck processed".to_string(),
            },
            TransitionEventKind::SlideProcessed {
                success: false,
                failure_reason,
                ..
            } => match failure_reason {
                Some(reason) => format!("Slide processing failed: {}", reason),
                None => "Slide processing failed".to_string(),
            },
            TransitionEventKind::RecordingSaved { slide_page } => match slide_page {
                Some(page) => format!("Recording saved for slide page {}", page),
                None => "Recording saved".to_string(),
            },
            TransitionEventKind::AnalysisCompleted { score } => {
                format!("Analysis completed with score {}", score)
            }
            TransitionEventKind::AnalysisDeleted => {
                "Analysis deleted; lecture returned to analyzing".to_string()
            }
        }
    }

    /// Notification title and message for user-facing events.
    fn notification_text(kind: &TransitionEventKind) -> (&'static str, &'static str) {
        match kind {
            TransitionEventKind::SlideProcessed { success: true, .. } => (
                SLIDE_PROCESSED_SUCCESS_TITLE,
                SLIDE_PROCESSED_SUCCESS_MESSAGE,
            ),
            TransitionEventKind::SlideProcessed { success: false, .. } => (
                SLIDE_PROCESSED_FAILURE_TITLE,
                SLIDE_PROCESSED_FAILURE_MESSAGE,
            ),
            TransitionEventKind::AnalysisCompleted { .. } => {
                (ANALYSIS_COMPLETED_TITLE, ANALYSIS_COMPLETED_MESSAGE)
            }
            // Not user-facing; callers check is_user_facing() first.
            TransitionEventKind::RecordingSaved { .. } | TransitionEventKind::AnalysisDeleted => {
                unreachable!("notification text requested for non-user-facing event")
            }
        }
    }
}
