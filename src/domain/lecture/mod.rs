//! Lecture module - lifecycle state machine for lecture recordings.
//!
//! A lecture moves through its processing statuses in response to completion
//! signals from external collaborators (slide processing, recording capture,
//! analysis). The status registry is the single authority on which
//! `(status, event)` pairs are legal; the transition engine turns a legal
//! pair into a new status plus side-effect commands.

mod aggregate;
mod engine;
mod events;
mod history;
mod notification;
mod registry;

pub use aggregate::Lecture;
pub use engine::{
    Command, TransitionEngine, TransitionResult, ANALYSIS_COMPLETED_MESSAGE,
    ANALYSIS_COMPLETED_TITLE, SLIDE_PROCESSED_FAILURE_MESSAGE, SLIDE_PROCESSED_FAILURE_TITLE,
    SLIDE_PROCESSED_SUCCESS_MESSAGE, SLIDE_PROCESSED_SUCCESS_TITLE,
};
pub use events::{EventFingerprint, TransitionEvent, TransitionEventKind};
pub use history::{HistoryAction, HistoryEntry, NewHistoryEntry};
pub use notification::NotificationRecord;
pub use registry::{IllegalTransition, StatusRegistry};
