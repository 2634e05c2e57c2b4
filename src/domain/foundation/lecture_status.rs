//! LectureStatus enum for tracking lifecycle of lecture recordings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a lecture.
///
/// Intended progression is `InfoInput → SlideUpload → Recording → Analyzing
/// → Completed`, but transitions are event-driven rather than purely
/// sequential. Which `(status, event)` pairs are legal is decided by the
/// status registry, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LectureStatus {
    /// Title/description entry; no slide deck uploaded yet.
    #[default]
    InfoInput,
    /// Slide deck uploaded, waiting on (or retrying) slide processing.
    SlideUpload,
    /// Slides processed; per-page recordings are being captured.
    Recording,
    /// Recording finished; analysis in progress.
    Analyzing,
    /// Analysis results available.
    Completed,
}

impl LectureStatus {
    /// Returns true once the lecture has left the metadata-entry stage.
    pub fn has_slide_deck(&self) -> bool {
        !matches!(self, LectureStatus::InfoInput)
    }

    /// Returns true if analysis results exist for this lecture.
    pub fn is_analyzed(&self) -> bool {
        matches!(self, LectureStatus::Completed)
    }
}

impl fmt::Display for LectureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LectureStatus::InfoInput => "InfoInput",
            LectureStatus::SlideUpload => "SlideUpload",
            LectureStatus::Recording => "Recording",
            LectureStatus::Analyzing => "Analyzing",
            LectureStatus::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}
