//! Wire format for realtime lecture updates.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{LectureId, LectureStatus, SlideDeckId};

/// Payload pushed to clients subscribed to a lecture's topic.
///
/// Mirrors what the durable notification carries, minus the recipient:
/// the topic itself scopes delivery to interested clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LectureUpdate {
    pub lecture_id: LectureId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slide_deck_id: Option<SlideDeckId>,
    pub status: LectureStatus,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_status_as_snake_case() {
        let update = LectureUpdate {
            lecture_id: LectureId::new(),
            slide_deck_id: None,
            status: LectureStatus::Recording,
            message: "recording saved".to_string(),
        };

        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["status"], "recording");
        assert!(json.get("slide_deck_id").is_none());
    }

    #[test]
    fn round_trips_through_json() {
        let update = LectureUpdate {
            lecture_id: LectureId::new(),
            slide_deck_id: Some(SlideDeckId::new()),
            status: LectureStatus::Completed,
            message: "analysis ready".to_string(),
        };

        let json = serde_json::to_string(&update).unwrap();
        let back: LectureUpdate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, update);
    }
}
