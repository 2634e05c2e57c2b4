//! Real-time transport port (live sink).

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::domain::foundation::{DomainError, LectureId};

/// Topic naming convention: one topic per lecture id.
///
/// Clients watching a lecture subscribe to this topic; the fan-out publishes
/// notification payloads to it.
pub fn lecture_topic(id: &LectureId) -> String {
    format!("lectures.{}", id)
}

/// Port for publishing to connected clients.
///
/// Delivery is at-most-once and best-effort: no backlog, no replay. A client
/// that connects after an event was published only sees the durable
/// notification record, never the live message.
#[async_trait]
pub trait RealtimeTransport: Send + Sync {
    /// Publish a payload to a topic. Fire-and-forget; having no subscribers
    /// is not an error.
    async fn publish(&self, topic: &str, payload: JsonValue) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_embeds_the_lecture_id() {
        let id: LectureId = "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
        assert_eq!(
            lecture_topic(&id),
            "lectures.550e8400-e29b-41d4-a716-446655440000"
        );
    }

    #[test]
    fn realtime_transport_is_object_safe() {
        fn _accepts_dyn(_transport: &dyn RealtimeTransport) {}
    }
}
