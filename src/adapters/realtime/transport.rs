//! Broadcast-channel implementation of the realtime transport port.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::domain::foundation::{DomainError, ErrorCode, LectureId};
use crate::ports::RealtimeTransport;

use super::messages::LectureUpdate;
use super::rooms::RoomManager;

const TOPIC_PREFIX: &str = "lectures.";

/// Routes published payloads into the in-process room registry.
///
/// Delivery is at-most-once by construction: publishing to a topic with
/// no subscribers drops the update, and there is no replay for clients
/// that join later.
pub struct BroadcastRealtimeTransport {
    rooms: Arc<RoomManager>,
}

impl BroadcastRealtimeTransport {
    pub fn new(rooms: Arc<RoomManager>) -> Self {
        Self { rooms }
    }

    fn parse_topic(topic: &str) -> Result<LectureId, DomainError> {
        let id = topic.strip_prefix(TOPIC_PREFIX).ok_or_else(|| {
            DomainError::new(
                ErrorCode::TransportError,
                format!("unsupported topic: {topic}"),
            )
        })?;
        id.parse().map_err(|_| {
            DomainError::new(
                ErrorCode::TransportError,
                format!("topic carries an invalid lecture id: {topic}"),
            )
        })
    }
}

#[async_trait]
impl RealtimeTransport for BroadcastRealtimeTransport {
    async fn publish(&self, topic: &str, payload: JsonValue) -> Result<(), DomainError> {
        let lecture_id = Self::parse_topic(topic)?;
        let update: LectureUpdate = serde_json::from_value(payload).map_err(|err| {
            DomainError::new(
                ErrorCode::TransportError,
                "realtime payload does not match the update schema",
            )
            .with_detail("cause", err.to_string())
        })?;

        self.rooms.broadcast_to_lecture(&lecture_id, update).await;
        Ok(())
    }
}
