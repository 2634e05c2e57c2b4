//! Notification fan-out - executes notification commands against two sinks.
//!
//! Sink A is the durable notification store; sink B is the live per-lecture
//! topic. The sinks are independent: failure in one never affects the other,
//! and neither failure rolls back the status transition that produced the
//! command. No ordering between the sinks is guaranteed.

use std::sync::Arc;

use serde_json::json;

use crate::domain::lecture::{Command, Lecture};
use crate::ports::{lecture_topic, NotificationStore, RealtimeTransport};

/// Delivers `EmitNotification` commands to the durable and live sinks.
pub struct NotificationFanout {
    notifications: Arc<dyn NotificationStore>,
    realtime: Arc<dyn RealtimeTransport>,
}

impl NotificationFanout {
    /// Creates a new fan-out over the two sinks.
    pub fn new(
        notifications: Arc<dyn NotificationStore>,
        realtime: Arc<dyn RealtimeTransport>,
    ) -> Self {
        Self {
            notifications,
            realtime,
        }
    }

    /// Dispatches a command against both sinks.
    ///
    /// Non-notification commands are ignored. A missing recipient (deleted
    /// owner) skips the durable sink silently; sink failures are logged and
    /// swallowed.
    pub async fn dispatch(&self, command: &Command, lecture: &Lecture) {
        let Command::EmitNotification {
            title,
            message,
            recipient,
        } = command
        else {
            return;
        };

        // Sink A: durable record.
        match recipient {
            Some(recipient) => {
                if let Err(err) = self
                    .notifications
                    .create(
                        recipient,
                        Some(lecture.id),
                        Some(lecture.title.clone()),
                        title,
                        message,
                    )
                    .await
                {
                    tracing::warn!(
                        lecture_id = %lecture.id,
                        error = %err,
                        "Failed to persist notification record; transition stands"
                    );
                }
            }
            None => {
                tracing::debug!(
                    lecture_id = %lecture.id,
                    "Lecture owner absent, skipping durable notification"
                );
            }
        }

        // Sink B: live subscribers of this lecture's topic.
        let payload = json!({
            "lecture_id": lecture.id,
            "slide_deck_id": lecture.slide_deck_id,
            "status": lecture.status,
            "message": message,
        });
        if let Err(err) = self
            .realtime
            .publish(&lecture_topic(&lecture.id), payload)
            .await
        {
            tracing::warn!(
                lecture_id = %lecture.id,
                error = %err,
                "Failed to publish live notification; transition stands"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryNotificationStore;
    use crate::domain::foundation::{DomainError, ErrorCode, LectureStatus, SlideDeckId, UserId};
    use async_trait::async_trait;
    use serde_json::Value as JsonValue;
    use std::sync::Mutex;

    struct RecordingTransport {
        published: Mutex<Vec<(String, JsonValue)>>,
        fail: bool,
    }

    impl RecordingTransport {
        fn new() -> Self {
            Self {
                published: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                published: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn published(&self) -> Vec<(String, JsonValue)> {
            self.published.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RealtimeTransport for RecordingTransport {
        async fn publish(&self, topic: &str, payload: JsonValue) -> Result<(), DomainError> {
            if self.fail {
                return Err(DomainError::new(ErrorCode::TransportError, "down"));
            }
            self.published
                .lock()
                .unwrap()
                .push((topic.to_string(), payload));
            Ok(())
        }
    }

    fn test_lecture() -> Lecture {
        let mut lecture = Lecture::new(UserId::new("owner-1").unwrap(), "Thermodynamics");
        lecture.attach_slide_deck(SlideDeckId::new());
        lecture.apply_status(LectureStatus::Recording);
        lecture
    }

    fn notify_command(recipient: Option<UserId>) -> Command {
        Command::EmitNotification {
            title: "Slide processing completed".to_string(),
            message: "Your slide deck has been processed successfully. You can now start recording."
                .to_string(),
            recipient,
        }
    }

    #[tokio::test]
    async fn dispatch_writes_both_sinks() {
        let store = Arc::new(InMemoryNotificationStore::new());
        let transport = Arc::new(RecordingTransport::new());
        let fanout = NotificationFanout::new(store.clone(), transport.clone());
        let lecture = test_lecture();

        fanout
            .dispatch(&notify_command(lecture.owner.clone()), &lecture)
            .await;

        let records = store.records().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].lecture_id, Some(lecture.id));
        assert_eq!(records[0].lecture_title.as_deref(), Some("Thermodynamics"));
        assert!(!records[0].read);

        let published = transport.published();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].0, lecture_topic(&lecture.id));
        assert_eq!(published[0].1["lecture_id"], lecture.id.to_string());
        assert_eq!(published[0].1["status"], "recording");
    }

    #[tokio::test]
    async fn missing_owner_skips_durable_sink_but_still_publishes_live() {
        let store = Arc::new(InMemoryNotificationStore::new());
        let transport = Arc::new(RecordingTransport::new());
        let fanout = NotificationFanout::new(store.clone(), transport.clone());
        let mut lecture = test_lecture();
        lecture.owner = None;

        fanout.dispatch(&notify_command(None), &lecture).await;

        assert!(store.records().await.is_empty());
        assert_eq!(transport.published().len(), 1);
    }

    #[tokio::test]
    async fn live_sink_failure_does_not_affect_durable_sink() {
        let store = Arc::new(InMemoryNotificationStore::new());
        let transport = Arc::new(RecordingTransport::failing());
        let fanout = NotificationFanout::new(store.clone(), transport);
        let lecture = test_lecture();

        fanout
            .dispatch(&notify_command(lecture.owner.clone()), &lecture)
            .await;

        assert_eq!(store.records().await.len(), 1);
    }

    #[tokio::test]
    async fn history_commands_are_ignored() {
        let store = Arc::new(InMemoryNotificationStore::new());
        let transport = Arc::new(RecordingTransport::new());
        let fanout = NotificationFanout::new(store.clone(), transport.clone());
        let lecture = test_lecture();

        let command = Command::AppendHistory {
            action: crate::domain::lecture::HistoryAction::Updated,
            description: "noise".to_string(),
        };
        fanout.dispatch(&command, &lecture).await;

        assert!(store.records().await.is_empty());
        assert!(transport.published().is_empty());
    }
}
