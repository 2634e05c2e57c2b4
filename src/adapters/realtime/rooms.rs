//! Room management for lecture-scoped realtime routing.
//!
//! Rooms are keyed by lecture ID, so an update for one lecture reaches
//! only the clients watching that lecture. Rooms are created on first
//! join and torn down when the last client leaves.

use std::collections::HashMap;

use tokio::sync::{broadcast, RwLock};
use uuid::Uuid;

use crate::domain::foundation::LectureId;

use super::messages::LectureUpdate;

/// Unique identifier for a connected client.
///
/// Generated server-side when a client connects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientId(Uuid);

impl ClientId {
    /// Create a new random client ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Manages realtime rooms organized by lecture.
///
/// Broadcasts (reads) vastly outnumber joins and leaves (writes), so the
/// registry sits behind an `RwLock` and concurrent broadcasts to
/// different rooms do not contend.
pub struct RoomManager {
    /// Map of lecture_id → broadcast sender for that room.
    rooms: RwLock<HashMap<LectureId, broadcast::Sender<LectureUpdate>>>,

    /// Map of client_id → lecture_id for O(1) cleanup on disconnect.
    client_lectures: RwLock<HashMap<ClientId, LectureId>>,

    /// Channel capacity for each room's broadcast channel.
    channel_capacity: usize,
}

impl RoomManager {
    /// Create a new room manager with the given per-room channel capacity.
    ///
    /// Slow subscribers drop the oldest buffered updates once the channel
    /// fills; larger capacities absorb bigger bursts at more memory.
    pub fn new(channel_capacity: usize) -> Self {
        Self {
            rooms: RwLock::new(HashMap::new()),
            client_lectures: RwLock::new(HashMap::new()),
            channel_capacity,
        }
    }

    /// Create with default capacity (128 messages).
    pub fn with_default_capacity() -> Self {
        Self::new(128)
    }

    /// Join a client to a lecture room, creating the room if needed.
    ///
    /// Returns a receiver for updates published to that lecture.
    pub async fn join(
        &self,
        lecture_id: &LectureId,
        client_id: ClientId,
    ) -> broadcast::Receiver<LectureUpdate> {
        let mut rooms = self.rooms.write().await;

        let sender = rooms.entry(*lecture_id).or_insert_with(|| {
            let (tx, _) = broadcast::channel(self.channel_capacity);
            tx
        });

        self.client_lectures
            .write()
            .await
            .insert(client_id, *lecture_id);

        sender.subscribe()
    }

    /// Remove a client from their lecture room.
    ///
    /// If the room becomes empty, it is cleaned up.
    pub async fn leave(&self, client_id: &ClientId) {
        let mut client_lectures = self.client_lectures.write().await;

        if let Some(lecture_id) = client_lectures.remove(client_id) {
            let rooms = self.rooms.read().await;
            if let Some(sender) = rooms.get(&lecture_id) {
                if sender.receiver_count() == 0 {
                    drop(rooms);
                    self.rooms.write().await.remove(&lecture_id);
                }
            }
        }
    }

    /// Broadcast an update to all clients in a lecture room.
    ///
    /// A no-op when the room doesn't exist or has no subscribers.
    pub async fn broadcast_to_lecture(&self, lecture_id: &LectureId, update: LectureUpdate) {
        let rooms = self.rooms.read().await;

        if let Some(sender) = rooms.get(lecture_id) {
            // No receivers is fine.
            let _ = sender.send(update);
        }
    }

    /// Number of clients currently in a lecture's room (0 if no room).
    pub async fn client_count(&self, lecture_id: &LectureId) -> usize {
        let rooms = self.rooms.read().await;
        rooms
            .get(lecture_id)
            .map(|s| s.receiver_count())
            .unwrap_or(0)
    }

    /// All lecture IDs with an active room.
    pub async fn active_rooms(&self) -> Vec<LectureId> {
        self.rooms.read().await.keys().cloned().collect()
    }

    /// Total connected clients across all rooms.
    pub async fn total_client_count(&self) -> usize {
        self.client_lectures.read().await.len()
    }
}

impl Default for RoomManager {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::LectureStatus;
    use std::sync::Arc;

    fn test_update(lecture_id: LectureId) -> LectureUpdate {
        LectureUpdate {
            lecture_id,
            slide_deck_id: None,
            status: LectureStatus::Recording,
            message: "slides processed".to_string(),
        }
    }

    #[tokio::test]
    async fn join_creates_room_if_not_exists() {
        let manager = RoomManager::with_default_capacity();
        let lecture_id = LectureId::new();

        let _rx = manager.join(&lecture_id, ClientId::new()).await;

        assert_eq!(manager.active_rooms().await.len(), 1);
    }

    #[tokio::test]
    async fn join_returns_receiver_for_broadcasts() {
        let manager = Arc::new(RoomManager::with_default_capacity());
        let lecture_id = LectureId::new();

        let mut rx = manager.join(&lecture_id, ClientId::new()).await;

        manager
            .broadcast_to_lecture(&lecture_id, test_update(lecture_id))
            .await;

        let received = rx.recv().await.unwrap();
        assert_eq!(received.status, LectureStatus::Recording);
        assert_eq!(received.lecture_id, lecture_id);
    }

    #[tokio::test]
    async fn multiple_clients_in_same_room_all_receive_broadcast() {
        let manager = Arc::new(RoomManager::with_default_capacity());
        let lecture_id = LectureId::new();

        let mut rx1 = manager.join(&lecture_id, ClientId::new()).await;
        let mut rx2 = manager.join(&lecture_id, ClientId::new()).await;
        let mut rx3 = manager.join(&lecture_id, ClientId::new()).await;

        manager
            .broadcast_to_lecture(&lecture_id, test_update(lecture_id))
            .await;

        assert!(rx1.recv().await.is_ok());
        assert!(rx2.recv().await.is_ok());
        assert!(rx3.recv().await.is_ok());
    }

    #[tokio::test]
    async fn clients_in_different_rooms_are_isolated() {
        let manager = Arc::new(RoomManager::with_default_capacity());
        let lecture_a = LectureId::new();
        let lecture_b = LectureId::new();

        let mut rx_a = manager.join(&lecture_a, ClientId::new()).await;
        let _rx_b = manager.join(&lecture_b, ClientId::new()).await;

        manager
            .broadcast_to_lecture(&lecture_a, test_update(lecture_a))
            .await;

        assert!(rx_a.recv().await.is_ok());
        assert_eq!(manager.client_count(&lecture_a).await, 1);
        assert_eq!(manager.client_count(&lecture_b).await, 1);
    }

    #[tokio::test]
    async fn leave_removes_client_from_room() {
        let manager = RoomManager::with_default_capacity();
        let lecture_id = LectureId::new();
        let client_id = ClientId::new();

        let _rx = manager.join(&lecture_id, client_id.clone()).await;
        assert_eq!(manager.total_client_count().await, 1);

        manager.leave(&client_id).await;
        assert_eq!(manager.total_client_count().await, 0);
    }

    #[tokio::test]
    async fn leave_cleans_up_empty_room() {
        let manager = RoomManager::with_default_capacity();
        let lecture_id = LectureId::new();
        let client_id = ClientId::new();

        {
            let _rx = manager.join(&lecture_id, client_id.clone()).await;
        }

        manager.leave(&client_id).await;

        assert!(manager.active_rooms().await.is_empty());
    }

    #[tokio::test]
    async fn client_count_tracks_joins() {
        let manager = RoomManager::with_default_capacity();
        let lecture_id = LectureId::new();

        assert_eq!(manager.client_count(&lecture_id).await, 0);

        let _rx1 = manager.join(&lecture_id, ClientId::new()).await;
        assert_eq!(manager.client_count(&lecture_id).await, 1);

        let _rx2 = manager.join(&lecture_id, ClientId::new()).await;
        assert_eq!(manager.client_count(&lecture_id).await, 2);
    }

    #[tokio::test]
    async fn broadcast_to_nonexistent_room_is_noop() {
        let manager = RoomManager::with_default_capacity();
        let lecture_id = LectureId::new();

        manager
            .broadcast_to_lecture(&lecture_id, test_update(lecture_id))
            .await;
    }
}
