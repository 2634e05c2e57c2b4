//! Realtime fan-out adapters.
//!
//! A broadcast-channel room registry keyed by lecture, plus the
//! [`RealtimeTransport`](crate::ports::RealtimeTransport) implementation
//! that routes published payloads into it. Delivery is at-most-once:
//! subscribers that are absent or too slow simply miss updates.

mod messages;
mod rooms;
mod transport;

pub use messages::LectureUpdate;
pub use rooms::{ClientId, RoomManager};
pub use transport::BroadcastRealtimeTransport;
