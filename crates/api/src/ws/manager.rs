use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::ws::Message;
use rigwatch_core::types::Timestamp;
use tokio::sync::{mpsc, RwLock};

/// Channel sender half for pushing messages to a WebSocket session.
pub type WsSender = mpsc::UnboundedSender<Message>;

/// Metadata for a single WebSocket session.
pub struct WsConnection {
    /// Channel sender for outbound messages to this session.
    pub sender: WsSender,
    /// When this session was established.
    pub connected_at: Timestamp,
}

/// Registry of all active monitoring sessions -- the broadcast hub.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application. Each session owns an unbounded channel
/// drained by its own writer task, so delivery paths are independent: a
/// slow consumer cannot delay any other session or the ingestion side.
pub struct WsManager {
    connections: RwLock<HashMap<String, WsConnection>>,
}

impl WsManager {
    /// Create a new, empty session registry.
    pub fn new() -> Self {
        Self {
            connections: RwLock::new(HashMap::new()),
        }
    }

    /// Register a new session.
    ///
    /// Returns the receiver half of the message channel so the caller can
    /// forward messages to the WebSocket sink.
    pub async fn add(&self, conn_id: String) -> mpsc::UnboundedReceiver<Message> {
        let (tx, rx) = mpsc::unbounded_channel();
        let conn = WsConnection {
            sender: tx,
            connected_at: chrono::Utc::now(),
        };
        self.connections.write().await.insert(conn_id, conn);
        rx
    }

    /// Remove a session by its ID.
    pub async fn remove(&self, conn_id: &str) {
        self.connections.write().await.remove(conn_id);
    }

    /// Broadcast a message to every session connected at this moment.
    ///
    /// The sender handles are snapshotted under the read lock and the lock
    /// released before any send, so concurrent connects and disconnects
    /// never interleave with an in-flight fan-out. Delivery is
    /// fire-and-forget, at-most-once per session: sends into closed
    /// channels are silently skipped (those sessions are cleaned up by
    /// their own receive loop), and sessions connecting after the snapshot
    /// never receive the message retroactively.
    pub async fn broadcast(&self, message: Message) {
        let senders: Vec<WsSender> = {
            let conns = self.connections.read().await;
            conns.values().map(|conn| conn.sender.clone()).collect()
        };

        for sender in senders {
            let _ = sender.send(message.clone());
        }
    }

    /// Return the current number of active sessions.
    pub async fn connection_count(&self) -> usize {
        self.connections.read().await.len()
    }

    /// Send a Close frame to every session, then clear the registry.
    ///
    /// Used during graceful shutdown to notify all clients before the
    /// server stops accepting new connections.
    pub async fn shutdown_all(&self) {
        let mut conns = self.connections.write().await;
        let count = conns.len();
        for conn in conns.values() {
            let _ = conn.sender.send(Message::Close(None));
        }
        conns.clear();
        tracing::info!(count, "Closed all WebSocket sessions");
    }

    /// Send a Ping frame to every connected client.
    ///
    /// Used by the heartbeat task to keep sessions alive and detect
    /// stale ones.
    pub async fn ping_all(&self) {
        let conns = self.connections.read().await;
        for conn in conns.values() {
            let _ = conn.sender.send(Message::Ping(Bytes::new()));
        }
    }
}

impl Default for WsManager {
    fn default() -> Self {
        Self::new()
    }
}
