//! Bus-to-WebSocket update relay.
//!
//! [`UpdateRelay`] subscribes to the event bus and forwards each
//! [`SensorUpdate`] to every connected monitoring session via the
//! [`WsManager`]. It is the only component that knows the wire envelope
//! of the `sensor_update` event.

use std::sync::Arc;

use axum::extract::ws::Message;
use tokio::sync::broadcast;

use rigwatch_core::event_names::EVENT_SENSOR_UPDATE;
use rigwatch_events::SensorUpdate;

use crate::ws::WsManager;

/// Forwards annotated readings from the event bus to the broadcast hub.
pub struct UpdateRelay {
    ws_manager: Arc<WsManager>,
}

impl UpdateRelay {
    /// Create a new relay targeting the given session registry.
    pub fn new(ws_manager: Arc<WsManager>) -> Self {
        Self { ws_manager }
    }

    /// Run the main relay loop.
    ///
    /// Consumes updates from the bus via `receiver` and fans each one out.
    /// The loop exits when the channel is closed (i.e. the
    /// [`EventBus`](rigwatch_events::EventBus) is dropped). A lagged
    /// receiver skips the lost updates -- the feed has no replay semantics.
    pub async fn run(self, mut receiver: broadcast::Receiver<SensorUpdate>) {
        loop {
            match receiver.recv().await {
                Ok(update) => self.deliver(&update).await,
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Update relay lagged behind the bus");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, update relay shutting down");
                    break;
                }
            }
        }
    }

    /// Serialize one update into the wire envelope and broadcast it.
    async fn deliver(&self, update: &SensorUpdate) {
        let msg = serde_json::json!({
            "type": EVENT_SENSOR_UPDATE,
            "payload": update.reading,
            "timestamp": update.received_at,
        });
        self.ws_manager
            .broadcast(Message::Text(msg.to_string().into()))
            .await;
    }
}
