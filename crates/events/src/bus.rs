//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the hop between the ingestion endpoint and whatever
//! consumes annotated readings (currently the WebSocket update relay). It
//! is designed to be shared via `Arc<EventBus>` across the application.

use serde::Serialize;
use tokio::sync::broadcast;

use rigwatch_core::telemetry::TelemetryReading;
use rigwatch_core::types::Timestamp;

// ---------------------------------------------------------------------------
// SensorUpdate
// ---------------------------------------------------------------------------

/// One fully annotated telemetry reading, ready for fan-out.
///
/// Published by the ingestion endpoint after scoring; immutable from that
/// point on. Subscribers receive their own clone.
#[derive(Debug, Clone, Serialize)]
pub struct SensorUpdate {
    /// The reading with per-port health attached.
    pub reading: TelemetryReading,
    /// When the submission was accepted (UTC).
    pub received_at: Timestamp,
}

impl SensorUpdate {
    /// Wrap an annotated reading, stamping it with the current time.
    pub fn new(reading: TelemetryReading) -> Self {
        Self {
            reading,
            received_at: chrono::Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`SensorUpdate`]. Publishing is
/// non-blocking; a subscriber that falls more than the channel capacity
/// behind observes `RecvError::Lagged` and loses the oldest updates, which
/// is acceptable for a live telemetry feed with no replay semantics.
pub struct EventBus {
    sender: broadcast::Sender<SensorUpdate>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an update to all current subscribers.
    ///
    /// If there are no active subscribers the update is silently dropped --
    /// a reading that reaches nobody is simply lost, by design.
    pub fn publish(&self, update: SensorUpdate) {
        // Ignore the SendError -- it only means there are zero receivers.
        let _ = self.sender.send(update);
    }

    /// Subscribe to all updates published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<SensorUpdate> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
