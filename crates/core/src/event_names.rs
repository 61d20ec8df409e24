//! Wire-level event names shared between the server and its clients.

/// WebSocket event carrying one annotated telemetry reading.
pub const EVENT_SENSOR_UPDATE: &str = "sensor_update";
