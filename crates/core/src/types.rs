/// Actuator channel identifier as reported by the device.
pub type PortId = u32;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
