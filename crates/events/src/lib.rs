//! Rigwatch in-process event infrastructure.
//!
//! Provides the building blocks for the ingestion-to-broadcast pipeline:
//!
//! - [`EventBus`] -- publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`SensorUpdate`] -- the annotated-reading event carried on the bus.

pub mod bus;

pub use bus::{EventBus, SensorUpdate};
