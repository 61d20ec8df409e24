//! Request handlers for the ingestion API.
//!
//! Handlers stay thin: parsing and HTTP concerns live here, scoring lives
//! in `rigwatch_core`, and fan-out is reached only through the event bus.

pub mod telemetry;
