//! Rigwatch API server library.
//!
//! Exposes the core building blocks (config, state, error handling, routes,
//! WebSocket infrastructure, the update relay) so integration tests and the
//! binary entrypoint can both access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod relay;
pub mod router;
pub mod routes;
pub mod state;
pub mod ws;
