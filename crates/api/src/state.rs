use std::sync::Arc;

use crate::config::ServerConfig;
use crate::ws::WsManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// WebSocket session registry (monitoring clients).
    pub ws_manager: Arc<WsManager>,
    /// Event bus carrying annotated readings toward the broadcast side.
    pub event_bus: Arc<rigwatch_events::EventBus>,
}
