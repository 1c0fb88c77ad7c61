use std::sync::Arc;

use scoreboard_core::scoring::ScoreService;
use scoreboard_events::MessageProducer;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Score submission and pass/fail list service.
    pub score_service: Arc<ScoreService>,
    /// Publishes payloads to topics on the shared message broker.
    pub producer: Arc<MessageProducer>,
}
