use std::sync::Arc;

use crate::config::ServerConfig;
use crate::scripting::orchestrator::ScriptOrchestrator;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration, immutable after startup.
    pub config: Arc<ServerConfig>,
    /// Runs external scripts inside run directories.
    pub orchestrator: Arc<ScriptOrchestrator>,
}

impl AppState {
    /// Build the state from a loaded configuration.
    pub fn new(config: ServerConfig) -> Self {
        let orchestrator = ScriptOrchestrator::new(config.workspace.clone());
        Self {
            config: Arc::new(config),
            orchestrator: Arc::new(orchestrator),
        }
    }
}
