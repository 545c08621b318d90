use std::sync::Arc;

use tokio::sync::Mutex;

use crate::backend::MatchBackend;
use crate::config::Config;
use crate::console::Console;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single console session. Locked only for dispatch and rendering,
    /// never across a backend call.
    pub console: Arc<Mutex<Console>>,
    /// Pluggable scoring backend. Default: `HttpBackend`.
    pub backend: Arc<dyn MatchBackend>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, backend: Arc<dyn MatchBackend>) -> Self {
        Self {
            console: Arc::new(Mutex::new(Console::new(config.normalize_weights))),
            backend,
            config,
        }
    }
}
