use std::sync::Arc;

use crate::dates::clock::{Clock, SystemClock};
use crate::server::config::ServerConfig;

/// Shared, read-only handler state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(config: ServerConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            config: Arc::new(config),
            clock,
        }
    }

    /// State backed by the local system clock.
    pub fn with_system_clock(config: ServerConfig) -> Self {
        Self::new(config, Arc::new(SystemClock))
    }
}
