//! Application state for the Press status service.

use crate::config::AppConfig;
use crate::db::DbPool;
use press_workflow::CardMarkup;
use std::sync::Arc;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (health checks only)
    pub db: DbPool,

    /// Application configuration
    pub config: Arc<AppConfig>,

    /// Status card HTML renderer
    pub markup: CardMarkup,

    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    pub fn new(db: DbPool, config: AppConfig) -> Self {
        Self {
            db,
            config: Arc::new(config),
            markup: CardMarkup::new(),
            start_time: std::time::Instant::now(),
        }
    }

    /// Get the server uptime in seconds.
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
