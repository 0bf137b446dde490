//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use pulse_core::config::AppConfig;
use pulse_service::{AnalyticsService, StatusService};
use pulse_store::{SessionStore, UserRegistry};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// User registry.
    pub registry: Arc<UserRegistry>,
    /// Session store.
    pub sessions: Arc<SessionStore>,
    /// Analytics engine.
    pub analytics: Arc<AnalyticsService>,
    /// Status classifier.
    pub status: Arc<StatusService>,
}

impl AppState {
    /// Build a fresh state with empty stores over the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let registry = Arc::new(UserRegistry::new());
        let sessions = Arc::new(SessionStore::new());
        let analytics = Arc::new(AnalyticsService::new(
            Arc::clone(&registry),
            Arc::clone(&sessions),
        ));
        let status = Arc::new(StatusService::new(Arc::clone(&analytics)));

        Self {
            config: Arc::new(config),
            registry,
            sessions,
            analytics,
            status,
        }
    }
}
