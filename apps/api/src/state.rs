use crate::config::Config;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// All live editing sessions; the only mutable state in the service.
    pub sessions: SessionStore,
    pub config: Config,
}
