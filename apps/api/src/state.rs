use std::sync::Arc;

use crate::assistant::CareerAssistant;
use crate::config::Config;
use crate::report::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Assistant service seam. Production wires `AssistantClient`; tests
    /// swap in a scripted double.
    pub assistant: Arc<dyn CareerAssistant>,
    pub sessions: SessionStore,
    pub config: Config,
}
