use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::GenerationProvider;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    /// Provider client built once at startup. `GeminiClient` in production.
    pub llm: Arc<dyn GenerationProvider>,
    pub config: Config,
}

#[cfg(test)]
impl AppState {
    pub fn for_test(llm: Arc<dyn GenerationProvider>) -> Self {
        Self {
            llm,
            config: Config::for_test(),
        }
    }
}
