use std::sync::Arc;

use crate::config::Config;
use crate::services::providers::CompletionProvider;

/// Shared application state
///
/// Everything here is immutable after startup; requests never interact.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub provider: Arc<dyn CompletionProvider>,
}

impl AppState {
    pub fn new(config: Config, provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            config: Arc::new(config),
            provider,
        }
    }
}
