// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::provider::{ChatProvider, OpenAiClient};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub provider: Arc<dyn ChatProvider>,
}

impl AppState {
    /// State backed by the real OpenAI-compatible client.
    pub fn new(config: Config) -> Self {
        let provider = Arc::new(OpenAiClient::new(config.api_base.clone()));
        Self { config, provider }
    }

    pub fn with_provider(config: Config, provider: Arc<dyn ChatProvider>) -> Self {
        Self { config, provider }
    }
}
