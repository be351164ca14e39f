// src/services/relay.rs
use tracing::{error, info};

use super::provider::{ChatProvider, CompletionRequest, Turn};
use crate::{config::Config, error::AppError};

pub const SYSTEM_PROMPT: &str =
    "You are a helpful AI assistant. Provide clear, concise, and helpful responses.";
pub const MAX_TOKENS: u32 = 500;
pub const TEMPERATURE: f32 = 0.7;

const PREVIEW_CHARS: usize = 50;

/// System instruction followed by the caller's message, verbatim.
pub fn build_turns(message: &str) -> Vec<Turn> {
    vec![Turn::system(SYSTEM_PROMPT), Turn::user(message)]
}

pub fn build_request(config: &Config, message: &str) -> CompletionRequest {
    CompletionRequest {
        model: config.model.clone(),
        messages: build_turns(message),
        max_tokens: MAX_TOKENS,
        temperature: TEMPERATURE,
    }
}

fn preview(message: &str) -> String {
    message.chars().take(PREVIEW_CHARS).collect()
}

/// Forward one message to the provider and return the trimmed first choice.
pub async fn relay(
    config: &Config,
    provider: &dyn ChatProvider,
    message: &str,
) -> Result<String, AppError> {
    info!("Received message: {}...", preview(message));

    let Some(api_key) = config.api_key.as_deref() else {
        error!("API key not configured");
        return Err(AppError::Configuration);
    };

    let request = build_request(config, message);
    info!(model = %request.model, "Sending request to provider");

    let reply = provider.complete(api_key, &request).await.map_err(|e| {
        error!("Provider error: {}", e);
        AppError::from(e)
    })?;

    let text = reply.trim().to_string();
    info!("Provider response received: {} characters", text.chars().count());
    Ok(text)
}
