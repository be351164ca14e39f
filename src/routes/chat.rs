use axum::{
    extract::State,
    Json,
};
use crate::{
    message::{ChatRequest, ChatResponse, HealthResponse},
    state::SharedState,
    services::relay::relay,
    error::AppError,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let response = relay(&state.config, state.provider.as_ref(), &payload.message).await?;
    Ok(Json(ChatResponse { response }))
}

// Liveness only; never touches the provider.
pub async fn health_handler(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Chat relay API is running!".to_string(),
        status: "healthy".to_string(),
        api_key_configured: state.config.api_key_configured(),
    })
}
