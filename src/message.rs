// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct HealthResponse {
    pub message: String,
    pub status: String,
    pub api_key_configured: bool,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}
