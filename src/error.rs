// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{message::ErrorBody, services::provider::ProviderError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("OpenAI API key not configured. Please add OPENAI_API_KEY to .env file")]
    Configuration,

    #[error("Completion service error: {0}")]
    Provider(#[from] ProviderError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Every failure surfaces as a 500 with the message as detail.
        let body = ErrorBody { detail: self.to_string() };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
