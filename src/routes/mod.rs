// src/routes/mod.rs
pub mod chat;

use crate::{cors::cors_layer, state::SharedState};
use axum::{
    Router,
    routing::{get, post},
};
use chat::{chat_handler, health_handler};
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(health_handler))
        .route("/api/chat", post(chat_handler))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}
