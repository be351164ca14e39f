use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use chat_relay::{config::Config, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    if config.api_key_configured() {
        info!("OpenAI API key configured");
    } else {
        warn!("OPENAI_API_KEY not found; create a .env file with your OpenAI API key");
    }

    let addr = config.bind_addr();
    let state = Arc::new(AppState::new(config));

    let app = routes::create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("Chat relay running at http://{}", addr);
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
