//! Practikum Server - REST API for authors, libraries, books and contacts

use anyhow::Result;
use practikum_server::{routes, state};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    "practikum_server=debug,practikum_core=debug,tower_http=debug".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = state::ServerConfig::from_env()?;

    // Create tables before accepting requests
    let state = state::AppState::from_config(&config).await?;

    // Build router
    let cors = routes::cors_layer(config.cors_origins.as_deref());
    let app = routes::create_router(state, cors);

    // Start server
    tracing::info!("Starting server on {}", config.addr);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
