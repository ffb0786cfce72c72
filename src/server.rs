//! HTTP server
//!
//! Router construction and the serve loop. CORS is wide open (the service
//! is a read-only proxy) and every request is traced.

use crate::config::ServerConfig;
use crate::handlers;
use crate::state::AppState;
use anyhow::Context;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/", get(handlers::health_check))
        .route(
            "/api/v1/game-log/:player_id/:season_id/:game_type_id",
            get(handlers::get_game_log),
        )
        .route(
            "/api/v1/game-log/:player_id/:season_id",
            get(handlers::get_game_log_default),
        )
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until ctrl-c.
pub async fn serve(config: &ServerConfig, state: Arc<AppState>) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", config.host, config.port))?;

    let app = build_router(state);

    info!("Starting NHL game-log proxy on {}", addr);
    info!("  GET http://{}/api/v1/game-log/{{playerId}}/{{seasonId}}/{{gameTypeId}}", addr);
    info!("  GET http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}
