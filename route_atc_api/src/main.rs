#![warn(clippy::pedantic)]
mod cache;
mod error;
mod state;
mod upstream;
mod v1;

use crate::error::MainError;
use crate::state::AppState;
use axum::http::StatusCode;
use axum::{Router, routing::get};
use shared::error::InitializationError;
use shared::{init_tracing, load_config, shutdown_listener};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), MainError> {
    init_tracing()?;

    let config = load_config().map_err(InitializationError::from)?;
    info!(name: "config.loaded", config = ?config, "config loaded");

    let state = AppState::from_config(&config.upstream)?;

    let app = Router::new()
        .route("/health", get(|| async { StatusCode::OK }))
        .nest("/v1", v1::router(state))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let listener = TcpListener::bind(&config.server.listen_addr).await?;
    info!(name: "axum.initialized", addr = %config.server.listen_addr, "starting route ATC server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_listener())
        .await?;

    info!(name: "axum.completed", "server shut down");
    Ok(())
}
