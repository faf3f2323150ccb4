//! REST API for form intake.
//!
//! Exposes the submit endpoint that persists Business Information Form
//! responses, plus health and OpenAPI endpoints.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod dto;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod state;

pub use openapi::ApiDoc;
pub use server::SubmitServer;
pub use state::ApiState;

/// Default port for the submit server
pub const DEFAULT_PORT: u16 = 3000;

/// Build the API router with all routes
pub fn build_router(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health endpoints
        .route("/api/health", get(routes::health::health))
        .route("/api/status", get(routes::health::status))
        // Intake
        .route("/api/submit-form", post(routes::submit::submit_form))
        // Documentation
        .route("/api/openapi.json", get(openapi::openapi_json))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the submit server until Ctrl-C
pub async fn serve(state: ApiState, addr: SocketAddr) -> Result<()> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Submit server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown requested");
        })
        .await?;

    Ok(())
}
