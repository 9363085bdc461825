//! HTTP API
//!
//! `POST /ask/{gita,quran,bible,all}` with `{"question": "..."}` and a
//! `GET /hi` liveness probe.

pub mod error;
pub mod handlers;

pub use error::ApiError;

use axum::{
    Router,
    routing::{get, post},
};
use scripture_application::AskScriptureUseCase;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

/// Shared state for every handler
#[derive(Clone)]
pub struct AppState {
    pub use_case: Arc<AskScriptureUseCase>,
}

impl AppState {
    pub fn new(use_case: AskScriptureUseCase) -> Self {
        Self {
            use_case: Arc::new(use_case),
        }
    }
}

/// Build the router with CORS and request tracing
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/hi", get(handlers::hi))
        .route("/ask/gita", post(handlers::ask_gita))
        .route("/ask/quran", post(handlers::ask_quran))
        .route("/ask/bible", post(handlers::ask_bible))
        .route("/ask/all", post(handlers::ask_all))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind `address` and serve until Ctrl-C
pub async fn serve(address: &str, state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(address).await?;
    info!(address = %listener.local_addr()?, "Listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
