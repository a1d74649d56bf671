use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    response::Html,
    routing::get,
};
use serde::Deserialize;
use tracing::info;

use super::listing::{AppState, ListedMatch, MonthListing};
use super::page::render_page;
use crate::error::AppError;

pub type SharedState = Arc<AppState>;

/// Page query parameters. Both are optional and validated downstream.
#[derive(Debug, Default, Deserialize)]
pub struct MatchQuery {
    pub month: Option<String>,
    pub region: Option<String>,
}

pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(matches_page))
        .route("/matches", get(matches_page))
        .route("/api/matches", get(matches_json))
        .route("/health", get(health))
        .with_state(state)
}

async fn matches_page(
    State(state): State<SharedState>,
    Query(query): Query<MatchQuery>,
) -> Html<String> {
    let listing =
        MonthListing::build(&state, query.month.as_deref(), query.region.as_deref()).await;
    Html(render_page(&listing))
}

async fn matches_json(
    State(state): State<SharedState>,
    Query(query): Query<MatchQuery>,
) -> Json<Vec<ListedMatch>> {
    let listing =
        MonthListing::build(&state, query.month.as_deref(), query.region.as_deref()).await;
    Json(listing.matches)
}

async fn health() -> &'static str {
    "ok"
}

/// Binds `host:port` and serves until Ctrl+C.
pub async fn start_server(state: SharedState, host: &str, port: u16) -> Result<(), AppError> {
    let app = build_router(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::server_error(format!("Failed to bind to {addr}: {e}")))?;

    let local_addr = listener.local_addr()?;
    info!("KBO schedule viewer running at http://{local_addr}");
    println!("KBO schedule viewer running at http://{local_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::server_error(format!("Server error: {e}")))?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
