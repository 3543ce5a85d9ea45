pub mod distance;
pub mod resolutions;
pub mod ws;
pub mod zones;

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Json;
use axum::Router;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use crate::engine::resolver::Origin;
use crate::error::{AppError, GeoError};
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(distance::router())
        .merge(zones::router())
        .merge(resolutions::router())
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/ws", get(ws::ws_handler))
        .with_state(state)
        .layer(cors)
}

pub(crate) fn reject(state: &AppState, reason: &str, message: String) -> AppError {
    warn!(reason, error = %message, "rejected request");
    state
        .metrics
        .rejected_requests_total
        .with_label_values(&[reason])
        .inc();
    AppError::BadRequest(message)
}

pub(crate) fn reject_geo(state: &AppState, err: GeoError) -> AppError {
    reject(state, err.reason(), err.to_string())
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    origin: Origin,
    resolutions: usize,
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        origin: state.origin.clone(),
        resolutions: state.resolutions.len(),
    })
}

async fn metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.metrics.encode() {
        Ok(body) => (
            StatusCode::OK,
            [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(err) => (StatusCode::INTERNAL_SERVER_ERROR, err).into_response(),
    }
}
