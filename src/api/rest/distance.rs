use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::Json;
use axum::Router;
use serde::{Deserialize, Serialize};

use crate::api::rest::reject_geo;
use crate::error::AppError;
use crate::geo::distance_km;
use crate::models::location::Coordinate;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/distance", post(compute_distance))
}

#[derive(Deserialize)]
pub struct DistanceRequest {
    pub origin: Coordinate,
    pub destination: Coordinate,
}

#[derive(Serialize)]
pub struct DistanceResponse {
    pub distance_km: f64,
}

async fn compute_distance(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<DistanceRequest>,
) -> Result<Json<DistanceResponse>, AppError> {
    payload.origin.validate().map_err(|err| reject_geo(&state, err))?;
    payload
        .destination
        .validate()
        .map_err(|err| reject_geo(&state, err))?;

    Ok(Json(DistanceResponse {
        distance_km: distance_km(&payload.origin, &payload.destination),
    }))
}
