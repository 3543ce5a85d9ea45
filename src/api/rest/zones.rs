use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::Json;
use axum::Router;
use serde::{Deserialize, Serialize};

use crate::api::rest::reject_geo;
use crate::error::AppError;
use crate::state::AppState;
use crate::zones::{zone_label, Zone, MAX_ZONED_DISTANCE_KM};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/zones", get(list_zones))
        .route("/zones/classify", get(classify))
}

#[derive(Serialize)]
pub struct ZoneEntry {
    pub zone: Zone,
    pub upper_bound_km: f64,
    pub description: String,
}

#[derive(Serialize)]
pub struct ZoneTableResponse {
    pub max_distance_km: f64,
    pub zones: Vec<ZoneEntry>,
}

#[derive(Deserialize)]
pub struct ClassifyQuery {
    pub distance_km: f64,
}

#[derive(Serialize)]
pub struct ClassifyResponse {
    pub distance_km: f64,
    pub zone: &'static str,
}

async fn list_zones() -> Json<ZoneTableResponse> {
    let zones = Zone::ALL
        .into_iter()
        .map(|zone| ZoneEntry {
            zone,
            upper_bound_km: zone.upper_bound_km(),
            description: zone.description(),
        })
        .collect();

    Json(ZoneTableResponse {
        max_distance_km: MAX_ZONED_DISTANCE_KM,
        zones,
    })
}

async fn classify(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ClassifyQuery>,
) -> Result<Json<ClassifyResponse>, AppError> {
    let zone = zone_label(query.distance_km).map_err(|err| reject_geo(&state, err))?;

    Ok(Json(ClassifyResponse {
        distance_km: query.distance_km,
        zone,
    }))
}
