use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, patch, post};
use axum::Json;
use axum::Router;
use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::api::rest::{reject, reject_geo};
use crate::engine::resolver::resolve;
use crate::error::AppError;
use crate::models::location::AddressCandidate;
use crate::models::resolution::{Resolution, ResolutionResponse};
use crate::state::AppState;
use crate::zones::Zone;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/resolutions", post(create_resolution).get(list_resolutions))
        .route("/resolutions/:id", get(get_resolution))
        .route("/resolutions/:id/zone", patch(override_zone))
}

#[derive(Deserialize)]
pub struct OverrideZoneRequest {
    pub zone: Option<String>,
}

async fn create_resolution(
    State(state): State<Arc<AppState>>,
    Json(candidate): Json<AddressCandidate>,
) -> Result<Json<ResolutionResponse>, AppError> {
    if candidate.address.trim().is_empty() {
        return Err(reject(
            &state,
            "empty_address",
            "address cannot be empty".to_string(),
        ));
    }

    let resolved = resolve(&state.origin, &candidate).map_err(|err| reject_geo(&state, err))?;

    let now = Utc::now();
    let resolution = Resolution {
        id: Uuid::new_v4(),
        address: candidate.address.clone(),
        place_name: resolved.place_name,
        place_id: candidate.place_id.clone(),
        destination: candidate.coordinate(),
        distance_km: resolved.distance_km,
        suggested_zone: resolved.zone,
        zone_override: None,
        resolved_at: now,
        updated_at: now,
    };

    let zone_metric_label = resolved.zone.map_or("none", Zone::label);
    state
        .metrics
        .resolutions_total
        .with_label_values(&[zone_metric_label])
        .inc();
    state
        .metrics
        .resolution_distance_km
        .observe(resolution.distance_km);

    state.resolutions.insert(resolution.id, resolution.clone());
    let _ = state.resolution_events_tx.send(resolution.clone());

    info!(
        resolution_id = %resolution.id,
        distance_km = resolution.distance_km,
        zone = zone_metric_label,
        "address resolved"
    );

    Ok(Json(resolution.into()))
}

async fn list_resolutions(State(state): State<Arc<AppState>>) -> Json<Vec<ResolutionResponse>> {
    let mut resolutions: Vec<Resolution> = state
        .resolutions
        .iter()
        .map(|entry| entry.value().clone())
        .collect();
    resolutions.sort_by(|a, b| b.resolved_at.cmp(&a.resolved_at));

    Json(resolutions.into_iter().map(ResolutionResponse::from).collect())
}

async fn get_resolution(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResolutionResponse>, AppError> {
    let resolution = state
        .resolutions
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("resolution {} not found", id)))?;

    Ok(Json(resolution.value().clone().into()))
}

async fn override_zone(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<OverrideZoneRequest>,
) -> Result<Json<ResolutionResponse>, AppError> {
    let zone = payload
        .zone
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| raw.parse::<Zone>())
        .transpose()
        .map_err(|err| reject(&state, "unknown_zone", err.to_string()))?;

    let updated = {
        let mut resolution = state
            .resolutions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("resolution {} not found", id)))?;
        resolution.override_zone(zone);
        resolution.clone()
    };

    state.metrics.zone_overrides_total.inc();
    let _ = state.resolution_events_tx.send(updated.clone());

    info!(
        resolution_id = %id,
        zone = zone.map_or("", Zone::label),
        "zone overridden"
    );

    Ok(Json(updated.into()))
}
