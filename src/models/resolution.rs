use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::location::Coordinate;
use crate::zones::Zone;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resolution {
    pub id: Uuid,
    pub address: String,
    pub place_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    pub destination: Coordinate,
    pub distance_km: f64,
    pub suggested_zone: Option<Zone>,
    pub zone_override: Option<Zone>,
    pub resolved_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resolution {
    pub fn zone(&self) -> Option<Zone> {
        self.zone_override.or(self.suggested_zone)
    }

    pub fn override_zone(&mut self, zone: Option<Zone>) {
        self.zone_override = zone;
        self.updated_at = Utc::now();
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResolutionResponse {
    #[serde(flatten)]
    pub resolution: Resolution,
    pub zone: &'static str,
}

impl From<Resolution> for ResolutionResponse {
    fn from(resolution: Resolution) -> Self {
        let zone = resolution.zone().map_or("", Zone::label);
        Self { resolution, zone }
    }
}
