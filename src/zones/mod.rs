use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::GeoError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Zone {
    Z1A,
    Z1B,
    Z2,
    Z3,
    Z4,
    Z5,
    Z6,
    Z7,
    Z8,
    Z9,
    Z10,
    Z11,
    Z12,
    Z13,
    Z14,
    Z15,
    Z16,
    Z17,
    Z18,
    Z19,
    Z20,
    Z21,
    Z22,
    Z23,
    Z24,
}

pub const ZONE_THRESHOLDS: [(f64, Zone); 25] = [
    (5.0, Zone::Z1A),
    (10.0, Zone::Z1B),
    (22.0, Zone::Z2),
    (30.0, Zone::Z3),
    (42.0, Zone::Z4),
    (50.0, Zone::Z5),
    (55.0, Zone::Z6),
    (60.0, Zone::Z7),
    (72.0, Zone::Z8),
    (80.0, Zone::Z9),
    (92.0, Zone::Z10),
    (100.0, Zone::Z11),
    (122.0, Zone::Z12),
    (130.0, Zone::Z13),
    (142.0, Zone::Z14),
    (150.0, Zone::Z15),
    (162.0, Zone::Z16),
    (170.0, Zone::Z17),
    (182.0, Zone::Z18),
    (190.0, Zone::Z19),
    (200.0, Zone::Z20),
    (220.0, Zone::Z21),
    (232.0, Zone::Z22),
    (240.0, Zone::Z23),
    (250.0, Zone::Z24),
];

pub const MAX_ZONED_DISTANCE_KM: f64 = ZONE_THRESHOLDS[ZONE_THRESHOLDS.len() - 1].0;

impl Zone {
    pub const ALL: [Zone; 25] = [
        Zone::Z1A,
        Zone::Z1B,
        Zone::Z2,
        Zone::Z3,
        Zone::Z4,
        Zone::Z5,
        Zone::Z6,
        Zone::Z7,
        Zone::Z8,
        Zone::Z9,
        Zone::Z10,
        Zone::Z11,
        Zone::Z12,
        Zone::Z13,
        Zone::Z14,
        Zone::Z15,
        Zone::Z16,
        Zone::Z17,
        Zone::Z18,
        Zone::Z19,
        Zone::Z20,
        Zone::Z21,
        Zone::Z22,
        Zone::Z23,
        Zone::Z24,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Zone::Z1A => "1A",
            Zone::Z1B => "1B",
            Zone::Z2 => "2",
            Zone::Z3 => "3",
            Zone::Z4 => "4",
            Zone::Z5 => "5",
            Zone::Z6 => "6",
            Zone::Z7 => "7",
            Zone::Z8 => "8",
            Zone::Z9 => "9",
            Zone::Z10 => "10",
            Zone::Z11 => "11",
            Zone::Z12 => "12",
            Zone::Z13 => "13",
            Zone::Z14 => "14",
            Zone::Z15 => "15",
            Zone::Z16 => "16",
            Zone::Z17 => "17",
            Zone::Z18 => "18",
            Zone::Z19 => "19",
            Zone::Z20 => "20",
            Zone::Z21 => "21",
            Zone::Z22 => "22",
            Zone::Z23 => "23",
            Zone::Z24 => "24",
        }
    }

    pub fn upper_bound_km(self) -> f64 {
        ZONE_THRESHOLDS[self.index()].0
    }

    pub fn description(self) -> String {
        format!("Zone {} (≤ {} km)", self.label(), self.upper_bound_km())
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown zone label: {0:?}")]
pub struct UnknownZone(pub String);

impl FromStr for Zone {
    type Err = UnknownZone;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Zone::ALL
            .into_iter()
            .find(|zone| zone.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownZone(raw.to_string()))
    }
}

impl From<Zone> for &'static str {
    fn from(zone: Zone) -> Self {
        zone.label()
    }
}

impl TryFrom<String> for Zone {
    type Error = UnknownZone;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

/// Zone for a distance in kilometres, `Ok(None)` beyond the last band.
///
/// Negative and non-finite distances are rejected instead of falling
/// through to "no zone".
pub fn zone_for_distance(distance_km: f64) -> Result<Option<Zone>, GeoError> {
    if !distance_km.is_finite() {
        return Err(GeoError::NonFiniteDistance);
    }
    if distance_km < 0.0 {
        return Err(GeoError::NegativeDistance(distance_km));
    }

    let position = ZONE_THRESHOLDS.partition_point(|(upper_bound, _)| *upper_bound < distance_km);
    Ok(ZONE_THRESHOLDS.get(position).map(|(_, zone)| *zone))
}

pub fn zone_label(distance_km: f64) -> Result<&'static str, GeoError> {
    Ok(zone_for_distance(distance_km)?.map_or("", Zone::label))
}
