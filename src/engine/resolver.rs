use serde::{Deserialize, Serialize};

use crate::error::GeoError;
use crate::geo::distance_km;
use crate::models::location::{AddressCandidate, Coordinate};
use crate::zones::{zone_for_distance, Zone};

pub const DEFAULT_ORIGIN_LATITUDE: f64 = 42.7743;
pub const DEFAULT_ORIGIN_LONGITUDE: f64 = 2.9265;
pub const DEFAULT_ORIGIN_ADDRESS: &str = "7 avenue alfred sauvy, 66600 Rivesaltes, France";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Origin {
    pub coordinate: Coordinate,
    pub address: String,
}

impl Default for Origin {
    fn default() -> Self {
        Self {
            coordinate: Coordinate {
                latitude: DEFAULT_ORIGIN_LATITUDE,
                longitude: DEFAULT_ORIGIN_LONGITUDE,
            },
            address: DEFAULT_ORIGIN_ADDRESS.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedZone {
    pub distance_km: f64,
    pub zone: Option<Zone>,
    pub place_name: String,
}

pub fn resolve(origin: &Origin, candidate: &AddressCandidate) -> Result<ResolvedZone, GeoError> {
    let destination = candidate.coordinate();
    destination.validate()?;

    let distance_km = distance_km(&origin.coordinate, &destination);
    let zone = zone_for_distance(distance_km)?;

    Ok(ResolvedZone {
        distance_km,
        zone,
        place_name: place_name(&candidate.address),
    })
}

pub fn place_name(address: &str) -> String {
    address.split(',').next().unwrap_or_default().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::{place_name, resolve, Origin};
    use crate::error::GeoError;
    use crate::models::location::AddressCandidate;
    use crate::zones::Zone;

    fn candidate(address: &str, latitude: f64, longitude: f64) -> AddressCandidate {
        AddressCandidate {
            address: address.to_string(),
            latitude,
            longitude,
            place_id: None,
        }
    }

    #[test]
    fn office_address_is_zone_1a() {
        let origin = Origin::default();
        let resolved = resolve(
            &origin,
            &candidate("7 avenue alfred sauvy, 66600 Rivesaltes, France", 42.7743, 2.9265),
        )
        .unwrap();

        assert!(resolved.distance_km < 1e-9);
        assert_eq!(resolved.zone, Some(Zone::Z1A));
        assert_eq!(resolved.place_name, "7 avenue alfred sauvy");
    }

    #[test]
    fn perpignan_lands_in_zone_1b() {
        let resolved = resolve(
            &Origin::default(),
            &candidate(
                "Avenue du Général de Gaulle, 66000 Perpignan, France",
                42.6886,
                2.8946,
            ),
        )
        .unwrap();

        assert!((resolved.distance_km - 10.3).abs() <= 0.5);
        assert_eq!(resolved.zone, Some(Zone::Z1B));
        assert_eq!(resolved.place_name, "Avenue du Général de Gaulle");
    }

    #[test]
    fn toulouse_lands_in_zone_16() {
        let resolved = resolve(
            &Origin::default(),
            &candidate("Place du Capitole, 31000 Toulouse, France", 43.6045, 1.4440),
        )
        .unwrap();

        assert!((resolved.distance_km - 151.5).abs() < 0.5, "got {}", resolved.distance_km);
        assert_eq!(resolved.zone, Some(Zone::Z16));
    }

    #[test]
    fn paris_is_beyond_every_zone() {
        let resolved = resolve(
            &Origin::default(),
            &candidate("Place de la Concorde, 75008 Paris, France", 48.8656, 2.3212),
        )
        .unwrap();

        assert!(resolved.distance_km > 250.0);
        assert_eq!(resolved.zone, None);
    }

    #[test]
    fn invalid_candidate_coordinate_is_rejected() {
        let err = resolve(&Origin::default(), &candidate("nowhere", 123.0, 2.0)).unwrap_err();
        assert_eq!(err, GeoError::InvalidLatitude(123.0));
    }

    #[test]
    fn place_name_handles_missing_commas() {
        assert_eq!(place_name("Rivesaltes"), "Rivesaltes");
        assert_eq!(place_name("  Quai Vauban , 66000"), "Quai Vauban");
        assert_eq!(place_name(""), "");
    }
}
