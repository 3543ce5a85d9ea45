use crate::models::location::Coordinate;

const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Inputs are expected to be in range; see [`Coordinate::validate`].
pub fn distance_km(origin: &Coordinate, destination: &Coordinate) -> f64 {
    let lat1 = origin.latitude.to_radians();
    let lat2 = destination.latitude.to_radians();
    let delta_lat = (destination.latitude - origin.latitude).to_radians();
    let delta_lng = (destination.longitude - origin.longitude).to_radians();

    let sin_lat = (delta_lat / 2.0).sin();
    let sin_lng = (delta_lng / 2.0).sin();

    // Rounding can push this just past 1 for near-antipodal points; NaN passes through.
    let haversine =
        (sin_lat * sin_lat + lat1.cos() * lat2.cos() * sin_lng * sin_lng).clamp(0.0, 1.0);
    let central_angle = 2.0 * haversine.sqrt().atan2((1.0 - haversine).sqrt());

    EARTH_RADIUS_KM * central_angle
}

#[cfg(test)]
mod tests {
    use super::distance_km;
    use crate::models::location::Coordinate;

    fn point(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate {
            latitude,
            longitude,
        }
    }

    #[test]
    fn zero_distance_for_same_point() {
        let p = point(42.7743, 2.9265);
        assert!(distance_km(&p, &p) < 1e-9);
    }

    #[test]
    fn rivesaltes_to_perpignan_is_around_10_km() {
        let office = point(42.7743, 2.9265);
        let perpignan = point(42.6886, 2.8946);
        let distance = distance_km(&office, &perpignan);
        assert!((distance - 10.3).abs() <= 0.5, "got {distance}");
    }

    #[test]
    fn london_to_paris_is_around_343_km() {
        let london = point(51.5074, -0.1278);
        let paris = point(48.8566, 2.3522);
        let distance = distance_km(&london, &paris);
        assert!((distance - 343.0).abs() < 5.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let office = point(42.7743, 2.9265);
        let toulouse = point(43.6045, 1.4440);
        let there = distance_km(&office, &toulouse);
        let back = distance_km(&toulouse, &office);
        assert!((there - back).abs() <= there * 1e-9);
    }

    #[test]
    fn non_finite_input_yields_nan() {
        let office = point(42.0, 2.0);
        assert!(distance_km(&point(f64::NAN, 2.0), &office).is_nan());
        assert!(distance_km(&office, &point(42.0, f64::NAN)).is_nan());
        assert!(distance_km(&point(f64::INFINITY, 2.0), &office).is_nan());
    }

    #[test]
    fn antipodes_are_half_the_circumference() {
        let distance = distance_km(&point(0.0, 0.0), &point(0.0, 180.0));
        assert!((distance - std::f64::consts::PI * 6_371.0).abs() < 1e-6);
    }
}
