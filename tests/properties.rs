use proptest::prelude::*;
use zone_resolver::geo::distance_km;
use zone_resolver::models::location::Coordinate;
use zone_resolver::zones::{zone_for_distance, MAX_ZONED_DISTANCE_KM};

fn coordinate_strategy() -> impl Strategy<Value = Coordinate> {
    (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(latitude, longitude)| Coordinate {
        latitude,
        longitude,
    })
}

fn zoned_distance_strategy() -> impl Strategy<Value = f64> {
    0.0f64..=MAX_ZONED_DISTANCE_KM
}

proptest! {
    #[test]
    fn distance_is_symmetric(a in coordinate_strategy(), b in coordinate_strategy()) {
        let there = distance_km(&a, &b);
        let back = distance_km(&b, &a);
        prop_assert!((there - back).abs() <= 1e-9 * there.max(1.0));
    }

    #[test]
    fn distance_to_self_is_zero(a in coordinate_strategy()) {
        prop_assert!(distance_km(&a, &a).abs() < 1e-9);
    }

    #[test]
    fn distance_is_bounded_by_half_circumference(a in coordinate_strategy(), b in coordinate_strategy()) {
        let distance = distance_km(&a, &b);
        prop_assert!(distance >= 0.0);
        prop_assert!(distance <= std::f64::consts::PI * 6_371.0 + 1e-6);
    }

    #[test]
    fn functions_are_idempotent(a in coordinate_strategy(), b in coordinate_strategy()) {
        let first = distance_km(&a, &b);
        let second = distance_km(&a, &b);
        prop_assert_eq!(first.to_bits(), second.to_bits());
        prop_assert_eq!(zone_for_distance(first), zone_for_distance(second));
    }

    #[test]
    fn every_zoned_distance_has_a_zone(d in zoned_distance_strategy()) {
        let zone = zone_for_distance(d).unwrap();
        prop_assert!(zone.is_some());
        prop_assert!(d <= zone.unwrap().upper_bound_km());
    }

    #[test]
    fn zones_never_decrease_with_distance(d1 in zoned_distance_strategy(), d2 in zoned_distance_strategy()) {
        let (near, far) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };
        let near_zone = zone_for_distance(near).unwrap().unwrap();
        let far_zone = zone_for_distance(far).unwrap().unwrap();
        prop_assert!(near_zone.index() <= far_zone.index());
    }

    #[test]
    fn past_last_band_has_no_zone(extra in 1e-6f64..20_000.0) {
        prop_assert_eq!(zone_for_distance(MAX_ZONED_DISTANCE_KM + extra), Ok(None));
    }

    #[test]
    fn negative_distances_are_rejected(d in -20_000.0f64..-1e-9) {
        prop_assert!(zone_for_distance(d).is_err());
    }
}
