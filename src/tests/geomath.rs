use rstest::*;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use crate::{
    prelude::{Error, GeoCoordinate, GeoLocation, EARTH_MEAN_RADIUS_M},
    tests::{angle_diff, coords, epoch, init_logger, T0},
};

#[rstest]
#[case(0.0, 0.0)]
#[case(90.0, 180.0)]
#[case(-90.0, -180.0)]
#[case(48.8566, 2.3522)]
#[case(-33.8688, 151.2093)]
fn coordinates_construction(#[case] latitude: f64, #[case] longitude: f64) {
    let coordinate = GeoCoordinate::new(latitude, longitude).unwrap();
    assert_eq!(coordinate.latitude(), latitude);
    assert_eq!(coordinate.longitude(), longitude);
}

#[rstest]
#[case(90.1, 0.0, Error::InvalidLatitude(90.1))]
#[case(-91.0, 0.0, Error::InvalidLatitude(-91.0))]
#[case(0.0, 180.5, Error::InvalidLongitude(180.5))]
#[case(0.0, -200.0, Error::InvalidLongitude(-200.0))]
#[case(f64::INFINITY, 0.0, Error::InvalidLatitude(f64::INFINITY))]
fn invalid_coordinates(#[case] latitude: f64, #[case] longitude: f64, #[case] expected: Error) {
    assert_eq!(GeoCoordinate::new(latitude, longitude), Err(expected));
}

#[test]
fn nan_coordinates() {
    assert!(matches!(
        GeoCoordinate::new(f64::NAN, 0.0),
        Err(Error::InvalidLatitude(_))
    ));
    assert!(matches!(
        GeoCoordinate::new(0.0, f64::NAN),
        Err(Error::InvalidLongitude(_))
    ));
}

#[test]
fn exact_equality() {
    assert_eq!(coords(10.0, 20.0), coords(10.0, 20.0));
    assert_ne!(coords(10.0, 20.0), coords(10.0, 20.000000000001));
}

#[rstest]
#[case(0.0, 0.0)]
#[case(48.8566, 2.3522)]
#[case(90.0, 0.0)]
#[case(-45.0, 179.9)]
fn zero_distance(#[case] latitude: f64, #[case] longitude: f64) {
    let a = coords(latitude, longitude);
    assert_eq!(GeoCoordinate::distance_between(&a, &a), 0.0);
    assert_eq!(a.distance_m(&a), 0.0);
}

#[test]
fn distance_symmetry() {
    let paris = coords(48.8566, 2.3522);
    let london = coords(51.5074, -0.1278);

    let d1 = GeoCoordinate::distance_between(&paris, &london);
    let d2 = GeoCoordinate::distance_between(&london, &paris);
    assert!((d1 - d2).abs() < 1.0E-15);
}

#[test]
fn paris_london() {
    init_logger();

    let paris = coords(48.8566, 2.3522);
    let london = coords(51.5074, -0.1278);

    let angle = GeoCoordinate::distance_between(&paris, &london);
    assert!((angle * EARTH_MEAN_RADIUS_M - paris.distance_m(&london)).abs() < 1.0E-6);

    let distance_m = paris.distance_m(&london);
    assert!(
        (distance_m - 343_556.0).abs() < 1.0,
        "paris-london: {}m",
        distance_m
    );
}

#[rstest]
#[case(0.0, 0.0, 0.0, 180.0)]
#[case(45.0, 10.0, -45.0, -170.0)]
#[case(90.0, 0.0, -90.0, 0.0)]
#[case(-30.0, 100.0, 30.0, -80.0)]
fn antipodal_distance(
    #[case] lat_a: f64,
    #[case] lon_a: f64,
    #[case] lat_b: f64,
    #[case] lon_b: f64,
) {
    let distance = GeoCoordinate::distance_between(&coords(lat_a, lon_a), &coords(lat_b, lon_b));
    assert!(!distance.is_nan());
    assert!((distance - PI).abs() < 1.0E-7, "antipodal: {}", distance);
}

#[rstest]
#[case(0.0, 0.001, FRAC_PI_2)]
#[case(0.0, -0.001, -FRAC_PI_2)]
#[case(0.001, 0.0, 0.0)]
#[case(-0.001, 0.0, PI)]
fn cardinal_bearings(#[case] latitude: f64, #[case] longitude: f64, #[case] expected: f64) {
    let origin = coords(0.0, 0.0);
    let bearing = origin.initial_bearing(&coords(latitude, longitude));
    assert!(
        angle_diff(bearing, expected).abs() < 1.0E-9,
        "bearing: {} expected {}",
        bearing,
        expected
    );
    assert!(bearing > -PI && bearing <= PI);
}

#[test]
fn bearing_to_self() {
    let a = coords(48.8566, 2.3522);
    assert_eq!(a.initial_bearing(&a), 0.0);
    assert_eq!(a.direction_deg(&a), 0.0);
}

#[test]
fn direction_degrees() {
    let origin = coords(0.0, 0.0);
    assert!((origin.direction_deg(&coords(0.0, 0.001)) - 90.0).abs() < 1.0E-9);
    assert!((origin.direction_deg(&coords(0.0, -0.001)) + 90.0).abs() < 1.0E-9);
    assert!((origin.direction_deg(&coords(0.001, 0.001)) - 45.0).abs() < 1.0E-3);
}

#[test]
fn bearing_entry_points() {
    let t = epoch(T0);
    let (a, b) = (coords(48.8566, 2.3522), coords(51.5074, -0.1278));
    let (loc_a, loc_b) = (GeoLocation::new(a, t), GeoLocation::new(b, t));
    assert_eq!(a.initial_bearing(&b), loc_a.initial_bearing(&loc_b));
    assert_eq!(b.initial_bearing(&a), loc_b.initial_bearing(&loc_a));
}

#[test]
fn initial_bearing_is_not_constant() {
    // great circle from Paris to New York heads north-west, not west
    let paris = coords(48.8566, 2.3522);
    let new_york = coords(40.7128, -74.0060);
    let bearing = paris.direction_deg(&new_york);
    assert!(bearing < -60.0 && bearing > -80.0, "bearing: {}", bearing);
}

#[rstest]
#[case(0.0, 0.0)]
#[case(45.0, 10.0)]
#[case(-33.8688, 151.2093)]
#[case(89.0, -120.0)]
fn destination_zero_distance(#[case] latitude: f64, #[case] longitude: f64) {
    let origin = coords(latitude, longitude);
    for bearing in [0.0, FRAC_PI_4, FRAC_PI_2, PI, -FRAC_PI_2] {
        let dest = origin.destination_point(bearing, 0.0);
        assert!((dest.latitude() - latitude).abs() < 1.0E-9);
        assert!((dest.longitude() - longitude).abs() < 1.0E-9);
    }
}

#[test]
fn destination_north() {
    let origin = coords(10.0, 20.0);
    let dest = origin.destination_point(0.0, 1_000.0);

    assert!((dest.longitude() - origin.longitude()).abs() < 1.0E-12);
    assert!(dest.latitude() > origin.latitude());

    // latitude component uses a 6373 km radius
    let distance_m = origin.distance_m(&dest);
    assert!((distance_m - 1_000.0 * 6_371.0 / 6_373.0).abs() < 1.0E-3);
    assert!(origin.initial_bearing(&dest).abs() < 1.0E-9);
}

#[rstest]
#[case(0.0)]
#[case(FRAC_PI_4)]
#[case(FRAC_PI_2)]
#[case(-FRAC_PI_2)]
#[case(0.7)]
#[case(PI)]
fn destination_round_trip(#[case] bearing: f64) {
    let origin = coords(10.0, 20.0);

    for distance_m in [1.0, 10.0, 100.0, 1_000.0] {
        let dest = origin.destination_point(bearing, distance_m);

        let error = angle_diff(origin.initial_bearing(&dest), bearing);
        assert!(error.abs() < 0.15, "bearing error: {}", error);

        // east/west component uses a 5602.9 km radius
        let ratio = origin.distance_m(&dest) / distance_m;
        assert!(ratio > 0.99 && ratio < 1.15, "distance ratio: {}", ratio);
    }
}

#[test]
fn destination_across_antimeridian() {
    let origin = coords(0.0, 179.9999);
    let dest = origin.destination_point(FRAC_PI_2, 100.0);
    assert!(dest.longitude() < -179.0, "longitude: {}", dest.longitude());
    assert!(GeoCoordinate::new(dest.latitude(), dest.longitude()).is_ok());
}
