mod geomath;

use log::LevelFilter;
use std::str::FromStr;
use std::sync::Once;

use crate::prelude::{Epoch, GeoCoordinate, GeoLocation};

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Debug)
            .init();
    });
}

/// Reference instant of most test scenarios
pub const T0: &str = "2024-02-03T10:00:00 UTC";

pub fn epoch(s: &str) -> Epoch {
    Epoch::from_str(s).unwrap()
}

pub fn coords(latitude: f64, longitude: f64) -> GeoCoordinate {
    GeoCoordinate::new(latitude, longitude).unwrap()
}

/// Builds a [GeoLocation] at given coordinates, horizontal accuracy and instant
pub fn fix(latitude: f64, longitude: f64, accuracy_m: f64, t: &str) -> GeoLocation {
    GeoLocation::new(coords(latitude, longitude), epoch(t)).with_horizontal_accuracy(accuracy_m)
}

/// Smallest signed difference between two angles [rad]
pub fn angle_diff(a: f64, b: f64) -> f64 {
    use std::f64::consts::PI;
    (a - b + PI).rem_euclid(2.0 * PI) - PI
}
