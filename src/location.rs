use std::cmp::Ordering;
use std::f64::consts::FRAC_PI_2;

use log::trace;

use crate::{
    coordinate::GeoCoordinate,
    prelude::{Duration, Epoch},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [GeoLocation] is one location fix, as reported by a location provider.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoLocation {
    /// [GeoCoordinate] of this fix
    pub coordinate: GeoCoordinate,
    /// Altitude above sea level [m]
    pub altitude_m: f64,
    /// Horizontal accuracy radius [m]. Negative means invalid or unknown.
    pub horizontal_accuracy_m: f64,
    /// Vertical accuracy [m]. Negative means invalid or unknown.
    pub vertical_accuracy_m: f64,
    /// Sampling instant
    pub timestamp: Epoch,
}

impl GeoLocation {
    /// Builds a new [GeoLocation] at sea level, with perfect horizontal
    /// accuracy and unknown vertical accuracy.
    pub fn new(coordinate: GeoCoordinate, timestamp: Epoch) -> Self {
        Self {
            coordinate,
            timestamp,
            altitude_m: 0.0,
            horizontal_accuracy_m: 0.0,
            vertical_accuracy_m: -1.0,
        }
    }

    /// Copies and returns [GeoLocation] with updated altitude [m]
    pub fn with_altitude(&self, altitude_m: f64) -> Self {
        let mut s = *self;
        s.altitude_m = altitude_m;
        s
    }

    /// Copies and returns [GeoLocation] with updated horizontal accuracy [m]
    pub fn with_horizontal_accuracy(&self, accuracy_m: f64) -> Self {
        let mut s = *self;
        s.horizontal_accuracy_m = accuracy_m;
        s
    }

    /// Copies and returns [GeoLocation] with updated vertical accuracy [m]
    pub fn with_vertical_accuracy(&self, accuracy_m: f64) -> Self {
        let mut s = *self;
        s.vertical_accuracy_m = accuracy_m;
        s
    }

    /// Returns true when the horizontal accuracy is known
    pub fn has_valid_accuracy(&self) -> bool {
        self.horizontal_accuracy_m >= 0.0
    }

    /// Age of this fix at `now`. Negative when the fix is dated in the future.
    pub fn age(&self, now: Epoch) -> Duration {
        now - self.timestamp
    }

    /// Great circle distance to `other` [m]
    pub fn distance_m(&self, other: &Self) -> f64 {
        self.coordinate.distance_m(&other.coordinate)
    }

    /// Initial bearing to `to` [rad], identical to [GeoCoordinate::initial_bearing].
    pub fn initial_bearing(&self, to: &Self) -> f64 {
        self.coordinate.initial_bearing(&to.coordinate)
    }

    /// Returns a copy of this fix moved `latitude_m` meters north,
    /// `longitude_m` meters east and `altitude_m` meters up.
    /// Accuracies and timestamp are preserved.
    pub fn translated(&self, latitude_m: f64, longitude_m: f64, altitude_m: f64) -> Self {
        let north = self.coordinate.destination_point(0.0, latitude_m);
        let east = self.coordinate.destination_point(FRAC_PI_2, longitude_m);

        let mut s = *self;
        s.coordinate = GeoCoordinate {
            latitude: north.latitude,
            longitude: east.longitude,
        };
        s.altitude_m += altitude_m;
        s
    }

    /// Orders two fixes, best first: smallest horizontal accuracy,
    /// then most recent timestamp.
    fn estimate_order(a: &Self, b: &Self) -> Ordering {
        match a.horizontal_accuracy_m.total_cmp(&b.horizontal_accuracy_m) {
            Ordering::Equal => b
                .timestamp
                .partial_cmp(&a.timestamp)
                .unwrap_or(Ordering::Equal),
            ordering => ordering,
        }
    }

    /// Selects the best fix out of a set of noisy samples: the most accurate one,
    /// the most recent one in case of equal accuracy.
    /// Ties are resolved in favor of the first sample.
    /// Returns None when `samples` is empty.
    pub fn best_location_estimate(samples: &[Self]) -> Option<Self> {
        let best = samples
            .iter()
            .min_by(|a, b| Self::estimate_order(a, b))
            .copied();

        if let Some(best) = &best {
            trace!(
                "best estimate out of {} samples: {} (±{}m) {}",
                samples.len(),
                best.coordinate,
                best.horizontal_accuracy_m,
                best.timestamp
            );
        }

        best
    }
}
