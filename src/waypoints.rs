use std::{collections::HashSet, iter::FusedIterator};

use log::debug;

use crate::{constants::WAYPOINT_STEP_M, coordinate::GeoCoordinate, location::GeoLocation};

/// [Waypoints] iterates over coordinates sampled every [WAYPOINT_STEP_M]
/// along the path between two locations, walking back from the destination
/// toward the origin: the first waypoint sits one step short of the destination,
/// the last one within one step of the origin. Consumed once, cannot be restarted.
#[derive(Debug)]
pub struct Waypoints {
    /// Origin of the path
    origin: GeoCoordinate,
    /// Initial bearing from origin to destination [rad]
    bearing_rad: f64,
    /// Distance to origin of the next candidate, before stepping [m]
    remaining_m: f64,
    /// Bit patterns of the waypoints produced so far
    emitted: HashSet<(u64, u64)>,
}

impl Waypoints {
    fn new(origin: GeoCoordinate, bearing_rad: f64, distance_m: f64) -> Self {
        Self {
            origin,
            bearing_rad,
            remaining_m: if distance_m.is_finite() {
                distance_m
            } else {
                0.0
            },
            emitted: HashSet::new(),
        }
    }
}

/// Hash key matching [GeoCoordinate] equality: -0.0 and 0.0 share one key.
fn coordinate_bits(coordinate: &GeoCoordinate) -> (u64, u64) {
    (
        (coordinate.latitude + 0.0).to_bits(),
        (coordinate.longitude + 0.0).to_bits(),
    )
}

impl Iterator for Waypoints {
    type Item = GeoCoordinate;

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining_m > WAYPOINT_STEP_M {
            self.remaining_m -= WAYPOINT_STEP_M;

            let waypoint = self
                .origin
                .destination_point(self.bearing_rad, self.remaining_m);

            if self.emitted.insert(coordinate_bits(&waypoint)) {
                return Some(waypoint);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining_m > WAYPOINT_STEP_M {
            let max = ((self.remaining_m - WAYPOINT_STEP_M) / WAYPOINT_STEP_M).ceil() as usize;
            (0, Some(max))
        } else {
            (0, Some(0))
        }
    }
}

impl FusedIterator for Waypoints {}

/// Returns the intermediary [Waypoints] between `from` and `to`.
/// The bearing is computed once, from `from` to `to`.
pub fn intermediary_waypoints(from: &GeoLocation, to: &GeoLocation) -> Waypoints {
    let distance_m = from.distance_m(to);
    let bearing_rad = from.initial_bearing(to);

    debug!(
        "waypoints {} -> {}: distance={:.3}m bearing={:.6}rad",
        from.coordinate, to.coordinate, distance_m, bearing_rad
    );

    Waypoints::new(from.coordinate, bearing_rad, distance_m)
}
