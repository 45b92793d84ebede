#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

// private modules
mod angle;
mod cfg;
mod constants;
mod coordinate;
mod error;
mod location;
mod matrix;
mod placement;
mod tracker;
mod vector;
mod waypoints;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::angle::AngleUnits;
    pub use crate::cfg::Config;
    pub use crate::constants::{
        EARTH_MEAN_RADIUS_M, EARTH_RADIUS_LATITUDE_M, EARTH_RADIUS_LONGITUDE_M, WAYPOINT_STEP_M,
    };
    pub use crate::coordinate::GeoCoordinate;
    pub use crate::error::Error;
    pub use crate::location::GeoLocation;
    pub use crate::matrix::{placement_transform, translation, yaw_rotation, Transform};
    pub use crate::placement::{Placement, PointOfInterest};
    pub use crate::tracker::{LocationTracker, Rejection, TrackerEvent};
    pub use crate::vector::{planar_distance, position_from_transform};
    pub use crate::waypoints::{intermediary_waypoints, Waypoints};
    // re-export
    pub use hifitime::{Duration, Epoch};
    pub use nalgebra::{Matrix4, Vector3, Vector4};
}

// pub export
pub use error::Error;
