use log::{debug, warn};
use nalgebra::Vector3;

use crate::{
    cfg::Config,
    error::Error,
    location::GeoLocation,
    matrix::{placement_transform, Transform},
    vector::{planar_distance, position_from_transform},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named point of interest, as returned by a map search.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointOfInterest {
    /// Name of this point of interest
    pub title: String,
    /// Complementary description, typically an address
    pub subtitle: String,
    /// [GeoLocation] of this point of interest
    pub location: GeoLocation,
}

impl PartialEq for PointOfInterest {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.location.coordinate == other.location.coordinate
    }
}

impl PointOfInterest {
    pub fn new(title: &str, subtitle: &str, location: GeoLocation) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            location,
        }
    }
}

/// [Placement] of a target in scene space, relative to the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// Transform to apply to the rendered marker
    pub transform: Transform,
    /// Scene position of the marker
    pub position: Vector3<f32>,
    /// Distance from viewer to target [m]
    pub distance_m: f64,
    /// Marker scale factor
    pub scale: f32,
}

impl Placement {
    /// Places `target` relative to `viewer`, on top of an identity base transform.
    pub fn new(viewer: &GeoLocation, target: &GeoLocation, cfg: &Config) -> Result<Self, Error> {
        let transform = placement_transform(&Transform::identity(), viewer, target)?;
        let position = position_from_transform(&transform);
        let distance_m = viewer.distance_m(target);

        if distance_m < cfg.min_scale_distance_m {
            warn!(
                "{} is {:.3}m away from viewer: scale clamped",
                target.coordinate, distance_m
            );
        }

        let scale = (cfg.scale_reference_m / distance_m.max(cfg.min_scale_distance_m)) as f32;

        debug!(
            "placed {} at {} ({:.3}m) scale={}",
            target.coordinate, position, distance_m, scale
        );

        Ok(Self {
            transform,
            position,
            distance_m,
            scale,
        })
    }

    /// Places a [PointOfInterest] relative to `viewer`.
    pub fn for_poi(viewer: &GeoLocation, poi: &PointOfInterest, cfg: &Config) -> Result<Self, Error> {
        Self::new(viewer, &poi.location, cfg)
    }

    /// Ground plane distance between two placed markers, in scene units.
    pub fn planar_distance_to(&self, other: &Self) -> f32 {
        planar_distance(&self.position, &other.position)
    }
}
