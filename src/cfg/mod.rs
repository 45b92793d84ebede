#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        DEFAULT_MAX_HORIZONTAL_ACCURACY_M, DEFAULT_MAX_SAMPLE_AGE_S, DEFAULT_MIN_SCALE_DISTANCE_M,
        DEFAULT_RELOAD_DISTANCE_M, DEFAULT_SCALE_REFERENCE_M,
    },
    prelude::Duration,
};

fn default_max_horizontal_accuracy() -> f64 {
    DEFAULT_MAX_HORIZONTAL_ACCURACY_M
}

fn default_max_sample_age() -> Duration {
    Duration::from_seconds(DEFAULT_MAX_SAMPLE_AGE_S)
}

fn default_reload_distance() -> f64 {
    DEFAULT_RELOAD_DISTANCE_M
}

fn default_scale_reference() -> f64 {
    DEFAULT_SCALE_REFERENCE_M
}

fn default_min_scale_distance() -> f64 {
    DEFAULT_MIN_SCALE_DISTANCE_M
}

/// [Config] gathers the location filtering and marker placement settings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Fixes whose horizontal accuracy is larger than this are disregarded [m].
    #[cfg_attr(feature = "serde", serde(default = "default_max_horizontal_accuracy"))]
    pub max_horizontal_accuracy_m: f64,
    /// Fixes older (or dated further in the future) than this are disregarded.
    #[cfg_attr(feature = "serde", serde(default = "default_max_sample_age"))]
    pub max_sample_age: Duration,
    /// Moving further than this from the last known location
    /// triggers a reload of the points of interest [m].
    #[cfg_attr(feature = "serde", serde(default = "default_reload_distance"))]
    pub reload_distance_m: f64,
    /// Markers are scaled by `scale_reference_m / distance` [m].
    #[cfg_attr(feature = "serde", serde(default = "default_scale_reference"))]
    pub scale_reference_m: f64,
    /// Distance floor used when scaling markers,
    /// so that co-located targets keep a finite scale [m].
    #[cfg_attr(feature = "serde", serde(default = "default_min_scale_distance"))]
    pub min_scale_distance_m: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_horizontal_accuracy_m: default_max_horizontal_accuracy(),
            max_sample_age: default_max_sample_age(),
            reload_distance_m: default_reload_distance(),
            scale_reference_m: default_scale_reference(),
            min_scale_distance_m: default_min_scale_distance(),
        }
    }
}

impl Config {
    /// Copies and returns [Config] with updated horizontal accuracy limit [m]
    pub fn with_max_horizontal_accuracy(&self, accuracy_m: f64) -> Self {
        let mut s = *self;
        s.max_horizontal_accuracy_m = accuracy_m;
        s
    }

    /// Copies and returns [Config] with updated sample age limit
    pub fn with_max_sample_age(&self, age: Duration) -> Self {
        let mut s = *self;
        s.max_sample_age = age;
        s
    }

    /// Copies and returns [Config] with updated reload distance [m]
    pub fn with_reload_distance(&self, distance_m: f64) -> Self {
        let mut s = *self;
        s.reload_distance_m = distance_m;
        s
    }

    /// Copies and returns [Config] with updated marker scaling (reference distance
    /// and distance floor, both in meters)
    pub fn with_scaling(&self, reference_m: f64, min_distance_m: f64) -> Self {
        let mut s = *self;
        s.scale_reference_m = reference_m;
        s.min_scale_distance_m = min_distance_m;
        s
    }
}
