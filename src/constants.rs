/// Earth mean radius (meters), converts angular haversine distances to meters.
pub const EARTH_MEAN_RADIUS_M: f64 = 6_371_000.0;

/// Earth radius used for the latitude component of destination projections (meters)
pub const EARTH_RADIUS_LATITUDE_M: f64 = 6_373_000.0;

/// Earth radius used for the longitude component of destination projections (meters).
/// Intentionally differs from [EARTH_RADIUS_LATITUDE_M]: the projection is anisotropic.
pub const EARTH_RADIUS_LONGITUDE_M: f64 = 5_602_900.0;

/// Spacing between two intermediary waypoints (meters)
pub const WAYPOINT_STEP_M: f64 = 10.0;

/// Fixes less accurate than this are disregarded by the tracker (meters)
pub const DEFAULT_MAX_HORIZONTAL_ACCURACY_M: f64 = 500.0;

/// Fixes older than this are disregarded by the tracker (seconds)
pub const DEFAULT_MAX_SAMPLE_AGE_S: f64 = 30.0;

/// Moving further than this triggers a reload (meters)
pub const DEFAULT_RELOAD_DISTANCE_M: f64 = 100.0;

/// Markers are scaled by this distance over their actual distance (meters)
pub const DEFAULT_SCALE_REFERENCE_M: f64 = 100.0;

/// Distance floor applied when scaling markers (meters)
pub const DEFAULT_MIN_SCALE_DISTANCE_M: f64 = 1.0;
