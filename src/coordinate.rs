use crate::{
    angle::AngleUnits,
    constants::{EARTH_MEAN_RADIUS_M, EARTH_RADIUS_LATITUDE_M, EARTH_RADIUS_LONGITUDE_M},
    error::Error,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geographic coordinates, in decimal degrees.
///
/// Two [GeoCoordinate]s are equal when both their latitude and longitude
/// are strictly (bitwise) equal: no tolerance is applied.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoCoordinate {
    /// Latitude in decimal degrees, within [-90, 90]
    pub(crate) latitude: f64,
    /// Longitude in decimal degrees, within [-180, 180]
    pub(crate) longitude: f64,
}

impl std::fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}°, {:.6}°)", self.latitude, self.longitude)
    }
}

impl GeoCoordinate {
    /// Builds a new [GeoCoordinate] from latitude and longitude in decimal degrees.
    /// Fails on non finite or out of range values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, Error> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::InvalidLatitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::InvalidLongitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in decimal degrees
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Haversine central angle between `a` and `b`, in radians.
    /// This is an angular distance: multiply by a radius to obtain meters,
    /// or use [Self::distance_m].
    pub fn distance_between(a: &Self, b: &Self) -> f64 {
        let (lat_a, lon_a) = (a.latitude.deg2rad(), a.longitude.deg2rad());
        let (lat_b, lon_b) = (b.latitude.deg2rad(), b.longitude.deg2rad());

        let h = ((lat_b - lat_a) / 2.0).sin().powi(2)
            + ((lon_b - lon_a) / 2.0).sin().powi(2) * lat_a.cos() * lat_b.cos();

        // rounding may push antipodal pairs slightly above 1
        let h = h.clamp(0.0, 1.0);

        2.0 * h.sqrt().atan2((1.0 - h).sqrt())
    }

    /// Great circle distance to `other`, in meters, on a sphere of [EARTH_MEAN_RADIUS_M].
    pub fn distance_m(&self, other: &Self) -> f64 {
        Self::distance_between(self, other) * EARTH_MEAN_RADIUS_M
    }

    /// Initial bearing (forward azimuth) of the great circle path to `to`,
    /// in radians, clockwise from true north, within (-π, π].
    /// When both points are identical this returns atan2(0, 0) = 0 (north).
    pub fn initial_bearing(&self, to: &Self) -> f64 {
        let (lat1, lon1) = (self.latitude.deg2rad(), self.longitude.deg2rad());
        let (lat2, lon2) = (to.latitude.deg2rad(), to.longitude.deg2rad());

        let dlon = lon2 - lon1;
        let y = dlon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();

        y.atan2(x)
    }

    /// [Self::initial_bearing] expressed in decimal degrees, within (-180, 180].
    pub fn direction_deg(&self, to: &Self) -> f64 {
        self.initial_bearing(to).rad2deg()
    }

    /// Projects a new [GeoCoordinate] `distance_m` meters away, in the direction
    /// of `bearing_rad` (radians, clockwise from north).
    ///
    /// Latitude and longitude components use distinct radii
    /// ([EARTH_RADIUS_LATITUDE_M] and [EARTH_RADIUS_LONGITUDE_M]), so this is an
    /// approximation suited to short distances, not an exact spherical projection.
    pub fn destination_point(&self, bearing_rad: f64, distance_m: f64) -> Self {
        let dist_rad_lat = distance_m / EARTH_RADIUS_LATITUDE_M;
        let dist_rad_lon = distance_m / EARTH_RADIUS_LONGITUDE_M;

        let (lat1, lon1) = (self.latitude.deg2rad(), self.longitude.deg2rad());

        let sin_lat2 = lat1.sin() * dist_rad_lat.cos()
            + lat1.cos() * dist_rad_lat.sin() * bearing_rad.cos();

        let lat2 = sin_lat2.clamp(-1.0, 1.0).asin();

        let lon2 = lon1
            + (bearing_rad.sin() * dist_rad_lon.sin() * lat1.cos())
                .atan2(dist_rad_lon.cos() - lat1.sin() * lat2.sin());

        Self {
            latitude: lat2.rad2deg().clamp(-90.0, 90.0),
            longitude: wrap_longitude(lon2.rad2deg()),
        }
    }
}

/// Brings a longitude that crossed the antimeridian back within [-180, 180].
/// In range values are returned untouched.
fn wrap_longitude(longitude: f64) -> f64 {
    if (-180.0..=180.0).contains(&longitude) {
        longitude
    } else {
        (longitude + 540.0).rem_euclid(360.0) - 180.0
    }
}
