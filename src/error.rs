use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// Latitude must be a finite number of degrees within [-90, 90].
    #[error("invalid latitude: {0}°")]
    InvalidLatitude(f64),

    /// Longitude must be a finite number of degrees within [-180, 180].
    #[error("invalid longitude: {0}°")]
    InvalidLongitude(f64),

    /// A singular base matrix was handed to the yaw rotation,
    /// which needs to return the inverse of the rotated matrix.
    #[error("failed to invert matrix")]
    MatrixInversion,
}
