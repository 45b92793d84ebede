use num_traits::Float;

/// Degree / radian conversions, for both single and double precision.
pub trait AngleUnits: Float {
    /// Converts an angle in decimal degrees to radians
    fn deg2rad(self) -> Self {
        self.to_radians()
    }
    /// Converts an angle in radians to decimal degrees
    fn rad2deg(self) -> Self {
        self.to_degrees()
    }
}

impl<T: Float> AngleUnits for T {}
