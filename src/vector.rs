use nalgebra::Vector3;

use crate::matrix::Transform;

/// Distance between `a` and `b` on the ground (X/Z) plane, height (Y) is disregarded.
pub fn planar_distance(a: &Vector3<f32>, b: &Vector3<f32>) -> f32 {
    ((b.x - a.x).powi(2) + (b.z - a.z).powi(2)).sqrt()
}

/// Extracts the translation column of a [Transform], as a scene position.
pub fn position_from_transform(transform: &Transform) -> Vector3<f32> {
    Vector3::new(transform[(0, 3)], transform[(1, 3)], transform[(2, 3)])
}
