//! Placement transforms.
//!
//! Scene space is right handed, Y is up and forward is -Z.
//! Bearings rotate around Y: a target due north sits on -Z,
//! a target due east sits on +X.
use log::trace;
use nalgebra::{Matrix4, Vector4};

use crate::{error::Error, location::GeoLocation};

/// 4x4 affine rigid transform (rotation + translation), column major.
pub type Transform = Matrix4<f32>;

/// Overwrites the X/Z rotation terms of a copy of `base` with a rotation
/// of `angle_rad` around the vertical axis, and returns the inverse of the
/// resulting matrix. The Y row and column and the translation column of `base`
/// are preserved prior inversion.
///
/// Fails with [Error::MatrixInversion] when `base` makes the rotated matrix singular.
pub fn yaw_rotation(base: &Transform, angle_rad: f32) -> Result<Transform, Error> {
    let (sin, cos) = angle_rad.sin_cos();
    let mut mat = *base;

    // column 0
    mat[(0, 0)] = cos;
    mat[(2, 0)] = -sin;

    // column 2
    mat[(0, 2)] = sin;
    mat[(2, 2)] = cos;

    mat.try_inverse().ok_or(Error::MatrixInversion)
}

/// Returns a copy of `base` whose translation column is replaced by `offset`.
pub fn translation(base: &Transform, offset: &Vector4<f32>) -> Transform {
    let mut mat = *base;
    mat.set_column(3, offset);
    mat
}

/// Transform that places `target` relative to `viewer`, applied on top of `base`
/// (usually the identity). The target is first pushed `distance` meters
/// forward (-Z), then rotated by the initial bearing from `viewer` to `target`.
pub fn placement_transform(
    base: &Transform,
    viewer: &GeoLocation,
    target: &GeoLocation,
) -> Result<Transform, Error> {
    let distance_m = viewer.distance_m(target) as f32;
    let bearing_rad = viewer.initial_bearing(target) as f32;

    let offset = Vector4::new(0.0, 0.0, -distance_m, 0.0);

    let translation_mat = translation(&Transform::identity(), &offset);
    let rotation_mat = yaw_rotation(&Transform::identity(), bearing_rad)?;

    trace!(
        "placement {} -> {}: distance={}m bearing={}rad",
        viewer.coordinate,
        target.coordinate,
        distance_m,
        bearing_rad
    );

    Ok(base * (rotation_mat * translation_mat))
}
