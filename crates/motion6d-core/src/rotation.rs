//! Orientation channels from axis-angle rotation vectors.

use crate::error::{Result, SynthesisError, check_len};
use nalgebra::{UnitQuaternion, Vector3};

/// Reference "up" vector before any rotation is applied.
pub const UP: Vector3<f64> = Vector3::new(0.0, 0.0, 1.0);

/// Applies a rotation vector to a subject vector.
///
/// The rotation vector uses the axis-angle encoding: its direction is the
/// rotation axis and its magnitude is the angle in radians.
pub trait Rotator {
    fn rotate(&self, rotation_vector: &Vector3<f64>, subject: &Vector3<f64>) -> Vector3<f64>;
}

/// Right-handed axis-angle (Rodrigues) rotation.
#[derive(Clone, Copy, Debug, Default)]
pub struct AxisAngle;

impl Rotator for AxisAngle {
    fn rotate(&self, rotation_vector: &Vector3<f64>, subject: &Vector3<f64>) -> Vector3<f64> {
        UnitQuaternion::from_scaled_axis(*rotation_vector) * subject
    }
}

/// Rotate [`UP`] by each `(rx[i], ry[i], rz[i])` and split the results into
/// x, y and z series.
pub fn orientation<R: Rotator>(
    rotator: &R,
    rx: &[f64],
    ry: &[f64],
    rz: &[f64],
) -> Result<[Vec<f64>; 3]> {
    if rx.is_empty() {
        return Err(SynthesisError::Empty);
    }
    check_len("ry", rx.len(), ry.len())?;
    check_len("rz", rx.len(), rz.len())?;

    let mut out = [
        Vec::with_capacity(rx.len()),
        Vec::with_capacity(rx.len()),
        Vec::with_capacity(rx.len()),
    ];
    for ((x, y), z) in rx.iter().zip(ry).zip(rz) {
        let up = rotator.rotate(&Vector3::new(*x, *y, *z), &UP);
        out[0].push(up.x);
        out[1].push(up.y);
        out[2].push(up.z);
    }
    Ok(out)
}
