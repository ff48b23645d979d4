use nalgebra::{Quaternion, Vector3};
use rand::Rng;
use std::f32::consts::TAU;

use crate::config::AXIS_TOLERANCE;

/// Single precision quaternion used for every orientation in the library.
///
/// Components are `(w, i, j, k)` with `w` the scalar part. Unit quaternions
/// represent rotations; `q` and `-q` describe the same rotation.
pub type Quat = Quaternion<f32>;

/// Build a quaternion from its scalar and vector components.
pub fn quat(w: f32, x: f32, y: f32, z: f32) -> Quat {
    Quaternion::new(w, x, y, z)
}

/// Build a quaternion from a `[w, x, y, z]` table row.
#[inline]
pub fn quat_from_array(q: &[f32; 4]) -> Quat {
    Quaternion::new(q[0], q[1], q[2], q[3])
}

/// Flatten a quaternion into `[w, x, y, z]`.
pub fn quat_to_array(q: &Quat) -> [f32; 4] {
    [q.w, q.i, q.j, q.k]
}

pub fn identity() -> Quat {
    Quaternion::identity()
}

/// Hamilton product `a * b` (rotation `b` applied first).
#[inline]
pub fn multiply(a: &Quat, b: &Quat) -> Quat {
    a * b
}

#[inline]
pub fn conjugate(q: &Quat) -> Quat {
    q.conjugate()
}

pub fn dot(a: &Quat, b: &Quat) -> f32 {
    a.dot(b)
}

/// Scale to unit length. A zero or non-finite quaternion becomes the identity.
pub fn normalize(q: &Quat) -> Quat {
    let n = q.norm();
    if !n.is_finite() || n < AXIS_TOLERANCE {
        return identity();
    }
    *q / n
}

/// Representative of `{q, -q}` with a non-negative scalar part.
pub fn canonical(q: &Quat) -> Quat {
    if q.w < 0.0 {
        -*q
    } else {
        *q
    }
}

/// Clamp the scalar part to [-1, 1] so it can be used as cos(w/2).
#[inline]
pub fn clamp_scalar(q: &mut Quat) {
    if q.w < -1.0 {
        q.w = -1.0;
    } else if q.w > 1.0 {
        q.w = 1.0;
    }
}

/// Actively rotate `v` by the unit quaternion `q` (`q v q*`).
pub fn rotate_vector(q: &Quat, v: &Vector3<f32>) -> Vector3<f32> {
    let p = Quaternion::from_parts(0.0, *v);
    (q * p * q.conjugate()).imag()
}

/// Uniformly distributed random rotation (Shoemake's subgroup algorithm).
pub fn random_quaternion<R: Rng + ?Sized>(rng: &mut R) -> Quat {
    let u1: f32 = rng.gen();
    let u2: f32 = rng.gen();
    let u3: f32 = rng.gen();
    let a = (1.0 - u1).sqrt();
    let b = u1.sqrt();
    let (s2, c2) = (TAU * u2).sin_cos();
    let (s3, c3) = (TAU * u3).sin_cos();
    canonical(&quat(b * c3, a * s2, a * c2, b * s3))
}
