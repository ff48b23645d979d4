// Conversions between orientation representations
// Every function is pure; degenerate input falls back to the identity rotation (angle 0, axis z)

use nalgebra::{Matrix3, Vector3};
use std::f32::consts::{PI, TAU};

use crate::config::{
    ANGLE_TOLERANCE, AXIS_TOLERANCE, HALF_TURN_TOLERANCE, HOMOCHORIC_INVERSION_STEPS,
    HOMOCHORIC_MAX_NORM, HOMOCHORIC_SERIES_LIMIT, ROD_SENTINEL,
};
use crate::orientations::quaternion_math::{canonical, normalize, quat, Quat};
use crate::orientations::representations::{
    AxisAngle, EulerAngles, HomochoricVector, RodriguesVector,
};

/// Unit vector along `v`, or `None` when `v` has no usable direction.
///
/// Infinite components dominate: a vector like `(inf, 1, 0)` points along x.
pub(crate) fn unit_axis(v: &Vector3<f32>) -> Option<Vector3<f32>> {
    if v.iter().any(|c| c.is_nan()) {
        return None;
    }
    if v.iter().any(|c| c.is_infinite()) {
        let dominant = v.map(|c| if c.is_infinite() { c.signum() } else { 0.0 });
        return Some(dominant.normalize());
    }
    let n = v.norm();
    if !n.is_finite() {
        // Overflow of the squared norm only; rescale before normalizing
        let m = v.amax();
        return Some((v / m).normalize());
    }
    if n < AXIS_TOLERANCE {
        return None;
    }
    Some(v / n)
}

// ======================== QUATERNION <-> AXIS-ANGLE ========================

/// Angle in [0, 2π] and unit axis of a quaternion.
///
/// The scalar part is clamped to [-1, 1] before `acos`. NaN input, a zero
/// vector part and a zero angle all give the identity.
pub fn quat_to_axis_angle(q: &Quat) -> AxisAngle {
    if q.coords.iter().any(|c| c.is_nan()) {
        return AxisAngle::identity();
    }
    let w = q.w.clamp(-1.0, 1.0);
    let angle = 2.0 * w.acos();
    match unit_axis(&q.imag()) {
        Some(axis) if angle != 0.0 => AxisAngle::new(angle, axis),
        _ => AxisAngle::identity(),
    }
}

pub fn axis_angle_to_quat(aa: &AxisAngle) -> Quat {
    let Some(axis) = unit_axis(&aa.axis) else {
        return Quat::identity();
    };
    let (s, c) = (0.5 * aa.angle).sin_cos();
    quat(c, axis.x * s, axis.y * s, axis.z * s)
}

// ======================== RODRIGUES ========================

/// Rodrigues vector of a quaternion; 180° rotations map to the sentinel magnitude.
pub fn quat_to_rodrigues(q: &Quat) -> RodriguesVector {
    let q = canonical(q);
    if q.w.abs() < AXIS_TOLERANCE {
        return match unit_axis(&q.imag()) {
            Some(axis) => RodriguesVector(axis * ROD_SENTINEL),
            None => RodriguesVector::zeros(),
        };
    }
    RodriguesVector(q.imag() / q.w)
}

pub fn rodrigues_to_axis_angle(r: &RodriguesVector) -> AxisAngle {
    match unit_axis(&r.0) {
        Some(axis) => {
            let n = r.norm();
            // Infinite norm is a half turn
            let angle = if n.is_finite() { 2.0 * n.atan() } else { PI };
            if angle < ANGLE_TOLERANCE {
                AxisAngle::identity()
            } else {
                AxisAngle::new(angle, axis)
            }
        }
        None => AxisAngle::identity(),
    }
}

/// Rodrigues vector of an axis-angle pair.
///
/// Angles above π are mapped to `(2π - w, -axis)`. Angles within
/// [`HALF_TURN_TOLERANCE`] of π use the sentinel magnitude.
pub fn axis_angle_to_rodrigues(aa: &AxisAngle) -> RodriguesVector {
    let Some(mut axis) = unit_axis(&aa.axis) else {
        return RodriguesVector::zeros();
    };
    let mut angle = aa.angle.rem_euclid(TAU);
    if angle > PI {
        angle = TAU - angle;
        axis = -axis;
    }
    if angle < ANGLE_TOLERANCE {
        return RodriguesVector::zeros();
    }
    if angle >= PI - HALF_TURN_TOLERANCE {
        return RodriguesVector(axis * ROD_SENTINEL);
    }
    RodriguesVector(axis * (0.5 * angle).tan())
}

pub fn rodrigues_to_quat(r: &RodriguesVector) -> Quat {
    axis_angle_to_quat(&rodrigues_to_axis_angle(r))
}

// ======================== HOMOCHORIC ========================

/// Homochoric radius `(3/4 (w - sin w))^(1/3)` for a rotation angle `w` in [0, π].
pub fn homochoric_magnitude(angle: f32) -> f32 {
    let w = angle.clamp(0.0, PI);
    let w_minus_sin = if w < HOMOCHORIC_SERIES_LIMIT {
        // w - sin(w) cancels catastrophically in single precision for small w
        let w2 = w * w;
        w * w2 / 6.0 * (1.0 - w2 / 20.0 * (1.0 - w2 / 42.0))
    } else {
        w - w.sin()
    };
    (0.75 * w_minus_sin).cbrt()
}

/// Rotation angle whose homochoric radius is `magnitude`, by bisection on [0, π].
pub fn homochoric_angle(magnitude: f32) -> f32 {
    if magnitude <= 0.0 {
        return 0.0;
    }
    if magnitude >= HOMOCHORIC_MAX_NORM {
        return PI;
    }
    let (mut lo, mut hi) = (0.0f32, PI);
    for _ in 0..HOMOCHORIC_INVERSION_STEPS {
        let mid = 0.5 * (lo + hi);
        if homochoric_magnitude(mid) < magnitude {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}

pub fn axis_angle_to_homochoric(aa: &AxisAngle) -> HomochoricVector {
    let Some(mut axis) = unit_axis(&aa.axis) else {
        return HomochoricVector::zeros();
    };
    let mut angle = aa.angle.rem_euclid(TAU);
    if angle > PI {
        angle = TAU - angle;
        axis = -axis;
    }
    if angle < ANGLE_TOLERANCE {
        return HomochoricVector::zeros();
    }
    HomochoricVector(axis * homochoric_magnitude(angle))
}

pub fn homochoric_to_axis_angle(h: &HomochoricVector) -> AxisAngle {
    match unit_axis(&h.0) {
        Some(axis) => {
            let angle = homochoric_angle(h.norm());
            if angle < ANGLE_TOLERANCE {
                AxisAngle::identity()
            } else {
                AxisAngle::new(angle, axis)
            }
        }
        None => AxisAngle::identity(),
    }
}

/// Zero maps to zero; the sentinel half turn maps to the rim of the homochoric ball.
pub fn rodrigues_to_homochoric(r: &RodriguesVector) -> HomochoricVector {
    axis_angle_to_homochoric(&rodrigues_to_axis_angle(r))
}

pub fn homochoric_to_rodrigues(h: &HomochoricVector) -> RodriguesVector {
    axis_angle_to_rodrigues(&homochoric_to_axis_angle(h))
}

// ======================== EULER ANGLES ========================

/// Quaternion of Bunge Euler angles.
///
/// Follows the passive convention used in orientation microscopy: the
/// resulting quaternion `q` gives the sample-to-crystal transformation
/// `g = R(q)ᵀ`, where `R` is [`quat_to_matrix`].
pub fn euler_to_quat(e: &EulerAngles) -> Quat {
    let (s, c) = (0.5 * e.phi).sin_cos();
    let (s1, c1) = (0.5 * (e.phi1 - e.phi2)).sin_cos();
    let (s2, c2) = (0.5 * (e.phi1 + e.phi2)).sin_cos();
    canonical(&quat(c * c2, s * c1, s * s1, c * s2))
}

/// Bunge Euler angles of a quaternion, with `phi1`, `phi2` in [0, 2π).
pub fn quat_to_euler(q: &Quat) -> EulerAngles {
    let q = normalize(q);
    let diff = q.j.atan2(q.i); // (phi1 - phi2) / 2
    let sum = q.k.atan2(q.w); // (phi1 + phi2) / 2
    let phi = 2.0 * (q.i.hypot(q.j)).atan2(q.w.hypot(q.k));
    EulerAngles::new(
        wrap_two_pi(sum + diff),
        phi.clamp(0.0, PI),
        wrap_two_pi(sum - diff),
    )
}

fn wrap_two_pi(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative input
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

pub fn euler_to_rodrigues(e: &EulerAngles) -> RodriguesVector {
    quat_to_rodrigues(&euler_to_quat(e))
}

pub fn rodrigues_to_euler(r: &RodriguesVector) -> EulerAngles {
    quat_to_euler(&rodrigues_to_quat(r))
}

// ======================== ROTATION MATRICES ========================

/// Active rotation matrix (`v' = R v`) of a quaternion. The input is normalized first.
pub fn quat_to_matrix(q: &Quat) -> Matrix3<f32> {
    let q = normalize(q);
    let (w, x, y, z) = (q.w, q.i, q.j, q.k);
    Matrix3::new(
        1.0 - 2.0 * (y * y + z * z),
        2.0 * (x * y - w * z),
        2.0 * (x * z + w * y),
        2.0 * (x * y + w * z),
        1.0 - 2.0 * (x * x + z * z),
        2.0 * (y * z - w * x),
        2.0 * (x * z - w * y),
        2.0 * (y * z + w * x),
        1.0 - 2.0 * (x * x + y * y),
    )
}

/// Quaternion (with w ≥ 0) of an active rotation matrix.
///
/// Picks the branch with the largest diagonal term so the divisor never
/// approaches zero.
pub fn matrix_to_quat(m: &Matrix3<f32>) -> Quat {
    let trace = m[(0, 0)] + m[(1, 1)] + m[(2, 2)];
    let q = if trace > 0.0 {
        let s = 2.0 * (trace + 1.0).sqrt();
        quat(
            0.25 * s,
            (m[(2, 1)] - m[(1, 2)]) / s,
            (m[(0, 2)] - m[(2, 0)]) / s,
            (m[(1, 0)] - m[(0, 1)]) / s,
        )
    } else if m[(0, 0)] > m[(1, 1)] && m[(0, 0)] > m[(2, 2)] {
        let s = 2.0 * (1.0 + m[(0, 0)] - m[(1, 1)] - m[(2, 2)]).sqrt();
        quat(
            (m[(2, 1)] - m[(1, 2)]) / s,
            0.25 * s,
            (m[(0, 1)] + m[(1, 0)]) / s,
            (m[(0, 2)] + m[(2, 0)]) / s,
        )
    } else if m[(1, 1)] > m[(2, 2)] {
        let s = 2.0 * (1.0 + m[(1, 1)] - m[(0, 0)] - m[(2, 2)]).sqrt();
        quat(
            (m[(0, 2)] - m[(2, 0)]) / s,
            (m[(0, 1)] + m[(1, 0)]) / s,
            0.25 * s,
            (m[(1, 2)] + m[(2, 1)]) / s,
        )
    } else {
        let s = 2.0 * (1.0 + m[(2, 2)] - m[(0, 0)] - m[(1, 1)]).sqrt();
        quat(
            (m[(1, 0)] - m[(0, 1)]) / s,
            (m[(0, 2)] + m[(2, 0)]) / s,
            (m[(1, 2)] + m[(2, 1)]) / s,
            0.25 * s,
        )
    };
    canonical(&normalize(&q))
}

// ======================== TRAIT CONVERSIONS ========================

impl From<RodriguesVector> for HomochoricVector {
    fn from(r: RodriguesVector) -> Self {
        rodrigues_to_homochoric(&r)
    }
}

impl From<HomochoricVector> for RodriguesVector {
    fn from(h: HomochoricVector) -> Self {
        homochoric_to_rodrigues(&h)
    }
}

impl From<AxisAngle> for RodriguesVector {
    fn from(aa: AxisAngle) -> Self {
        axis_angle_to_rodrigues(&aa)
    }
}

impl From<RodriguesVector> for AxisAngle {
    fn from(r: RodriguesVector) -> Self {
        rodrigues_to_axis_angle(&r)
    }
}

impl From<EulerAngles> for RodriguesVector {
    fn from(e: EulerAngles) -> Self {
        euler_to_rodrigues(&e)
    }
}
