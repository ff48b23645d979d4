use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::config::MAX_ROTATION_ANGLE;
use crate::orientations::conversions::quat_to_axis_angle;
use crate::orientations::quaternion_math::{clamp_scalar, conjugate, quat_from_array, Quat};
use crate::orientations::representations::AxisAngle;

/// Minimum misorientation between two orientations over a set of symmetry operators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Disorientation {
    /// Radians, in [0, π].
    pub angle: f32,
    /// Unit axis; (0, 0, 1) when the angle is zero.
    pub axis: Vector3<f32>,
}

impl Disorientation {
    pub fn identity() -> Self {
        Self {
            angle: 0.0,
            axis: Vector3::z(),
        }
    }

    pub fn angle_degrees(&self) -> f32 {
        self.angle.to_degrees()
    }

    pub fn to_axis_angle(&self) -> AxisAngle {
        AxisAngle::new(self.angle, self.axis)
    }
}

/// Disorientation of `q1` relative to `q2` under the operator table `ops`.
///
/// Computes `qr = conj(q2) * q1` and searches `qr * s` over every operator
/// `s`. Angles above π are replaced by `2π - w` and the axis is kept as
/// computed. The strict comparison keeps the first operator in table order on
/// ties.
///
/// Input is not validated. NaN components collapse to the identity result.
pub fn min_disorientation(ops: &[[f32; 4]], q1: &Quat, q2: &Quat) -> Disorientation {
    let qr = conjugate(q2) * q1;
    let mut best = Disorientation {
        angle: f32::INFINITY,
        axis: Vector3::z(),
    };
    for op in ops {
        let mut qc = qr * quat_from_array(op);
        clamp_scalar(&mut qc);
        let AxisAngle { mut angle, axis } = quat_to_axis_angle(&qc);
        if angle > MAX_ROTATION_ANGLE {
            angle = TAU - angle;
        }
        if angle < best.angle {
            best = Disorientation { angle, axis };
        }
    }
    if !best.angle.is_finite() || best.angle == 0.0 {
        return Disorientation::identity();
    }
    best
}
