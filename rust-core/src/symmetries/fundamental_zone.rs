use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::orientations::conversions::{axis_angle_to_rodrigues, rodrigues_to_axis_angle};
use crate::orientations::quaternion_math::{canonical, dot, quat_from_array, Quat};
use crate::orientations::representations::{AxisAngle, RodriguesVector};

/// Extent and discretization of a fundamental zone in homochoric space.
///
/// `dim[i]` is the homochoric half-width along axis `i`, obtained from the
/// largest rotation angle the zone admits about that axis. Bins are uniform
/// with width `step[i] = 2 dim[i] / bins[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FundamentalZoneShape {
    pub dim: [f32; 3],
    pub step: [f32; 3],
    pub bins: [usize; 3],
}

impl FundamentalZoneShape {
    pub fn new(zone_angles: [f32; 3], bins: [usize; 3]) -> Self {
        let mut dim = [0.0f32; 3];
        let mut step = [0.0f32; 3];
        for i in 0..3 {
            let theta = zone_angles[i];
            dim[i] = (0.75 * (theta - theta.sin())).powf(1.0 / 3.0);
            step[i] = 2.0 * dim[i] / bins[i] as f32;
        }
        Self { dim, step, bins }
    }

    pub fn total_bins(&self) -> usize {
        self.bins.iter().product()
    }
}

/// How the rotation axis is folded after MDF reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisFold {
    /// Absolute value of each component.
    Absolute,
    /// Absolute value, then components sorted in descending order.
    AbsoluteSorted,
    /// Axis flipped so that its z component is non-negative.
    UpperHemisphere,
}

impl AxisFold {
    pub fn apply(&self, axis: &Vector3<f32>) -> Vector3<f32> {
        match self {
            AxisFold::Absolute => axis.abs(),
            AxisFold::AbsoluteSorted => {
                let mut c = [axis.x.abs(), axis.y.abs(), axis.z.abs()];
                c.sort_by(|a, b| b.total_cmp(a));
                Vector3::new(c[0], c[1], c[2])
            }
            AxisFold::UpperHemisphere => {
                if axis.z < 0.0 {
                    -axis
                } else {
                    *axis
                }
            }
        }
    }
}

// ======================== RODRIGUES REDUCTION ========================

/// Symmetry equivalent of `r` closest to the origin of Rodrigues space.
///
/// Each operator is composed as `(r + s + r × s) / (1 - r · s)`. The smallest
/// squared norm wins; ties keep the earlier operator and non-finite
/// candidates are never selected.
pub fn rodrigues_nearest_origin(ops: &[[f32; 3]], r: &RodriguesVector) -> RodriguesVector {
    let mut best = *r;
    let mut smallest = f32::INFINITY;
    for op in ops {
        let s = Vector3::new(op[0], op[1], op[2]);
        let denom = 1.0 - r.dot(&s);
        let candidate = (r.0 + s + r.cross(&s)) / denom;
        let dist = candidate.norm_squared();
        if dist < smallest {
            smallest = dist;
            best = RodriguesVector(candidate);
        }
    }
    best
}

/// MDF reduction: nearest-origin search over `ops`, then fold the axis.
pub fn rodrigues_fold_mdf(ops: &[[f32; 3]], fold: AxisFold, r: &RodriguesVector) -> RodriguesVector {
    let reduced = rodrigues_nearest_origin(ops, r);
    let aa = rodrigues_to_axis_angle(&reduced);
    if aa.angle == 0.0 {
        return RodriguesVector::zeros();
    }
    axis_angle_to_rodrigues(&AxisAngle::new(aa.angle, fold.apply(&aa.axis)))
}

// ======================== QUATERNION REDUCTION ========================

/// Symmetry equivalent `q * s` with the largest |w|, returned with w >= 0.
pub fn quat_nearest_origin(ops: &[[f32; 4]], q: &Quat) -> Quat {
    let mut best = *q;
    let mut largest = -1.0f32;
    for op in ops {
        let qc = q * quat_from_array(op);
        let w = qc.w.abs();
        if w > largest {
            largest = w;
            best = qc;
        }
    }
    canonical(&best)
}

/// Symmetry equivalent of `q2` closest to `q1`, sign-aligned with `q1`.
pub fn nearest_quat(ops: &[[f32; 4]], q1: &Quat, q2: &Quat) -> Quat {
    let mut best = *q2;
    let mut largest = -1.0f32;
    for op in ops {
        let qc = q2 * quat_from_array(op);
        let d = dot(q1, &qc);
        if d.abs() > largest {
            largest = d.abs();
            best = if d < 0.0 { -qc } else { qc };
        }
    }
    best
}
