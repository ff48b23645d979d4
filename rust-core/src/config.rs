// Constants

use std::f32::consts::PI;

// Tolerances
pub const AXIS_TOLERANCE: f32 = 1e-7; // Below this norm an axis is treated as undefined
pub const ANGLE_TOLERANCE: f32 = 1e-6; // Angles below this are reported as zero rotation
pub const HALF_TURN_TOLERANCE: f32 = 1e-5; // Distance from pi at which tan(w/2) is replaced by the sentinel

// Rodrigues vectors of 180° rotations are infinite; tables and converters use this magnitude instead
pub const ROD_SENTINEL: f32 = 1.0e10;

// Largest homochoric radius, reached at w = pi: (3/4 * pi)^(1/3)
pub const HOMOCHORIC_MAX_NORM: f32 = 1.330_670_1;

// Rotation angles below this use the series expansion of w - sin(w)
pub const HOMOCHORIC_SERIES_LIMIT: f32 = 0.1;

// Bisection steps used to invert the homochoric magnitude
pub const HOMOCHORIC_INVERSION_STEPS: usize = 40;

// Upper bound of any principal rotation angle
pub const MAX_ROTATION_ANGLE: f32 = PI;
