// Orientations module: Contains rotation representations and the conversions between them
// This module provides the quaternion primitives every Laue class builds upon

// ======================== MODULE DECLARATIONS ========================
pub mod conversions;
pub mod quaternion_math;
pub mod representations;

// Test modules
mod _tests_conversions;

// ======================== QUATERNION PRIMITIVES ========================
pub use quaternion_math::{
    Quat,               // type - single precision quaternion (w, i, j, k)
    quat,               // fn(w, x, y, z) -> Quat - builds a quaternion from components
    quat_from_array,    // fn(&[f32; 4]) -> Quat - builds a quaternion from a [w, x, y, z] row
    quat_to_array,      // fn(&Quat) -> [f32; 4] - flattens a quaternion
    identity,           // fn() -> Quat - zero rotation
    multiply,           // fn(&Quat, &Quat) -> Quat - Hamilton product
    conjugate,          // fn(&Quat) -> Quat - inverse rotation of a unit quaternion
    dot,                // fn(&Quat, &Quat) -> f32 - 4D dot product
    normalize,          // fn(&Quat) -> Quat - unit quaternion, identity for degenerate input
    canonical,          // fn(&Quat) -> Quat - sign representative with w >= 0
    clamp_scalar,       // fn(&mut Quat) - clamps w to [-1, 1]
    rotate_vector,      // fn(&Quat, &Vector3<f32>) -> Vector3<f32> - active rotation
    random_quaternion,  // fn(&mut impl Rng) -> Quat - uniformly distributed rotation
};

// ======================== REPRESENTATIONS ========================
pub use representations::{
    AxisAngle,          // struct - angle (radians) plus unit axis
    RodriguesVector,    // struct - tan(w/2) * axis, sentinel magnitude at w = pi
    HomochoricVector,   // struct - equal-volume (3/4 (w - sin w))^(1/3) * axis
    EulerAngles,        // struct - Bunge (phi1, Phi, phi2)
};

// ======================== CONVERTERS ========================
pub use conversions::{
    quat_to_axis_angle,        // fn(&Quat) -> AxisAngle - clamps w, identity on NaN / zero axis
    axis_angle_to_quat,        // fn(&AxisAngle) -> Quat
    quat_to_rodrigues,         // fn(&Quat) -> RodriguesVector
    rodrigues_to_quat,         // fn(&RodriguesVector) -> Quat
    rodrigues_to_axis_angle,   // fn(&RodriguesVector) -> AxisAngle
    axis_angle_to_rodrigues,   // fn(&AxisAngle) -> RodriguesVector
    rodrigues_to_homochoric,   // fn(&RodriguesVector) -> HomochoricVector - zero is a fixed point
    homochoric_to_rodrigues,   // fn(&HomochoricVector) -> RodriguesVector - zero is a fixed point
    axis_angle_to_homochoric,  // fn(&AxisAngle) -> HomochoricVector
    homochoric_to_axis_angle,  // fn(&HomochoricVector) -> AxisAngle
    homochoric_magnitude,      // fn(f32) -> f32 - homochoric radius of an angle
    homochoric_angle,          // fn(f32) -> f32 - inverse of homochoric_magnitude
    euler_to_quat,             // fn(&EulerAngles) -> Quat - Bunge, passive
    quat_to_euler,             // fn(&Quat) -> EulerAngles
    euler_to_rodrigues,        // fn(&EulerAngles) -> RodriguesVector
    rodrigues_to_euler,        // fn(&RodriguesVector) -> EulerAngles
    quat_to_matrix,            // fn(&Quat) -> Matrix3<f32> - active rotation matrix
    matrix_to_quat,            // fn(&Matrix3<f32>) -> Quat
};
