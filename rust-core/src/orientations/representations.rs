use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

/// Rotation by `angle` radians about the unit vector `axis`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisAngle {
    pub angle: f32,
    pub axis: Vector3<f32>,
}

impl AxisAngle {
    pub fn new(angle: f32, axis: Vector3<f32>) -> Self {
        Self { angle, axis }
    }

    /// Zero rotation with the canonical axis (0, 0, 1).
    pub fn identity() -> Self {
        Self {
            angle: 0.0,
            axis: Vector3::z(),
        }
    }

    pub fn angle_degrees(&self) -> f32 {
        self.angle.to_degrees()
    }
}

/// Rodrigues-Frank vector `tan(w/2) * axis`.
///
/// 180° rotations have no finite representation; they are stored with the
/// magnitude [`ROD_SENTINEL`](crate::config::ROD_SENTINEL) along the axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RodriguesVector(pub Vector3<f32>);

impl RodriguesVector {
    pub fn new(r1: f32, r2: f32, r3: f32) -> Self {
        Self(Vector3::new(r1, r2, r3))
    }

    pub fn zeros() -> Self {
        Self(Vector3::zeros())
    }

    #[inline]
    pub(crate) fn from_array(r: &[f32; 3]) -> Self {
        Self(Vector3::new(r[0], r[1], r[2]))
    }
}

impl Deref for RodriguesVector {
    type Target = Vector3<f32>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for RodriguesVector {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Homochoric vector `(3/4 (w - sin w))^(1/3) * axis`.
///
/// The map from rotations to the homochoric ball is volume preserving, so
/// equal-width cells in this space hold equal volumes of orientation space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HomochoricVector(pub Vector3<f32>);

impl HomochoricVector {
    pub fn new(h1: f32, h2: f32, h3: f32) -> Self {
        Self(Vector3::new(h1, h2, h3))
    }

    pub fn zeros() -> Self {
        Self(Vector3::zeros())
    }
}

impl Deref for HomochoricVector {
    type Target = Vector3<f32>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for HomochoricVector {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Bunge Euler angles (z-x-z), radians.
///
/// `phi1` and `phi2` lie in [0, 2π) and `phi` in [0, π] when produced by the
/// converters in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EulerAngles {
    pub phi1: f32,
    pub phi: f32,
    pub phi2: f32,
}

impl EulerAngles {
    pub fn new(phi1: f32, phi: f32, phi2: f32) -> Self {
        Self { phi1, phi, phi2 }
    }

    pub fn from_degrees(phi1: f32, phi: f32, phi2: f32) -> Self {
        Self::new(phi1.to_radians(), phi.to_radians(), phi2.to_radians())
    }

    pub fn to_degrees(&self) -> [f32; 3] {
        [
            self.phi1.to_degrees(),
            self.phi.to_degrees(),
            self.phi2.to_degrees(),
        ]
    }
}
