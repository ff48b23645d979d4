// Slip-system geometry: Schmid factor lookup for the classes that define slip systems

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::errors::OrientationError;
use crate::orientations::quaternion_math::{conjugate, rotate_vector, Quat};
use crate::symmetries::crystal_structure::CrystalStructure;
use crate::Result;

/// {111}<110> slip systems of face-centred cubic crystals as (plane normal, slip direction).
pub static FCC_SLIP_SYSTEMS: [([f32; 3], [f32; 3]); 12] = [
    ([1.0, 1.0, 1.0], [0.0, 1.0, -1.0]),
    ([1.0, 1.0, 1.0], [1.0, 0.0, -1.0]),
    ([1.0, 1.0, 1.0], [1.0, -1.0, 0.0]),
    ([1.0, -1.0, -1.0], [0.0, 1.0, -1.0]),
    ([1.0, -1.0, -1.0], [1.0, 0.0, 1.0]),
    ([1.0, -1.0, -1.0], [1.0, 1.0, 0.0]),
    ([-1.0, 1.0, -1.0], [0.0, 1.0, 1.0]),
    ([-1.0, 1.0, -1.0], [1.0, 0.0, -1.0]),
    ([-1.0, 1.0, -1.0], [1.0, 1.0, 0.0]),
    ([-1.0, -1.0, 1.0], [0.0, 1.0, 1.0]),
    ([-1.0, -1.0, 1.0], [1.0, 0.0, 1.0]),
    ([-1.0, -1.0, 1.0], [1.0, -1.0, 0.0]),
];

/// Largest Schmid factor over a set of slip systems and the system that attains it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SchmidFactor {
    pub factor: f32,
    pub slip_system: usize,
}

fn slip_systems(structure: CrystalStructure) -> Result<&'static [([f32; 3], [f32; 3])]> {
    match structure {
        CrystalStructure::Cubic => Ok(&FCC_SLIP_SYSTEMS),
        other => Err(OrientationError::unsupported("Schmid factor", other)),
    }
}

/// Maximum Schmid factor `|cos(l, n)| |cos(l, d)|` for a load expressed in the crystal frame.
///
/// Only the cubic (m-3m) class defines slip systems; every other class
/// returns [`OrientationError::Unsupported`].
pub fn schmid_factor(structure: CrystalStructure, load: &Vector3<f32>) -> Result<SchmidFactor> {
    let systems = slip_systems(structure)?;
    if load.iter().any(|c| !c.is_finite()) {
        return Err(OrientationError::invalid_parameter(
            "load",
            "loading direction has non-finite components",
        ));
    }
    let l = load.try_normalize(f32::EPSILON).ok_or_else(|| {
        OrientationError::invalid_parameter("load", "loading direction has zero length")
    })?;

    let mut best = SchmidFactor {
        factor: -1.0,
        slip_system: 0,
    };
    for (i, (plane, direction)) in systems.iter().enumerate() {
        let n = Vector3::from(*plane).normalize();
        let d = Vector3::from(*direction).normalize();
        let factor = (l.dot(&n) * l.dot(&d)).abs();
        if factor > best.factor {
            best = SchmidFactor {
                factor,
                slip_system: i,
            };
        }
    }
    Ok(best)
}

/// Schmid factor of a grain with orientation `q` under a load given in the sample frame.
pub fn schmid_factor_for_orientation(
    structure: CrystalStructure,
    q: &Quat,
    sample_load: &Vector3<f32>,
) -> Result<SchmidFactor> {
    // Sample to crystal is the inverse of the active rotation of q
    let crystal_load = rotate_vector(&conjugate(q), sample_load);
    schmid_factor(structure, &crystal_load)
}
