use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::OrientationError;
use crate::symmetries::laue_ops::{self, LaueOps};

/// Laue class of a phase.
///
/// Numeric phase tags follow declaration order: `Hexagonal` is 0 and
/// `Trigonal` is 10. Any other tag is rejected by [`TryFrom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrystalStructure {
    Hexagonal,
    Cubic,
    HexagonalLow,
    CubicLow,
    Triclinic,
    Monoclinic,
    Orthorhombic,
    TetragonalLow,
    Tetragonal,
    TrigonalLow,
    Trigonal,
}

impl CrystalStructure {
    /// Every class in tag order.
    pub const ALL: [CrystalStructure; 11] = [
        CrystalStructure::Hexagonal,
        CrystalStructure::Cubic,
        CrystalStructure::HexagonalLow,
        CrystalStructure::CubicLow,
        CrystalStructure::Triclinic,
        CrystalStructure::Monoclinic,
        CrystalStructure::Orthorhombic,
        CrystalStructure::TetragonalLow,
        CrystalStructure::Tetragonal,
        CrystalStructure::TrigonalLow,
        CrystalStructure::Trigonal,
    ];

    /// Symmetry implementation for this class.
    pub fn ops(&self) -> &'static LaueOps {
        match self {
            CrystalStructure::Hexagonal => &laue_ops::HEXAGONAL,
            CrystalStructure::Cubic => &laue_ops::CUBIC,
            CrystalStructure::HexagonalLow => &laue_ops::HEXAGONAL_LOW,
            CrystalStructure::CubicLow => &laue_ops::CUBIC_LOW,
            CrystalStructure::Triclinic => &laue_ops::TRICLINIC,
            CrystalStructure::Monoclinic => &laue_ops::MONOCLINIC,
            CrystalStructure::Orthorhombic => &laue_ops::ORTHORHOMBIC,
            CrystalStructure::TetragonalLow => &laue_ops::TETRAGONAL_LOW,
            CrystalStructure::Tetragonal => &laue_ops::TETRAGONAL,
            CrystalStructure::TrigonalLow => &laue_ops::TRIGONAL_LOW,
            CrystalStructure::Trigonal => &laue_ops::TRIGONAL,
        }
    }

    pub fn tag(&self) -> u32 {
        *self as u32
    }

    pub fn name(&self) -> &'static str {
        self.ops().name()
    }

    pub fn laue_symbol(&self) -> &'static str {
        self.ops().symbol()
    }

    pub fn is_cubic(&self) -> bool {
        matches!(self, CrystalStructure::Cubic | CrystalStructure::CubicLow)
    }

    pub fn is_hexagonal(&self) -> bool {
        matches!(
            self,
            CrystalStructure::Hexagonal | CrystalStructure::HexagonalLow
        )
    }
}

impl TryFrom<u32> for CrystalStructure {
    type Error = OrientationError;

    fn try_from(tag: u32) -> Result<Self, Self::Error> {
        CrystalStructure::ALL
            .get(tag as usize)
            .copied()
            .ok_or_else(|| OrientationError::unknown_structure(tag))
    }
}

impl TryFrom<i32> for CrystalStructure {
    type Error = OrientationError;

    fn try_from(tag: i32) -> Result<Self, Self::Error> {
        u32::try_from(tag)
            .map_err(|_| OrientationError::unknown_structure(tag))
            .and_then(CrystalStructure::try_from)
    }
}

impl FromStr for CrystalStructure {
    type Err = OrientationError;

    /// Accepts the class name (case-insensitive, `_` and `-` ignored), the
    /// Laue symbol or the numeric tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(tag) = trimmed.parse::<u32>() {
            return CrystalStructure::try_from(tag);
        }
        let key: String = trimmed
            .chars()
            .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        CrystalStructure::ALL
            .iter()
            .copied()
            .find(|cs| cs.laue_symbol() == trimmed || cs.name().to_lowercase() == key)
            .ok_or_else(|| OrientationError::unknown_structure(trimmed))
    }
}

impl fmt::Display for CrystalStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.laue_symbol())
    }
}
