use nalgebra::Matrix3;
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6, PI};
use std::fmt;
use std::sync::OnceLock;

use crate::errors::OrientationError;
use crate::orientations::conversions::{
    homochoric_to_rodrigues, quat_to_euler, rodrigues_to_homochoric, rodrigues_to_quat,
};
use crate::orientations::quaternion_math::{quat_from_array, Quat};
use crate::orientations::representations::{EulerAngles, RodriguesVector};
use crate::symmetries::fundamental_zone::{
    nearest_quat, quat_nearest_origin, rodrigues_fold_mdf, rodrigues_nearest_origin, AxisFold,
    FundamentalZoneShape,
};
use crate::symmetries::misorientation::{min_disorientation, Disorientation};
use crate::symmetries::orientation_binning::{
    bin_center_homochoric, homochoric_bin, sample_bin_homochoric,
};
use crate::symmetries::symmetry_tables::*;
use crate::Result;

/// Symmetry data and fundamental-zone geometry of one Laue class.
///
/// Instances are the eleven statics in this module. Operator tables are
/// shared `'static` slices and the zone shape is computed on first use, so a
/// `&'static LaueOps` can be read from any number of threads.
pub struct LaueOps {
    name: &'static str,
    symbol: &'static str,
    quats: &'static [[f32; 4]],
    rods: &'static [[f32; 3]],
    mats: &'static [[[f32; 3]; 3]],
    zone_angles: [f32; 3],
    bins: [usize; 3],
    // Leading operators applied before the MDF axis fold
    mdf_operators: usize,
    mdf_fold: AxisFold,
    shape: OnceLock<FundamentalZoneShape>,
}

impl LaueOps {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Hermann-Mauguin symbol of the Laue group, e.g. `m-3m`.
    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub fn operator_count(&self) -> usize {
        self.quats.len()
    }

    pub fn mdf_operator_count(&self) -> usize {
        self.mdf_operators
    }

    pub fn mdf_fold(&self) -> AxisFold {
        self.mdf_fold
    }

    pub fn shape(&self) -> &FundamentalZoneShape {
        self.shape
            .get_or_init(|| FundamentalZoneShape::new(self.zone_angles, self.bins))
    }

    pub fn total_bins(&self) -> usize {
        self.shape().total_bins()
    }

    // ======================== OPERATOR ACCESS ========================

    fn check_operator(&self, i: usize) {
        assert!(
            i < self.quats.len(),
            "symmetry operator index {} out of range for {} ({} operators)",
            i,
            self.name,
            self.quats.len()
        );
    }

    /// Operator `i` as a quaternion. Panics when `i >= operator_count()`.
    pub fn quaternion_operator(&self, i: usize) -> Quat {
        self.check_operator(i);
        quat_from_array(&self.quats[i])
    }

    /// Operator `i` as a Rodrigues vector (sentinel magnitude for 2-fold axes).
    /// Panics when `i >= operator_count()`.
    pub fn rodrigues_operator(&self, i: usize) -> RodriguesVector {
        self.check_operator(i);
        RodriguesVector::from_array(&self.rods[i])
    }

    /// Operator `i` as an active rotation matrix. Panics when `i >= operator_count()`.
    pub fn matrix_operator(&self, i: usize) -> Matrix3<f32> {
        self.check_operator(i);
        let m = &self.mats[i];
        Matrix3::new(
            m[0][0], m[0][1], m[0][2],
            m[1][0], m[1][1], m[1][2],
            m[2][0], m[2][1], m[2][2],
        )
    }

    pub fn quaternion_operators(&self) -> impl Iterator<Item = Quat> + '_ {
        self.quats.iter().map(quat_from_array)
    }

    // ======================== DISORIENTATION ========================

    /// Minimum misorientation angle and axis between `q1` and `q2`.
    pub fn misorientation(&self, q1: &Quat, q2: &Quat) -> Disorientation {
        min_disorientation(self.quats, q1, q2)
    }

    // ======================== FUNDAMENTAL ZONE ========================

    /// Symmetry equivalent of `r` in the ODF fundamental zone.
    pub fn odf_fz_rodrigues(&self, r: &RodriguesVector) -> RodriguesVector {
        rodrigues_nearest_origin(self.rods, r)
    }

    /// Misorientation `r` folded into the MDF fundamental zone.
    pub fn mdf_fz_rodrigues(&self, r: &RodriguesVector) -> RodriguesVector {
        rodrigues_fold_mdf(&self.rods[..self.mdf_operators], self.mdf_fold, r)
    }

    /// Equivalent of `q` with the smallest rotation angle, w >= 0.
    pub fn fz_quaternion(&self, q: &Quat) -> Quat {
        quat_nearest_origin(self.quats, q)
    }

    /// Equivalent of `q2` closest to `q1`, sign-aligned with `q1`.
    pub fn nearest_quaternion(&self, q1: &Quat, q2: &Quat) -> Quat {
        nearest_quat(self.quats, q1, q2)
    }

    // ======================== BINNING ========================

    /// ODF histogram bin of orientation `r`.
    pub fn odf_bin(&self, r: &RodriguesVector) -> usize {
        let h = rodrigues_to_homochoric(&self.odf_fz_rodrigues(r));
        homochoric_bin(self.shape(), &h)
    }

    /// MDF histogram bin of misorientation `r`.
    pub fn mdf_bin(&self, r: &RodriguesVector) -> usize {
        let h = rodrigues_to_homochoric(&self.mdf_fz_rodrigues(r));
        homochoric_bin(self.shape(), &h)
    }

    fn bin_out_of_range(&self, index: usize) -> OrientationError {
        OrientationError::BinOutOfRange {
            structure: self.to_string(),
            index,
            total: self.total_bins(),
        }
    }

    /// Orientation at the centre of ODF bin `index`, folded into the zone.
    pub fn bin_center_rodrigues(&self, index: usize) -> Result<RodriguesVector> {
        let h = bin_center_homochoric(self.shape(), index)
            .ok_or_else(|| self.bin_out_of_range(index))?;
        Ok(self.odf_fz_rodrigues(&homochoric_to_rodrigues(&h)))
    }

    /// Random orientation uniformly placed inside ODF bin `index`, folded into the zone.
    pub fn sample_bin_rodrigues<R: Rng + ?Sized>(
        &self,
        index: usize,
        rng: &mut R,
    ) -> Result<RodriguesVector> {
        let h = sample_bin_homochoric(self.shape(), index, rng)
            .ok_or_else(|| self.bin_out_of_range(index))?;
        Ok(self.odf_fz_rodrigues(&homochoric_to_rodrigues(&h)))
    }

    /// Bunge Euler angles of the centre of ODF bin `index`.
    pub fn bin_euler_angles(&self, index: usize) -> Result<EulerAngles> {
        let r = self.bin_center_rodrigues(index)?;
        Ok(quat_to_euler(&rodrigues_to_quat(&r)))
    }
}

impl fmt::Debug for LaueOps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LaueOps")
            .field("name", &self.name)
            .field("symbol", &self.symbol)
            .field("operators", &self.quats.len())
            .field("bins", &self.bins)
            .finish()
    }
}

impl fmt::Display for LaueOps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}

// ======================== LAUE CLASSES ========================

pub static HEXAGONAL: LaueOps = LaueOps {
    name: "Hexagonal",
    symbol: "6/mmm",
    quats: &HEXAGONAL_QUATS,
    rods: &HEXAGONAL_RODS,
    mats: &HEXAGONAL_MATS,
    zone_angles: [FRAC_PI_2, FRAC_PI_2, FRAC_PI_6],
    bins: [36, 36, 12],
    mdf_operators: 6,
    mdf_fold: AxisFold::Absolute,
    shape: OnceLock::new(),
};

pub static CUBIC: LaueOps = LaueOps {
    name: "Cubic",
    symbol: "m-3m",
    quats: &CUBIC_QUATS,
    rods: &CUBIC_RODS,
    mats: &CUBIC_MATS,
    zone_angles: [FRAC_PI_4, FRAC_PI_4, FRAC_PI_4],
    bins: [18, 18, 18],
    mdf_operators: 24,
    mdf_fold: AxisFold::AbsoluteSorted,
    shape: OnceLock::new(),
};

pub static HEXAGONAL_LOW: LaueOps = LaueOps {
    name: "HexagonalLow",
    symbol: "6/m",
    quats: &HEXAGONAL_LOW_QUATS,
    rods: &HEXAGONAL_LOW_RODS,
    mats: &HEXAGONAL_LOW_MATS,
    zone_angles: [PI, PI, FRAC_PI_6],
    bins: [72, 72, 12],
    mdf_operators: 6,
    mdf_fold: AxisFold::UpperHemisphere,
    shape: OnceLock::new(),
};

pub static CUBIC_LOW: LaueOps = LaueOps {
    name: "CubicLow",
    symbol: "m-3",
    quats: &CUBIC_LOW_QUATS,
    rods: &CUBIC_LOW_RODS,
    mats: &CUBIC_LOW_MATS,
    zone_angles: [FRAC_PI_2, FRAC_PI_2, FRAC_PI_2],
    bins: [36, 36, 36],
    mdf_operators: 12,
    mdf_fold: AxisFold::Absolute,
    shape: OnceLock::new(),
};

pub static TRICLINIC: LaueOps = LaueOps {
    name: "Triclinic",
    symbol: "-1",
    quats: &TRICLINIC_QUATS,
    rods: &TRICLINIC_RODS,
    mats: &TRICLINIC_MATS,
    zone_angles: [PI, PI, PI],
    bins: [72, 72, 72],
    mdf_operators: 1,
    mdf_fold: AxisFold::UpperHemisphere,
    shape: OnceLock::new(),
};

pub static MONOCLINIC: LaueOps = LaueOps {
    name: "Monoclinic",
    symbol: "2/m",
    quats: &MONOCLINIC_QUATS,
    rods: &MONOCLINIC_RODS,
    mats: &MONOCLINIC_MATS,
    zone_angles: [PI, FRAC_PI_2, PI],
    bins: [72, 36, 72],
    mdf_operators: 2,
    mdf_fold: AxisFold::UpperHemisphere,
    shape: OnceLock::new(),
};

pub static ORTHORHOMBIC: LaueOps = LaueOps {
    name: "Orthorhombic",
    symbol: "mmm",
    quats: &ORTHORHOMBIC_QUATS,
    rods: &ORTHORHOMBIC_RODS,
    mats: &ORTHORHOMBIC_MATS,
    zone_angles: [FRAC_PI_2, FRAC_PI_2, FRAC_PI_2],
    bins: [36, 36, 36],
    mdf_operators: 4,
    mdf_fold: AxisFold::Absolute,
    shape: OnceLock::new(),
};

pub static TETRAGONAL_LOW: LaueOps = LaueOps {
    name: "TetragonalLow",
    symbol: "4/m",
    quats: &TETRAGONAL_LOW_QUATS,
    rods: &TETRAGONAL_LOW_RODS,
    mats: &TETRAGONAL_LOW_MATS,
    zone_angles: [PI, PI, FRAC_PI_4],
    bins: [72, 72, 18],
    mdf_operators: 4,
    mdf_fold: AxisFold::UpperHemisphere,
    shape: OnceLock::new(),
};

pub static TETRAGONAL: LaueOps = LaueOps {
    name: "Tetragonal",
    symbol: "4/mmm",
    quats: &TETRAGONAL_QUATS,
    rods: &TETRAGONAL_RODS,
    mats: &TETRAGONAL_MATS,
    zone_angles: [FRAC_PI_2, FRAC_PI_2, FRAC_PI_4],
    bins: [36, 36, 18],
    mdf_operators: 4,
    mdf_fold: AxisFold::Absolute,
    shape: OnceLock::new(),
};

pub static TRIGONAL_LOW: LaueOps = LaueOps {
    name: "TrigonalLow",
    symbol: "-3",
    quats: &TRIGONAL_LOW_QUATS,
    rods: &TRIGONAL_LOW_RODS,
    mats: &TRIGONAL_LOW_MATS,
    zone_angles: [PI, PI, FRAC_PI_3],
    bins: [72, 72, 12],
    mdf_operators: 3,
    mdf_fold: AxisFold::UpperHemisphere,
    shape: OnceLock::new(),
};

pub static TRIGONAL: LaueOps = LaueOps {
    name: "Trigonal",
    symbol: "-3m",
    quats: &TRIGONAL_QUATS,
    rods: &TRIGONAL_RODS,
    mats: &TRIGONAL_MATS,
    zone_angles: [FRAC_PI_2, FRAC_PI_2, FRAC_PI_3],
    bins: [36, 36, 12],
    mdf_operators: 3,
    mdf_fold: AxisFold::Absolute,
    shape: OnceLock::new(),
};
