// Symmetries module: Contains the Laue class operator tables and the algorithms built on them
// This module provides disorientation, fundamental-zone reduction and orientation binning

// ======================== MODULE DECLARATIONS ========================
pub mod crystal_structure;
pub mod deformation;
pub mod fundamental_zone;
pub mod laue_ops;
pub mod misorientation;
pub mod orientation_binning;
mod symmetry_tables;

mod _tests_deformation;
mod _tests_misorientation;

// ======================== CRYSTAL STRUCTURES ========================
pub use crystal_structure::CrystalStructure; // enum - the eleven Laue classes, tags 0..=10
// CrystalStructure impl methods:
//   ALL: [CrystalStructure; 11]                                    - every class in tag order
//   ops(&self) -> &'static LaueOps                                 - symmetry implementation of the class
//   tag(&self) -> u32                                              - numeric phase tag
//   name(&self) -> &'static str / laue_symbol(&self) -> &'static str
//   is_cubic(&self) -> bool / is_hexagonal(&self) -> bool
//   TryFrom<u32>, TryFrom<i32>, FromStr                            - fail with UnknownCrystalStructure

// ======================== LAUE CLASS OPERATIONS ========================
pub use laue_ops::{
    LaueOps,            // struct - operator tables plus fundamental-zone shape of one Laue class
    HEXAGONAL,          // static - 6/mmm, 12 operators
    CUBIC,              // static - m-3m, 24 operators
    HEXAGONAL_LOW,      // static - 6/m, 6 operators
    CUBIC_LOW,          // static - m-3, 12 operators
    TRICLINIC,          // static - -1, 1 operator
    MONOCLINIC,         // static - 2/m, 2 operators
    ORTHORHOMBIC,       // static - mmm, 4 operators
    TETRAGONAL_LOW,     // static - 4/m, 4 operators
    TETRAGONAL,         // static - 4/mmm, 8 operators
    TRIGONAL_LOW,       // static - -3, 3 operators
    TRIGONAL,           // static - -3m, 6 operators
};
// LaueOps impl methods:
//   operator_count(&self) -> usize                                 - number of symmetry operators
//   quaternion_operator(&self, i) -> Quat                          - panics when i is out of range
//   rodrigues_operator(&self, i) -> RodriguesVector                - panics when i is out of range
//   matrix_operator(&self, i) -> Matrix3<f32>                      - panics when i is out of range
//   misorientation(&self, q1, q2) -> Disorientation                - minimum angle and axis
//   odf_fz_rodrigues(&self, r) / mdf_fz_rodrigues(&self, r)        - fundamental-zone reduction
//   fz_quaternion(&self, q) / nearest_quaternion(&self, q1, q2)    - quaternion reduction
//   odf_bin(&self, r) / mdf_bin(&self, r) -> usize                 - histogram bin index
//   bin_center_rodrigues(&self, index) -> Result<RodriguesVector>  - inverse of odf_bin
//   sample_bin_rodrigues(&self, index, rng) -> Result<RodriguesVector> - jittered inverse
//   bin_euler_angles(&self, index) -> Result<EulerAngles>          - bin centre as Euler angles

// ======================== KERNELS ========================
pub use misorientation::{
    Disorientation,     // struct - angle in [0, pi] plus unit axis
    min_disorientation, // fn(&[[f32; 4]], &Quat, &Quat) -> Disorientation - first-wins minimum search
};

pub use fundamental_zone::{
    FundamentalZoneShape,     // struct - dim, step and bins of a zone in homochoric space
    AxisFold,                 // enum - axis folding rule applied after MDF reduction
    rodrigues_nearest_origin, // fn(&[[f32; 3]], &RodriguesVector) -> RodriguesVector
    rodrigues_fold_mdf,       // fn(&[[f32; 3]], AxisFold, &RodriguesVector) -> RodriguesVector
    quat_nearest_origin,      // fn(&[[f32; 4]], &Quat) -> Quat - largest |w|, w >= 0
    nearest_quat,             // fn(&[[f32; 4]], &Quat, &Quat) -> Quat - closest equivalent
};

pub use orientation_binning::{
    homochoric_bin,        // fn(&FundamentalZoneShape, &HomochoricVector) -> usize
    bin_coordinates,       // fn(&FundamentalZoneShape, usize) -> Option<[usize; 3]>
    bin_center_homochoric, // fn(&FundamentalZoneShape, usize) -> Option<HomochoricVector>
    sample_bin_homochoric, // fn(&FundamentalZoneShape, usize, &mut impl Rng) -> Option<HomochoricVector>
};

// ======================== DEFORMATION ========================
pub use deformation::{
    SchmidFactor,                 // struct - maximum Schmid factor and slip system index
    FCC_SLIP_SYSTEMS,             // static - {111}<110> slip systems
    schmid_factor,                // fn(CrystalStructure, &Vector3<f32>) -> Result<SchmidFactor> - crystal-frame load
    schmid_factor_for_orientation, // fn(CrystalStructure, &Quat, &Vector3<f32>) -> Result<SchmidFactor> - sample-frame load
};
