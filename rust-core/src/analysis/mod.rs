// Analysis module: Contains misorientation statistics over voxel and feature fields
// This module provides neighbor misorientations, kernel maps, twin merging and texture histograms

// ======================== MODULE DECLARATIONS ========================
pub mod kernel_misorientation;
pub mod neighbor_misorientation;
pub mod orientation_field;
pub mod texture_histograms;
pub mod twin_merging;

mod _tests_neighbor_misorientation;
mod _tests_twin_merging;

// ======================== FIELDS ========================
pub use orientation_field::{
    OrientationField,   // struct - borrowed orientations with 1-based phase tags, phase 0 is unindexed
    VoxelGrid,          // struct - regular grid dimensions, x fastest
};
// OrientationField impl methods:
//   new(quats, phases, structures) -> Result<Self>                 - checks lengths and phase range
//   structure(&self, i) -> Option<CrystalStructure>                - None for unindexed entries
//   misorientation(&self, a, b) -> Option<Disorientation>          - same-phase indexed pairs only
// VoxelGrid impl methods:
//   index(&self, x, y, z) -> usize / coords(&self, index) -> [usize; 3]
//   kernel_neighbors(&self, index, radius) -> impl Iterator<usize> - clipped box, excludes the voxel

// ======================== NEIGHBOR STATISTICS ========================
pub use neighbor_misorientation::{
    validate_neighbor_lists,          // fn(&OrientationField, &[Vec<usize>]) -> Result<()>
    neighbor_misorientations,         // fn(&OrientationField, &[Vec<usize>]) -> Result<Vec<Vec<Option<f32>>>> - degrees
    average_neighbor_misorientation,  // fn(&[Vec<Option<f32>>]) -> Vec<f32> - degrees, 0 without pairs
};

// ======================== KERNEL MAPS ========================
pub use kernel_misorientation::{
    KernelParams,         // struct - kernel half-width and KAM threshold (degrees)
    MisorientationMaps,   // struct - KAM, GRM, gradient and per-feature mean GRM
    misorientation_maps,  // fn(&VoxelGrid, &OrientationField, &[usize], &OrientationField, &KernelParams) -> Result<MisorientationMaps>
};

// ======================== TWINS ========================
pub use twin_merging::{
    SIGMA3_ANGLE_DEG,   // const - 60°
    TwinParams,         // struct - angle and axis tolerances (degrees)
    TwinMergeResult,    // struct - parents, contiguous ids and counts
    find_twins,         // fn(&OrientationField, &[Vec<usize>], &TwinParams) -> Result<TwinMergeResult>
    relabel_voxels,     // fn(&TwinMergeResult, &mut [usize]) -> Result<()>
    merge_twins,        // fn(..) -> Result<TwinMergeResult> - find_twins then relabel_voxels
};

// ======================== TEXTURE ========================
pub use texture_histograms::{
    HistogramKind,      // enum - Odf or Mdf
    TextureHistogram,   // struct - bin counts over one Laue class
};
// TextureHistogram impl methods:
//   new(structure, kind) -> Self                                   - zeroed counts, total_bins() long
//   add_rodrigues(&mut self, r) -> usize                           - bins one vector, returns the bin
//   accumulate_orientations(&mut self, quats) -> Result<()>        - ODF only
//   accumulate_misorientations(&mut self, features, neighbors) -> Result<usize> - MDF only, each pair once
//   merge(&mut self, other) -> Result<()>                          - same structure and kind
//   densities(&self) -> Vec<f32> / peak(&self) -> Option<(usize, u64)> / clear(&mut self)
