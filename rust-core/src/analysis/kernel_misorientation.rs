// Kernel average misorientation, grain reference misorientation and misorientation gradient

use log::{debug, trace};
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::analysis::orientation_field::{OrientationField, VoxelGrid};
use crate::errors::OrientationError;
use crate::Result;

/// Parameters of the kernel misorientation maps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelParams {
    /// Half-width of the cubic kernel in voxels.
    pub kernel_size: usize,
    /// Neighbors at or above this disorientation (degrees) are left out of the kernel average.
    pub max_misorientation_deg: f32,
}

impl Default for KernelParams {
    fn default() -> Self {
        Self {
            kernel_size: 1,
            max_misorientation_deg: 5.0,
        }
    }
}

impl KernelParams {
    pub fn validate(&self) -> Result<()> {
        if self.kernel_size == 0 {
            return Err(OrientationError::invalid_parameter(
                "kernel_size",
                "must be at least 1",
            ));
        }
        if !(self.max_misorientation_deg.is_finite() && self.max_misorientation_deg > 0.0) {
            return Err(OrientationError::invalid_parameter(
                "max_misorientation_deg",
                "must be a positive finite angle",
            ));
        }
        Ok(())
    }
}

/// Per-voxel and per-feature misorientation maps, all in degrees.
///
/// Voxels that are unindexed or belong to feature 0 hold 0 in every map.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MisorientationMaps {
    /// Mean disorientation to kernel neighbors of the same phase below the threshold.
    pub kernel_average: Vec<f32>,
    /// Disorientation of each voxel to the average orientation of its feature.
    pub grain_reference: Vec<f32>,
    /// Mean |GRM difference| to kernel neighbors in the same feature.
    pub gradient: Vec<f32>,
    /// Mean grain reference misorientation of each feature.
    pub feature_average: Vec<f32>,
}

fn check_inputs(
    grid: &VoxelGrid,
    voxels: &OrientationField,
    feature_ids: &[usize],
    features: &OrientationField,
) -> Result<()> {
    if voxels.len() != grid.len() {
        return Err(OrientationError::length_mismatch(
            "voxel orientations",
            grid.len(),
            voxels.len(),
        ));
    }
    if feature_ids.len() != grid.len() {
        return Err(OrientationError::length_mismatch(
            "feature ids",
            grid.len(),
            feature_ids.len(),
        ));
    }
    if let Some(&bad) = feature_ids.iter().find(|&&f| f >= features.len() && f != 0) {
        return Err(OrientationError::index_out_of_range(
            "feature ids",
            bad,
            features.len(),
        ));
    }
    Ok(())
}

/// Kernel average and grain reference misorientation of one voxel.
fn voxel_misorientations(
    grid: &VoxelGrid,
    voxels: &OrientationField,
    feature_ids: &[usize],
    features: &OrientationField,
    params: &KernelParams,
    point: usize,
) -> (f32, f32) {
    let feature = feature_ids[point];
    let Some(structure) = voxels.structure(point) else {
        return (0.0, 0.0);
    };
    if feature == 0 {
        return (0.0, 0.0);
    }

    let (sum, count) = grid
        .kernel_neighbors(point, params.kernel_size)
        .filter_map(|n| voxels.misorientation(point, n))
        .map(|d| d.angle_degrees())
        .filter(|&w| w < params.max_misorientation_deg)
        .fold((0.0f32, 0usize), |(s, c), w| (s + w, c + 1));
    let kam = if count == 0 { 0.0 } else { sum / count as f32 };

    let grm = structure
        .ops()
        .misorientation(voxels.quat(point), features.quat(feature))
        .angle_degrees();
    (kam, grm)
}

fn voxel_gradient(
    grid: &VoxelGrid,
    voxels: &OrientationField,
    feature_ids: &[usize],
    grain_reference: &[f32],
    radius: usize,
    point: usize,
) -> f32 {
    let feature = feature_ids[point];
    if feature == 0 || voxels.phase(point) == 0 {
        return 0.0;
    }
    let (sum, count) = grid
        .kernel_neighbors(point, radius)
        .filter(|&n| feature_ids[n] == feature)
        .map(|n| (grain_reference[point] - grain_reference[n]).abs())
        .fold((0.0f32, 0usize), |(s, c), w| (s + w, c + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f32
    }
}

/// Computes KAM, GRM, the misorientation gradient and per-feature mean GRM.
///
/// `voxels` and `feature_ids` are indexed like `grid`; `features` holds the
/// average orientation of each feature, with feature 0 reserved for
/// unassigned voxels.
///
/// The kernel leaves the centre voxel out of both averages. Kernels that count
/// the centre as a zero-angle member report KAM and the gradient scaled by
/// `n / (n + 1)` for `n` contributing neighbors.
pub fn misorientation_maps(
    grid: &VoxelGrid,
    voxels: &OrientationField,
    feature_ids: &[usize],
    features: &OrientationField,
    params: &KernelParams,
) -> Result<MisorientationMaps> {
    params.validate()?;
    check_inputs(grid, voxels, feature_ids, features)?;
    debug!(
        "Misorientation maps over {:?} voxels, kernel size {}, threshold {}°",
        grid.dims, params.kernel_size, params.max_misorientation_deg
    );

    let per_voxel = |point: usize| {
        voxel_misorientations(grid, voxels, feature_ids, features, params, point)
    };
    #[cfg(feature = "parallel")]
    let pairs: Vec<(f32, f32)> = (0..grid.len()).into_par_iter().map(per_voxel).collect();
    #[cfg(not(feature = "parallel"))]
    let pairs: Vec<(f32, f32)> = (0..grid.len()).map(per_voxel).collect();
    let (kernel_average, grain_reference): (Vec<f32>, Vec<f32>) = pairs.into_iter().unzip();

    let mut totals = vec![(0.0f32, 0usize); features.len()];
    for (point, &feature) in feature_ids.iter().enumerate() {
        if feature != 0 && voxels.phase(point) != 0 {
            totals[feature].0 += grain_reference[point];
            totals[feature].1 += 1;
        }
    }
    let feature_average: Vec<f32> = totals
        .iter()
        .map(|&(sum, count)| if count == 0 { 0.0 } else { sum / count as f32 })
        .collect();
    trace!("Feature average misorientations: {:?}", feature_average);

    let per_gradient = |point: usize| {
        voxel_gradient(grid, voxels, feature_ids, &grain_reference, params.kernel_size, point)
    };
    #[cfg(feature = "parallel")]
    let gradient: Vec<f32> = (0..grid.len()).into_par_iter().map(per_gradient).collect();
    #[cfg(not(feature = "parallel"))]
    let gradient: Vec<f32> = (0..grid.len()).map(per_gradient).collect();

    Ok(MisorientationMaps {
        kernel_average,
        grain_reference,
        gradient,
        feature_average,
    })
}
