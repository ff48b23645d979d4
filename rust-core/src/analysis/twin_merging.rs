// Σ3 twin detection and merging over a feature neighbor graph

use log::{debug, info};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::analysis::neighbor_misorientation::validate_neighbor_lists;
use crate::analysis::orientation_field::OrientationField;
use crate::errors::OrientationError;
use crate::symmetries::misorientation::Disorientation;
use crate::Result;

/// Rotation angle of the Σ3 twin relation, degrees.
pub const SIGMA3_ANGLE_DEG: f32 = 60.0;

/// Tolerances for recognizing a Σ3 (60° about <111>) boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwinParams {
    /// Allowed deviation from 60°, degrees.
    pub angle_tolerance_deg: f32,
    /// Allowed angle between the disorientation axis and <111>, degrees.
    pub axis_tolerance_deg: f32,
}

impl Default for TwinParams {
    fn default() -> Self {
        Self {
            angle_tolerance_deg: 2.0,
            axis_tolerance_deg: 2.0,
        }
    }
}

impl TwinParams {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("angle_tolerance_deg", self.angle_tolerance_deg),
            ("axis_tolerance_deg", self.axis_tolerance_deg),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(OrientationError::invalid_parameter(
                    name,
                    "must be a non-negative finite angle",
                ));
            }
        }
        Ok(())
    }

    /// Whether a disorientation is within tolerance of 60° about <111>.
    pub fn is_sigma3(&self, d: &Disorientation) -> bool {
        let angle_diff = (d.angle_degrees() - SIGMA3_ANGLE_DEG).abs();
        let along_111 = d.axis.abs().dot(&Vector3::repeat(1.0 / 3.0f32.sqrt()));
        let axis_diff = along_111.clamp(-1.0, 1.0).acos().to_degrees();
        angle_diff < self.angle_tolerance_deg && axis_diff < self.axis_tolerance_deg
    }
}

/// Outcome of a twin merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwinMergeResult {
    /// Parent of each input feature; parents map to themselves and feature 0 to 0.
    pub parent: Vec<usize>,
    /// Contiguous id of each input feature after merging, starting at 1; feature 0 stays 0.
    pub new_ids: Vec<usize>,
    /// Number of features left after merging, excluding feature 0.
    pub merged_count: usize,
    /// Number of features absorbed into a parent.
    pub twin_count: usize,
}

/// Groups features connected through Σ3 boundaries.
///
/// Features are visited in index order. Each unassigned, indexed feature
/// with a cubic structure becomes a parent and absorbs every neighbor (and
/// transitively their neighbors) whose disorientation to the feature that
/// reached it is a Σ3 twin relation. Only same-phase cubic pairs are tested.
///
/// Features of any other Laue class keep their own id even when a
/// neighbor of theirs is 60° about <111> away; the Σ3 relation is only
/// meaningful as a twin for cubic lattices.
pub fn find_twins(
    features: &OrientationField,
    neighbors: &[Vec<usize>],
    params: &TwinParams,
) -> Result<TwinMergeResult> {
    params.validate()?;
    validate_neighbor_lists(features, neighbors)?;

    let n = features.len();
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut group = Vec::new();

    for seed in 1..n {
        if parent[seed].is_some() || features.phase(seed) == 0 {
            continue;
        }
        parent[seed] = Some(seed);
        if !features.structure(seed).is_some_and(|s| s.is_cubic()) {
            continue;
        }
        group.clear();
        group.push(seed);
        let mut cursor = 0;
        while cursor < group.len() {
            let current = group[cursor];
            cursor += 1;
            for &neighbor in &neighbors[current] {
                if neighbor == 0 || parent[neighbor].is_some() {
                    continue;
                }
                let Some(d) = features.misorientation(current, neighbor) else {
                    continue;
                };
                if params.is_sigma3(&d) {
                    parent[neighbor] = Some(seed);
                    group.push(neighbor);
                }
            }
        }
        if group.len() > 1 {
            debug!("Feature {} absorbs {} twins", seed, group.len() - 1);
        }
    }

    // Unindexed features keep their own id
    let parent: Vec<usize> = parent
        .iter()
        .enumerate()
        .map(|(i, p)| p.unwrap_or(i))
        .collect();

    let mut new_ids = vec![0usize; n];
    let mut merged_count = 0;
    for i in 1..n {
        if parent[i] == i {
            merged_count += 1;
            new_ids[i] = merged_count;
        }
    }
    let mut twin_count = 0;
    for i in 1..n {
        if parent[i] != i {
            new_ids[i] = new_ids[parent[i]];
            twin_count += 1;
        }
    }

    info!(
        "Twin merge: {} features -> {} ({} twins absorbed)",
        n.saturating_sub(1),
        merged_count,
        twin_count
    );
    Ok(TwinMergeResult {
        parent,
        new_ids,
        merged_count,
        twin_count,
    })
}

/// Rewrites voxel feature ids in place with the merged numbering.
pub fn relabel_voxels(result: &TwinMergeResult, feature_ids: &mut [usize]) -> Result<()> {
    let n = result.new_ids.len();
    if let Some(&bad) = feature_ids.iter().find(|&&f| f >= n && f != 0) {
        return Err(OrientationError::index_out_of_range("feature ids", bad, n));
    }
    for id in feature_ids.iter_mut() {
        if *id != 0 {
            *id = result.new_ids[*id];
        }
    }
    Ok(())
}

/// Finds twins among `features` and relabels `feature_ids` in one step.
pub fn merge_twins(
    features: &OrientationField,
    neighbors: &[Vec<usize>],
    params: &TwinParams,
    feature_ids: &mut [usize],
) -> Result<TwinMergeResult> {
    let result = find_twins(features, neighbors, params)?;
    relabel_voxels(&result, feature_ids)?;
    Ok(result)
}
