// Misorientation across every feature-neighbor pair

use log::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::analysis::orientation_field::OrientationField;
use crate::errors::OrientationError;
use crate::Result;

/// Checks that `neighbors` has one list per feature and every entry indexes a feature.
pub fn validate_neighbor_lists(features: &OrientationField, neighbors: &[Vec<usize>]) -> Result<()> {
    if neighbors.len() != features.len() {
        return Err(OrientationError::length_mismatch(
            "neighbor lists",
            features.len(),
            neighbors.len(),
        ));
    }
    for list in neighbors {
        if let Some(&bad) = list.iter().find(|&&n| n >= features.len()) {
            return Err(OrientationError::index_out_of_range(
                "neighbor list",
                bad,
                features.len(),
            ));
        }
    }
    Ok(())
}

/// Disorientation in degrees between each feature and each of its neighbors.
///
/// The result mirrors the shape of `neighbors`. A pair whose phases differ
/// or that involves an unindexed feature yields `None`.
pub fn neighbor_misorientations(
    features: &OrientationField,
    neighbors: &[Vec<usize>],
) -> Result<Vec<Vec<Option<f32>>>> {
    validate_neighbor_lists(features, neighbors)?;

    let row = |(feature, list): (usize, &Vec<usize>)| -> Vec<Option<f32>> {
        list.iter()
            .map(|&n| {
                features
                    .misorientation(feature, n)
                    .map(|d| d.angle_degrees())
            })
            .collect()
    };

    #[cfg(feature = "parallel")]
    let result: Vec<Vec<Option<f32>>> = neighbors.par_iter().enumerate().map(row).collect();
    #[cfg(not(feature = "parallel"))]
    let result: Vec<Vec<Option<f32>>> = neighbors.iter().enumerate().map(row).collect();

    debug!(
        "Computed misorientations for {} neighbor pairs over {} features",
        neighbors.iter().map(Vec::len).sum::<usize>(),
        features.len()
    );
    Ok(result)
}

/// Mean neighbor misorientation per feature, in degrees; 0 when no pair contributes.
pub fn average_neighbor_misorientation(misorientations: &[Vec<Option<f32>>]) -> Vec<f32> {
    misorientations
        .iter()
        .map(|list| {
            let (sum, count) = list
                .iter()
                .flatten()
                .fold((0.0f32, 0usize), |(s, c), &w| (s + w, c + 1));
            if count == 0 {
                0.0
            } else {
                sum / count as f32
            }
        })
        .collect()
}
