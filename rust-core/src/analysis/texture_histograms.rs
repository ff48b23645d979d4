// ODF and MDF histograms over the homochoric bins of a Laue class

use log::debug;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::analysis::neighbor_misorientation::validate_neighbor_lists;
use crate::analysis::orientation_field::OrientationField;
use crate::errors::OrientationError;
use crate::orientations::conversions::{axis_angle_to_rodrigues, quat_to_rodrigues};
use crate::orientations::quaternion_math::Quat;
use crate::orientations::representations::RodriguesVector;
use crate::symmetries::crystal_structure::CrystalStructure;
use crate::Result;

/// Which fundamental zone a histogram bins into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistogramKind {
    /// Orientation distribution: orientations reduced into the ODF zone.
    Odf,
    /// Misorientation distribution: disorientations reduced into the MDF zone.
    Mdf,
}

/// Bin counts of orientations or misorientations for one Laue class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureHistogram {
    structure: CrystalStructure,
    kind: HistogramKind,
    counts: Vec<u64>,
    total: u64,
}

fn add_counts(mut a: Vec<u64>, b: Vec<u64>) -> Vec<u64> {
    for (x, y) in a.iter_mut().zip(b) {
        *x += y;
    }
    a
}

impl TextureHistogram {
    pub fn new(structure: CrystalStructure, kind: HistogramKind) -> Self {
        Self {
            structure,
            kind,
            counts: vec![0; structure.ops().total_bins()],
            total: 0,
        }
    }

    pub fn structure(&self) -> CrystalStructure {
        self.structure
    }

    pub fn kind(&self) -> HistogramKind {
        self.kind
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    fn bin_of(&self, r: &RodriguesVector) -> usize {
        let ops = self.structure.ops();
        match self.kind {
            HistogramKind::Odf => ops.odf_bin(r),
            HistogramKind::Mdf => ops.mdf_bin(r),
        }
    }

    /// Adds one Rodrigues vector and returns the bin it landed in.
    pub fn add_rodrigues(&mut self, r: &RodriguesVector) -> usize {
        let bin = self.bin_of(r);
        self.counts[bin] += 1;
        self.total += 1;
        bin
    }

    /// Adds every orientation in `quats` to an ODF histogram.
    pub fn accumulate_orientations(&mut self, quats: &[Quat]) -> Result<()> {
        if self.kind != HistogramKind::Odf {
            return Err(OrientationError::invalid_parameter(
                "histogram kind",
                "orientations can only be added to an ODF histogram",
            ));
        }
        let n = self.counts.len();
        let ops = self.structure.ops();
        let bin = |q: &Quat| ops.odf_bin(&quat_to_rodrigues(q));

        #[cfg(feature = "parallel")]
        let counts = quats
            .par_iter()
            .fold(
                || vec![0u64; n],
                |mut acc, q| {
                    acc[bin(q)] += 1;
                    acc
                },
            )
            .reduce(|| vec![0u64; n], add_counts);
        #[cfg(not(feature = "parallel"))]
        let counts = quats.iter().fold(vec![0u64; n], |mut acc, q| {
            acc[bin(q)] += 1;
            acc
        });

        self.counts = add_counts(std::mem::take(&mut self.counts), counts);
        self.total += quats.len() as u64;
        debug!("Added {} orientations to {} ODF", quats.len(), self.structure);
        Ok(())
    }

    /// Adds the disorientation of every neighboring feature pair to an MDF histogram.
    ///
    /// Each unordered pair is counted once. Pairs whose phase is not of this
    /// histogram's structure, or that span two phases, are skipped. Returns
    /// the number of pairs added.
    pub fn accumulate_misorientations(
        &mut self,
        features: &OrientationField,
        neighbors: &[Vec<usize>],
    ) -> Result<usize> {
        if self.kind != HistogramKind::Mdf {
            return Err(OrientationError::invalid_parameter(
                "histogram kind",
                "misorientations can only be added to an MDF histogram",
            ));
        }
        validate_neighbor_lists(features, neighbors)?;

        let mut added = 0;
        for (i, list) in neighbors.iter().enumerate() {
            if features.structure(i) != Some(self.structure) {
                continue;
            }
            for &j in list.iter().filter(|&&j| j > i) {
                if let Some(d) = features.misorientation(i, j) {
                    self.add_rodrigues(&axis_angle_to_rodrigues(&d.to_axis_angle()));
                    added += 1;
                }
            }
        }
        debug!("Added {} misorientations to {} MDF", added, self.structure);
        Ok(added)
    }

    /// Adds the counts of another histogram of the same structure and kind.
    pub fn merge(&mut self, other: &TextureHistogram) -> Result<()> {
        if other.structure != self.structure || other.kind != self.kind {
            return Err(OrientationError::invalid_parameter(
                "histogram",
                "cannot merge histograms of different structure or kind",
            ));
        }
        for (x, y) in self.counts.iter_mut().zip(&other.counts) {
            *x += y;
        }
        self.total += other.total;
        Ok(())
    }

    /// Fraction of all entries in each bin; all zeros for an empty histogram.
    pub fn densities(&self) -> Vec<f32> {
        if self.total == 0 {
            return vec![0.0; self.counts.len()];
        }
        let total = self.total as f64;
        self.counts
            .iter()
            .map(|&c| (c as f64 / total) as f32)
            .collect()
    }

    /// Index and count of the most populated bin, the lowest index on ties.
    pub fn peak(&self) -> Option<(usize, u64)> {
        if self.total == 0 {
            return None;
        }
        self.counts
            .iter()
            .copied()
            .enumerate()
            .fold(None, |best: Option<(usize, u64)>, (i, c)| match best {
                Some((_, bc)) if bc >= c => best,
                _ => Some((i, c)),
            })
    }

    pub fn clear(&mut self) {
        self.counts.iter_mut().for_each(|c| *c = 0);
        self.total = 0;
    }
}
