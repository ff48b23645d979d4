use serde::{Deserialize, Serialize};

use crate::errors::OrientationError;
use crate::orientations::quaternion_math::Quat;
use crate::symmetries::crystal_structure::CrystalStructure;
use crate::symmetries::misorientation::Disorientation;
use crate::Result;

/// Orientations with per-entry phase tags, borrowed from the caller.
///
/// Entries can be voxels or features. Phase tags are 1-based: phase `p`
/// uses `structures[p - 1]` and phase 0 marks an unindexed entry that takes
/// part in no misorientation.
#[derive(Debug, Clone, Copy)]
pub struct OrientationField<'a> {
    quats: &'a [Quat],
    phases: &'a [usize],
    structures: &'a [CrystalStructure],
}

impl<'a> OrientationField<'a> {
    /// Fails when `quats` and `phases` differ in length or a phase has no structure.
    pub fn new(
        quats: &'a [Quat],
        phases: &'a [usize],
        structures: &'a [CrystalStructure],
    ) -> Result<Self> {
        if quats.len() != phases.len() {
            return Err(OrientationError::length_mismatch(
                "orientation field phases",
                quats.len(),
                phases.len(),
            ));
        }
        if let Some(&phase) = phases.iter().find(|&&p| p > structures.len()) {
            return Err(OrientationError::index_out_of_range(
                "phase structures",
                phase,
                structures.len() + 1,
            ));
        }
        Ok(Self {
            quats,
            phases,
            structures,
        })
    }

    pub fn len(&self) -> usize {
        self.quats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quats.is_empty()
    }

    pub fn quat(&self, i: usize) -> &Quat {
        &self.quats[i]
    }

    pub fn phase(&self, i: usize) -> usize {
        self.phases[i]
    }

    pub fn quats(&self) -> &'a [Quat] {
        self.quats
    }

    /// Laue class of entry `i`, `None` when unindexed.
    pub fn structure(&self, i: usize) -> Option<CrystalStructure> {
        match self.phases[i] {
            0 => None,
            p => Some(self.structures[p - 1]),
        }
    }

    /// Disorientation between entries `a` and `b` when both are indexed with the same phase.
    pub fn misorientation(&self, a: usize, b: usize) -> Option<Disorientation> {
        if self.phases[a] != self.phases[b] {
            return None;
        }
        let structure = self.structure(a)?;
        Some(structure.ops().misorientation(&self.quats[a], &self.quats[b]))
    }
}

/// Dimensions of a regular voxel grid, x fastest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoxelGrid {
    pub dims: [usize; 3],
}

impl VoxelGrid {
    pub fn new(nx: usize, ny: usize, nz: usize) -> Self {
        Self { dims: [nx, ny, nz] }
    }

    pub fn len(&self) -> usize {
        self.dims.iter().product()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
        (z * self.dims[1] + y) * self.dims[0] + x
    }

    #[inline]
    pub fn coords(&self, index: usize) -> [usize; 3] {
        let [nx, ny, _] = self.dims;
        [index % nx, (index / nx) % ny, index / (nx * ny)]
    }

    /// Indices of the voxels within `radius` steps of `index` along every axis,
    /// clipped at the grid boundary. The voxel itself is excluded.
    pub fn kernel_neighbors(&self, index: usize, radius: usize) -> impl Iterator<Item = usize> + '_ {
        let [x, y, z] = self.coords(index);
        let range = |c: usize, n: usize| c.saturating_sub(radius)..=(c + radius).min(n - 1);
        let (xs, ys, zs) = (range(x, self.dims[0]), range(y, self.dims[1]), range(z, self.dims[2]));
        zs.flat_map(move |k| {
            let xs = xs.clone();
            ys.clone()
                .flat_map(move |j| xs.clone().map(move |i| (i, j, k)))
        })
        .map(move |(i, j, k)| self.index(i, j, k))
        .filter(move |&n| n != index)
    }
}
