// Homochoric histogram binning over a fundamental zone

use nalgebra::Vector3;
use rand::Rng;

use crate::orientations::representations::HomochoricVector;
use crate::symmetries::fundamental_zone::FundamentalZoneShape;

/// Bin along one axis: `floor(h / step + bins / 2)` clamped to `[0, bins - 1]`.
#[inline]
fn axis_bin(h: f32, step: f32, bins: usize) -> usize {
    let raw = (h / step + 0.5 * bins as f32).floor();
    if raw.is_nan() || raw < 0.0 {
        0
    } else if raw >= bins as f32 {
        bins - 1
    } else {
        raw as usize
    }
}

/// Flattened bin index `b0 + b1 * bins0 + b2 * bins0 * bins1`.
pub fn homochoric_bin(shape: &FundamentalZoneShape, h: &HomochoricVector) -> usize {
    let [n0, n1, n2] = shape.bins;
    let b0 = axis_bin(h.x, shape.step[0], n0);
    let b1 = axis_bin(h.y, shape.step[1], n1);
    let b2 = axis_bin(h.z, shape.step[2], n2);
    b0 + b1 * n0 + b2 * n0 * n1
}

/// Per-axis bin coordinates of a flattened index, `None` past the last bin.
pub fn bin_coordinates(shape: &FundamentalZoneShape, index: usize) -> Option<[usize; 3]> {
    if index >= shape.total_bins() {
        return None;
    }
    let [n0, n1, _] = shape.bins;
    Some([index % n0, (index / n0) % n1, index / (n0 * n1)])
}

fn cell_point(shape: &FundamentalZoneShape, cell: [usize; 3], offset: [f32; 3]) -> HomochoricVector {
    let coord = |i: usize| (cell[i] as f32 + offset[i]) * shape.step[i] - shape.dim[i];
    HomochoricVector(Vector3::new(coord(0), coord(1), coord(2)))
}

/// Homochoric centre of bin `index`.
pub fn bin_center_homochoric(shape: &FundamentalZoneShape, index: usize) -> Option<HomochoricVector> {
    bin_coordinates(shape, index).map(|cell| cell_point(shape, cell, [0.5; 3]))
}

/// Uniformly distributed homochoric point inside bin `index`.
pub fn sample_bin_homochoric<R: Rng + ?Sized>(
    shape: &FundamentalZoneShape,
    index: usize,
    rng: &mut R,
) -> Option<HomochoricVector> {
    let cell = bin_coordinates(shape, index)?;
    let offset = [rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>()];
    Some(cell_point(shape, cell, offset))
}
