// Static symmetry operator tables for the eleven Laue classes
// Each class lists the same operators in the same order as quaternions [w, x, y, z],
// Rodrigues vectors and row-major active rotation matrices

use crate::config::ROD_SENTINEL;
use std::f32::consts::FRAC_1_SQRT_2;

const R2: f32 = FRAC_1_SQRT_2; // cos 45°
const R3: f32 = 0.866_025_4; // sqrt(3) / 2
const INV_SQRT3: f32 = 0.577_350_3; // tan 30°
const SQRT3: f32 = 1.732_050_8; // tan 60°
const BIG: f32 = ROD_SENTINEL;

// ======================== CUBIC (m-3m) ========================
pub(crate) static CUBIC_QUATS: [[f32; 4]; 24] = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
    [R2, R2, 0.0, 0.0],
    [R2, 0.0, R2, 0.0],
    [R2, 0.0, 0.0, R2],
    [R2, -R2, 0.0, 0.0],
    [R2, 0.0, -R2, 0.0],
    [R2, 0.0, 0.0, -R2],
    [0.0, R2, R2, 0.0],
    [0.0, -R2, R2, 0.0],
    [0.0, 0.0, R2, R2],
    [0.0, 0.0, -R2, R2],
    [0.0, R2, 0.0, R2],
    [0.0, -R2, 0.0, R2],
    [0.5, 0.5, 0.5, 0.5],
    [0.5, -0.5, -0.5, -0.5],
    [0.5, 0.5, -0.5, 0.5],
    [0.5, -0.5, 0.5, -0.5],
    [0.5, -0.5, 0.5, 0.5],
    [0.5, 0.5, -0.5, -0.5],
    [0.5, -0.5, -0.5, 0.5],
    [0.5, 0.5, 0.5, -0.5],
];

pub(crate) static CUBIC_RODS: [[f32; 3]; 24] = [
    [0.0, 0.0, 0.0],
    [BIG, 0.0, 0.0],
    [0.0, BIG, 0.0],
    [0.0, 0.0, BIG],
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [-1.0, 0.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 0.0, -1.0],
    [R2 * BIG, R2 * BIG, 0.0],
    [-R2 * BIG, R2 * BIG, 0.0],
    [0.0, R2 * BIG, R2 * BIG],
    [0.0, -R2 * BIG, R2 * BIG],
    [R2 * BIG, 0.0, R2 * BIG],
    [-R2 * BIG, 0.0, R2 * BIG],
    [1.0, 1.0, 1.0],
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [1.0, -1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, 1.0, -1.0],
];

pub(crate) static CUBIC_MATS: [[[f32; 3]; 3]; 24] = [
    [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    [[1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, -1.0]],
    [[-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, -1.0]],
    [[-1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, 1.0]],
    [[1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]],
    [[0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [-1.0, 0.0, 0.0]],
    [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
    [[1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, -1.0, 0.0]],
    [[0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]],
    [[0.0, 1.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
    [[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]],
    [[0.0, -1.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 0.0, -1.0]],
    [[-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]],
    [[-1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, -1.0, 0.0]],
    [[0.0, 0.0, 1.0], [0.0, -1.0, 0.0], [1.0, 0.0, 0.0]],
    [[0.0, 0.0, -1.0], [0.0, -1.0, 0.0], [-1.0, 0.0, 0.0]],
    [[0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
    [[0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]],
    [[0.0, -1.0, 0.0], [0.0, 0.0, -1.0], [1.0, 0.0, 0.0]],
    [[0.0, 0.0, 1.0], [-1.0, 0.0, 0.0], [0.0, -1.0, 0.0]],
    [[0.0, -1.0, 0.0], [0.0, 0.0, 1.0], [-1.0, 0.0, 0.0]],
    [[0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
    [[0.0, 0.0, -1.0], [1.0, 0.0, 0.0], [0.0, -1.0, 0.0]],
    [[0.0, 1.0, 0.0], [0.0, 0.0, -1.0], [-1.0, 0.0, 0.0]],
];

// ======================== CUBIC LOW (m-3) ========================
pub(crate) static CUBIC_LOW_QUATS: [[f32; 4]; 12] = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
    [0.5, 0.5, 0.5, 0.5],
    [0.5, -0.5, -0.5, -0.5],
    [0.5, 0.5, -0.5, 0.5],
    [0.5, -0.5, 0.5, -0.5],
    [0.5, -0.5, 0.5, 0.5],
    [0.5, 0.5, -0.5, -0.5],
    [0.5, -0.5, -0.5, 0.5],
    [0.5, 0.5, 0.5, -0.5],
];

pub(crate) static CUBIC_LOW_RODS: [[f32; 3]; 12] = [
    [0.0, 0.0, 0.0],
    [BIG, 0.0, 0.0],
    [0.0, BIG, 0.0],
    [0.0, 0.0, BIG],
    [1.0, 1.0, 1.0],
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [1.0, -1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, 1.0, -1.0],
];

pub(crate) static CUBIC_LOW_MATS: [[[f32; 3]; 3]; 12] = [
    [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    [[1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, -1.0]],
    [[-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, -1.0]],
    [[-1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, 1.0]],
    [[0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
    [[0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]],
    [[0.0, -1.0, 0.0], [0.0, 0.0, -1.0], [1.0, 0.0, 0.0]],
    [[0.0, 0.0, 1.0], [-1.0, 0.0, 0.0], [0.0, -1.0, 0.0]],
    [[0.0, -1.0, 0.0], [0.0, 0.0, 1.0], [-1.0, 0.0, 0.0]],
    [[0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
    [[0.0, 0.0, -1.0], [1.0, 0.0, 0.0], [0.0, -1.0, 0.0]],
    [[0.0, 1.0, 0.0], [0.0, 0.0, -1.0], [-1.0, 0.0, 0.0]],
];

// ======================== HEXAGONAL (6/mmm) ========================
pub(crate) static HEXAGONAL_QUATS: [[f32; 4]; 12] = [
    [1.0, 0.0, 0.0, 0.0],
    [R3, 0.0, 0.0, 0.5],
    [0.5, 0.0, 0.0, R3],
    [0.0, 0.0, 0.0, 1.0],
    [-0.5, 0.0, 0.0, R3],
    [-R3, 0.0, 0.0, 0.5],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, R3, 0.5, 0.0],
    [0.0, 0.5, R3, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, -0.5, R3, 0.0],
    [0.0, -R3, 0.5, 0.0],
];

pub(crate) static HEXAGONAL_RODS: [[f32; 3]; 12] = [
    [0.0, 0.0, 0.0],
    [0.0, 0.0, INV_SQRT3],
    [0.0, 0.0, SQRT3],
    [0.0, 0.0, BIG],
    [0.0, 0.0, -SQRT3],
    [0.0, 0.0, -INV_SQRT3],
    [BIG, 0.0, 0.0],
    [R3 * BIG, 0.5 * BIG, 0.0],
    [0.5 * BIG, R3 * BIG, 0.0],
    [0.0, BIG, 0.0],
    [-0.5 * BIG, R3 * BIG, 0.0],
    [-R3 * BIG, 0.5 * BIG, 0.0],
];

pub(crate) static HEXAGONAL_MATS: [[[f32; 3]; 3]; 12] = [
    [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    [[0.5, -R3, 0.0], [R3, 0.5, 0.0], [0.0, 0.0, 1.0]],
    [[-0.5, -R3, 0.0], [R3, -0.5, 0.0], [0.0, 0.0, 1.0]],
    [[-1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, 1.0]],
    [[-0.5, R3, 0.0], [-R3, -0.5, 0.0], [0.0, 0.0, 1.0]],
    [[0.5, R3, 0.0], [-R3, 0.5, 0.0], [0.0, 0.0, 1.0]],
    [[1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, -1.0]],
    [[0.5, R3, 0.0], [R3, -0.5, 0.0], [0.0, 0.0, -1.0]],
    [[-0.5, R3, 0.0], [R3, 0.5, 0.0], [0.0, 0.0, -1.0]],
    [[-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, -1.0]],
    [[-0.5, -R3, 0.0], [-R3, 0.5, 0.0], [0.0, 0.0, -1.0]],
    [[0.5, -R3, 0.0], [-R3, -0.5, 0.0], [0.0, 0.0, -1.0]],
];

// ======================== HEXAGONAL LOW (6/m) ========================
pub(crate) static HEXAGONAL_LOW_QUATS: [[f32; 4]; 6] = [
    [1.0, 0.0, 0.0, 0.0],
    [R3, 0.0, 0.0, 0.5],
    [0.5, 0.0, 0.0, R3],
    [0.0, 0.0, 0.0, 1.0],
    [-0.5, 0.0, 0.0, R3],
    [-R3, 0.0, 0.0, 0.5],
];

pub(crate) static HEXAGONAL_LOW_RODS: [[f32; 3]; 6] = [
    [0.0, 0.0, 0.0],
    [0.0, 0.0, INV_SQRT3],
    [0.0, 0.0, SQRT3],
    [0.0, 0.0, BIG],
    [0.0, 0.0, -SQRT3],
    [0.0, 0.0, -INV_SQRT3],
];

pub(crate) static HEXAGONAL_LOW_MATS: [[[f32; 3]; 3]; 6] = [
    [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    [[0.5, -R3, 0.0], [R3, 0.5, 0.0], [0.0, 0.0, 1.0]],
    [[-0.5, -R3, 0.0], [R3, -0.5, 0.0], [0.0, 0.0, 1.0]],
    [[-1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, 1.0]],
    [[-0.5, R3, 0.0], [-R3, -0.5, 0.0], [0.0, 0.0, 1.0]],
    [[0.5, R3, 0.0], [-R3, 0.5, 0.0], [0.0, 0.0, 1.0]],
];

// ======================== TRIGONAL (-3m) ========================
pub(crate) static TRIGONAL_QUATS: [[f32; 4]; 6] = [
    [1.0, 0.0, 0.0, 0.0],
    [0.5, 0.0, 0.0, R3],
    [-0.5, 0.0, 0.0, R3],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, -0.5, R3, 0.0],
    [0.0, -0.5, -R3, 0.0],
];

pub(crate) static TRIGONAL_RODS: [[f32; 3]; 6] = [
    [0.0, 0.0, 0.0],
    [0.0, 0.0, SQRT3],
    [0.0, 0.0, -SQRT3],
    [BIG, 0.0, 0.0],
    [-0.5 * BIG, R3 * BIG, 0.0],
    [-0.5 * BIG, -R3 * BIG, 0.0],
];

pub(crate) static TRIGONAL_MATS: [[[f32; 3]; 3]; 6] = [
    [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    [[-0.5, -R3, 0.0], [R3, -0.5, 0.0], [0.0, 0.0, 1.0]],
    [[-0.5, R3, 0.0], [-R3, -0.5, 0.0], [0.0, 0.0, 1.0]],
    [[1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, -1.0]],
    [[-0.5, -R3, 0.0], [-R3, 0.5, 0.0], [0.0, 0.0, -1.0]],
    [[-0.5, R3, 0.0], [R3, 0.5, 0.0], [0.0, 0.0, -1.0]],
];

// ======================== TRIGONAL LOW (-3) ========================
pub(crate) static TRIGONAL_LOW_QUATS: [[f32; 4]; 3] = [
    [1.0, 0.0, 0.0, 0.0],
    [0.5, 0.0, 0.0, R3],
    [-0.5, 0.0, 0.0, R3],
];

pub(crate) static TRIGONAL_LOW_RODS: [[f32; 3]; 3] = [
    [0.0, 0.0, 0.0],
    [0.0, 0.0, SQRT3],
    [0.0, 0.0, -SQRT3],
];

pub(crate) static TRIGONAL_LOW_MATS: [[[f32; 3]; 3]; 3] = [
    [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    [[-0.5, -R3, 0.0], [R3, -0.5, 0.0], [0.0, 0.0, 1.0]],
    [[-0.5, R3, 0.0], [-R3, -0.5, 0.0], [0.0, 0.0, 1.0]],
];

// ======================== TETRAGONAL (4/mmm) ========================
pub(crate) static TETRAGONAL_QUATS: [[f32; 4]; 8] = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
    [R2, 0.0, 0.0, -R2],
    [R2, 0.0, 0.0, R2],
    [0.0, R2, R2, 0.0],
    [0.0, -R2, R2, 0.0],
];

pub(crate) static TETRAGONAL_RODS: [[f32; 3]; 8] = [
    [0.0, 0.0, 0.0],
    [BIG, 0.0, 0.0],
    [0.0, BIG, 0.0],
    [0.0, 0.0, BIG],
    [0.0, 0.0, -1.0],
    [0.0, 0.0, 1.0],
    [R2 * BIG, R2 * BIG, 0.0],
    [-R2 * BIG, R2 * BIG, 0.0],
];

pub(crate) static TETRAGONAL_MATS: [[[f32; 3]; 3]; 8] = [
    [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    [[1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, -1.0]],
    [[-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, -1.0]],
    [[-1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, 1.0]],
    [[0.0, 1.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
    [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
    [[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]],
    [[0.0, -1.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 0.0, -1.0]],
];

// ======================== TETRAGONAL LOW (4/m) ========================
pub(crate) static TETRAGONAL_LOW_QUATS: [[f32; 4]; 4] = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
    [R2, 0.0, 0.0, R2],
    [R2, 0.0, 0.0, -R2],
];

pub(crate) static TETRAGONAL_LOW_RODS: [[f32; 3]; 4] = [
    [0.0, 0.0, 0.0],
    [0.0, 0.0, BIG],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, -1.0],
];

pub(crate) static TETRAGONAL_LOW_MATS: [[[f32; 3]; 3]; 4] = [
    [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    [[-1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, 1.0]],
    [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
    [[0.0, 1.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
];

// ======================== ORTHORHOMBIC (mmm) ========================
pub(crate) static ORTHORHOMBIC_QUATS: [[f32; 4]; 4] = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

pub(crate) static ORTHORHOMBIC_RODS: [[f32; 3]; 4] = [
    [0.0, 0.0, 0.0],
    [BIG, 0.0, 0.0],
    [0.0, BIG, 0.0],
    [0.0, 0.0, BIG],
];

pub(crate) static ORTHORHOMBIC_MATS: [[[f32; 3]; 3]; 4] = [
    [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    [[1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, -1.0]],
    [[-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, -1.0]],
    [[-1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, 1.0]],
];

// ======================== MONOCLINIC (2/m) ========================
pub(crate) static MONOCLINIC_QUATS: [[f32; 4]; 2] = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
];

pub(crate) static MONOCLINIC_RODS: [[f32; 3]; 2] = [
    [0.0, 0.0, 0.0],
    [0.0, BIG, 0.0],
];

pub(crate) static MONOCLINIC_MATS: [[[f32; 3]; 3]; 2] = [
    [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    [[-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, -1.0]],
];

// ======================== TRICLINIC (-1) ========================
pub(crate) static TRICLINIC_QUATS: [[f32; 4]; 1] = [
    [1.0, 0.0, 0.0, 0.0],
];

pub(crate) static TRICLINIC_RODS: [[f32; 3]; 1] = [
    [0.0, 0.0, 0.0],
];

pub(crate) static TRICLINIC_MATS: [[[f32; 3]; 3]; 1] = [
    [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
];

