//! Crystal orientation symmetry library
//!
//! This library provides the symmetry operators of the eleven Laue classes
//! together with disorientation, fundamental-zone reduction and homochoric
//! orientation binning, plus misorientation statistics over voxel fields.

pub mod analysis;
pub mod config;
pub mod errors;
pub mod orientations;
pub mod symmetries;

pub use errors::OrientationError;

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, OrientationError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
