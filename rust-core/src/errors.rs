//! Error types for orientation and symmetry calculations.
//!
//! Numerically degenerate input is never an error here: converters and the
//! disorientation search fall back to the identity rotation instead. The
//! variants below cover contract violations a caller can recover from: a phase
//! tag that names no crystal structure, buffers whose lengths disagree, indices
//! outside the data they address, and capabilities a Laue class does not have.
//!
//! Out-of-range symmetry operator indices are not represented. They are
//! programming errors and panic at the access site.

use thiserror::Error;

/// Unified error type for the orientation library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrientationError {
    /// A phase tag or name that does not map to a supported Laue class.
    #[error("Unknown crystal structure '{tag}'")]
    UnknownCrystalStructure { tag: String },

    /// Histogram bin index outside `0..total`.
    #[error("Bin index {index} out of range for {structure} (total bins {total})")]
    BinOutOfRange {
        structure: String,
        index: usize,
        total: usize,
    },

    /// Two caller buffers that must describe the same entities differ in length.
    #[error("Length mismatch in {context}: expected {expected}, found {found}")]
    LengthMismatch {
        context: String,
        expected: usize,
        found: usize,
    },

    /// An index stored in caller data (neighbor, phase, feature) points past its target.
    #[error("Index {index} out of range in {context} (length {len})")]
    IndexOutOfRange {
        context: String,
        index: usize,
        len: usize,
    },

    /// The Laue class does not provide the requested capability.
    #[error("{capability} is not supported for {structure}")]
    Unsupported {
        capability: String,
        structure: String,
    },

    /// A parameter value outside its valid domain.
    #[error("Invalid parameter {name}: {message}")]
    InvalidParameter { name: String, message: String },
}

impl OrientationError {
    /// Creates an [`UnknownCrystalStructure`](Self::UnknownCrystalStructure) error.
    pub fn unknown_structure(tag: impl ToString) -> Self {
        Self::UnknownCrystalStructure {
            tag: tag.to_string(),
        }
    }

    /// Creates a [`LengthMismatch`](Self::LengthMismatch) error.
    pub fn length_mismatch(context: &str, expected: usize, found: usize) -> Self {
        Self::LengthMismatch {
            context: context.to_string(),
            expected,
            found,
        }
    }

    /// Creates an [`IndexOutOfRange`](Self::IndexOutOfRange) error.
    pub fn index_out_of_range(context: &str, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            context: context.to_string(),
            index,
            len,
        }
    }

    /// Creates an [`Unsupported`](Self::Unsupported) error.
    pub fn unsupported(capability: &str, structure: impl ToString) -> Self {
        Self::Unsupported {
            capability: capability.to_string(),
            structure: structure.to_string(),
        }
    }

    /// Creates an [`InvalidParameter`](Self::InvalidParameter) error.
    pub fn invalid_parameter(name: &str, message: &str) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            message: message.to_string(),
        }
    }
}
