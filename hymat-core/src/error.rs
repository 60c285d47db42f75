//! Error types for incidence matrix operations

/// Errors that can occur while building or validating sparse matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HymatError {
    /// No hyperedges were supplied
    EmptyInput,
    /// Explicit shape is too small for the data
    ShapeMismatch,
    /// Weight vector length does not match the edge count
    LengthMismatch,
    /// Index exceeds the matrix bounds
    IndexOutOfBounds,
    /// Offset array is malformed (empty, nonzero start, or decreasing)
    InvalidOffsets,
    /// A node occurs more than once in one hyperedge
    DuplicateEntry,
}

impl core::fmt::Display for HymatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            HymatError::EmptyInput => "Empty hyperedge list",
            HymatError::ShapeMismatch => "Explicit shape too small for data",
            HymatError::LengthMismatch => "Weight vector length mismatch",
            HymatError::IndexOutOfBounds => "Index out of bounds",
            HymatError::InvalidOffsets => "Malformed offset array",
            HymatError::DuplicateEntry => "Duplicate node within one hyperedge",
        };
        write!(f, "{msg}")
    }
}

/// Result type for incidence matrix operations
pub type Result<T> = core::result::Result<T, HymatError>;
