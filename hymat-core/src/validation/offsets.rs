//! Offset and index array validation for compressed storage
//!
//! A compressed matrix stores one offset array and one index array; these
//! checks establish the invariants every constructor relies on.

use crate::HymatError;

/// Validate a compressed offset array
///
/// A valid offset array has at least one entry, starts at zero, and is
/// monotonically non-decreasing. Offsets `[i]` and `[i + 1]` delimit the
/// entries of compressed axis slot `i`. Returns the total entry count
/// (the final offset).
pub const fn validate_offsets(offsets: &[usize]) -> Result<usize, HymatError> {
    if offsets.is_empty() || offsets[0] != 0 {
        return Err(HymatError::InvalidOffsets);
    }

    // const fn, so no iterator adapters here
    let mut i = 1;
    while i < offsets.len() {
        if offsets[i] < offsets[i - 1] {
            return Err(HymatError::InvalidOffsets);
        }
        i += 1;
    }

    Ok(offsets[offsets.len() - 1])
}

/// Validate that every index is below a bound
///
/// The bound is the extent of the uncompressed axis: row count for CSC row
/// indices, column count for CSR column indices.
pub const fn validate_indices(indices: &[usize], bound: usize) -> Result<(), HymatError> {
    let mut i = 0;
    while i < indices.len() {
        if indices[i] >= bound {
            return Err(HymatError::IndexOutOfBounds);
        }
        i += 1;
    }
    Ok(())
}
