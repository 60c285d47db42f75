//! Shape inference and validation for incidence matrices

use crate::HymatError;

/// Infer an incidence matrix shape from its data bounds
///
/// `max_index` is the largest node identifier seen, or `None` when no node
/// occurrences exist. The inferred shape is exactly the required shape:
/// `max_index + 1` rows and one column per edge.
pub const fn infer_shape(max_index: Option<usize>, edge_count: usize) -> (usize, usize) {
    let rows = match max_index {
        Some(max) => max + 1,
        None => 0,
    };
    (rows, edge_count)
}

/// Validate an explicit shape against the required data bounds
///
/// An explicit shape may be larger than required (padding rows or columns of
/// zeros), never smaller.
pub const fn validate_shape(
    explicit: (usize, usize),
    required: (usize, usize),
) -> Result<(), HymatError> {
    if explicit.0 < required.0 || explicit.1 < required.1 {
        return Err(HymatError::ShapeMismatch);
    }
    Ok(())
}
