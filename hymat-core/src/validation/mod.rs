//! Validation utilities for compressed matrix data
//!
//! This module contains pure validation functions with no I/O dependencies.
//! All functions are mathematical checks on offset arrays, index bounds, and
//! matrix shapes.

pub mod offsets;
pub mod shape;

pub use offsets::{validate_indices, validate_offsets};
pub use shape::{infer_shape, validate_shape};
