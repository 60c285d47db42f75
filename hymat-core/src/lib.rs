#![no_std]

//! Hymat Core - Sparse Incidence Matrix Definitions
//!
//! This crate provides the core traits, error types, and validation
//! functions for sparse incidence matrices built from hypergraphs

pub mod error;
pub mod format;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::*;
pub use traits::*;
pub use validation::*;
