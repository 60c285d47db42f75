//! Hymat - Sparse Incidence Matrices for Hypergraphs
//!
//! This library converts hyperedge lists into compressed sparse matrix
//! representations, binary and weight-scaled, for downstream numeric work.
//!
//! ## Architecture
//!
//! Hymat follows a clean definitions/implementation separation:
//!
//! - **hymat-core**: Traits, error types, and pure validation (no allocation
//!   by default, no I/O)
//! - **hymat**: Concrete CSR/CSC matrix types, the incidence builder, and the
//!   hypergraph edge-list collaborator
//!
//! ## Quick Start
//!
//! ```rust
//! use hymat::{binary_incidence, weighted_incidence, SparseMatrix};
//!
//! fn example() -> hymat::Result<()> {
//!     let hyperedges = vec![vec![0, 1], vec![1, 2, 3]];
//!
//!     // One row per node, one column per hyperedge
//!     let binary = binary_incidence::<f64, _>(&hyperedges, None)?;
//!     assert_eq!(binary.dimensions(), (4, 2));
//!     assert_eq!(binary.get_element(1, 1), Some(1.0));
//!
//!     // Same sparsity pattern, each column scaled by its edge weight
//!     let weighted = weighted_incidence::<f64, _>(&hyperedges, &[2.0, 5.0], None)?;
//!     assert_eq!(weighted.get_element(3, 1), Some(5.0));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **Canonical CSR output**: construction happens in CSC (the edge-list
//!   triple is naturally column-compressed), conversion yields sorted,
//!   coalesced CSR
//! - **Explicit duplicate policy**: repeated nodes within one edge either sum
//!   or reject, never silently library-dependent
//! - **Shape control**: inferred from the data or supplied explicitly, with
//!   zero-padding allowed and undersized shapes rejected
//! - **Type safety**: generic over element types via hymat-core abstractions

// Re-export core abstractions
pub use hymat_core::{
    // Core traits
    MatrixElement, MatrixOperations, SparseMatrix,
    // Format descriptors
    DataType, MatrixFormat,
    // Error handling
    HymatError, Result,
    // Validation utilities
    infer_shape, validate_indices, validate_offsets, validate_shape,
};

// Implementation modules
pub mod csc;
pub mod csr;
pub mod hypergraph;
pub mod incidence;

// Public exports
pub use csc::CscMatrix;
pub use csr::CsrMatrix;
pub use hypergraph::Hypergraph;
pub use incidence::{
    binary_incidence, binary_incidence_of, weighted_incidence, weighted_incidence_of,
    DuplicatePolicy, IncidenceBuilder, IncidenceConfig,
};
