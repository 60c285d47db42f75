//! Matrix abstraction traits
//!
//! Pure interfaces with no concrete implementations. Concrete matrix types
//! live in the implementation crate.

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
#[cfg(feature = "alloc")]
pub use matrix::MatrixOperations;
pub use matrix::SparseMatrix;
