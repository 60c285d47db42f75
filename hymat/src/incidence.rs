//! Incidence matrix construction from hyperedge lists
//!
//! Builds the compressed triple directly: per-edge lengths become prefix-sum
//! offsets, node identifiers are flattened into one preallocated index
//! buffer, and the triple is handed to the CSC constructor. Conversion to CSR
//! yields the canonical orientation.

use hymat_core::{infer_shape, validate_shape, HymatError, MatrixElement, Result, SparseMatrix};

use crate::csc::CscMatrix;
use crate::csr::CsrMatrix;
use crate::hypergraph::Hypergraph;

/// Policy for a node occurring more than once within one hyperedge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Duplicate occurrences accumulate into one entry
    #[default]
    Sum,
    /// Duplicate occurrences fail the build with `DuplicateEntry`
    Reject,
}

/// Configuration for incidence matrix construction
#[derive(Debug, Clone, Copy, Default)]
pub struct IncidenceConfig {
    /// How to treat repeated nodes within one hyperedge
    pub duplicate_policy: DuplicatePolicy,
}

impl IncidenceConfig {
    /// Set the duplicate-node policy
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }
}

/// Builder for binary and weighted incidence matrices
///
/// Stateless apart from its configuration; both build methods are pure
/// functions of their inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncidenceBuilder {
    config: IncidenceConfig,
}

impl IncidenceBuilder {
    /// Create a builder with the given configuration
    pub fn new(config: IncidenceConfig) -> Self {
        Self { config }
    }

    /// Build the binary incidence matrix of a hyperedge list
    ///
    /// Rows are nodes, columns are hyperedges in list order, and
    /// `matrix[node, edge] = 1` iff `node` occurs in hyperedge `edge`.
    /// `shape` may pad the matrix with zero rows or columns; `None` infers
    /// `(max node id + 1, edge count)`. Fails with `EmptyInput` when the
    /// list is empty and `ShapeMismatch` when an explicit shape cannot hold
    /// the data.
    pub fn build_binary<T, E>(
        &self,
        hyperedges: &[E],
        shape: Option<(usize, usize)>,
    ) -> Result<CsrMatrix<T>>
    where
        T: MatrixElement,
        E: AsRef<[usize]>,
    {
        if hyperedges.is_empty() {
            return Err(HymatError::EmptyInput);
        }

        let (indices, mut offsets, max_node) = flatten_edges(hyperedges);
        let required = infer_shape(max_node, hyperedges.len());
        let (nrows, ncols) = match shape {
            Some(explicit) => {
                validate_shape(explicit, required)?;
                explicit
            }
            None => required,
        };

        // Explicit extra columns are empty; the offset array must still span
        // every column.
        if offsets.len() < ncols + 1 {
            let last = offsets[offsets.len() - 1];
            offsets.resize(ncols + 1, last);
        }

        if self.config.duplicate_policy == DuplicatePolicy::Reject {
            reject_duplicates(hyperedges, nrows)?;
        }

        let ones = vec![T::from_f64(1.0); indices.len()];
        let csc = CscMatrix::from_parts(nrows, ncols, ones, indices, offsets)?;
        Ok(csc.to_csr())
    }

    /// Build the weighted incidence matrix of a hyperedge list
    ///
    /// Equals the binary incidence with each column `edge` scaled by
    /// `weights[edge]`. Fails with `LengthMismatch` unless one weight is
    /// supplied per hyperedge.
    pub fn build_weighted<T, E>(
        &self,
        hyperedges: &[E],
        weights: &[f64],
        shape: Option<(usize, usize)>,
    ) -> Result<CsrMatrix<T>>
    where
        T: MatrixElement,
        E: AsRef<[usize]>,
    {
        if weights.len() != hyperedges.len() {
            return Err(HymatError::LengthMismatch);
        }
        let mut matrix = self.build_binary::<T, E>(hyperedges, shape)?;
        let (_, ncols) = matrix.dimensions();
        if ncols == weights.len() {
            matrix.scale_cols(weights)?;
        } else {
            // An explicit shape added empty columns; their weights scale
            // nothing, so pad with zeros.
            let mut padded = weights.to_vec();
            padded.resize(ncols, 0.0);
            matrix.scale_cols(&padded)?;
        }
        Ok(matrix)
    }
}

/// Flatten a hyperedge list into `(FlatIndices, CompressedOffsets, max node)`
///
/// Allocates the index buffer once at its final size instead of growing it
/// per edge.
fn flatten_edges<E: AsRef<[usize]>>(hyperedges: &[E]) -> (Vec<usize>, Vec<usize>, Option<usize>) {
    let total: usize = hyperedges.iter().map(|e| e.as_ref().len()).sum();
    let mut indices = Vec::with_capacity(total);
    let mut offsets = Vec::with_capacity(hyperedges.len() + 1);
    offsets.push(0);

    let mut max_node = None;
    for edge in hyperedges {
        let edge = edge.as_ref();
        for &node in edge {
            max_node = Some(max_node.map_or(node, |m: usize| m.max(node)));
        }
        indices.extend_from_slice(edge);
        offsets.push(indices.len());
    }

    (indices, offsets, max_node)
}

/// Fail with `DuplicateEntry` if any edge names a node twice
///
/// Uses an edge-index stamp per node, so the scan stays linear in the total
/// node-occurrence count.
fn reject_duplicates<E: AsRef<[usize]>>(hyperedges: &[E], nrows: usize) -> Result<()> {
    let mut last_seen = vec![usize::MAX; nrows];
    for (edge_index, edge) in hyperedges.iter().enumerate() {
        for &node in edge.as_ref() {
            if last_seen[node] == edge_index {
                return Err(HymatError::DuplicateEntry);
            }
            last_seen[node] = edge_index;
        }
    }
    Ok(())
}

/// Build a binary incidence matrix with the default configuration
pub fn binary_incidence<T, E>(
    hyperedges: &[E],
    shape: Option<(usize, usize)>,
) -> Result<CsrMatrix<T>>
where
    T: MatrixElement,
    E: AsRef<[usize]>,
{
    IncidenceBuilder::default().build_binary(hyperedges, shape)
}

/// Build a weighted incidence matrix with the default configuration
pub fn weighted_incidence<T, E>(
    hyperedges: &[E],
    weights: &[f64],
    shape: Option<(usize, usize)>,
) -> Result<CsrMatrix<T>>
where
    T: MatrixElement,
    E: AsRef<[usize]>,
{
    IncidenceBuilder::default().build_weighted(hyperedges, weights, shape)
}

/// Binary incidence matrix of a [`Hypergraph`]
pub fn binary_incidence_of<T: MatrixElement>(
    hypergraph: &Hypergraph,
    shape: Option<(usize, usize)>,
) -> Result<CsrMatrix<T>> {
    binary_incidence(hypergraph.edges(), shape)
}

/// Weighted incidence matrix of a [`Hypergraph`], using its edge weights
pub fn weighted_incidence_of(
    hypergraph: &Hypergraph,
    shape: Option<(usize, usize)>,
) -> Result<CsrMatrix<f64>> {
    weighted_incidence(hypergraph.edges(), hypergraph.weights(), shape)
}
