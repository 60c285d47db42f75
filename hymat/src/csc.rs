//! Compressed Sparse Column matrix
//!
//! The incidence builder constructs in CSC first: the flattened edge list is
//! naturally column-compressed, one column per hyperedge. A CSC matrix may
//! hold duplicate coordinates until `to_csr` coalesces them.

use hymat_core::{
    validate_indices, validate_offsets, HymatError, MatrixElement, MatrixFormat, MatrixOperations,
    Result, SparseMatrix,
};

use crate::csr::CsrMatrix;

/// Sparse matrix in Compressed Sparse Column layout
///
/// Stores `(values, row_indices, col_offsets)` where `col_offsets[c]` and
/// `col_offsets[c + 1]` delimit the entries of column `c`. Repeated
/// coordinates are permitted; element access treats them as summed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CscMatrix<T> {
    nrows: usize,
    ncols: usize,
    values: Vec<T>,
    row_indices: Vec<usize>,
    col_offsets: Vec<usize>,
}

impl<T: MatrixElement> CscMatrix<T> {
    /// Build a CSC matrix from its raw parts, validating the layout
    ///
    /// Checks that the offset array is well formed and spans `ncols`, that
    /// the value and index arrays agree with it in length, and that every
    /// row index is in bounds.
    pub fn from_parts(
        nrows: usize,
        ncols: usize,
        values: Vec<T>,
        row_indices: Vec<usize>,
        col_offsets: Vec<usize>,
    ) -> Result<Self> {
        let nnz = validate_offsets(&col_offsets)?;
        if col_offsets.len() != ncols + 1 {
            return Err(HymatError::InvalidOffsets);
        }
        if values.len() != nnz || row_indices.len() != nnz {
            return Err(HymatError::LengthMismatch);
        }
        validate_indices(&row_indices, nrows)?;

        Ok(Self {
            nrows,
            ncols,
            values,
            row_indices,
            col_offsets,
        })
    }

    /// Internal constructor for conversions that uphold the layout invariants
    pub(crate) fn from_parts_unchecked(
        nrows: usize,
        ncols: usize,
        values: Vec<T>,
        row_indices: Vec<usize>,
        col_offsets: Vec<usize>,
    ) -> Self {
        debug_assert_eq!(col_offsets.len(), ncols + 1);
        debug_assert_eq!(values.len(), row_indices.len());
        Self {
            nrows,
            ncols,
            values,
            row_indices,
            col_offsets,
        }
    }

    /// Storage orientation of this matrix
    pub const fn format() -> MatrixFormat {
        MatrixFormat::Csc
    }

    /// Stored values, column-major
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Row indices aligned with `values`
    pub fn row_indices(&self) -> &[usize] {
        &self.row_indices
    }

    /// Column offset array of length `ncols + 1`
    pub fn col_offsets(&self) -> &[usize] {
        &self.col_offsets
    }

    /// Row indices and values of one column
    ///
    /// Returns empty slices for an out-of-bounds column.
    pub fn col(&self, col: usize) -> (&[usize], &[T]) {
        if col >= self.ncols {
            return (&[], &[]);
        }
        let start = self.col_offsets[col];
        let end = self.col_offsets[col + 1];
        (&self.row_indices[start..end], &self.values[start..end])
    }

    /// Convert to Compressed Sparse Row layout, coalescing duplicates
    ///
    /// Counting-sort transpose. Entries within each row come out sorted by
    /// column; entries sharing a coordinate are summed, so the result is
    /// canonical.
    pub fn to_csr(&self) -> CsrMatrix<T> {
        let nnz = self.values.len();
        let mut row_offsets = vec![0usize; self.nrows + 1];
        for &row in &self.row_indices {
            row_offsets[row + 1] += 1;
        }
        for r in 0..self.nrows {
            row_offsets[r + 1] += row_offsets[r];
        }

        // Transpose first; columns ascend within each row because the outer
        // loop visits columns in order.
        let mut raw_cols = vec![0usize; nnz];
        let mut raw_values = vec![T::from_f64(0.0); nnz];
        let mut cursor = row_offsets.clone();
        for col in 0..self.ncols {
            for k in self.col_offsets[col]..self.col_offsets[col + 1] {
                let row = self.row_indices[k];
                let slot = cursor[row];
                raw_cols[slot] = col;
                raw_values[slot] = self.values[k];
                cursor[row] += 1;
            }
        }

        // Coalesce adjacent entries sharing a column.
        let mut values: Vec<T> = Vec::with_capacity(nnz);
        let mut col_indices = Vec::with_capacity(nnz);
        let mut offsets = vec![0usize; self.nrows + 1];
        for row in 0..self.nrows {
            for k in row_offsets[row]..row_offsets[row + 1] {
                if let Some(&last_col) = col_indices.last() {
                    if col_indices.len() > offsets[row] && last_col == raw_cols[k] {
                        let last = values.len() - 1;
                        let summed: f64 = raw_values[k].to_f64() + values[last].to_f64();
                        values[last] = T::from_f64(summed);
                        continue;
                    }
                }
                col_indices.push(raw_cols[k]);
                values.push(raw_values[k]);
            }
            offsets[row + 1] = col_indices.len();
        }

        CsrMatrix::from_parts_unchecked(self.nrows, self.ncols, values, col_indices, offsets)
    }
}

impl<T: MatrixElement> SparseMatrix for CscMatrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.nrows || col >= self.ncols {
            return None;
        }
        let (rows, values) = self.col(col);
        let mut acc: Option<f64> = None;
        for (k, &r) in rows.iter().enumerate() {
            if r == row {
                acc = Some(acc.unwrap_or(0.0) + values[k].to_f64());
            }
        }
        acc.map(T::from_f64)
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    fn nnz(&self) -> usize {
        self.values.len()
    }
}

impl<T: MatrixElement> MatrixOperations for CscMatrix<T> {
    fn get_row(&self, row_index: usize) -> Vec<T> {
        let mut out = Vec::new();
        for (value, &row) in self.values.iter().zip(self.row_indices.iter()) {
            if row == row_index {
                out.push(*value);
            }
        }
        out
    }

    fn get_col(&self, col_index: usize) -> Vec<T> {
        self.col(col_index).1.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 3x2 matrix:
    // [1 0]
    // [0 4]
    // [2 0]
    fn sample() -> CscMatrix<f64> {
        CscMatrix::from_parts(3, 2, vec![1.0, 2.0, 4.0], vec![0, 2, 1], vec![0, 2, 3]).unwrap()
    }

    #[test]
    fn test_from_parts_validation() {
        assert_eq!(
            CscMatrix::<f64>::from_parts(2, 2, vec![], vec![], vec![0]),
            Err(HymatError::InvalidOffsets)
        );
        assert_eq!(
            CscMatrix::from_parts(2, 1, vec![1.0, 1.0], vec![0], vec![0, 2]),
            Err(HymatError::LengthMismatch)
        );
        assert_eq!(
            CscMatrix::from_parts(2, 1, vec![1.0], vec![3], vec![0, 1]),
            Err(HymatError::IndexOutOfBounds)
        );
    }

    #[test]
    fn test_get_element() {
        let m = sample();
        assert_eq!(m.get_element(0, 0), Some(1.0));
        assert_eq!(m.get_element(2, 0), Some(2.0));
        assert_eq!(m.get_element(1, 1), Some(4.0));
        assert_eq!(m.get_element(1, 0), None);
        assert_eq!(m.get_element(0, 9), None);
    }

    #[test]
    fn test_duplicates_sum_on_access() {
        // Column 0 holds row 1 twice
        let m = CscMatrix::from_parts(2, 1, vec![1.0, 1.0], vec![1, 1], vec![0, 2]).unwrap();
        assert_eq!(m.get_element(1, 0), Some(2.0));
        assert_eq!(m.nnz(), 2);
    }

    #[test]
    fn test_to_csr_coalesces_duplicates() {
        let m = CscMatrix::from_parts(2, 2, vec![1.0, 1.0, 3.0], vec![1, 1, 0], vec![0, 2, 3])
            .unwrap();
        let csr = m.to_csr();
        assert_eq!(csr.nnz(), 2);
        assert_eq!(csr.get_element(1, 0), Some(2.0));
        assert_eq!(csr.get_element(0, 1), Some(3.0));
    }

    #[test]
    fn test_to_csr_preserves_entries() {
        let m = sample();
        let csr = m.to_csr();
        assert_eq!(csr.dimensions(), (3, 2));
        for row in 0..3 {
            for col in 0..2 {
                assert_eq!(csr.get_element(row, col), m.get_element(row, col));
            }
        }
        // Columns sorted within each row
        assert_eq!(csr.row(0).0, &[0]);
        assert_eq!(csr.row(2).0, &[0]);
    }

    #[test]
    fn test_row_and_col_ops() {
        let m = sample();
        assert_eq!(m.get_col(0), vec![1.0, 2.0]);
        assert_eq!(m.get_row(1), vec![4.0]);
        assert_eq!(m.col(5), (&[][..], &[][..]));
    }
}
