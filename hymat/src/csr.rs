//! Compressed Sparse Row matrix
//!
//! CSR is the canonical orientation produced by the incidence builder:
//! row-major access maps to "which hyperedges contain this node", the common
//! downstream query.

use hymat_core::{
    validate_indices, validate_offsets, HymatError, MatrixElement, MatrixFormat, MatrixOperations,
    Result, SparseMatrix,
};

use crate::csc::CscMatrix;

/// Sparse matrix in Compressed Sparse Row layout
///
/// Stores `(values, col_indices, row_offsets)` where `row_offsets[r]` and
/// `row_offsets[r + 1]` delimit the entries of row `r`. Matrices produced by
/// the incidence builder are canonical: column indices are sorted and unique
/// within each row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CsrMatrix<T> {
    nrows: usize,
    ncols: usize,
    values: Vec<T>,
    col_indices: Vec<usize>,
    row_offsets: Vec<usize>,
}

impl<T: MatrixElement> CsrMatrix<T> {
    /// Build a CSR matrix from its raw parts, validating the layout
    ///
    /// Checks that the offset array is well formed and spans `nrows`, that
    /// the value and index arrays agree with it in length, and that every
    /// column index is in bounds.
    pub fn from_parts(
        nrows: usize,
        ncols: usize,
        values: Vec<T>,
        col_indices: Vec<usize>,
        row_offsets: Vec<usize>,
    ) -> Result<Self> {
        let nnz = validate_offsets(&row_offsets)?;
        if row_offsets.len() != nrows + 1 {
            return Err(HymatError::InvalidOffsets);
        }
        if values.len() != nnz || col_indices.len() != nnz {
            return Err(HymatError::LengthMismatch);
        }
        validate_indices(&col_indices, ncols)?;

        Ok(Self {
            nrows,
            ncols,
            values,
            col_indices,
            row_offsets,
        })
    }

    /// Internal constructor for conversions that uphold the layout invariants
    pub(crate) fn from_parts_unchecked(
        nrows: usize,
        ncols: usize,
        values: Vec<T>,
        col_indices: Vec<usize>,
        row_offsets: Vec<usize>,
    ) -> Self {
        debug_assert_eq!(row_offsets.len(), nrows + 1);
        debug_assert_eq!(values.len(), col_indices.len());
        Self {
            nrows,
            ncols,
            values,
            col_indices,
            row_offsets,
        }
    }

    /// Storage orientation of this matrix
    pub const fn format() -> MatrixFormat {
        MatrixFormat::Csr
    }

    /// Stored values, row-major
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Column indices aligned with `values`
    pub fn col_indices(&self) -> &[usize] {
        &self.col_indices
    }

    /// Row offset array of length `nrows + 1`
    pub fn row_offsets(&self) -> &[usize] {
        &self.row_offsets
    }

    /// Column indices and values of one row
    ///
    /// Returns empty slices for an out-of-bounds row.
    pub fn row(&self, row: usize) -> (&[usize], &[T]) {
        if row >= self.nrows {
            return (&[], &[]);
        }
        let start = self.row_offsets[row];
        let end = self.row_offsets[row + 1];
        (&self.col_indices[start..end], &self.values[start..end])
    }

    /// Scale every stored entry in column `j` by `weights[j]`
    ///
    /// Fails with `LengthMismatch` unless one weight is supplied per column.
    pub fn scale_cols(&mut self, weights: &[f64]) -> Result<()> {
        if weights.len() != self.ncols {
            return Err(HymatError::LengthMismatch);
        }
        for (value, &col) in self.values.iter_mut().zip(self.col_indices.iter()) {
            *value = T::from_f64(value.to_f64() * weights[col]);
        }
        Ok(())
    }

    /// y = A * x over f64
    ///
    /// Fails with `LengthMismatch` unless `x` has one entry per column.
    pub fn mul_vector(&self, x: &[f64]) -> Result<Vec<f64>> {
        if x.len() != self.ncols {
            return Err(HymatError::LengthMismatch);
        }
        let mut result = vec![0.0f64; self.nrows];
        for row in 0..self.nrows {
            let start = self.row_offsets[row];
            let end = self.row_offsets[row + 1];
            let mut acc = 0.0f64;
            for k in start..end {
                acc += self.values[k].to_f64() * x[self.col_indices[k]];
            }
            result[row] = acc;
        }
        Ok(result)
    }

    /// Convert to Compressed Sparse Column layout
    ///
    /// Counting-sort transpose; entries within each column come out in row
    /// order. Duplicate coordinates, if any, are carried over as-is.
    pub fn to_csc(&self) -> CscMatrix<T> {
        let nnz = self.values.len();
        let mut col_offsets = vec![0usize; self.ncols + 1];
        for &col in &self.col_indices {
            col_offsets[col + 1] += 1;
        }
        for j in 0..self.ncols {
            col_offsets[j + 1] += col_offsets[j];
        }

        let mut row_indices = vec![0usize; nnz];
        let mut values = vec![T::from_f64(0.0); nnz];
        let mut cursor = col_offsets.clone();
        for row in 0..self.nrows {
            for k in self.row_offsets[row]..self.row_offsets[row + 1] {
                let col = self.col_indices[k];
                let slot = cursor[col];
                row_indices[slot] = row;
                values[slot] = self.values[k];
                cursor[col] += 1;
            }
        }

        CscMatrix::from_parts_unchecked(self.nrows, self.ncols, values, row_indices, col_offsets)
    }
}

impl<T: MatrixElement> SparseMatrix for CsrMatrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.nrows || col >= self.ncols {
            return None;
        }
        let (cols, values) = self.row(row);
        let mut acc: Option<f64> = None;
        for (k, &c) in cols.iter().enumerate() {
            if c == col {
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

impl<T: MatrixElement> MatrixOperations for CsrMatrix<T> {
    fn get_row(&self, row_index: usize) -> Vec<T> {
        self.row(row_index).1.to_vec()
    }

    fn get_col(&self, col_index: usize) -> Vec<T> {
        let mut out = Vec::new();
        for (value, &col) in self.values.iter().zip(self.col_indices.iter()) {
            if col == col_index {
                out.push(*value);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2x3 matrix:
    // [1 0 2]
    // [0 3 0]
    fn sample() -> CsrMatrix<f64> {
        CsrMatrix::from_parts(2, 3, vec![1.0, 2.0, 3.0], vec![0, 2, 1], vec![0, 2, 3]).unwrap()
    }

    #[test]
    fn test_from_parts_validation() {
        // Offsets must span nrows
        assert_eq!(
            CsrMatrix::<f64>::from_parts(3, 3, vec![], vec![], vec![0, 0]),
            Err(HymatError::InvalidOffsets)
        );
        // Arrays must agree with the final offset
        assert_eq!(
            CsrMatrix::from_parts(1, 2, vec![1.0], vec![0, 1], vec![0, 2]),
            Err(HymatError::LengthMismatch)
        );
        // Column indices must be in bounds
        assert_eq!(
            CsrMatrix::from_parts(1, 2, vec![1.0], vec![2], vec![0, 1]),
            Err(HymatError::IndexOutOfBounds)
        );
    }

    #[test]
    fn test_get_element() {
        let m = sample();
        assert_eq!(m.get_element(0, 0), Some(1.0));
        assert_eq!(m.get_element(0, 2), Some(2.0));
        assert_eq!(m.get_element(1, 1), Some(3.0));
        assert_eq!(m.get_element(0, 1), None);
        assert_eq!(m.get_element(5, 0), None);
        assert_eq!(m.dimensions(), (2, 3));
        assert_eq!(m.nnz(), 3);
    }

    #[test]
    fn test_row_and_col_access() {
        let m = sample();
        assert_eq!(m.row(0), (&[0usize, 2][..], &[1.0, 2.0][..]));
        assert_eq!(m.row(9), (&[][..], &[][..]));
        assert_eq!(m.get_row(1), vec![3.0]);
        assert_eq!(m.get_col(1), vec![3.0]);
        assert_eq!(m.get_col(0), vec![1.0]);
    }

    #[test]
    fn test_scale_cols() {
        let mut m = sample();
        m.scale_cols(&[2.0, 10.0, 0.5]).unwrap();
        assert_eq!(m.get_element(0, 0), Some(2.0));
        assert_eq!(m.get_element(0, 2), Some(1.0));
        assert_eq!(m.get_element(1, 1), Some(30.0));

        let mut m = sample();
        assert_eq!(m.scale_cols(&[1.0]), Err(HymatError::LengthMismatch));
    }

    #[test]
    fn test_mul_vector() {
        let m = sample();
        assert_eq!(m.mul_vector(&[1.0, 1.0, 1.0]).unwrap(), vec![3.0, 3.0]);
        assert_eq!(m.mul_vector(&[1.0, 0.0, 2.0]).unwrap(), vec![5.0, 0.0]);
        assert_eq!(m.mul_vector(&[1.0]), Err(HymatError::LengthMismatch));
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde_round_trip() {
        let m = sample();
        let json = serde_json::to_string(&m).unwrap();
        let back: CsrMatrix<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_to_csc_round_trip() {
        let m = sample();
        let csc = m.to_csc();
        assert_eq!(csc.dimensions(), (2, 3));
        assert_eq!(csc.nnz(), 3);
        for row in 0..2 {
            for col in 0..3 {
                assert_eq!(csc.get_element(row, col), m.get_element(row, col));
            }
        }
        assert_eq!(csc.to_csr(), m);
    }
}
