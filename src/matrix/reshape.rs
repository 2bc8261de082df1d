//! Whole-matrix structural transforms: reshaping and destructive transpose.

use alloc::vec::Vec;

use crate::error::MatrixError;
use crate::traits::Element;

use super::{Axis, Matrix};

impl<T: Element> Matrix<T> {
    /// Reinterpret the shape as `new_rows x new_columns`, preserving
    /// row-major element order.
    ///
    /// This is the single legal reinterpretation of shape: the content is
    /// flattened in row-major order, the old storage discarded, and the
    /// flat sequence re-sliced contiguously into `new_rows` rows.
    ///
    /// Fails with [`MatrixError::Uninitialized`] on an empty matrix and
    /// [`MatrixError::UnmatchedScheme`] unless
    /// `new_rows * new_columns == size()`.
    ///
    /// ```
    /// use matricis::{ComputeMode, Matrix};
    ///
    /// let mut m = Matrix::from_rows(vec![vec![1, 2, 3, 4, 5, 6]], ComputeMode::default()).unwrap();
    /// m.rescheme(2, 3).unwrap();
    /// assert_eq!(m.rows(), 2);
    /// assert_eq!(m.get(1, 0).unwrap(), 4);
    /// ```
    pub fn rescheme(&mut self, new_rows: usize, new_columns: usize) -> Result<(), MatrixError> {
        if self.is_empty() {
            return Err(MatrixError::Uninitialized);
        }
        if new_rows * new_columns != self.size() {
            return Err(MatrixError::UnmatchedScheme {
                expected: (self.rows(), self.columns()),
                got: (new_rows, new_columns),
            });
        }
        let flat = self.as_flat()?;
        self.clear();
        self.rows = flat.chunks_exact(new_columns).map(|c| c.to_vec()).collect();
        self.columns = new_columns;
        Ok(())
    }

    /// Transpose in place: element `(i, j)` becomes `(j, i)`.
    ///
    /// The content is deep-copied first, the matrix cleared, and each
    /// original row re-inserted as a column in order — the copy strictly
    /// precedes the clearing, so source and destination never alias. An
    /// empty matrix is left unchanged.
    ///
    /// ```
    /// use matricis::{ComputeMode, Matrix};
    ///
    /// let mut m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]], ComputeMode::default()).unwrap();
    /// m.transpose();
    /// assert_eq!(m.rows(), 3);
    /// assert_eq!(m.columns(), 2);
    /// assert_eq!(m.get(2, 0).unwrap(), 3);
    /// ```
    pub fn transpose(&mut self) {
        if self.is_empty() {
            return;
        }
        let copied: Vec<Vec<T>> = self.rows.clone();
        self.clear();
        for (i, row) in copied.iter().enumerate() {
            // The first insert bootstraps the column shape; lengths are
            // rectangular by invariant, so these cannot fail.
            self.insert_axis(Axis::Columns, row, i)
                .expect("transpose insert preserves rectangularity");
        }
    }
}
