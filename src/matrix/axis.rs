//! Row/column-level structural editing, uniform over an [`Axis`] selector.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::MatrixError;
use crate::traits::Element;

use super::Matrix;

/// Selector distinguishing row-wise from column-wise operations.
///
/// One selector parameterizes every get/set/insert/remove/reverse operation
/// instead of duplicating each per orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Operate on rows.
    Rows,
    /// Operate on columns.
    Columns,
}

impl<T: Element> Matrix<T> {
    /// A fresh copy of row `index`, or a freshly gathered column `index`.
    ///
    /// ```
    /// use matricis::{Axis, ComputeMode, Matrix};
    ///
    /// let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]], ComputeMode::default()).unwrap();
    /// assert_eq!(m.axis_values(Axis::Rows, 0).unwrap(), vec![1, 2]);
    /// assert_eq!(m.axis_values(Axis::Columns, 1).unwrap(), vec![2, 4]);
    /// ```
    pub fn axis_values(&self, axis: Axis, index: usize) -> Result<Vec<T>, MatrixError> {
        match axis {
            Axis::Rows => {
                self.check_row(index)?;
                Ok(self.rows[index].clone())
            }
            Axis::Columns => {
                self.check_column(index)?;
                Ok(self.rows.iter().map(|r| r[index]).collect())
            }
        }
    }

    /// Overwrite row `index` (the row gets a fresh backing buffer) or
    /// scatter `values` into column `index`.
    ///
    /// `values` must match the opposite dimension, else
    /// [`MatrixError::UnmatchedScheme`].
    pub fn set_axis(&mut self, axis: Axis, values: &[T], index: usize) -> Result<(), MatrixError> {
        match axis {
            Axis::Rows => {
                self.check_row(index)?;
                if values.len() != self.columns {
                    return Err(MatrixError::UnmatchedScheme {
                        expected: (self.rows.len(), self.columns),
                        got: (1, values.len()),
                    });
                }
                self.rows[index] = values.to_vec();
            }
            Axis::Columns => {
                self.check_column(index)?;
                if values.len() != self.rows.len() {
                    return Err(MatrixError::UnmatchedScheme {
                        expected: (self.rows.len(), self.columns),
                        got: (values.len(), 1),
                    });
                }
                for (row, &v) in self.rows.iter_mut().zip(values) {
                    row[index] = v;
                }
            }
        }
        Ok(())
    }

    /// Remove one row (ordered), or remove slot `index` from every row.
    ///
    /// Each surviving row is rebuilt in fresh storage on a column removal.
    /// Removing the last row or last column empties the matrix.
    pub fn remove_axis(&mut self, axis: Axis, index: usize) -> Result<(), MatrixError> {
        match axis {
            Axis::Rows => {
                self.check_row(index)?;
                self.rows.remove(index);
                if self.rows.is_empty() {
                    self.columns = 0;
                }
            }
            Axis::Columns => {
                self.check_column(index)?;
                if self.columns == 1 {
                    self.clear();
                    return Ok(());
                }
                for row in self.rows.iter_mut() {
                    let mut rebuilt = Vec::with_capacity(row.len() - 1);
                    rebuilt.extend_from_slice(&row[..index]);
                    rebuilt.extend_from_slice(&row[index + 1..]);
                    *row = rebuilt;
                }
                self.columns -= 1;
            }
        }
        Ok(())
    }

    /// Insert a new row or column at `index`, clamped to the current bound.
    ///
    /// A row insert requires `values.len() == columns()` unless the matrix
    /// is empty, in which case the first row defines the width. A column
    /// insert requires `values.len() == rows()` — except into an empty
    /// matrix, which bootstraps one single-element row per value, turning a
    /// flat sequence into a column.
    ///
    /// ```
    /// use matricis::{Axis, ComputeMode, Matrix};
    ///
    /// let mut m: Matrix<i32> = Matrix::new(ComputeMode::default());
    /// m.insert_axis(Axis::Columns, &[1, 2, 3], 0).unwrap();
    /// assert_eq!(m.rows(), 3);
    /// assert_eq!(m.columns(), 1);
    /// assert_eq!(m.axis_values(Axis::Columns, 0).unwrap(), vec![1, 2, 3]);
    /// ```
    pub fn insert_axis(&mut self, axis: Axis, values: &[T], index: usize) -> Result<(), MatrixError> {
        if values.is_empty() {
            return Err(MatrixError::WrongScheme);
        }
        match axis {
            Axis::Rows => {
                if self.is_empty() {
                    self.columns = values.len();
                    self.rows.push(values.to_vec());
                    return Ok(());
                }
                if values.len() != self.columns {
                    return Err(MatrixError::UnmatchedScheme {
                        expected: (self.rows.len(), self.columns),
                        got: (1, values.len()),
                    });
                }
                let at = index.min(self.rows.len());
                self.rows.insert(at, values.to_vec());
            }
            Axis::Columns => {
                if self.is_empty() {
                    // Bootstrap: a flat sequence becomes one column
                    self.rows = values.iter().map(|&v| vec![v]).collect();
                    self.columns = 1;
                    return Ok(());
                }
                if values.len() != self.rows.len() {
                    return Err(MatrixError::UnmatchedScheme {
                        expected: (self.rows.len(), self.columns),
                        got: (values.len(), 1),
                    });
                }
                let at = index.min(self.columns);
                for (row, &v) in self.rows.iter_mut().zip(values) {
                    let mut rebuilt = Vec::with_capacity(row.len() + 1);
                    rebuilt.extend_from_slice(&row[..at]);
                    rebuilt.push(v);
                    rebuilt.extend_from_slice(&row[at..]);
                    *row = rebuilt;
                }
                self.columns += 1;
            }
        }
        Ok(())
    }

    /// Reverse one row in place, or one column by gather-reverse-scatter;
    /// with `None`, reverse every index along the axis.
    pub fn reverse_axis(&mut self, axis: Axis, index: Option<usize>) -> Result<(), MatrixError> {
        match (axis, index) {
            (Axis::Rows, Some(i)) => {
                self.check_row(i)?;
                self.rows[i].reverse();
            }
            (Axis::Rows, None) => {
                for row in self.rows.iter_mut() {
                    row.reverse();
                }
            }
            (Axis::Columns, Some(j)) => {
                self.check_column(j)?;
                self.reverse_column(j);
            }
            (Axis::Columns, None) => {
                for j in 0..self.columns {
                    self.reverse_column(j);
                }
            }
        }
        Ok(())
    }

    fn reverse_column(&mut self, j: usize) {
        let mut gathered: Vec<T> = self.rows.iter().map(|r| r[j]).collect();
        gathered.reverse();
        for (row, v) in self.rows.iter_mut().zip(gathered) {
            row[j] = v;
        }
    }

    pub(super) fn check_row(&self, index: usize) -> Result<(), MatrixError> {
        if index >= self.rows.len() {
            return Err(MatrixError::RowOutOfRange {
                index,
                rows: self.rows.len(),
            });
        }
        Ok(())
    }

    pub(super) fn check_column(&self, index: usize) -> Result<(), MatrixError> {
        if index >= self.columns {
            return Err(MatrixError::ColumnOutOfRange {
                index,
                columns: self.columns,
            });
        }
        Ok(())
    }
}
