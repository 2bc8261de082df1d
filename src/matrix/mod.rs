mod algebra;
mod axis;
mod compute;
mod reshape;
mod stats;
mod util;

pub use axis::Axis;
pub use stats::StatKind;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::error::MatrixError;
use crate::mode::ComputeMode;
use crate::traits::Element;

/// Dense, mutable, row-major rectangular matrix.
///
/// Each row owns its own heap buffer; the matrix is always rectangular or
/// empty (`columns() == 0` exactly when `rows() == 0`) and no operation
/// leaves it jagged. Mutation is destructive and in place; structural edits
/// allocate fresh buffers for the affected rows, so two live matrices never
/// alias storage.
///
/// Arithmetic goes through the [`ComputeMode`] fixed at construction; see
/// [`OverflowPolicy`](crate::OverflowPolicy) for the Safe/Fast/Fixed split.
///
/// # Examples
///
/// ```
/// use matricis::{ComputeMode, Matrix};
///
/// let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]], ComputeMode::default()).unwrap();
/// assert_eq!(m.rows(), 2);
/// assert_eq!(m.columns(), 2);
/// assert_eq!(m.get(0, 1).unwrap(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Matrix<T> {
    rows: Vec<Vec<T>>,
    columns: usize,
    mode: ComputeMode,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Element> Matrix<T> {
    /// Create an empty matrix with the given compute mode.
    pub fn new(mode: ComputeMode) -> Self {
        Self {
            rows: Vec::new(),
            columns: 0,
            mode,
        }
    }

    /// Create an empty matrix, pre-reserving storage for `capacity` rows.
    ///
    /// Only affects allocation count, never observable behavior.
    pub fn with_capacity(capacity: usize, mode: ComputeMode) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
            columns: 0,
            mode,
        }
    }

    /// Create a matrix from owned rows.
    ///
    /// Fails with [`MatrixError::WrongScheme`] if the rows have unequal
    /// lengths. An empty input produces an empty matrix.
    ///
    /// ```
    /// use matricis::{ComputeMode, Matrix, MatrixError};
    ///
    /// let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]], ComputeMode::default());
    /// assert!(m.is_ok());
    ///
    /// let ragged = Matrix::from_rows(vec![vec![1.0], vec![3.0, 4.0]], ComputeMode::default());
    /// assert_eq!(ragged.unwrap_err(), MatrixError::WrongScheme);
    /// ```
    pub fn from_rows(rows: Vec<Vec<T>>, mode: ComputeMode) -> Result<Self, MatrixError> {
        let columns = check_rectangular(&rows)?;
        Ok(Self {
            rows,
            columns,
            mode,
        })
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// use matricis::{ComputeMode, Matrix};
    ///
    /// let id: Matrix<i32> = Matrix::identity(3, ComputeMode::default());
    /// assert_eq!(id.get(0, 0).unwrap(), 1);
    /// assert_eq!(id.get(0, 1).unwrap(), 0);
    /// ```
    pub fn identity(n: usize, mode: ComputeMode) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() }, mode)
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    pub fn from_fn(
        rows: usize,
        columns: usize,
        mut f: impl FnMut(usize, usize) -> T,
        mode: ComputeMode,
    ) -> Self {
        let columns = if rows == 0 { 0 } else { columns };
        let rows = if columns == 0 { 0 } else { rows };
        let data = (0..rows)
            .map(|i| (0..columns).map(|j| f(i, j)).collect())
            .collect();
        Self {
            rows: data,
            columns,
            mode,
        }
    }

    /// Create a matrix by drawing every element from a caller-supplied
    /// generator (e.g. a random-number source).
    ///
    /// ```
    /// use matricis::{ComputeMode, Matrix};
    ///
    /// let mut seed = 7_u32;
    /// let m = Matrix::fill_with(2, 3, || {
    ///     seed = seed.wrapping_mul(1664525).wrapping_add(1013904223);
    ///     (seed >> 16) as i32 % 10
    /// }, ComputeMode::default());
    /// assert_eq!(m.size(), 6);
    /// ```
    pub fn fill_with(
        rows: usize,
        columns: usize,
        mut generator: impl FnMut() -> T,
        mode: ComputeMode,
    ) -> Self {
        Self::from_fn(rows, columns, |_, _| generator(), mode)
    }
}

// ── Queries ─────────────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns. Zero when the matrix is empty.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total element count, `rows() * columns()`.
    #[inline]
    pub fn size(&self) -> usize {
        self.rows.len() * self.columns
    }

    /// Whether the matrix has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows.len() == self.columns
    }

    /// The compute mode fixed at construction.
    #[inline]
    pub fn mode(&self) -> ComputeMode {
        self.mode
    }
}

// ── Bulk and element mutation ───────────────────────────────────────

impl<T: Element> Matrix<T> {
    /// Replace all content.
    ///
    /// The input must be rectangular, else [`MatrixError::WrongScheme`].
    /// When the new shape exactly matches the current one the values are
    /// overwritten in place without reallocating row buffers; otherwise the
    /// old storage is discarded and the new rows are copied.
    pub fn set(&mut self, rows: &[Vec<T>]) -> Result<(), MatrixError> {
        let columns = check_rectangular(rows)?;
        if self.rows.len() == rows.len() && self.columns == columns {
            for (dst, src) in self.rows.iter_mut().zip(rows) {
                dst.copy_from_slice(src);
            }
        } else {
            self.rows = rows.to_vec();
            self.columns = columns;
        }
        Ok(())
    }

    /// Replace all content with a single row of `count` copies of `value`.
    ///
    /// The caller typically calls [`rescheme`](Matrix::rescheme) afterward.
    /// A zero count empties the matrix.
    pub fn set_fill(&mut self, value: T, count: usize) {
        if count == 0 {
            self.clear();
        } else {
            self.rows = vec![vec![value; count]];
            self.columns = count;
        }
    }

    /// Read one element.
    ///
    /// ```
    /// use matricis::{ComputeMode, Matrix, MatrixError};
    ///
    /// let m = Matrix::from_rows(vec![vec![1, 2]], ComputeMode::default()).unwrap();
    /// assert_eq!(m.get(0, 1).unwrap(), 2);
    /// assert_eq!(m.get(3, 0).unwrap_err(), MatrixError::RowOutOfRange { index: 3, rows: 1 });
    /// ```
    pub fn get(&self, row: usize, column: usize) -> Result<T, MatrixError> {
        if row >= self.rows.len() {
            return Err(MatrixError::RowOutOfRange {
                index: row,
                rows: self.rows.len(),
            });
        }
        if column >= self.columns {
            return Err(MatrixError::ColumnOutOfRange {
                index: column,
                columns: self.columns,
            });
        }
        Ok(self.rows[row][column])
    }

    /// Overwrite one element.
    ///
    /// Fails with [`MatrixError::Uninitialized`] on an empty matrix and
    /// [`MatrixError::UnmatchedScheme`] when the indices do not fit the
    /// current scheme.
    pub fn set_value(&mut self, value: T, row: usize, column: usize) -> Result<(), MatrixError> {
        if self.is_empty() {
            return Err(MatrixError::Uninitialized);
        }
        if row >= self.rows.len() || column >= self.columns {
            return Err(MatrixError::UnmatchedScheme {
                expected: (self.rows.len(), self.columns),
                got: (row, column),
            });
        }
        self.rows[row][column] = value;
        Ok(())
    }

    /// All elements flattened in row-major order.
    ///
    /// Fails with [`MatrixError::Uninitialized`] on an empty matrix.
    pub fn as_flat(&self) -> Result<Vec<T>, MatrixError> {
        if self.is_empty() {
            return Err(MatrixError::Uninitialized);
        }
        let mut flat = Vec::with_capacity(self.size());
        for row in &self.rows {
            flat.extend_from_slice(row);
        }
        Ok(flat)
    }
}

impl<T> Matrix<T> {
    /// Release all row storage and empty the container.
    ///
    /// The container itself stays usable; final teardown is `Drop`.
    pub fn clear(&mut self) {
        self.rows = Vec::new();
        self.columns = 0;
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.rows[row][col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.rows[row][col]
    }
}

// ── PartialEq: shape and content only, mode excluded ────────────────

impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns && self.rows == other.rows
    }
}

/// All rows must share one non-zero length; empty input is the empty scheme.
fn check_rectangular<T>(rows: &[Vec<T>]) -> Result<usize, MatrixError> {
    let Some(first) = rows.first() else {
        return Ok(0);
    };
    let columns = first.len();
    if columns == 0 || rows.iter().any(|r| r.len() != columns) {
        return Err(MatrixError::WrongScheme);
    }
    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::{ComputeMode, OverflowPolicy};

    fn mode() -> ComputeMode {
        ComputeMode::new(OverflowPolicy::Safe)
    }

    #[test]
    fn empty() {
        let m: Matrix<i32> = Matrix::new(mode());
        assert_eq!(m.rows(), 0);
        assert_eq!(m.columns(), 0);
        assert_eq!(m.size(), 0);
        assert!(m.is_empty());
    }

    #[test]
    fn from_rows() {
        let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]], mode()).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.columns(), 3);
        assert_eq!(m.size(), 6);
        assert_eq!(m[(1, 2)], 6);
    }

    #[test]
    fn from_rows_ragged() {
        let r = Matrix::from_rows(vec![vec![1, 2], vec![3]], mode());
        assert_eq!(r.unwrap_err(), MatrixError::WrongScheme);
    }

    #[test]
    fn set_same_shape_overwrites_in_place() {
        let mut m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]], mode()).unwrap();
        m.set(&[vec![5, 6], vec![7, 8]]).unwrap();
        assert_eq!(m[(0, 0)], 5);
        assert_eq!(m[(1, 1)], 8);
    }

    #[test]
    fn set_new_shape_replaces() {
        let mut m = Matrix::from_rows(vec![vec![1, 2]], mode()).unwrap();
        m.set(&[vec![1], vec![2], vec![3]]).unwrap();
        assert_eq!(m.rows(), 3);
        assert_eq!(m.columns(), 1);
    }

    #[test]
    fn set_ragged_rejected() {
        let mut m: Matrix<i32> = Matrix::new(mode());
        let r = m.set(&[vec![1, 2], vec![3]]);
        assert_eq!(r.unwrap_err(), MatrixError::WrongScheme);
        assert!(m.is_empty());
    }

    #[test]
    fn set_fill() {
        let mut m: Matrix<i32> = Matrix::new(mode());
        m.set_fill(9, 4);
        assert_eq!(m.rows(), 1);
        assert_eq!(m.columns(), 4);
        assert_eq!(m.as_flat().unwrap(), vec![9, 9, 9, 9]);
    }

    #[test]
    fn get_out_of_range() {
        let m = Matrix::from_rows(vec![vec![1, 2]], mode()).unwrap();
        assert_eq!(
            m.get(1, 0).unwrap_err(),
            MatrixError::RowOutOfRange { index: 1, rows: 1 }
        );
        assert_eq!(
            m.get(0, 2).unwrap_err(),
            MatrixError::ColumnOutOfRange { index: 2, columns: 2 }
        );
    }

    #[test]
    fn set_value() {
        let mut m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]], mode()).unwrap();
        m.set_value(9, 1, 0).unwrap();
        assert_eq!(m[(1, 0)], 9);

        let r = m.set_value(9, 2, 0);
        assert_eq!(
            r.unwrap_err(),
            MatrixError::UnmatchedScheme {
                expected: (2, 2),
                got: (2, 0)
            }
        );
    }

    #[test]
    fn set_value_on_empty() {
        let mut m: Matrix<i32> = Matrix::new(mode());
        assert_eq!(m.set_value(1, 0, 0).unwrap_err(), MatrixError::Uninitialized);
    }

    #[test]
    fn as_flat_row_major() {
        let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]], mode()).unwrap();
        assert_eq!(m.as_flat().unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn clear_releases_content() {
        let mut m = Matrix::from_rows(vec![vec![1, 2]], mode()).unwrap();
        m.clear();
        assert!(m.is_empty());
        assert_eq!(m.columns(), 0);
        assert_eq!(m.as_flat().unwrap_err(), MatrixError::Uninitialized);
    }

    #[test]
    fn identity() {
        let id: Matrix<f64> = Matrix::identity(3, mode());
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(id[(i, j)], expected);
            }
        }
    }

    #[test]
    fn fill_with_stateful_generator() {
        let mut next = 0;
        let m = Matrix::fill_with(
            2,
            3,
            || {
                next += 1;
                next
            },
            mode(),
        );
        assert_eq!(m.as_flat().unwrap(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn eq_ignores_mode() {
        let a = Matrix::from_rows(vec![vec![1, 2]], ComputeMode::new(OverflowPolicy::Safe)).unwrap();
        let b = Matrix::from_rows(vec![vec![1, 2]], ComputeMode::new(OverflowPolicy::Fast)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn capacity_does_not_change_behavior() {
        let a: Matrix<i32> = Matrix::with_capacity(64, mode());
        let b: Matrix<i32> = Matrix::new(mode());
        assert_eq!(a, b);
    }
}
