//! Error taxonomy for matrix operations.
//!
//! Every recoverable failure in the crate maps to one [`MatrixError`]
//! variant. Arithmetic faults under the `Safe` overflow policy are not
//! represented here: they abort the process by design (see
//! [`OverflowPolicy`](crate::mode::OverflowPolicy)).

/// Errors from matrix construction, editing, computation, and statistics.
///
/// Shape-carrying variants report dimensions as `(rows, columns)`.
///
/// ```
/// use matricis::{ComputeMode, Matrix, MatrixError};
///
/// let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]], ComputeMode::default()).unwrap();
/// assert_eq!(
///     m.get(5, 0).unwrap_err(),
///     MatrixError::RowOutOfRange { index: 5, rows: 2 }
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatrixError {
    /// The supplied rows do not form a rectangle, or the values cannot
    /// seed a matrix (e.g. an empty insert into an empty matrix).
    WrongScheme,
    /// Row index past the last row.
    RowOutOfRange { index: usize, rows: usize },
    /// Column index past the last column.
    ColumnOutOfRange { index: usize, columns: usize },
    /// The operation needs a non-empty matrix.
    Uninitialized,
    /// The operand shape does not fit the target shape.
    UnmatchedScheme {
        expected: (usize, usize),
        got: (usize, usize),
    },
    /// The requested statistic has no answer for this input
    /// (averages have no coordinates; an interpolated median may not
    /// coincide with any stored element).
    StatNotAvailable,
    /// The operation is defined for square matrices only.
    NonSquare { rows: usize, columns: usize },
    /// The matrix is singular, so no inverse exists.
    ZeroDeterminant,
    /// A declared but unimplemented capability was requested.
    Unsupported(&'static str),
    /// Reserved: the element type cannot carry this operation. The
    /// sealed [`Element`](crate::traits::Element) trait rules this out
    /// at compile time for all current entry points.
    InvalidElementType,
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::WrongScheme => write!(f, "rows do not form a rectangular scheme"),
            MatrixError::RowOutOfRange { index, rows } => {
                write!(f, "row index {} out of range for {} rows", index, rows)
            }
            MatrixError::ColumnOutOfRange { index, columns } => {
                write!(f, "column index {} out of range for {} columns", index, columns)
            }
            MatrixError::Uninitialized => write!(f, "matrix has no elements"),
            MatrixError::UnmatchedScheme { expected, got } => write!(
                f,
                "scheme mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, got.0, got.1
            ),
            MatrixError::StatNotAvailable => {
                write!(f, "statistic not available for this input")
            }
            MatrixError::NonSquare { rows, columns } => {
                write!(f, "operation requires a square matrix, got {}x{}", rows, columns)
            }
            MatrixError::ZeroDeterminant => write!(f, "matrix is singular"),
            MatrixError::Unsupported(what) => write!(f, "unsupported: {}", what),
            MatrixError::InvalidElementType => {
                write!(f, "element type cannot carry this operation")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn display_messages() {
        assert_eq!(
            format!("{}", MatrixError::RowOutOfRange { index: 4, rows: 2 }),
            "row index 4 out of range for 2 rows"
        );
        assert_eq!(
            format!(
                "{}",
                MatrixError::UnmatchedScheme {
                    expected: (2, 3),
                    got: (3, 2)
                }
            ),
            "scheme mismatch: expected 2x3, got 3x2"
        );
        assert_eq!(
            format!("{}", MatrixError::Unsupported("multi-threaded compute")),
            "unsupported: multi-threaded compute"
        );
        assert_eq!(format!("{}", MatrixError::ZeroDeterminant), "matrix is singular");
    }

    #[test]
    fn copy_and_compare() {
        let e = MatrixError::NonSquare { rows: 2, columns: 3 };
        let copied = e;
        assert_eq!(e, copied);
        assert_ne!(e, MatrixError::ZeroDeterminant);
    }
}
