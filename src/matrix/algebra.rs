//! Linear algebra: matrix multiplication, scalar broadcast, integer matrix
//! power, recursive cofactor-expansion determinant, adjugate inverse, and
//! the pure (non-destructive) transpose.
//!
//! Determinant, cofactor, inverse, and matrix power require a
//! [`SignedElement`] since cofactor signs alternate; unsigned element types
//! cannot call them.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::MatrixError;
use crate::mode::BinaryOp;
use crate::traits::{Element, SignedElement};

use super::Matrix;

impl<T: Element> Matrix<T> {
    /// Matrix product `self * other`.
    ///
    /// Both operands must share one square shape (this engine assumes
    /// square matrices for the inversion/determinant chain). Accumulation
    /// runs through the configured policy's add/mul.
    ///
    /// ```
    /// use matricis::{ComputeMode, Matrix};
    ///
    /// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]], ComputeMode::default()).unwrap();
    /// let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]], ComputeMode::default()).unwrap();
    /// let c = a.matmul(&b).unwrap();
    /// assert_eq!(c.as_flat().unwrap(), vec![19, 22, 43, 50]);
    /// ```
    pub fn matmul(&self, other: &Self) -> Result<Self, MatrixError> {
        self.mode.ensure_supported()?;
        if self.rows() != other.rows() || self.columns() != other.columns() {
            return Err(MatrixError::UnmatchedScheme {
                expected: (self.rows(), self.columns()),
                got: (other.rows(), other.columns()),
            });
        }
        if !self.is_square() {
            return Err(MatrixError::NonSquare {
                rows: self.rows(),
                columns: self.columns(),
            });
        }
        let p = self.mode.policy;
        let n = self.rows();
        Ok(Self::from_fn(
            n,
            n,
            |i, j| {
                let mut acc = T::zero();
                for k in 0..n {
                    acc = p.add(acc, p.mul(self.rows[i][k], other.rows[k][j]));
                }
                acc
            },
            self.mode,
        ))
    }

    /// Broadcast `op` with a scalar over every element.
    ///
    /// Supports Add/Sub/Mul/Div through the configured policy.
    /// [`BinaryOp::Pow`] is the matrix power, not a broadcast — use
    /// [`pow`](Matrix::pow).
    pub fn scalar(&self, op: BinaryOp, k: T) -> Result<Self, MatrixError> {
        self.mode.ensure_supported()?;
        if self.is_empty() {
            return Err(MatrixError::Uninitialized);
        }
        if op == BinaryOp::Pow {
            return Err(MatrixError::Unsupported("scalar matrix power; use pow"));
        }
        let p = self.mode.policy;
        let mut result = Vec::with_capacity(self.rows());
        for row in &self.rows {
            let mapped: Result<Vec<T>, MatrixError> =
                row.iter().map(|&a| p.apply(op, a, k)).collect();
            result.push(mapped?);
        }
        Ok(Self {
            rows: result,
            columns: self.columns,
            mode: self.mode,
        })
    }

    /// Pure transpose: a fresh matrix with `(i, j)` and `(j, i)` swapped,
    /// without touching `self` (unlike the destructive
    /// [`transpose`](Matrix::transpose)).
    pub fn transposed(&self) -> Self {
        Self::from_fn(
            self.columns(),
            self.rows(),
            |i, j| self.rows[j][i],
            self.mode,
        )
    }
}

impl<T: SignedElement> Matrix<T> {
    /// Determinant by recursive cofactor expansion along the first row.
    ///
    /// Base cases: a 1x1 matrix is its single element, a 2x2 matrix is
    /// `a00*a11 - a01*a10`. Arithmetic runs through the configured policy.
    ///
    /// The expansion is exponential in the matrix size (O(n!)); it is an
    /// accepted property of this engine, so bound the input accordingly —
    /// there is no iterative or LU-based alternative here.
    ///
    /// ```
    /// use matricis::{ComputeMode, Matrix};
    ///
    /// let m = Matrix::from_rows(vec![vec![2, 2], vec![4, 5]], ComputeMode::default()).unwrap();
    /// assert_eq!(m.determinant().unwrap(), 2);
    /// ```
    pub fn determinant(&self) -> Result<T, MatrixError> {
        if self.is_empty() {
            return Err(MatrixError::Uninitialized);
        }
        if !self.is_square() {
            return Err(MatrixError::NonSquare {
                rows: self.rows(),
                columns: self.columns(),
            });
        }
        Ok(self.det_expand())
    }

    /// Signed determinant of the minor formed by deleting `row` and `col`:
    /// `(-1)^(row+col) * det(minor)`.
    ///
    /// Index checks apply; the minor must itself admit a determinant (the
    /// matrix must be square and at least 2x2).
    pub fn cofactor(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        self.check_row(row)?;
        self.check_column(col)?;
        let det = self.minor(row, col).determinant()?;
        Ok(if (row + col) % 2 == 1 { -det } else { det })
    }

    /// Inverse via the adjugate: fails with
    /// [`MatrixError::ZeroDeterminant`] when singular. The 2x2 case uses
    /// the closed-form swap/negate adjugate; larger matrices build the
    /// transposed cofactor matrix. The adjugate is scaled by the
    /// determinant through the policy's division, so integer element types
    /// only invert exactly when every adjugate entry is divisible.
    ///
    /// Shares the determinant's exponential cost.
    ///
    /// ```
    /// use matricis::{ComputeMode, Matrix};
    ///
    /// let m = Matrix::from_rows(vec![vec![4.0_f64, 7.0], vec![2.0, 6.0]], ComputeMode::default()).unwrap();
    /// let inv = m.inverse().unwrap();
    /// assert!((inv.get(0, 0).unwrap() - 0.6).abs() < 1e-12);
    /// ```
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        let det = self.determinant()?;
        if det.is_zero() {
            return Err(MatrixError::ZeroDeterminant);
        }
        let n = self.rows();
        let adjugate = match n {
            1 => Self::from_fn(1, 1, |_, _| T::one(), self.mode),
            2 => {
                let (a, b) = (self.rows[0][0], self.rows[0][1]);
                let (c, d) = (self.rows[1][0], self.rows[1][1]);
                Self::from_rows(vec![vec![d, -b], vec![-c, a]], self.mode)?
            }
            // Adjugate entry (i, j) is the cofactor of (j, i)
            _ => Self::from_fn(
                n,
                n,
                |i, j| {
                    let d = self.minor(j, i).det_expand();
                    if (i + j) % 2 == 1 {
                        -d
                    } else {
                        d
                    }
                },
                self.mode,
            ),
        };
        adjugate.scalar(BinaryOp::Div, det)
    }

    /// Integer matrix power.
    ///
    /// `k == 1` copies, `k == 0` yields the identity (square only),
    /// `k > 1` multiplies repeatedly, `k < 0` inverts first and multiplies
    /// the inverse `|k| - 1` more times. A non-integer exponent is
    /// unsupported.
    pub fn pow(&self, k: T) -> Result<Self, MatrixError> {
        self.mode.ensure_supported()?;
        let Some(e) = k.as_exponent() else {
            return Err(MatrixError::Unsupported("non-integer power exponent"));
        };
        if e == 1 {
            return Ok(self.clone());
        }
        if e == 0 {
            if !self.is_square() {
                return Err(MatrixError::NonSquare {
                    rows: self.rows(),
                    columns: self.columns(),
                });
            }
            return Ok(Self::identity(self.rows(), self.mode));
        }
        let base = if e < 0 { self.inverse()? } else { self.clone() };
        let mut acc = base.clone();
        for _ in 1..e.unsigned_abs() {
            acc = acc.matmul(&base)?;
        }
        Ok(acc)
    }

    /// First-row cofactor expansion. Assumes square and non-empty.
    fn det_expand(&self) -> T {
        let p = self.mode.policy;
        let n = self.rows();
        match n {
            1 => self.rows[0][0],
            2 => p.sub(
                p.mul(self.rows[0][0], self.rows[1][1]),
                p.mul(self.rows[0][1], self.rows[1][0]),
            ),
            _ => {
                let mut acc = T::zero();
                for j in 0..n {
                    let d = self.minor(0, j).det_expand();
                    let signed = if j % 2 == 1 { -d } else { d };
                    acc = p.add(acc, p.mul(self.rows[0][j], signed));
                }
                acc
            }
        }
    }

    /// The matrix with `row` and `col` deleted, in fresh storage.
    fn minor(&self, row: usize, col: usize) -> Self {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != row)
            .map(|(_, r)| {
                r.iter()
                    .enumerate()
                    .filter(|&(j, _)| j != col)
                    .map(|(_, &v)| v)
                    .collect()
            })
            .collect();
        Self {
            rows,
            columns: self.columns - 1,
            mode: self.mode,
        }
    }
}
