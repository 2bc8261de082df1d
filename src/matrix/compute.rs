//! Elementwise compute engine: applies the configured arithmetic mode
//! between two same-shaped matrices.

use alloc::vec::Vec;

use crate::error::MatrixError;
use crate::mode::BinaryOp;
use crate::traits::Element;

use super::Matrix;

impl<T: Element> Matrix<T> {
    /// Elementwise `self op other` into a freshly allocated matrix.
    ///
    /// Both matrices must have identical shape, else
    /// [`MatrixError::UnmatchedScheme`]. [`BinaryOp::Pow`] is not an
    /// elementwise operation and is rejected as unsupported, as is a
    /// multi-threaded compute mode. The result carries `self`'s mode.
    ///
    /// Per-element faults follow the policy: Safe panics on overflow and
    /// division by zero, Fast wraps/truncates, Fixed keeps the left
    /// operand. See [`OverflowPolicy`](crate::OverflowPolicy).
    ///
    /// ```
    /// use matricis::{BinaryOp, ComputeMode, Matrix};
    ///
    /// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]], ComputeMode::default()).unwrap();
    /// let b = Matrix::from_rows(vec![vec![10, 20], vec![30, 40]], ComputeMode::default()).unwrap();
    /// let c = a.return_calc(BinaryOp::Add, &b).unwrap();
    /// assert_eq!(c.as_flat().unwrap(), vec![11, 22, 33, 44]);
    /// ```
    pub fn return_calc(&self, op: BinaryOp, other: &Self) -> Result<Self, MatrixError> {
        self.mode.ensure_supported()?;
        if op == BinaryOp::Pow {
            return Err(MatrixError::Unsupported("elementwise power"));
        }
        if self.rows() != other.rows() || self.columns() != other.columns() {
            return Err(MatrixError::UnmatchedScheme {
                expected: (self.rows(), self.columns()),
                got: (other.rows(), other.columns()),
            });
        }
        let policy = self.mode.policy;
        let mut result = Vec::with_capacity(self.rows());
        for (lhs, rhs) in self.rows.iter().zip(other.rows.iter()) {
            let row: Result<Vec<T>, MatrixError> = lhs
                .iter()
                .zip(rhs.iter())
                .map(|(&a, &b)| policy.apply(op, a, b))
                .collect();
            result.push(row?);
        }
        Ok(Self {
            rows: result,
            columns: self.columns,
            mode: self.mode,
        })
    }

    /// In-place variant of [`return_calc`](Matrix::return_calc): replaces
    /// this matrix's content with the result.
    pub fn calc(&mut self, op: BinaryOp, other: &Self) -> Result<(), MatrixError> {
        let result = self.return_calc(op, other)?;
        self.rows = result.rows;
        self.columns = result.columns;
        Ok(())
    }
}
