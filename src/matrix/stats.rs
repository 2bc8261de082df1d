//! Extremal, average, and median statistics over the whole matrix or a
//! single axis slice, with coordinate lookup.

use alloc::vec::Vec;

use crate::error::MatrixError;
use crate::traits::Element;

use super::{Axis, Matrix};

/// Statistic selector.
///
/// Results are reported as `f64` since averages and even-length medians of
/// integer matrices are generally fractional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    /// Largest value.
    Max,
    /// Smallest value.
    Min,
    /// Arithmetic mean. Has no position; coordinate queries fail.
    Avg,
    /// Median of the sorted values (even length: mean of the two central
    /// values).
    Med,
}

impl<T: Element> Matrix<T> {
    /// The statistic over the whole matrix, flattened row-major.
    ///
    /// ```
    /// use matricis::{ComputeMode, Matrix, StatKind};
    ///
    /// let m = Matrix::from_rows(vec![vec![1, 3], vec![2, 4]], ComputeMode::default()).unwrap();
    /// assert_eq!(m.stat(StatKind::Med).unwrap(), 2.5);
    /// assert_eq!(m.stat(StatKind::Max).unwrap(), 4.0);
    /// assert_eq!(m.stat(StatKind::Avg).unwrap(), 2.5);
    /// ```
    pub fn stat(&self, kind: StatKind) -> Result<f64, MatrixError> {
        let values = self.as_flat()?;
        Ok(stat_of(kind, &values))
    }

    /// The statistic over one row or one gathered column.
    pub fn axis_stat(&self, kind: StatKind, axis: Axis, index: usize) -> Result<f64, MatrixError> {
        if self.is_empty() {
            return Err(MatrixError::Uninitialized);
        }
        let values = self.axis_values(axis, index)?;
        Ok(stat_of(kind, &values))
    }

    /// `(row, column)` of the whole-matrix statistic's value.
    ///
    /// The flat position converts back through `index / columns` and
    /// `index % columns`. [`StatKind::Avg`] has no coordinate meaning and
    /// fails with [`MatrixError::StatNotAvailable`]; so does an
    /// even-length median whose averaged value no element attains.
    ///
    /// ```
    /// use matricis::{ComputeMode, Matrix, StatKind};
    ///
    /// let m = Matrix::from_rows(vec![vec![1, 3], vec![2, 4]], ComputeMode::default()).unwrap();
    /// assert_eq!(m.stat_coordinates(StatKind::Max).unwrap(), (1, 1));
    /// ```
    pub fn stat_coordinates(&self, kind: StatKind) -> Result<(usize, usize), MatrixError> {
        let values = self.as_flat()?;
        let flat = position_of(kind, &values)?;
        Ok((flat / self.columns(), flat % self.columns()))
    }

    /// `(row, column)` of the statistic's value within one axis slice.
    pub fn axis_stat_coordinates(
        &self,
        kind: StatKind,
        axis: Axis,
        index: usize,
    ) -> Result<(usize, usize), MatrixError> {
        if self.is_empty() {
            return Err(MatrixError::Uninitialized);
        }
        let values = self.axis_values(axis, index)?;
        let pos = position_of(kind, &values)?;
        Ok(match axis {
            Axis::Rows => (index, pos),
            Axis::Columns => (pos, index),
        })
    }
}

fn stat_of<T: Element>(kind: StatKind, values: &[T]) -> f64 {
    match kind {
        StatKind::Max => extremum(values, |a, b| b > a).to_f64_lossy(),
        StatKind::Min => extremum(values, |a, b| b < a).to_f64_lossy(),
        StatKind::Avg => {
            values.iter().map(|v| v.to_f64_lossy()).sum::<f64>() / values.len() as f64
        }
        StatKind::Med => median(values),
    }
}

fn position_of<T: Element>(kind: StatKind, values: &[T]) -> Result<usize, MatrixError> {
    match kind {
        StatKind::Max => Ok(extremum_position(values, |a, b| b > a)),
        StatKind::Min => Ok(extremum_position(values, |a, b| b < a)),
        StatKind::Avg => Err(MatrixError::StatNotAvailable),
        StatKind::Med => {
            let med = median(values);
            // First exact match of the computed median value
            values
                .iter()
                .position(|v| v.to_f64_lossy() == med)
                .ok_or(MatrixError::StatNotAvailable)
        }
    }
}

/// First value beating all others under `better`. `values` is non-empty.
fn extremum<T: Element>(values: &[T], better: impl Fn(T, T) -> bool) -> T {
    let mut best = values[0];
    for &v in &values[1..] {
        if better(best, v) {
            best = v;
        }
    }
    best
}

fn extremum_position<T: Element>(values: &[T], better: impl Fn(T, T) -> bool) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if better(values[best], v) {
            best = i;
        }
    }
    best
}

fn median<T: Element>(values: &[T]) -> f64 {
    let mut sorted: Vec<f64> = values.iter().map(|v| v.to_f64_lossy()).collect();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(core::cmp::Ordering::Equal));
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}
