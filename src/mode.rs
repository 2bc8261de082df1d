//! Arithmetic modes: the overflow/division policies applied to every
//! elementwise and scalar operation.
//!
//! The three policies are interchangeable strategies over a pair of
//! elements. They differ only in what happens when exact arithmetic is
//! impossible:
//!
//! | Policy  | Overflow / invalid float | Division by zero |
//! |---------|--------------------------|------------------|
//! | `Safe`  | panics (fatal)           | panics (fatal)   |
//! | `Fast`  | wraps, unvalidated       | returns the left operand |
//! | `Fixed` | returns the left operand | returns the left operand (Fast's rule) |
//!
//! The split is semantic, not cosmetic: `Fast` and `Fixed` outcomes are
//! *correct* results under their policy, never errors.

use crate::error::MatrixError;
use crate::traits::Element;

/// Elementwise binary operation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Division (rounding per policy).
    Div,
    /// Power. Not an elementwise operation; see [`OverflowPolicy::pow`]
    /// and [`Matrix::pow`](crate::Matrix::pow).
    Pow,
}

/// Overflow/division policy for scalar arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Exact arithmetic; overflow, invalid float results, and division by
    /// zero are fatal (the operation cannot return a meaningful value).
    Safe,
    /// Wrapping integer arithmetic, unvalidated float arithmetic,
    /// truncating division. Never faults.
    Fast,
    /// Exact arithmetic when representable; otherwise the left operand is
    /// returned unchanged. Division follows `Fast`'s rule.
    Fixed,
}

#[cold]
fn safe_abort(what: &str) -> ! {
    panic!("safe-mode arithmetic fault: {}", what);
}

impl OverflowPolicy {
    /// Policy addition of `a + b`.
    #[inline]
    pub fn add<T: Element>(&self, a: T, b: T) -> T {
        match self {
            OverflowPolicy::Safe => a
                .checked_add(b)
                .unwrap_or_else(|| safe_abort("overflow in addition")),
            OverflowPolicy::Fast => a.wrapping_add(b),
            OverflowPolicy::Fixed => a.checked_add(b).unwrap_or(a),
        }
    }

    /// Policy subtraction of `a - b`.
    #[inline]
    pub fn sub<T: Element>(&self, a: T, b: T) -> T {
        match self {
            OverflowPolicy::Safe => a
                .checked_sub(b)
                .unwrap_or_else(|| safe_abort("overflow in subtraction")),
            OverflowPolicy::Fast => a.wrapping_sub(b),
            OverflowPolicy::Fixed => a.checked_sub(b).unwrap_or(a),
        }
    }

    /// Policy multiplication of `a * b`.
    #[inline]
    pub fn mul<T: Element>(&self, a: T, b: T) -> T {
        match self {
            OverflowPolicy::Safe => a
                .checked_mul(b)
                .unwrap_or_else(|| safe_abort("overflow in multiplication")),
            OverflowPolicy::Fast => a.wrapping_mul(b),
            OverflowPolicy::Fixed => a.checked_mul(b).unwrap_or(a),
        }
    }

    /// Policy division of `a / b`.
    ///
    /// `Safe` rounds integer quotients to nearest (`(a + b/2) / b`) and
    /// faults on a zero divisor. `Fast` truncates and returns `a` unchanged
    /// when `b == 0`. `Fixed` deliberately delegates to `Fast`'s rule —
    /// unlike its add/sub/mul, its division does not protect the result.
    #[inline]
    pub fn div<T: Element>(&self, a: T, b: T) -> T {
        match self {
            OverflowPolicy::Safe => {
                if b.is_zero() {
                    safe_abort("division by zero");
                }
                a.checked_div_rounded(b)
                    .unwrap_or_else(|| safe_abort("overflow in division"))
            }
            OverflowPolicy::Fast | OverflowPolicy::Fixed => {
                if b.is_zero() {
                    a
                } else {
                    a.div_trunc(b)
                }
            }
        }
    }

    /// Scalar power `a^b`, outside the elementwise path.
    ///
    /// Short-circuits before the generic routine: `b == 0` or `a == 1`
    /// yields one; `a == 0` yields zero; `b == 1` yields `a`; `b == 2`
    /// yields `mul(a, a)`; for floats `b == 0.5` yields the square root.
    /// The fallback is `powf` for floats (validated under `Safe`/`Fixed`)
    /// and repeated policy multiplication for integers; a negative integer
    /// exponent truncates to zero.
    pub fn pow<T: Element>(&self, a: T, b: T) -> T {
        let one = T::one();
        if b.is_zero() || a == one {
            return one;
        }
        if a.is_zero() {
            return T::zero();
        }
        if b == one {
            return a;
        }
        if b == one + one {
            return self.mul(a, a);
        }
        if T::IS_FLOAT {
            if let Some(half) = num_traits::cast::<f64, T>(0.5) {
                if b == half {
                    return self.sqrt(a);
                }
            }
            return self.guard(a, a.powf_raw(b));
        }
        match b.as_exponent() {
            Some(e) if e > 0 => {
                let mut acc = a;
                for _ in 1..e {
                    acc = self.mul(acc, a);
                }
                acc
            }
            // Negative integer exponent: |a| > 1, reciprocal truncates to zero
            _ => T::zero(),
        }
    }

    /// Dispatch an elementwise operation. `Pow` is rejected — it exists
    /// only as a scalar operation.
    #[inline]
    pub fn apply<T: Element>(&self, op: BinaryOp, a: T, b: T) -> Result<T, MatrixError> {
        match op {
            BinaryOp::Add => Ok(self.add(a, b)),
            BinaryOp::Sub => Ok(self.sub(a, b)),
            BinaryOp::Mul => Ok(self.mul(a, b)),
            BinaryOp::Div => Ok(self.div(a, b)),
            BinaryOp::Pow => Err(MatrixError::Unsupported("elementwise power")),
        }
    }

    fn sqrt<T: Element>(&self, a: T) -> T {
        match self {
            OverflowPolicy::Safe => a
                .sqrt_checked()
                .unwrap_or_else(|| safe_abort("invalid square root")),
            OverflowPolicy::Fast => a.sqrt_raw(),
            OverflowPolicy::Fixed => a.sqrt_checked().unwrap_or(a),
        }
    }

    /// Validate a float result against NaN/infinity, per policy.
    fn guard<T: Element>(&self, left: T, result: T) -> T {
        match self {
            OverflowPolicy::Safe => {
                if result.is_finite_value() {
                    result
                } else {
                    safe_abort("non-finite result in power")
                }
            }
            OverflowPolicy::Fast => result,
            OverflowPolicy::Fixed => {
                if result.is_finite_value() {
                    result
                } else {
                    left
                }
            }
        }
    }
}

/// Execution axis of the mode space.
///
/// `Multi` is declared but has no implementation: every engine entry point
/// rejects it through [`ComputeMode::ensure_supported`] instead of silently
/// running single-threaded under a multi-threaded label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threading {
    /// Run on the caller's thread.
    Single,
    /// Declared, unimplemented.
    Multi,
}

/// Compute configuration attached to a matrix: overflow policy plus the
/// threading axis.
///
/// ```
/// use matricis::{ComputeMode, OverflowPolicy};
///
/// let mode = ComputeMode::new(OverflowPolicy::Fast);
/// assert!(mode.ensure_supported().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputeMode {
    /// Overflow/division policy.
    pub policy: OverflowPolicy,
    /// Execution axis.
    pub threading: Threading,
}

impl ComputeMode {
    /// Single-threaded mode with the given policy.
    pub const fn new(policy: OverflowPolicy) -> Self {
        Self {
            policy,
            threading: Threading::Single,
        }
    }

    /// Mode with an explicit threading axis.
    pub const fn with_threading(policy: OverflowPolicy, threading: Threading) -> Self {
        Self { policy, threading }
    }

    /// Reject the unimplemented multi-threaded axis.
    pub fn ensure_supported(&self) -> Result<(), MatrixError> {
        match self.threading {
            Threading::Single => Ok(()),
            Threading::Multi => Err(MatrixError::Unsupported("multi-threaded compute")),
        }
    }
}

impl Default for ComputeMode {
    /// Safe, single-threaded.
    fn default() -> Self {
        Self::new(OverflowPolicy::Safe)
    }
}
