//! # matricis
//!
//! Dense, mutable, row-major matrix container with row/column-level
//! structural editing, a pluggable numeric-overflow policy, and a small
//! cofactor-expansion linear-algebra engine. Pure Rust, no-std compatible
//! (heap allocation required).
//!
//! ## Quick start
//!
//! ```
//! use matricis::{BinaryOp, ComputeMode, Matrix};
//!
//! let a = Matrix::from_rows(vec![vec![2.0_f64, 2.0], vec![4.0, 5.0]], ComputeMode::default()).unwrap();
//! assert_eq!(a.determinant().unwrap(), 2.0);
//!
//! let b = a.inverse().unwrap();
//! let id = a.matmul(&b).unwrap();
//! assert!((id.get(0, 0).unwrap() - 1.0).abs() < 1e-12);
//!
//! let doubled = a.return_calc(BinaryOp::Add, &a).unwrap();
//! assert_eq!(doubled.get(1, 1).unwrap(), 10.0);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — the [`Matrix<T>`] container: rectangular-or-empty
//!   invariant, bulk set, element access, flattening; the [`Axis`] editor
//!   (get/set/insert/remove/reverse on rows and columns); reshaping and
//!   transposes; the elementwise compute engine; linear algebra
//!   (determinant, cofactor, inverse, matrix power); statistics
//!   ([`StatKind`]) with coordinate lookup.
//!
//! - [`mode`] — [`ComputeMode`] / [`OverflowPolicy`]: the `Safe` / `Fast` /
//!   `Fixed` overflow and division strategies applied per element, plus
//!   the declared-but-unimplemented multi-threaded axis, which is always
//!   rejected rather than silently degraded.
//!
//! - [`traits`] — [`Element`], sealed over the fixed-width integers and
//!   IEEE floats, and [`SignedElement`] gating the operations that need
//!   negation (determinant, cofactor, inverse, matrix power).
//!
//! - [`error`] — [`MatrixError`], the recoverable error taxonomy. Safe-mode
//!   arithmetic faults are fatal panics by design, not errors.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Hardware FPU via system libm |
//! | (none)  |         | no-std build; float math through the `libm` crate |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod matrix;
pub mod mode;
pub mod traits;

pub use error::MatrixError;
pub use matrix::{Axis, Matrix, StatKind};
pub use mode::{BinaryOp, ComputeMode, OverflowPolicy, Threading};
pub use traits::{Element, SignedElement};
