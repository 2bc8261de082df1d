use core::fmt::Debug;
use num_traits::{Float, Num, NumCast, One, Signed, Zero};

mod private {
    /// Closes the element domain: only fixed-width integers and IEEE floats
    /// may implement [`Element`](super::Element).
    pub trait Sealed {}
}

/// Trait for types that can be used as matrix elements.
///
/// Sealed over exactly the fixed-width numeric types: `i8`–`i128`,
/// `u8`–`u128`, `f32`, `f64`. Anything else fails to compile, which is the
/// static form of rejecting an invalid element type at construction.
///
/// The capability methods below are what the overflow policies are built
/// from; they unify integer and float behavior so the policies themselves
/// stay free of per-type branches.
pub trait Element:
    Copy + PartialEq + PartialOrd + Debug + Zero + One + Num + NumCast + private::Sealed + 'static
{
    /// Whether the type is a floating-point type.
    const IS_FLOAT: bool;

    /// Exact addition; `None` on integer overflow or a non-finite float result.
    fn checked_add(self, rhs: Self) -> Option<Self>;
    /// Exact subtraction; `None` on integer overflow or a non-finite float result.
    fn checked_sub(self, rhs: Self) -> Option<Self>;
    /// Exact multiplication; `None` on integer overflow or a non-finite float result.
    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// Wrapping addition for integers, plain addition for floats.
    fn wrapping_add(self, rhs: Self) -> Self;
    /// Wrapping subtraction for integers, plain subtraction for floats.
    fn wrapping_sub(self, rhs: Self) -> Self;
    /// Wrapping multiplication for integers, plain multiplication for floats.
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Division rounded to the nearest integer, `(a + b/2) / b`, for
    /// integers; true division for floats. `None` when the divisor is zero
    /// or the result is not representable.
    fn checked_div_rounded(self, rhs: Self) -> Option<Self>;
    /// Plain truncating division. The divisor must be non-zero.
    fn div_trunc(self, rhs: Self) -> Self;

    /// Whether the value is a usable arithmetic result (always true for
    /// integers; `is_finite` for floats).
    fn is_finite_value(self) -> bool;

    /// Square root with a finite result, floats only.
    fn sqrt_checked(self) -> Option<Self>;
    /// Unvalidated square root, floats only; zero for integers.
    fn sqrt_raw(self) -> Self;
    /// Unvalidated `self^exp`, floats only; zero for integers.
    fn powf_raw(self, exp: Self) -> Self;

    /// The value as an integer exponent, if it is integer-valued.
    fn as_exponent(self) -> Option<i64>;
    /// The value widened (lossily for 128-bit and large 64-bit integers)
    /// to `f64`, used by the statistics module.
    fn to_f64_lossy(self) -> f64;
}

macro_rules! impl_element_int {
    ($($t:ty),*) => {
        $(
            impl private::Sealed for $t {}

            impl Element for $t {
                const IS_FLOAT: bool = false;

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                #[inline]
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_sub(self, rhs)
                }

                #[inline]
                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_mul(self, rhs)
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$t>::wrapping_sub(self, rhs)
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$t>::wrapping_mul(self, rhs)
                }

                #[inline]
                fn checked_div_rounded(self, rhs: Self) -> Option<Self> {
                    if rhs == 0 {
                        return None;
                    }
                    // Round to nearest: (a + b/2) / b
                    <$t>::checked_add(self, rhs / 2)?.checked_div(rhs)
                }

                #[inline]
                fn div_trunc(self, rhs: Self) -> Self {
                    <$t>::wrapping_div(self, rhs)
                }

                #[inline]
                fn is_finite_value(self) -> bool {
                    true
                }

                #[inline]
                fn sqrt_checked(self) -> Option<Self> {
                    None
                }

                #[inline]
                fn sqrt_raw(self) -> Self {
                    0
                }

                #[inline]
                fn powf_raw(self, _exp: Self) -> Self {
                    0
                }

                #[inline]
                fn as_exponent(self) -> Option<i64> {
                    num_traits::cast(self)
                }

                #[inline]
                fn to_f64_lossy(self) -> f64 {
                    num_traits::cast(self).unwrap_or(f64::NAN)
                }
            }
        )*
    };
}

impl_element_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

macro_rules! impl_element_float {
    ($($t:ty),*) => {
        $(
            impl private::Sealed for $t {}

            impl Element for $t {
                const IS_FLOAT: bool = true;

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    let r = self + rhs;
                    if Float::is_finite(r) { Some(r) } else { None }
                }

                #[inline]
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    let r = self - rhs;
                    if Float::is_finite(r) { Some(r) } else { None }
                }

                #[inline]
                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    let r = self * rhs;
                    if Float::is_finite(r) { Some(r) } else { None }
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    self * rhs
                }

                #[inline]
                fn checked_div_rounded(self, rhs: Self) -> Option<Self> {
                    if rhs == 0.0 {
                        return None;
                    }
                    let r = self / rhs;
                    if Float::is_finite(r) { Some(r) } else { None }
                }

                #[inline]
                fn div_trunc(self, rhs: Self) -> Self {
                    self / rhs
                }

                #[inline]
                fn is_finite_value(self) -> bool {
                    Float::is_finite(self)
                }

                #[inline]
                fn sqrt_checked(self) -> Option<Self> {
                    let r = Float::sqrt(self);
                    if Float::is_finite(r) { Some(r) } else { None }
                }

                #[inline]
                fn sqrt_raw(self) -> Self {
                    Float::sqrt(self)
                }

                #[inline]
                fn powf_raw(self, exp: Self) -> Self {
                    Float::powf(self, exp)
                }

                #[inline]
                fn as_exponent(self) -> Option<i64> {
                    if Float::is_finite(self) && Float::fract(self) == 0.0 {
                        num_traits::cast(self)
                    } else {
                        None
                    }
                }

                #[inline]
                fn to_f64_lossy(self) -> f64 {
                    num_traits::cast(self).unwrap_or(f64::NAN)
                }
            }
        )*
    };
}

impl_element_float!(f32, f64);

/// Matrix elements that admit negation.
///
/// Required by determinant, cofactor, inverse, and matrix power, since
/// cofactor signs alternate. Unsigned element types do not implement it,
/// so those operations are rejected at compile time.
pub trait SignedElement: Element + Signed {}

impl<T: Element + Signed> SignedElement for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_checked() {
        assert_eq!(Element::checked_add(i8::MAX, 1), None);
        assert_eq!(Element::checked_add(1_i8, 2), Some(3));
        assert_eq!(Element::checked_mul(i32::MAX, 2), None);
    }

    #[test]
    fn int_wrapping() {
        assert_eq!(Element::wrapping_add(i8::MAX, 1), i8::MIN);
        assert_eq!(Element::wrapping_sub(u8::MIN, 1), u8::MAX);
    }

    #[test]
    fn int_div_rounded() {
        // (7 + 1) / 2 = 4 — rounds up from 3.5
        assert_eq!(7_i32.checked_div_rounded(2), Some(4));
        assert_eq!(6_i32.checked_div_rounded(2), Some(3));
        assert_eq!(5_i32.checked_div_rounded(0), None);
    }

    #[test]
    fn float_checked() {
        assert_eq!(Element::checked_add(1.0_f64, 2.0), Some(3.0));
        assert_eq!(Element::checked_mul(f64::MAX, 2.0), None);
        assert_eq!(1.0_f64.checked_div_rounded(0.0), None);
        assert_eq!(9.0_f64.checked_div_rounded(2.0), Some(4.5));
    }

    #[test]
    fn float_sqrt() {
        assert_eq!(4.0_f64.sqrt_checked(), Some(2.0));
        assert_eq!((-1.0_f64).sqrt_checked(), None);
        assert_eq!(9_i32.sqrt_checked(), None);
    }

    #[test]
    fn exponents() {
        assert_eq!(3_i32.as_exponent(), Some(3));
        assert_eq!(3.0_f64.as_exponent(), Some(3));
        assert_eq!(2.5_f64.as_exponent(), None);
        assert_eq!(f64::NAN.as_exponent(), None);
    }
}
