//! Scalar element types for vectors.
//!
//! A vector element only needs the arithmetic used by scaled accumulation:
//! addition, multiplication, negation and the two identities. Nothing here
//! assumes floating point, so integer and user-defined (symbolic, autodiff)
//! scalars are first-class citizens.

use core::fmt;
use core::ops::{Add, Mul, Neg};

// ---------------------------------------------------------------------------
// Scalar: the root trait for every vector element type
// ---------------------------------------------------------------------------

/// Base trait for all element types storable in a vector.
///
/// `Copy` is intentionally *not* required: heap-backed scalars such as
/// expression trees or dual numbers carrying a gradient vector must be
/// usable as well. Vector code therefore clones elements explicitly.
pub trait Scalar:
    Clone
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + Add<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity (`0`).
    fn zero() -> Self;

    /// The multiplicative identity (`1`).
    fn one() -> Self;
}

// ===========================================================================
// Macro implementations
// ===========================================================================

macro_rules! impl_scalar_float {
    ($ty:ty) => {
        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0.0
            }
            #[inline]
            fn one() -> Self {
                1.0
            }
        }
    };
}

impl_scalar_float!(f32);
impl_scalar_float!(f64);

macro_rules! impl_scalar_int {
    ($ty:ty) => {
        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0
            }
            #[inline]
            fn one() -> Self {
                1
            }
        }
    };
}

impl_scalar_int!(i8);
impl_scalar_int!(i16);
impl_scalar_int!(i32);
impl_scalar_int!(i64);
impl_scalar_int!(isize);
