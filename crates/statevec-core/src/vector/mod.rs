//! The abstract dense column-vector contract.
//!
//! [`VectorBase`] is the interface that state vectors and signal vectors of
//! a dynamical system implement. A concrete type supplies three primitives
//! (`size`, `get`, `get_mut`); every other operation has a default built on
//! those primitives. Concrete types may override the defaults when their
//! storage allows something faster, but must keep the observable results.
//!
//! # Cost model
//!
//! | Operation | Time | Allocation |
//! |-----------|------|------------|
//! | `size`, `get`, `get_mut`, `set` | O(1) | none |
//! | `set_from`, `set_from_dense`, `set_zero` | O(N) | none |
//! | `copy_to_pre_sized`, `scale_and_add_to` | O(N) | none |
//! | `plus_eq_scaled*`, `plus_eq`, `minus_eq` | O(N·k) | none |
//! | `copy_to_dense` | O(N) | O(N), the returned vector |
//!
//! Implementations of the primitives and of any override must respect these
//! bounds so that integrators and controllers built on the contract stay
//! real-time safe regardless of the concrete layout.
//!
//! # Aliasing
//!
//! Operands are borrowed immutably while the target is borrowed mutably, so
//! a vector can never be accumulated into itself. Clone first
//! (`a.plus_eq_scaled(2.0, &a.clone())`) when that is what you need.

mod basic;
mod display;
mod operands;
mod subvector;

pub use basic::BasicVector;
pub use display::VectorDisplay;
pub use operands::ScaledOperands;
pub use subvector::Subvector;

use crate::Scalar;
use crate::dense::DenseVector;
use crate::error::{Result, VectorError};

/// A real-valued, dense column vector with layout-independent access.
///
/// The vector is always a column vector. It may or may not be contiguous in
/// memory; contiguous vectors should normally use [`BasicVector`] instead of
/// implementing this trait from scratch.
///
/// The trait is object safe. Operands of bulk operations are taken as
/// `&dyn VectorBase<T>` so that differently laid-out vectors can be mixed in
/// a single call. The chaining accumulation methods (`plus_eq_scaled`,
/// `plus_eq`, `minus_eq`, ...) and `display` live on [`VectorBaseExt`], which
/// every vector and every `dyn VectorBase<T>` implements.
pub trait VectorBase<T: Scalar> {
    /// Returns the number of elements in the vector.
    ///
    /// Implementations must make this O(1) and allocation free.
    fn size(&self) -> usize;

    /// Returns the element at `index`.
    ///
    /// Fails with [`VectorError::IndexOutOfBounds`] if `index >= size()`.
    /// Implementations must make this O(1) and allocation free.
    fn get(&self, index: usize) -> Result<&T>;

    /// Returns a mutable reference to the element at `index`.
    ///
    /// Fails with [`VectorError::IndexOutOfBounds`] if `index >= size()`.
    /// Implementations must make this O(1) and allocation free.
    fn get_mut(&mut self, index: usize) -> Result<&mut T>;

    /// Whether the vector has no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Replaces the element at `index` with `value`.
    fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Replaces the entire vector with the contents of `value`.
    ///
    /// Fails with [`VectorError::DimensionMismatch`] unless both vectors have
    /// the same size, in which case nothing is written.
    fn set_from(&mut self, value: &dyn VectorBase<T>) -> Result<()> {
        check_size("set_from", self.size(), value.size())?;
        for i in 0..value.size() {
            self.set(i, value.get(i)?.clone())?;
        }
        Ok(())
    }

    /// Replaces the entire vector with the contents of a dense vector.
    ///
    /// Fails with [`VectorError::DimensionMismatch`] unless `value` has
    /// `size()` rows.
    fn set_from_dense(&mut self, value: &DenseVector<T>) -> Result<()> {
        check_size("set_from_dense", self.size(), value.rows())?;
        for (i, x) in value.iter().enumerate() {
            self.set(i, x.clone())?;
        }
        Ok(())
    }

    /// Sets every element to zero.
    fn set_zero(&mut self) -> Result<()> {
        for i in 0..self.size() {
            self.set(i, T::zero())?;
        }
        Ok(())
    }

    /// Copies the entire vector into a newly allocated dense vector.
    ///
    /// This is the only operation of the contract that allocates.
    fn copy_to_dense(&self) -> Result<DenseVector<T>> {
        let mut out = DenseVector::zeros(self.size());
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.get(i)?.clone();
        }
        Ok(out)
    }

    /// Copies the entire vector into caller-provided storage.
    ///
    /// Fails with [`VectorError::InvalidArgument`] if `out` is `None`, and
    /// with [`VectorError::DimensionMismatch`] if it does not have `size()`
    /// rows.
    fn copy_to_pre_sized(&self, out: Option<&mut DenseVector<T>>) -> Result<()> {
        let out = out.ok_or_else(|| {
            VectorError::invalid_argument("copy_to_pre_sized", "output vector is absent")
        })?;
        check_size("copy_to_pre_sized", self.size(), out.rows())?;
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.get(i)?.clone();
        }
        Ok(())
    }

    /// Adds `scale * self` into the dense vector `out`.
    ///
    /// Fails with [`VectorError::InvalidArgument`] if `out` is `None`, and
    /// with [`VectorError::DimensionMismatch`] if the sizes differ.
    ///
    /// Override this when the storage allows a vectorized update.
    fn scale_and_add_to(&self, scale: T, out: Option<&mut DenseVector<T>>) -> Result<()> {
        let out = out.ok_or_else(|| {
            VectorError::invalid_argument("scale_and_add_to", "output vector is absent")
        })?;
        check_size("scale_and_add_to", self.size(), out.rows())?;
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = slot.clone() + scale.clone() * self.get(i)?.clone();
        }
        Ok(())
    }

    /// Accumulates validated scaled operands into this vector.
    ///
    /// This is the override point behind
    /// [`plus_eq_scaled_many`](VectorBaseExt::plus_eq_scaled_many). Every
    /// operand in `operands` has already been checked to have `size()`
    /// elements, and [`ScaledOperands`] can only be obtained through that
    /// check.
    ///
    /// The default walks the vector once, index-major: for each index it sums
    /// `operand[i] * scale` over all operands off to the side, then reads and
    /// writes `self[i]` exactly once. Overrides that exploit contiguous or
    /// blocked storage may reorder the loops freely as long as each final
    /// element is mathematically the same; floating-point results may differ
    /// in the last bits. Overrides must stay O(N) per operand and must not
    /// allocate.
    fn do_plus_eq_scaled(&mut self, operands: ScaledOperands<'_, T>) -> Result<()> {
        for i in 0..self.size() {
            let mut value = T::zero();
            for (scale, operand) in &operands {
                value = value + operand.get(i)?.clone() * scale.clone();
            }
            let slot = self.get_mut(i)?;
            *slot = slot.clone() + value;
        }
        Ok(())
    }

    /// Writes the advisory element bounds into `lower` and `upper`.
    ///
    /// If both come back empty the vector declares no bounds. Otherwise
    /// `lower[i] <= get(i) <= upper[i]` is the admissible range of each
    /// element. Bounds are metadata only; nothing in this crate enforces
    /// them. The default declares no bounds.
    fn get_element_bounds(&self, lower: &mut DenseVector<f64>, upper: &mut DenseVector<f64>) {
        lower.resize(0);
        upper.resize(0);
    }
}

/// Chaining accumulation and rendering for every [`VectorBase`], trait
/// objects included.
///
/// Implemented for all `V: VectorBase<T> + ?Sized`; there is nothing to
/// override here. Custom accumulation goes in
/// [`VectorBase::do_plus_eq_scaled`].
pub trait VectorBaseExt<T: Scalar>: VectorBase<T> {
    /// Adds `scale * rhs` into this vector.
    ///
    /// ```
    /// # use statevec_core::prelude::*;
    /// let mut a = BasicVector::from_vec(vec![1.0, 2.0, 3.0]);
    /// let b = BasicVector::from_vec(vec![10.0, 20.0, 30.0]);
    /// a.plus_eq_scaled(2.0, &b).unwrap();
    /// assert_eq!(a.as_slice(), &[21.0, 42.0, 63.0]);
    /// ```
    fn plus_eq_scaled(&mut self, scale: T, rhs: &dyn VectorBase<T>) -> Result<&mut Self> {
        self.plus_eq_scaled_many(&[(scale, rhs)])
    }

    /// Adds several scaled vectors into this vector in one pass.
    ///
    /// Every operand is checked against `size()` before anything is written,
    /// so a [`VectorError::DimensionMismatch`] leaves the vector untouched.
    /// The accumulation itself is delegated to
    /// [`do_plus_eq_scaled`](VectorBase::do_plus_eq_scaled).
    ///
    /// ```
    /// # use statevec_core::prelude::*;
    /// let mut x = BasicVector::from_vec(vec![1.0, 1.0]);
    /// let b = BasicVector::from_vec(vec![1.0, 2.0]);
    /// let short = BasicVector::from_vec(vec![1.0]);
    /// let target: &mut dyn VectorBase<f64> = &mut x;
    /// assert!(target.plus_eq_scaled_many(&[(2.0, &b), (1.0, &short)]).is_err());
    /// target.plus_eq_scaled_many(&[(2.0, &b), (-1.0, &b)]).unwrap();
    /// assert_eq!(x.as_slice(), &[2.0, 3.0]);
    /// ```
    fn plus_eq_scaled_many(&mut self, operands: &[(T, &dyn VectorBase<T>)]) -> Result<&mut Self> {
        let operands = ScaledOperands::check(self.size(), operands)?;
        self.do_plus_eq_scaled(operands)?;
        Ok(self)
    }

    /// Adds `rhs` into this vector.
    fn plus_eq(&mut self, rhs: &dyn VectorBase<T>) -> Result<&mut Self> {
        self.plus_eq_scaled(T::one(), rhs)
    }

    /// Subtracts `rhs` from this vector.
    fn minus_eq(&mut self, rhs: &dyn VectorBase<T>) -> Result<&mut Self> {
        self.plus_eq_scaled(-T::one(), rhs)
    }

    /// Returns an object implementing [`Display`](core::fmt::Display) that
    /// renders the elements as `[a, b, c]`.
    fn display(&self) -> VectorDisplay<'_, T, Self> {
        VectorDisplay::new(self)
    }
}

impl<T: Scalar, V: VectorBase<T> + ?Sized> VectorBaseExt<T> for V {}

// ======================================================================
// Validation helpers
// ======================================================================

/// Fails with a size mismatch unless `got == expected`.
#[inline]
pub(crate) fn check_size(op: &'static str, expected: usize, got: usize) -> Result<()> {
    if expected == got {
        Ok(())
    } else {
        Err(VectorError::size_mismatch(op, expected, got))
    }
}
