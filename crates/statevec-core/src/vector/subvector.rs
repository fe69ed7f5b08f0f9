//! A window onto a contiguous range of another vector.

use core::fmt;

use crate::Scalar;
use crate::error::{Result, VectorError};

use super::VectorBase;

/// A mutable view of `len` consecutive elements of another vector, starting
/// at `first`.
///
/// The view owns nothing: reads and writes go straight through to the parent
/// vector, whatever its layout. Only the primitives are implemented, so every
/// bulk operation on a `Subvector` runs the [`VectorBase`] defaults.
pub struct Subvector<'a, T: Scalar> {
    vector: &'a mut dyn VectorBase<T>,
    first: usize,
    len: usize,
}

impl<'a, T: Scalar> Subvector<'a, T> {
    /// Create a view of `vector[first..first + len]`.
    ///
    /// Fails with [`VectorError::IndexOutOfBounds`] if the window does not
    /// fit inside `vector`.
    pub fn new(vector: &'a mut dyn VectorBase<T>, first: usize, len: usize) -> Result<Self> {
        let end = first.saturating_add(len);
        if end > vector.size() {
            return Err(VectorError::out_of_range(
                "Subvector::new",
                end,
                vector.size(),
            ));
        }
        Ok(Self { vector, first, len })
    }

    /// Index of the first element of the window within the parent vector.
    #[inline]
    pub fn first(&self) -> usize {
        self.first
    }
}

impl<T: Scalar> fmt::Debug for Subvector<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subvector")
            .field("first", &self.first)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

impl<T: Scalar> VectorBase<T> for Subvector<'_, T> {
    #[inline]
    fn size(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Result<&T> {
        if index >= self.len {
            return Err(VectorError::out_of_range("Subvector::get", index, self.len));
        }
        self.vector.get(self.first + index)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        if index >= self.len {
            return Err(VectorError::out_of_range(
                "Subvector::get_mut",
                index,
                self.len,
            ));
        }
        self.vector.get_mut(self.first + index)
    }
}
