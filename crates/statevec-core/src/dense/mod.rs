//! Dense column vector used to move data in and out of a [`VectorBase`].
//!
//! [`DenseVector`] is the exchange form: a flat, contiguous, owned buffer
//! with a row count and element-wise access. It is the only external numeric
//! type the vector contract reads from or writes into.
//!
//! [`VectorBase`]: crate::vector::VectorBase

mod display;

use core::ops::{Index, IndexMut};

use crate::Scalar;
use crate::error::{Result, VectorError};

/// A dense column vector with contiguous storage.
///
/// The vector owns its data and cloning performs a deep copy.
#[derive(Debug, Clone)]
pub struct DenseVector<T: Scalar> {
    data: Vec<T>,
}

impl<T: Scalar> DenseVector<T> {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a vector of `rows` zeros.
    ///
    /// ```
    /// # use statevec_core::dense::DenseVector;
    /// let v = DenseVector::<f64>::zeros(3);
    /// assert_eq!(v.rows(), 3);
    /// assert!(v.iter().all(|&x| x == 0.0));
    /// ```
    pub fn zeros(rows: usize) -> Self {
        Self {
            data: vec![T::zero(); rows],
        }
    }

    /// Create a vector of `rows` copies of `value`.
    pub fn full(rows: usize, value: T) -> Self {
        Self {
            data: vec![value; rows],
        }
    }

    /// Take ownership of `data` as the vector's elements.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Create a vector from a slice (copies the data).
    pub fn from_slice(data: &[T]) -> Self {
        Self::from_vec(data.to_vec())
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.data.len()
    }

    /// Alias of [`rows`](Self::rows).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector has zero rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// A flat slice of all elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// A mutable flat slice of all elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the vector and return the underlying `Vec<T>`.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Change the number of rows. New rows are zero.
    ///
    /// Shrinking keeps the leading elements and does not release capacity.
    pub fn resize(&mut self, rows: usize) {
        self.data.resize(rows, T::zero());
    }

    // ------------------------------------------------------------------
    // Element access
    // ------------------------------------------------------------------

    /// Get a reference to the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        let size = self.data.len();
        self.data
            .get(index)
            .ok_or_else(|| VectorError::out_of_range("DenseVector::get", index, size))
    }

    /// Get a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let size = self.data.len();
        self.data
            .get_mut(index)
            .ok_or_else(|| VectorError::out_of_range("DenseVector::get_mut", index, size))
    }

    /// Set the element at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Iterators
    // ------------------------------------------------------------------

    /// Iterate over all elements in row order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate mutably over all elements in row order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }
}

impl<T: Scalar> PartialEq for DenseVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Scalar> From<Vec<T>> for DenseVector<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T: Scalar> Index<usize> for DenseVector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: Scalar> IndexMut<usize> for DenseVector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}
