//! Contiguous reference implementation of [`VectorBase`].

use core::fmt;
use core::ops::{AddAssign, Index, IndexMut, SubAssign};

use crate::Scalar;
use crate::dense::DenseVector;
use crate::error::{Result, VectorError};

use super::{ScaledOperands, VectorBase, check_size};

/// A vector whose elements live in one contiguous [`DenseVector`].
///
/// This is the type most state and signal vectors should use. It overrides
/// the bulk operations of [`VectorBase`] with slice loops, including an
/// operand-major [`do_plus_eq_scaled`](VectorBase::do_plus_eq_scaled).
///
/// `+=` and `-=` are available for any right-hand vector type, trait objects
/// included. Like the other arithmetic operators in Rust they panic on a size
/// mismatch; use [`plus_eq`](super::VectorBaseExt::plus_eq) /
/// [`minus_eq`](super::VectorBaseExt::minus_eq) to get a [`Result`] instead.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicVector<T: Scalar> {
    values: DenseVector<T>,
}

impl<T: Scalar> BasicVector<T> {
    /// Create a vector of `size` zeros.
    pub fn zeros(size: usize) -> Self {
        Self {
            values: DenseVector::zeros(size),
        }
    }

    /// Take ownership of `data` as the vector's elements.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self {
            values: DenseVector::from_vec(data),
        }
    }

    /// Create a vector from a slice (copies the data).
    pub fn from_slice(data: &[T]) -> Self {
        Self::from_vec(data.to_vec())
    }

    /// Wrap an existing dense vector without copying.
    pub fn from_dense(values: DenseVector<T>) -> Self {
        Self { values }
    }

    /// The underlying dense storage.
    #[inline]
    pub fn value(&self) -> &DenseVector<T> {
        &self.values
    }

    /// A flat slice of all elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.values.as_slice()
    }

    /// A mutable flat slice of all elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.values.as_mut_slice()
    }

    /// Consume the vector and return its dense storage.
    pub fn into_dense(self) -> DenseVector<T> {
        self.values
    }

    // Single-operand accumulation for `+=`/`-=`, where `rhs` may be unsized.
    fn accumulate<V: VectorBase<T> + ?Sized>(&mut self, scale: T, rhs: &V) -> Result<()> {
        check_size("plus_eq_scaled", self.size(), rhs.size())?;
        for (i, x) in self.values.iter_mut().enumerate() {
            *x = x.clone() + rhs.get(i)?.clone() * scale.clone();
        }
        Ok(())
    }
}

impl<T: Scalar> VectorBase<T> for BasicVector<T> {
    #[inline]
    fn size(&self) -> usize {
        self.values.rows()
    }

    #[inline]
    fn get(&self, index: usize) -> Result<&T> {
        let size = self.values.rows();
        self.values
            .as_slice()
            .get(index)
            .ok_or_else(|| VectorError::out_of_range("BasicVector::get", index, size))
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let size = self.values.rows();
        self.values
            .as_mut_slice()
            .get_mut(index)
            .ok_or_else(|| VectorError::out_of_range("BasicVector::get_mut", index, size))
    }

    fn set_from_dense(&mut self, value: &DenseVector<T>) -> Result<()> {
        check_size("set_from_dense", self.size(), value.rows())?;
        self.values.as_mut_slice().clone_from_slice(value.as_slice());
        Ok(())
    }

    fn set_zero(&mut self) -> Result<()> {
        self.values.as_mut_slice().fill(T::zero());
        Ok(())
    }

    fn copy_to_dense(&self) -> Result<DenseVector<T>> {
        Ok(self.values.clone())
    }

    fn copy_to_pre_sized(&self, out: Option<&mut DenseVector<T>>) -> Result<()> {
        let out = out.ok_or_else(|| {
            VectorError::invalid_argument("copy_to_pre_sized", "output vector is absent")
        })?;
        check_size("copy_to_pre_sized", self.size(), out.rows())?;
        out.as_mut_slice().clone_from_slice(self.values.as_slice());
        Ok(())
    }

    fn scale_and_add_to(&self, scale: T, out: Option<&mut DenseVector<T>>) -> Result<()> {
        let out = out.ok_or_else(|| {
            VectorError::invalid_argument("scale_and_add_to", "output vector is absent")
        })?;
        check_size("scale_and_add_to", self.size(), out.rows())?;
        for (slot, x) in out.iter_mut().zip(self.values.iter()) {
            *slot = slot.clone() + scale.clone() * x.clone();
        }
        Ok(())
    }

    // Operand-major: one sweep over the contiguous slice per operand.
    fn do_plus_eq_scaled(&mut self, operands: ScaledOperands<'_, T>) -> Result<()> {
        for (scale, operand) in &operands {
            for (i, x) in self.values.iter_mut().enumerate() {
                *x = x.clone() + operand.get(i)?.clone() * scale.clone();
            }
        }
        Ok(())
    }
}

impl<T: Scalar> From<Vec<T>> for BasicVector<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T: Scalar> From<DenseVector<T>> for BasicVector<T> {
    fn from(values: DenseVector<T>) -> Self {
        Self::from_dense(values)
    }
}

impl<T: Scalar> Index<usize> for BasicVector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}

impl<T: Scalar> IndexMut<usize> for BasicVector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.values[index]
    }
}

impl<T: Scalar> fmt::Display for BasicVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.values, f)
    }
}

// ======================================================================
// Operator sugar (panics on size mismatch)
// ======================================================================

impl<T: Scalar, V: VectorBase<T> + ?Sized> AddAssign<&V> for BasicVector<T> {
    fn add_assign(&mut self, rhs: &V) {
        if let Err(err) = self.accumulate(T::one(), rhs) {
            panic!("size mismatch in +=: {err}");
        }
    }
}

impl<T: Scalar, V: VectorBase<T> + ?Sized> SubAssign<&V> for BasicVector<T> {
    fn sub_assign(&mut self, rhs: &V) {
        if let Err(err) = self.accumulate(-T::one(), rhs) {
            panic!("size mismatch in -=: {err}");
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use crate::vector::{Subvector, VectorBaseExt};

    use super::*;

    #[test]
    fn test_construction() {
        let v = BasicVector::<f64>::zeros(3);
        assert_eq!(v.size(), 3);
        assert_eq!(v.as_slice(), &[0.0, 0.0, 0.0]);

        let w: BasicVector<i32> = vec![1, 2].into();
        assert_eq!(w.value().as_slice(), &[1, 2]);

        let d = BasicVector::from_dense(DenseVector::from_vec(vec![5, 6]));
        assert_eq!(d.into_dense().into_vec(), vec![5, 6]);
    }

    #[test]
    fn test_get_set_index() {
        let mut v = BasicVector::from_slice(&[1.0, 2.0, 3.0]);
        v.set(1, 20.0).unwrap();
        v[2] = 30.0;
        assert_eq!(*v.get(1).unwrap(), 20.0);
        assert_eq!(v[2], 30.0);
        assert_eq!(
            v.get(3),
            Err(VectorError::IndexOutOfBounds { index: 3, size: 3 })
        );
        assert!(v.get_mut(3).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_set_from_mixed_types() {
        let mut a = BasicVector::<f64>::zeros(2);
        let mut backing = BasicVector::from_vec(vec![9.0, 1.0, 2.0, 9.0]);
        let window = Subvector::new(&mut backing, 1, 2).unwrap();
        a.set_from(&window).unwrap();
        assert_eq!(a.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn test_set_from_dense_override() {
        let mut v = BasicVector::<i32>::zeros(3);
        v.set_from_dense(&DenseVector::from_vec(vec![1, 2, 3]))
            .unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        let err = v
            .set_from_dense(&DenseVector::from_vec(vec![1, 2]))
            .unwrap_err();
        assert_eq!(
            err,
            VectorError::DimensionMismatch {
                expected: 3,
                got: 2
            }
        );
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_set_zero() {
        let mut v = BasicVector::from_vec(vec![1.0_f32, -1.0]);
        v.set_zero().unwrap();
        assert_eq!(v.as_slice(), &[0.0, 0.0]);
    }

    #[test]
    fn test_copy_to_pre_sized() {
        let v = BasicVector::from_vec(vec![1, 2, 3]);
        let mut out = DenseVector::zeros(3);
        v.copy_to_pre_sized(Some(&mut out)).unwrap();
        assert_eq!(out.as_slice(), &[1, 2, 3]);
        assert!(v.copy_to_pre_sized(None).unwrap_err().is_invalid_argument());
        let mut short = DenseVector::zeros(1);
        assert!(
            v.copy_to_pre_sized(Some(&mut short))
                .unwrap_err()
                .is_size_mismatch()
        );
        assert_eq!(short.as_slice(), &[0]);
    }

    #[test]
    fn test_scale_and_add_to() {
        let v = BasicVector::from_vec(vec![1.0, 2.0]);
        let mut out = DenseVector::from_vec(vec![0.5, 0.5]);
        v.scale_and_add_to(-2.0, Some(&mut out)).unwrap();
        assert_eq!(out.as_slice(), &[-1.5, -3.5]);
        assert!(
            v.scale_and_add_to(1.0, None)
                .unwrap_err()
                .is_invalid_argument()
        );
    }

    #[test]
    fn test_plus_eq_scaled_example() {
        let mut a = BasicVector::from_vec(vec![1.0, 2.0, 3.0]);
        let b = BasicVector::from_vec(vec![10.0, 20.0, 30.0]);
        a.plus_eq_scaled(2.0, &b).unwrap();
        assert_eq!(a.as_slice(), &[21.0, 42.0, 63.0]);
    }

    #[test]
    fn test_plus_eq_scaled_many_override() {
        let mut a = BasicVector::from_vec(vec![1, 1, 1]);
        let b = BasicVector::from_vec(vec![1, 2, 3]);
        let c = BasicVector::from_vec(vec![4, 5, 6]);
        a.plus_eq_scaled_many(&[(2, &b), (-1, &c)]).unwrap();
        assert_eq!(a.as_slice(), &[-1, 0, 1]);
    }

    #[test]
    fn test_plus_eq_scaled_many_rejects_before_writing() {
        let mut a = BasicVector::from_vec(vec![1, 1, 1]);
        let b = BasicVector::from_vec(vec![1, 2, 3]);
        let c = BasicVector::from_vec(vec![4, 5]);
        let err = a.plus_eq_scaled_many(&[(2, &b), (1, &c)]).unwrap_err();
        assert_eq!(
            err,
            VectorError::DimensionMismatch {
                expected: 3,
                got: 2
            }
        );
        assert_eq!(a.as_slice(), &[1, 1, 1]);
    }

    #[test]
    fn test_operators() {
        let mut a = BasicVector::from_vec(vec![1, 2]);
        let b = BasicVector::from_vec(vec![10, 20]);
        a += &b;
        assert_eq!(a.as_slice(), &[11, 22]);
        a -= &b;
        a -= &b;
        assert_eq!(a.as_slice(), &[-9, -18]);
    }

    #[test]
    #[should_panic(expected = "size mismatch in +=")]
    fn test_add_assign_mismatch_panics() {
        let mut a = BasicVector::from_vec(vec![1, 2]);
        let b = BasicVector::from_vec(vec![1]);
        a += &b;
    }

    #[test]
    fn test_operators_accept_trait_objects() {
        let mut a = BasicVector::from_vec(vec![1, 2]);
        let b = BasicVector::from_vec(vec![10, 20]);
        let rhs: &dyn VectorBase<i32> = &b;
        a += rhs;
        assert_eq!(a.as_slice(), &[11, 22]);
        a -= rhs;
        a -= rhs;
        assert_eq!(a.as_slice(), &[-9, -18]);

        let mut backing = BasicVector::from_vec(vec![0, 1, 2]);
        let window = Subvector::new(&mut backing, 1, 2).unwrap();
        a += &window;
        assert_eq!(a.as_slice(), &[-8, -16]);
    }

    #[test]
    #[should_panic(expected = "size mismatch in -=")]
    fn test_sub_assign_trait_object_mismatch_panics() {
        let mut a = BasicVector::from_vec(vec![1, 2]);
        let b = BasicVector::from_vec(vec![1, 2, 3]);
        let rhs: &dyn VectorBase<i32> = &b;
        a -= rhs;
    }

    #[test]
    fn test_display() {
        let v = BasicVector::from_vec(vec![1, 2, 3]);
        assert_eq!(v.to_string(), "[1, 2, 3]");
        assert_eq!(v.to_string(), v.display().to_string());
    }

    #[test]
    fn test_clone_is_deep() {
        let a = BasicVector::from_vec(vec![1, 2]);
        let mut b = a.clone();
        b[0] = 100;
        assert_eq!(a[0], 1);
        assert_ne!(a, b);
    }
}
