//! Scaled operands that have passed the all-or-nothing size check.

use core::fmt;
use core::slice;

use crate::Scalar;
use crate::error::Result;

use super::{VectorBase, check_size};

/// `(scale, operand)` pairs whose operands all have the same size as the
/// vector they are about to be accumulated into.
///
/// This is the only input [`VectorBase::do_plus_eq_scaled`] accepts. Values
/// are created by [`plus_eq_scaled_many`](super::VectorBaseExt::plus_eq_scaled_many)
/// after validation, so an implementation of the hook never sees a
/// mismatched operand and callers outside the crate cannot reach the hook
/// without going through the check.
///
/// ```compile_fail
/// use statevec_core::prelude::*;
/// let b = BasicVector::from_vec(vec![1.0]);
/// let operands: [(f64, &dyn VectorBase<f64>); 1] = [(1.0, &b)];
/// let _ = ScaledOperands::check(3, &operands);
/// ```
pub struct ScaledOperands<'o, T: Scalar> {
    operands: &'o [(T, &'o dyn VectorBase<T>)],
    size: usize,
}

impl<'o, T: Scalar> ScaledOperands<'o, T> {
    /// Checks every operand against `size` before any of them is applied.
    pub(crate) fn check(size: usize, operands: &'o [(T, &'o dyn VectorBase<T>)]) -> Result<Self> {
        for (_, operand) in operands {
            check_size("plus_eq_scaled", size, operand.size())?;
        }
        Ok(Self { operands, size })
    }

    /// The size every operand was checked against.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of `(scale, operand)` pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.operands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.operands.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &'o [(T, &'o dyn VectorBase<T>)] {
        self.operands
    }

    pub fn iter(&self) -> slice::Iter<'o, (T, &'o dyn VectorBase<T>)> {
        self.operands.iter()
    }
}

impl<'o, T: Scalar> IntoIterator for &ScaledOperands<'o, T> {
    type Item = &'o (T, &'o dyn VectorBase<T>);
    type IntoIter = slice::Iter<'o, (T, &'o dyn VectorBase<T>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Scalar> fmt::Debug for ScaledOperands<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScaledOperands")
            .field("size", &self.size)
            .field("len", &self.operands.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use crate::error::VectorError;
    use crate::vector::{BasicVector, VectorBaseExt};

    use super::*;

    /// Records what reaches the hook, then accumulates index by index.
    #[derive(Debug, Default)]
    struct Recording {
        values: Vec<f64>,
        calls: Vec<(usize, Vec<usize>)>,
    }

    impl VectorBase<f64> for Recording {
        fn size(&self) -> usize {
            self.values.len()
        }

        fn get(&self, index: usize) -> Result<&f64> {
            let size = self.values.len();
            self.values
                .get(index)
                .ok_or_else(|| VectorError::out_of_range("Recording::get", index, size))
        }

        fn get_mut(&mut self, index: usize) -> Result<&mut f64> {
            let size = self.values.len();
            self.values
                .get_mut(index)
                .ok_or_else(|| VectorError::out_of_range("Recording::get_mut", index, size))
        }

        fn do_plus_eq_scaled(&mut self, operands: ScaledOperands<'_, f64>) -> Result<()> {
            let sizes = operands.iter().map(|(_, v)| v.size()).collect();
            self.calls.push((operands.size(), sizes));
            for (scale, operand) in &operands {
                for (i, x) in self.values.iter_mut().enumerate() {
                    *x += scale * operand.get(i)?;
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_check_accepts_matching_operands() {
        let b = BasicVector::from_vec(vec![1.0, 2.0]);
        let c = BasicVector::from_vec(vec![3.0, 4.0]);
        let pairs: [(f64, &dyn VectorBase<f64>); 2] = [(2.0, &b), (-1.0, &c)];
        let checked = ScaledOperands::check(2, &pairs).unwrap();
        assert_eq!(checked.size(), 2);
        assert_eq!(checked.len(), 2);
        assert!(!checked.is_empty());
        assert_eq!(checked.as_slice()[1].0, -1.0);
        assert_eq!(
            format!("{checked:?}"),
            "ScaledOperands { size: 2, len: 2, .. }"
        );
    }

    #[test]
    fn test_check_rejects_first_mismatch() {
        let b = BasicVector::from_vec(vec![1.0, 2.0]);
        let c = BasicVector::from_vec(vec![3.0]);
        let pairs: [(f64, &dyn VectorBase<f64>); 2] = [(1.0, &b), (1.0, &c)];
        let err = ScaledOperands::check(2, &pairs).unwrap_err();
        assert_eq!(
            err,
            VectorError::DimensionMismatch {
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn test_check_empty() {
        let checked = ScaledOperands::<i32>::check(5, &[]).unwrap();
        assert!(checked.is_empty());
        assert_eq!(checked.size(), 5);
    }

    #[test]
    fn test_hook_only_sees_validated_operands() {
        let mut target = Recording {
            values: vec![1.0, 2.0, 3.0],
            ..Recording::default()
        };
        let full = BasicVector::from_vec(vec![1.0, 1.0, 1.0]);
        let short = BasicVector::from_vec(vec![5.0]);

        let err = target
            .plus_eq_scaled_many(&[(1.0, &full), (1.0, &short)])
            .unwrap_err();
        assert!(err.is_size_mismatch());
        assert!(target.calls.is_empty());
        assert_eq!(target.values, vec![1.0, 2.0, 3.0]);

        target.plus_eq_scaled(2.0, &full).unwrap().minus_eq(&full).unwrap();
        assert_eq!(target.calls, vec![(3, vec![3]), (3, vec![3])]);
        assert_eq!(target.values, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_hook_through_trait_object() {
        let mut target = Recording {
            values: vec![0.0, 0.0],
            ..Recording::default()
        };
        let b = BasicVector::from_vec(vec![1.0, 2.0]);
        let short = BasicVector::from_vec(vec![1.0]);
        {
            let dynamic: &mut dyn VectorBase<f64> = &mut target;
            assert!(dynamic.plus_eq(&short).err().unwrap().is_size_mismatch());
            dynamic.plus_eq_scaled(3.0, &b).unwrap();
        }
        assert_eq!(target.calls, vec![(2, vec![2])]);
        assert_eq!(target.values, vec![3.0, 6.0]);
    }
}
