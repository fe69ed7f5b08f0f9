//! Diagnostic rendering of any [`VectorBase`].
//!
//! The output is meant for logs and debugging only, never for exchanging
//! data.

use core::fmt;
use core::marker::PhantomData;

use crate::Scalar;

use super::VectorBase;

/// Renders a vector as `[a, b, c]`, in index order.
///
/// Returned by [`VectorBaseExt::display`](super::VectorBaseExt::display).
/// Rendering only reads elements. `V` defaults to a trait object.
pub struct VectorDisplay<'a, T, V = dyn VectorBase<T> + 'a>
where
    T: Scalar,
    V: VectorBase<T> + ?Sized,
{
    vector: &'a V,
    scalar: PhantomData<fn() -> T>,
}

impl<'a, T: Scalar, V: VectorBase<T> + ?Sized> VectorDisplay<'a, T, V> {
    /// Wrap `vector` for formatting.
    pub fn new(vector: &'a V) -> Self {
        Self {
            vector,
            scalar: PhantomData,
        }
    }
}

impl<T: Scalar, V: VectorBase<T> + ?Sized> fmt::Display for VectorDisplay<'_, T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for i in 0..self.vector.size() {
            if i > 0 {
                write!(f, ", ")?;
            }
            // A vector whose `get` disagrees with its own `size` is broken;
            // surface that as a formatting failure.
            let value = self.vector.get(i).map_err(|_| fmt::Error)?;
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

impl<T: Scalar, V: VectorBase<T> + ?Sized> fmt::Debug for VectorDisplay<'_, T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
