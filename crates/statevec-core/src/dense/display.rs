//! `Display` formatting for [`DenseVector`].

use core::fmt;

use crate::Scalar;

use super::DenseVector;

impl<T: Scalar> fmt::Display for DenseVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}
