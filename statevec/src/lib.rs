//! # statevec
//!
//! Dense state and signal vectors for dynamical-systems frameworks.
//!
//! One `use statevec::prelude::*;` gives you the [`VectorBase`] contract, the
//! [`DenseVector`] exchange form and the contiguous [`BasicVector`].
//!
//! ```
//! use statevec::prelude::*;
//!
//! let mut x = BasicVector::<f64>::zeros(2);
//! let dx = BasicVector::from_vec(vec![1.0, -2.0]);
//! x.plus_eq_scaled(0.5, &dx).unwrap();
//! assert_eq!(x.copy_to_dense().unwrap(), DenseVector::from_vec(vec![0.5, -1.0]));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `core` *(default)* | The vector contract, scalar trait and reference vectors |
//!
//! [`VectorBase`]: statevec_core::VectorBase
//! [`DenseVector`]: statevec_core::DenseVector
//! [`BasicVector`]: statevec_core::BasicVector

#[cfg(feature = "core")]
pub use statevec_core as core;

/// Glob-import convenience: `use statevec::prelude::*;`
pub mod prelude {
    #[cfg(feature = "core")]
    pub use statevec_core::prelude::*;
}
