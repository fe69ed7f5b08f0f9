//! `statevec-core`: the dense column-vector contract.
//!
//! State and signal data flowing between the components of a dynamical
//! system is represented by types implementing [`VectorBase`]. The contract
//! fixes the cost of every operation (O(1) element access, O(N) bulk work,
//! no incidental allocation) so integrators and controllers can be written
//! once against any concrete layout.
//!
//! # Design
//!
//! - Generic over the element type via [`Scalar`], which asks only for the
//!   arithmetic scaled accumulation needs. Symbolic and autodiff scalars work
//!   as well as `f64`.
//! - [`DenseVector`] is the single exchange form for bulk import and export.
//! - Every failure is a [`VectorError`] returned to the immediate caller;
//!   validated bulk operations leave the target untouched on error.
//! - No internal locking: one writer at a time, enforced by `&mut self`.

pub mod dense;
pub mod dtype;
pub mod error;
pub mod vector;

// Re-export key types at crate root for convenience.
pub use dense::DenseVector;
pub use dtype::Scalar;
pub use error::{Result, VectorError};
pub use vector::{
    BasicVector, ScaledOperands, Subvector, VectorBase, VectorBaseExt, VectorDisplay,
};

/// Items intended for glob-import: `use statevec_core::prelude::*;`
pub mod prelude {
    pub use crate::dense::DenseVector;
    pub use crate::dtype::Scalar;
    pub use crate::error::{Result, VectorError};
    pub use crate::vector::{
        BasicVector, ScaledOperands, Subvector, VectorBase, VectorBaseExt, VectorDisplay,
    };
}
