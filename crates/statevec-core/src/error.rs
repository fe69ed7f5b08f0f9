use core::fmt;

/// All errors returned by `statevec-core`.
///
/// Every variant describes a broken precondition on the caller's side.
/// Callers normally abort the enclosing computation instead of retrying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// An element index is outside `[0, size)`.
    IndexOutOfBounds { index: usize, size: usize },

    /// An operand's dimension disagrees with the target vector's size.
    DimensionMismatch { expected: usize, got: usize },

    /// A required argument, such as an output location, is absent.
    InvalidArgument { reason: &'static str },
}

impl VectorError {
    /// Whether this is an out-of-range element access.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfBounds { .. })
    }

    /// Whether this is a size mismatch between operands.
    pub fn is_size_mismatch(&self) -> bool {
        matches!(self, Self::DimensionMismatch { .. })
    }

    /// Whether a required argument was missing.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    #[cold]
    pub(crate) fn out_of_range(op: &'static str, index: usize, size: usize) -> Self {
        tracing::debug!(op, index, size, "vector index out of range");
        Self::IndexOutOfBounds { index, size }
    }

    #[cold]
    pub(crate) fn size_mismatch(op: &'static str, expected: usize, got: usize) -> Self {
        tracing::debug!(op, expected, got, "vector operand size mismatch");
        Self::DimensionMismatch { expected, got }
    }

    #[cold]
    pub(crate) fn invalid_argument(op: &'static str, reason: &'static str) -> Self {
        tracing::debug!(op, reason, "invalid vector argument");
        Self::InvalidArgument { reason }
    }
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, size } => {
                write!(f, "index {index} out of bounds for vector of size {size}")
            }
            Self::DimensionMismatch { expected, got } => {
                write!(f, "dimension mismatch: expected {expected}, got {got}")
            }
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
        }
    }
}

impl std::error::Error for VectorError {}

/// Convenience alias used throughout `statevec-core`.
pub type Result<T> = std::result::Result<T, VectorError>;
