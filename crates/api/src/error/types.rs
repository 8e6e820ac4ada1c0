//! Error type definitions for curve parameter lookups

/// Result type for ecdp operations
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for ecdp operations
///
/// Every field is either numeric or `&'static str`, so the same type is used
/// with and without the standard library.
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The requested curve identifier does not name a supported curve
    #[cfg_attr(feature = "std", error("unsupported curve identifier: {ordinal}"))]
    UnsupportedCurve {
        ordinal: u32,
    },

    /// Invalid length error with context
    #[cfg_attr(
        feature = "std",
        error("{context}: invalid length (expected {expected}, got {actual})")
    )]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    #[cfg_attr(feature = "std", error("Invalid parameter: {context}"))]
    InvalidParameter {
        context: &'static str,
    },
}

impl Error {
    /// Shorthand for an [`Error::UnsupportedCurve`] carrying the raw ordinal
    pub const fn unsupported(ordinal: u32) -> Self {
        Self::UnsupportedCurve { ordinal }
    }

    /// Shorthand for an [`Error::InvalidParameter`]
    pub const fn param(context: &'static str) -> Self {
        Self::InvalidParameter { context }
    }

    /// Add context to an existing error
    ///
    /// `UnsupportedCurve` carries no context and is returned unchanged.
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::UnsupportedCurve { ordinal } => Self::UnsupportedCurve { ordinal },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { .. } => Self::InvalidParameter { context },
        }
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnsupportedCurve { ordinal } => {
                write!(f, "unsupported curve identifier: {}", ordinal)
            }
            Self::InvalidLength { context, expected, actual } => {
                write!(f, "{}: invalid length (expected {}, got {})",
                    context, expected, actual)
            }
            Self::InvalidParameter { context } => {
                write!(f, "Invalid parameter: {}", context)
            }
        }
    }
}
