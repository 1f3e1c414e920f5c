// src/error.rs
//! Error types for the checked buffer primitives and the benchmark harness

use std::fmt;

/// Errors reported by the fallible entry points.
///
/// The core primitives ([`equal`](crate::equal), [`ordinal_equal`](crate::ordinal_equal),
/// [`find_byte`](crate::find_byte), [`copy`](crate::copy)) are total and never
/// produce one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// A range or offset falls outside the buffer
    RangeOutOfBounds {
        /// Start of the offending range
        start: usize,
        /// End (exclusive) of the offending range
        end: usize,
        /// Length of the buffer it was applied to
        len: usize,
    },
    /// Harness configuration could not be parsed or is unusable
    InvalidConfig(String),
    /// A primitive returned a result that contradicts its documented behaviour
    ContractViolation(String),
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RangeOutOfBounds { start, end, len } => {
                write!(f, "Range {}..{} out of bounds for length {}", start, end, len)
            }
            Self::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            Self::ContractViolation(msg) => write!(f, "Contract violation: {}", msg),
        }
    }
}

impl std::error::Error for BufferError {}

// ============================================================================
// CONVERSIONS
// ============================================================================

/// Convert BufferError to std::io::Error
impl From<BufferError> for std::io::Error {
    fn from(err: BufferError) -> Self {
        use std::io::ErrorKind;
        match err {
            BufferError::RangeOutOfBounds { .. } => {
                std::io::Error::new(ErrorKind::InvalidInput, err)
            }
            BufferError::InvalidConfig(_) => std::io::Error::new(ErrorKind::InvalidData, err),
            BufferError::ContractViolation(_) => std::io::Error::other(err),
        }
    }
}

/// Convert BufferError to anyhow::Error
#[cfg(feature = "anyhow")]
impl From<BufferError> for anyhow::Error {
    fn from(err: BufferError) -> Self {
        anyhow::anyhow!("{}", err)
    }
}

/// Result type alias for fallible buffer operations
pub type Result<T> = std::result::Result<T, BufferError>;

/// Extension trait for converting Results between different error types
pub trait ResultExt<T> {
    /// Convert to anyhow::Result
    #[cfg(feature = "anyhow")]
    fn into_anyhow(self) -> anyhow::Result<T>;

    /// Convert to io::Result
    fn into_io(self) -> std::io::Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    #[cfg(feature = "anyhow")]
    fn into_anyhow(self) -> anyhow::Result<T> {
        self.map_err(|e| e.into())
    }

    fn into_io(self) -> std::io::Result<T> {
        self.map_err(|e| e.into())
    }
}
