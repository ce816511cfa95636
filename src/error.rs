//! Unified error handling for vecforge
//!
//! This module provides a centralized error type for the simulator. Errors
//! are categorized as:
//! - User errors (invalid workload size or configuration)
//! - Kernel errors (a kernel broke an instruction precondition)
//! - Internal errors (poisoned locks, report serialization)

use std::fmt;

// Re-export thiserror for convenience
pub use thiserror;

/// Unified error type for vecforge
#[derive(Debug, thiserror::Error)]
pub enum VecForgeError {
    // ========== Register/Lane Errors ==========
    /// Lane index outside `[0, width)`
    #[error("Lane index {lane} out of bounds for vector width {width}")]
    LaneOutOfBounds { lane: usize, width: usize },

    /// An active lane of a load/store addresses past the end of storage
    #[error("Active lane {lane} addresses storage of length {len}")]
    StorageOutOfBounds { lane: usize, len: usize },

    // ========== Kernel Errors ==========
    /// Input/output slices passed to a kernel disagree in length
    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Vector output differs from the serial reference
    #[error("Wrong calculation at index {index}: expected {expected}, got {actual}")]
    ResultMismatch {
        index: usize,
        expected: f32,
        actual: f32,
    },

    // ========== Configuration Errors ==========
    /// Workload size must be positive
    #[error("Invalid workload size: {0}. Must be > 0")]
    InvalidWorkloadSize(i64),

    /// Invalid run configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    // ========== Internal Errors ==========
    /// Report serialization failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Shared logger lock poisoned by a panicking worker
    #[error("Internal lock poisoned: {0}")]
    LockPoisoned(String),
}

impl VecForgeError {
    /// Categorize the error for handling decisions
    pub fn category(&self) -> ErrorCategory {
        match self {
            VecForgeError::InvalidWorkloadSize(_) | VecForgeError::InvalidConfiguration(_) => {
                ErrorCategory::User
            }

            VecForgeError::LaneOutOfBounds { .. }
            | VecForgeError::StorageOutOfBounds { .. }
            | VecForgeError::LengthMismatch { .. }
            | VecForgeError::ResultMismatch { .. } => ErrorCategory::Kernel,

            VecForgeError::SerializationFailed(_) | VecForgeError::LockPoisoned(_) => {
                ErrorCategory::Internal
            }
        }
    }

    /// Check if this is a user-facing error (actionable by users)
    pub fn is_user_error(&self) -> bool {
        matches!(self.category(), ErrorCategory::User)
    }

    /// Check if a kernel violated an instruction precondition
    pub fn is_kernel_error(&self) -> bool {
        matches!(self.category(), ErrorCategory::Kernel)
    }

    /// Check if this is an internal error (indicates a bug)
    pub fn is_internal_error(&self) -> bool {
        matches!(self.category(), ErrorCategory::Internal)
    }
}

/// Error category for handling decisions
///
/// - User: Show to user, ask them to fix input
/// - Kernel: A kernel issued an instruction with invalid operands
/// - Internal: Log and report as bug
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User error - invalid input or configuration
    User,
    /// Kernel error - instruction precondition violated
    Kernel,
    /// Internal error - indicates a bug
    Internal,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::User => write!(f, "User"),
            ErrorCategory::Kernel => write!(f, "Kernel"),
            ErrorCategory::Internal => write!(f, "Internal"),
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for VecForgeError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        VecForgeError::LockPoisoned(err.to_string())
    }
}

impl From<serde_json::Error> for VecForgeError {
    fn from(err: serde_json::Error) -> Self {
        VecForgeError::SerializationFailed(err.to_string())
    }
}

// Helper type alias for Results using VecForgeError
pub type ForgeResult<T> = std::result::Result<T, VecForgeError>;

// ========== Helper Functions ==========

/// Create a configuration error with context
///
/// # Examples
/// ```ignore
/// return Err(user_error!("seed must be set for replay"));
/// ```
#[macro_export]
macro_rules! user_error {
    ($msg:expr) => {
        $crate::error::VecForgeError::InvalidConfiguration($msg.to_string())
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::VecForgeError::InvalidConfiguration(format!($fmt, $($arg)*))
    };
}

/// Check that two kernel buffers have the same length
pub fn check_len(expected: usize, actual: usize) -> ForgeResult<()> {
    if expected != actual {
        return Err(VecForgeError::LengthMismatch { expected, actual });
    }
    Ok(())
}
