//! Unified error handling for the harness.
//!
//! Every failure a harness invocation can hit maps to one of these variants,
//! each of which ends the process with a non-zero exit status and a message
//! on the error stream. A verification mismatch is not an error.

use passe_adapter::AdapterError;
use thiserror::Error;

/// Errors raised while resolving, hashing or dispatching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarnessError {
    #[error("invalid parameter {name} at position {position}: '{token}' is not a non-negative integer")]
    InvalidParameter {
        /// 1-based position among the scheme's parameter tokens.
        position: usize,
        /// Parameter name (`cost`, `time_cost`, ...).
        name: &'static str,
        /// Token as given.
        token: String,
    },

    #[error("hashing failed: {0}")]
    HashingFailure(String),

    #[error("malformed hash: {0}")]
    MalformedHash(String),

    #[error("{0}")]
    Usage(String),
}

impl HarnessError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidParameter { .. } => "invalid_parameter",
            Self::HashingFailure(_) => "hashing_failure",
            Self::MalformedHash(_) => "malformed_hash",
            Self::Usage(_) => "usage_error",
        }
    }
}

impl From<AdapterError> for HarnessError {
    fn from(err: AdapterError) -> Self {
        match err {
            AdapterError::HashingFailure(reason) => Self::HashingFailure(reason),
            AdapterError::MalformedHash(reason) => Self::MalformedHash(reason),
            other => Self::HashingFailure(other.to_string()),
        }
    }
}

/// Result type for harness operations.
pub type HarnessResult<T> = Result<T, HarnessError>;
