//! Error types raised at the hash-adapter boundary.

use thiserror::Error;

/// Convenience type alias for Results using [`AdapterError`].
pub type Result<T, E = AdapterError> = std::result::Result<T, E>;

/// Failures reported by a hash adapter.
///
/// Faults inside a primitive (rejected parameters, allocation failure, a
/// panic) are folded into one of these variants before they leave the adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AdapterError {
    /// The primitive refused to produce a hash for the given input.
    #[error("hashing failed: {0}")]
    HashingFailure(String),

    /// The encoded hash is not a valid instance of the scheme's encoding.
    #[error("malformed hash: {0}")]
    MalformedHash(String),
}

impl AdapterError {
    /// Build a [`AdapterError::HashingFailure`] from anything displayable.
    pub fn hashing(reason: impl std::fmt::Display) -> Self {
        Self::HashingFailure(reason.to_string())
    }

    /// Build a [`AdapterError::MalformedHash`] from anything displayable.
    pub fn malformed(reason: impl std::fmt::Display) -> Self {
        Self::MalformedHash(reason.to_string())
    }

    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::HashingFailure(_) => "hashing_failure",
            Self::MalformedHash(_) => "malformed_hash",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_distinct() {
        let hashing = AdapterError::hashing("cost 99");
        let malformed = AdapterError::malformed("bad prefix");
        assert_eq!(hashing.error_code(), "hashing_failure");
        assert_eq!(malformed.error_code(), "malformed_hash");
    }

    #[test]
    fn test_display_includes_reason() {
        let err = AdapterError::malformed("missing salt");
        assert_eq!(err.to_string(), "malformed hash: missing salt");
    }
}
