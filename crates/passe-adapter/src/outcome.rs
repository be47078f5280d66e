//! Encoded hashes and verification outcomes.

use crate::error::AdapterError;
use std::fmt;

/// A hash in its scheme's standard textual encoding.
///
/// The harness treats this as opaque; only adapters look inside.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedHash(String);

impl EncodedHash {
    /// Wrap an encoded hash string.
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// The encoded form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the encoded string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for EncodedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EncodedHash {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EncodedHash {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Result of checking a password against an encoded hash.
///
/// `Mismatch` is a legitimate negative answer. `Error` means the question
/// could not be answered, typically because the hash is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// The password produces the encoded digest.
    Match,
    /// The hash is well formed but the password does not match it.
    Mismatch,
    /// Verification could not be carried out.
    Error(AdapterError),
}

impl VerificationOutcome {
    /// Map a digest comparison result to `Match` / `Mismatch`.
    #[inline]
    pub fn from_match(matched: bool) -> Self {
        if matched { Self::Match } else { Self::Mismatch }
    }

    /// Whether this outcome is `Match`.
    #[inline]
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match)
    }

    /// Static label for log fields.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Match => "match",
            Self::Mismatch => "mismatch",
            Self::Error(e) => e.error_code(),
        }
    }
}

impl From<AdapterError> for VerificationOutcome {
    fn from(err: AdapterError) -> Self {
        Self::Error(err)
    }
}
