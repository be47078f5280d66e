//! Password material with zeroize-on-drop.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Password bytes that are zeroized when dropped.
///
/// Each request owns its own buffer; nothing holding password material is
/// shared between requests.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Password(Vec<u8>);

impl Password {
    /// Wrap raw password bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Borrow the password bytes (for passing to a hash adapter).
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length of the password in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the password is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Password {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl From<&str> for Password {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print actual content
        f.debug_struct("Password")
            .field("len", &self.0.len())
            .finish()
    }
}
