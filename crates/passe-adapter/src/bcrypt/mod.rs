//! bcrypt adapters.
//!
//! - [`BcryptAdapter`]: defers to the `bcrypt` crate's `hash`/`verify`
//! - [`RawBcryptAdapter`]: calls the raw `bcrypt` primitive and does its own
//!   modular-crypt encoding and constant-time digest comparison

mod encoding;
mod library;
mod raw;

pub use encoding::{BcryptVersion, DIGEST_LENGTH, McfHash};
pub use library::BcryptAdapter;
pub use raw::RawBcryptAdapter;

use crate::error::{AdapterError, Result};
use crate::params::BcryptParameters;

/// Lowest supported cost.
pub const MIN_COST: u32 = BcryptParameters::MIN_COST;
/// Highest supported cost.
pub const MAX_COST: u32 = BcryptParameters::MAX_COST;
/// Longest password bcrypt consumes, in bytes.
pub const MAX_PASSWORD_LENGTH: usize = 72;

/// Reject passwords the primitive cannot represent.
///
/// The key schedule consumes a NUL-terminated string, so an embedded NUL
/// would silently cut the password short.
fn check_password(password: &[u8]) -> Result<()> {
    if password.contains(&0) {
        return Err(AdapterError::hashing("bcrypt: password contains null bytes"));
    }
    Ok(())
}

/// Validate a generation request before it reaches the primitive.
fn check_hash_request(password: &[u8], params: &BcryptParameters) -> Result<()> {
    check_password(password)?;
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(AdapterError::hashing(format!(
            "bcrypt: password is {} bytes, limit is {MAX_PASSWORD_LENGTH}",
            password.len()
        )));
    }
    if !params.is_supported() {
        return Err(AdapterError::hashing(format!(
            "bcrypt: cost {} outside {MIN_COST}..={MAX_COST}",
            params.cost
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_bytes_rejected() {
        let err = check_password(b"hun\0ter2").unwrap_err();
        assert!(matches!(err, AdapterError::HashingFailure(_)));
    }

    #[test]
    fn test_length_limit() {
        let params = BcryptParameters::default();
        assert!(check_hash_request(&[b'a'; 72], &params).is_ok());
        assert!(check_hash_request(&[b'a'; 73], &params).is_err());
    }

    #[test]
    fn test_cost_limit() {
        assert!(check_hash_request(b"pw", &BcryptParameters { cost: 3 }).is_err());
        assert!(check_hash_request(b"pw", &BcryptParameters { cost: 32 }).is_err());
    }
}
