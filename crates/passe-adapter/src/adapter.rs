//! The hash-adapter capability set and the per-invocation request.

use crate::error::Result;
use crate::outcome::{EncodedHash, VerificationOutcome};
use crate::params::{Scheme, SchemeParameters, SchemeParams};
use crate::secret::Password;
use rand::{RngCore, rngs::OsRng};
use zeroize::Zeroizing;

/// Salt length in bytes, shared by bcrypt and Argon2id.
pub const SALT_LENGTH: usize = 16;

/// Raw salt bytes.
pub type Salt = [u8; SALT_LENGTH];

/// Boundary to an external password-hashing primitive.
///
/// Implementations must:
/// - compare digests in constant time during [`verify`](Self::verify);
/// - never panic out of `verify`; every failure resolves to a
///   [`VerificationOutcome`];
/// - keep no state between calls beyond their own configuration.
pub trait HashAdapter {
    /// Parameter set accepted by [`hash`](Self::hash).
    type Params: SchemeParams;

    /// Short implementation name for log fields.
    const IMPLEMENTATION: &'static str;

    /// Scheme this adapter speaks.
    fn scheme(&self) -> Scheme {
        <Self::Params as SchemeParams>::SCHEME
    }

    /// Hash `password` with a caller-supplied salt.
    fn hash_with_salt(
        &self,
        password: &[u8],
        params: &Self::Params,
        salt: &Salt,
    ) -> Result<EncodedHash>;

    /// Hash `password` with a fresh random salt.
    fn hash(&self, password: &[u8], params: &Self::Params) -> Result<EncodedHash> {
        let salt = random_salt();
        self.hash_with_salt(password, params, &salt)
    }

    /// Check `password` against a previously encoded hash.
    fn verify(&self, password: &[u8], encoded: &EncodedHash) -> VerificationOutcome;
}

/// Generate a salt from the operating system RNG.
pub fn random_salt() -> Zeroizing<Salt> {
    let mut salt = Zeroizing::new([0u8; SALT_LENGTH]);
    OsRng.fill_bytes(&mut salt[..]);
    salt
}

/// A single hashing request: a password and its scheme parameters.
///
/// The scheme is carried by the parameter type, so a request can never pair
/// one scheme's parameters with another's adapter.
#[derive(Debug, Clone)]
pub struct HashRequest<P: SchemeParams> {
    password: Password,
    params: P,
}

impl<P: SchemeParams> HashRequest<P> {
    /// Create a request.
    pub fn new(password: impl Into<Password>, params: P) -> Self {
        Self {
            password: password.into(),
            params,
        }
    }

    /// Scheme of this request.
    pub fn scheme(&self) -> Scheme {
        P::SCHEME
    }

    /// Password being hashed.
    pub fn password(&self) -> &Password {
        &self.password
    }

    /// Typed parameters.
    pub fn params(&self) -> &P {
        &self.params
    }

    /// Parameters tagged by scheme.
    pub fn parameters(&self) -> SchemeParameters {
        self.params.into()
    }

    /// Run the request through `adapter`.
    pub fn hash_with<A>(&self, adapter: &A) -> Result<EncodedHash>
    where
        A: HashAdapter<Params = P>,
    {
        adapter.hash(self.password.as_bytes(), &self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Argon2Parameters, BcryptParameters};

    #[test]
    fn test_request_scheme_follows_params() {
        let request = HashRequest::new("secret", BcryptParameters::default());
        assert_eq!(request.scheme(), Scheme::Bcrypt);
        assert_eq!(request.parameters(), SchemeParameters::Bcrypt(BcryptParameters { cost: 4 }));

        let request = HashRequest::new("secret", Argon2Parameters::default());
        assert_eq!(request.scheme(), Scheme::Argon2id);
        assert_eq!(request.password().as_bytes(), b"secret");
    }

    #[test]
    fn test_random_salts_differ() {
        let a = random_salt();
        let b = random_salt();
        assert_ne!(*a, *b);
    }
}
