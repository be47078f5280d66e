use crate::adapter::{HashAdapter, Salt};
use crate::error::{AdapterError, Result};
use crate::guard::contain;
use crate::outcome::{EncodedHash, VerificationOutcome};
use crate::params::Argon2Parameters;
use ::argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::{self, SaltString, rand_core::OsRng},
};
use tracing::debug;

/// Argon2id through the `argon2` crate's password-hash API.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Adapter;

impl Argon2Adapter {
    fn hash_salted(
        &self,
        password: &[u8],
        params: &Argon2Parameters,
        salt: &SaltString,
    ) -> Result<EncodedHash> {
        let primitive = params.to_primitive().map_err(AdapterError::hashing)?;
        super::probe_memory(&primitive)?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, primitive);
        let encoded = contain(|| {
            argon2
                .hash_password(password, salt)
                .map(|hash| hash.to_string())
        })
        .map_err(AdapterError::hashing)?
        .map_err(AdapterError::hashing)?;

        debug!(
            implementation = Self::IMPLEMENTATION,
            m = params.memory_cost_kib,
            t = params.time_cost,
            p = params.parallelism,
            "argon2 hash produced"
        );
        Ok(EncodedHash::new(encoded))
    }
}

impl HashAdapter for Argon2Adapter {
    type Params = Argon2Parameters;

    const IMPLEMENTATION: &'static str = "argon2-library";

    fn hash_with_salt(
        &self,
        password: &[u8],
        params: &Argon2Parameters,
        salt: &Salt,
    ) -> Result<EncodedHash> {
        let salt = SaltString::encode_b64(salt).map_err(AdapterError::hashing)?;
        self.hash_salted(password, params, &salt)
    }

    fn hash(&self, password: &[u8], params: &Argon2Parameters) -> Result<EncodedHash> {
        let salt = SaltString::generate(&mut OsRng);
        self.hash_salted(password, params, &salt)
    }

    fn verify(&self, password: &[u8], encoded: &EncodedHash) -> VerificationOutcome {
        let hash = match PasswordHash::new(encoded.as_str()) {
            Ok(hash) => hash,
            Err(e) => return AdapterError::malformed(e).into(),
        };
        // The verifier reports a missing salt or digest as a plain mismatch
        if hash.salt.is_none() || hash.hash.is_none() {
            return AdapterError::malformed("argon2 hash lacks salt or digest").into();
        }
        let params = match Params::try_from(&hash) {
            Ok(params) => params,
            Err(e) => return AdapterError::malformed(e).into(),
        };
        if let Err(e) = super::probe_memory(&params) {
            return e.into();
        }

        // Algorithm and version come from the hash; the version fallback only
        // applies when `v=` is absent, which libargon2 reads as 0x10
        let verifier = Argon2::new(Algorithm::default(), Version::V0x10, params);
        let outcome = match contain(|| verifier.verify_password(password, &hash)) {
            Ok(Ok(())) => VerificationOutcome::Match,
            Ok(Err(password_hash::Error::Password)) => VerificationOutcome::Mismatch,
            Ok(Err(e)) => AdapterError::malformed(e).into(),
            Err(panic) => AdapterError::hashing(panic).into(),
        };
        debug!(
            implementation = Self::IMPLEMENTATION,
            algorithm = %hash.algorithm,
            outcome = outcome.label(),
            "argon2 verify finished"
        );
        outcome
    }
}
