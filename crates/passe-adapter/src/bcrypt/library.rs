use super::encoding::McfHash;
use crate::adapter::{HashAdapter, Salt};
use crate::error::{AdapterError, Result};
use crate::guard::contain;
use crate::outcome::{EncodedHash, VerificationOutcome};
use crate::params::BcryptParameters;
use tracing::debug;

/// bcrypt through the `bcrypt` crate's high-level API.
#[derive(Debug, Clone, Copy, Default)]
pub struct BcryptAdapter;

impl HashAdapter for BcryptAdapter {
    type Params = BcryptParameters;

    const IMPLEMENTATION: &'static str = "bcrypt-library";

    fn hash_with_salt(
        &self,
        password: &[u8],
        params: &BcryptParameters,
        salt: &Salt,
    ) -> Result<EncodedHash> {
        super::check_hash_request(password, params)?;
        let parts = contain(|| ::bcrypt::hash_with_salt(password, params.cost, *salt))
            .map_err(AdapterError::hashing)?
            .map_err(AdapterError::hashing)?;
        debug!(implementation = Self::IMPLEMENTATION, cost = params.cost, "bcrypt hash produced");
        Ok(EncodedHash::new(
            parts.format_for_version(::bcrypt::Version::TwoB),
        ))
    }

    fn hash(&self, password: &[u8], params: &BcryptParameters) -> Result<EncodedHash> {
        super::check_hash_request(password, params)?;
        let encoded = contain(|| ::bcrypt::hash(password, params.cost))
            .map_err(AdapterError::hashing)?
            .map_err(AdapterError::hashing)?;
        debug!(implementation = Self::IMPLEMENTATION, cost = params.cost, "bcrypt hash produced");
        Ok(EncodedHash::new(encoded))
    }

    fn verify(&self, password: &[u8], encoded: &EncodedHash) -> VerificationOutcome {
        if let Err(e) = super::check_password(password) {
            return e.into();
        }
        // `bcrypt::verify` tolerates non-canonical strings such as a one-digit cost
        if let Err(e) = McfHash::parse(encoded.as_str()) {
            return e.into();
        }
        let outcome = match contain(|| ::bcrypt::verify(password, encoded.as_str())) {
            Ok(Ok(matched)) => VerificationOutcome::from_match(matched),
            Ok(Err(e)) => AdapterError::malformed(e).into(),
            Err(panic) => AdapterError::malformed(panic).into(),
        };
        debug!(
            implementation = Self::IMPLEMENTATION,
            outcome = outcome.label(),
            "bcrypt verify finished"
        );
        outcome
    }
}
