use super::encoding::{BcryptVersion, DIGEST_LENGTH, McfHash};
use crate::adapter::{HashAdapter, Salt};
use crate::error::{AdapterError, Result};
use crate::guard::contain;
use crate::outcome::{EncodedHash, VerificationOutcome};
use crate::params::BcryptParameters;
use subtle::ConstantTimeEq;
use tracing::debug;
use zeroize::Zeroizing;

/// bcrypt through the raw primitive, with encoding done here.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawBcryptAdapter;

/// NUL-terminate and cap the password the way the `$2b$` key schedule expects.
fn key_material(password: &[u8]) -> Zeroizing<Vec<u8>> {
    let mut key = Zeroizing::new(Vec::with_capacity(password.len() + 1));
    key.extend_from_slice(password);
    key.push(0);
    key.truncate(super::MAX_PASSWORD_LENGTH);
    key
}

fn digest(cost: u32, salt: Salt, password: &[u8]) -> std::result::Result<[u8; DIGEST_LENGTH], String> {
    let key = key_material(password);
    let output = Zeroizing::new(contain(|| ::bcrypt::bcrypt(cost, salt, &key))?);
    let mut digest = [0u8; DIGEST_LENGTH];
    digest.copy_from_slice(&output[..DIGEST_LENGTH]);
    Ok(digest)
}

impl HashAdapter for RawBcryptAdapter {
    type Params = BcryptParameters;

    const IMPLEMENTATION: &'static str = "bcrypt-raw";

    fn hash_with_salt(
        &self,
        password: &[u8],
        params: &BcryptParameters,
        salt: &Salt,
    ) -> Result<EncodedHash> {
        super::check_hash_request(password, params)?;
        let digest = digest(params.cost, *salt, password).map_err(AdapterError::hashing)?;
        let hash = McfHash {
            version: BcryptVersion::TwoB,
            cost: params.cost,
            salt: *salt,
            digest,
        };
        debug!(implementation = Self::IMPLEMENTATION, cost = params.cost, "bcrypt hash produced");
        Ok(EncodedHash::new(hash.to_string()))
    }

    fn verify(&self, password: &[u8], encoded: &EncodedHash) -> VerificationOutcome {
        if let Err(e) = super::check_password(password) {
            return e.into();
        }
        let expected = match McfHash::parse(encoded.as_str()) {
            Ok(hash) => hash,
            Err(e) => return e.into(),
        };
        let outcome = match digest(expected.cost, expected.salt, password) {
            Ok(computed) => {
                let matched: bool = computed[..].ct_eq(&expected.digest[..]).into();
                VerificationOutcome::from_match(matched)
            }
            Err(panic) => AdapterError::hashing(panic).into(),
        };
        debug!(
            implementation = Self::IMPLEMENTATION,
            version = expected.version.as_str(),
            cost = expected.cost,
            outcome = outcome.label(),
            "bcrypt verify finished"
        );
        outcome
    }
}
