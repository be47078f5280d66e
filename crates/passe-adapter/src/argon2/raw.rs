use super::encoding::{Argon2Variant, PhcHash, VERSION_13};
use crate::adapter::{HashAdapter, Salt};
use crate::error::{AdapterError, Result};
use crate::guard::contain;
use crate::outcome::{EncodedHash, VerificationOutcome};
use crate::params::Argon2Parameters;
use ::argon2::{Algorithm, Argon2, Block, Params, Version};
use subtle::ConstantTimeEq;
use tracing::debug;
use zeroize::Zeroizing;

/// Argon2id through the raw primitive, with encoding done here.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawArgon2Adapter;

/// Why a raw computation did not produce output.
enum ComputeError {
    /// The primitive rejected its inputs.
    Primitive(::argon2::Error),
    /// Memory could not be reserved or the primitive panicked.
    Resource(AdapterError),
}

fn compute(
    algorithm: Algorithm,
    version: Version,
    params: Params,
    password: &[u8],
    salt: &[u8],
    out: &mut [u8],
) -> std::result::Result<(), ComputeError> {
    let mut blocks = super::reserve_memory(&params).map_err(ComputeError::Resource)?;
    let argon2 = Argon2::new(algorithm, version, params);
    let result = contain(|| argon2.hash_password_into_with_memory(password, salt, out, &mut blocks))
        .map_err(|panic| ComputeError::Resource(AdapterError::hashing(panic)))?;
    // Scrub password-derived state before the buffer is freed
    blocks.fill(Block::default());
    result.map_err(ComputeError::Primitive)
}

impl HashAdapter for RawArgon2Adapter {
    type Params = Argon2Parameters;

    const IMPLEMENTATION: &'static str = "argon2-raw";

    fn hash_with_salt(
        &self,
        password: &[u8],
        params: &Argon2Parameters,
        salt: &Salt,
    ) -> Result<EncodedHash> {
        let primitive = params.to_primitive().map_err(AdapterError::hashing)?;
        let mut digest = Zeroizing::new([0u8; Argon2Parameters::HASH_LENGTH]);
        compute(
            Algorithm::Argon2id,
            Version::V0x13,
            primitive,
            password,
            salt,
            &mut digest[..],
        )
        .map_err(|e| match e {
            ComputeError::Primitive(e) => AdapterError::hashing(e),
            ComputeError::Resource(e) => e,
        })?;

        let hash = PhcHash {
            variant: Argon2Variant::Id,
            version: VERSION_13,
            memory_cost_kib: params.memory_cost_kib,
            time_cost: params.time_cost,
            parallelism: params.parallelism,
            salt: salt.to_vec(),
            hash: digest.to_vec(),
        };
        debug!(
            implementation = Self::IMPLEMENTATION,
            m = params.memory_cost_kib,
            t = params.time_cost,
            p = params.parallelism,
            "argon2 hash produced"
        );
        Ok(EncodedHash::new(hash.to_string()))
    }

    fn verify(&self, password: &[u8], encoded: &EncodedHash) -> VerificationOutcome {
        let expected = match PhcHash::parse(encoded.as_str()) {
            Ok(hash) => hash,
            Err(e) => return e.into(),
        };
        let params = match expected.primitive_params() {
            Ok(params) => params,
            Err(e) => return e.into(),
        };

        let mut computed = Zeroizing::new(vec![0u8; expected.hash.len()]);
        let outcome = match compute(
            expected.variant.to_primitive(),
            expected.primitive_version(),
            params,
            password,
            &expected.salt,
            &mut computed[..],
        ) {
            Ok(()) => {
                let matched: bool = computed[..].ct_eq(&expected.hash[..]).into();
                VerificationOutcome::from_match(matched)
            }
            // Inputs came from the hash string, so a rejection means the hash is bad
            Err(ComputeError::Primitive(e)) => AdapterError::malformed(e).into(),
            Err(ComputeError::Resource(e)) => e.into(),
        };
        debug!(
            implementation = Self::IMPLEMENTATION,
            variant = expected.variant.as_str(),
            version = expected.version,
            outcome = outcome.label(),
            "argon2 verify finished"
        );
        outcome
    }
}
