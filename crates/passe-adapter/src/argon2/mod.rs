//! Argon2id adapters.
//!
//! - [`Argon2Adapter`]: defers to the `argon2` crate's `PasswordHasher` /
//!   `PasswordVerifier`
//! - [`RawArgon2Adapter`]: calls `hash_password_into_with_memory` and does
//!   its own PHC encoding and constant-time digest comparison
//!
//! Both reserve the primitive's working memory fallibly before hashing, so a
//! memory cost the host cannot satisfy surfaces as an error instead of an
//! abort.

mod encoding;
mod library;
mod raw;

pub use encoding::{Argon2Variant, PhcHash, VERSION_10, VERSION_13};
pub use library::Argon2Adapter;
pub use raw::RawArgon2Adapter;

use crate::error::AdapterError;
use ::argon2::Block;
use std::collections::TryReserveError;

fn reservation_error(params: &::argon2::Params, err: TryReserveError) -> AdapterError {
    AdapterError::hashing(format!(
        "argon2: cannot reserve {} KiB of working memory: {err}",
        params.m_cost()
    ))
}

/// Check that the working memory for `params` can be reserved.
fn probe_memory(params: &::argon2::Params) -> Result<(), AdapterError> {
    crate::guard::probe_alloc::<Block>(params.block_count())
        .map_err(|e| reservation_error(params, e))
}

/// Reserve and zero the working memory for `params`.
fn reserve_memory(params: &::argon2::Params) -> Result<Vec<Block>, AdapterError> {
    crate::guard::try_alloc::<Block>(params.block_count())
        .map_err(|e| reservation_error(params, e))
}
