//! Argon2's PHC string format: `$argon2id$v=19$m=…,t=…,p=…$<salt>$<hash>`.
//!
//! Field order and strictness follow the reference `argon2` C library's
//! decoder: parameters must appear as `m`, `t`, `p` in that order, and a
//! missing `v=` segment means version 0x10.

use crate::error::{AdapterError, Result};
use base64::{Engine as _, engine::general_purpose::STANDARD_NO_PAD};
use std::fmt;

/// Version 1.0 (`0x10`), implied when `v=` is absent.
pub const VERSION_10: u32 = 0x10;
/// Version 1.3 (`0x13`, printed as `v=19`).
pub const VERSION_13: u32 = 0x13;

/// Argon2 variant tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argon2Variant {
    /// `argon2d`
    D,
    /// `argon2i`
    I,
    /// `argon2id`
    Id,
}

impl Argon2Variant {
    fn parse(tag: &str) -> Option<Self> {
        match tag {
            "argon2d" => Some(Self::D),
            "argon2i" => Some(Self::I),
            "argon2id" => Some(Self::Id),
            _ => None,
        }
    }

    /// Identifier used in the encoding.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::D => "argon2d",
            Self::I => "argon2i",
            Self::Id => "argon2id",
        }
    }

    pub(crate) fn to_primitive(self) -> ::argon2::Algorithm {
        match self {
            Self::D => ::argon2::Algorithm::Argon2d,
            Self::I => ::argon2::Algorithm::Argon2i,
            Self::Id => ::argon2::Algorithm::Argon2id,
        }
    }
}

/// A decoded Argon2 hash string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhcHash {
    /// Variant.
    pub variant: Argon2Variant,
    /// Numeric version (`0x10` or `0x13`).
    pub version: u32,
    /// `m`, in KiB.
    pub memory_cost_kib: u32,
    /// `t`.
    pub time_cost: u32,
    /// `p`.
    pub parallelism: u32,
    /// Raw salt.
    pub salt: Vec<u8>,
    /// Raw digest.
    pub hash: Vec<u8>,
}

impl PhcHash {
    /// Decode a PHC string.
    pub fn parse(encoded: &str) -> Result<Self> {
        let rest = encoded
            .strip_prefix('$')
            .ok_or_else(|| AdapterError::malformed("argon2 hash must start with '$'"))?;
        let fields: Vec<&str> = rest.split('$').collect();

        let (tag, version, params, salt, hash) = match fields.as_slice() {
            [tag, version, params, salt, hash] => {
                let version = version.strip_prefix("v=").ok_or_else(|| {
                    AdapterError::malformed(format!("expected 'v=' segment, got '{version}'"))
                })?;
                (*tag, decimal(version, "v")?, *params, *salt, *hash)
            }
            [tag, params, salt, hash] => (*tag, VERSION_10, *params, *salt, *hash),
            _ => {
                return Err(AdapterError::malformed(format!(
                    "argon2 hash has {} segments",
                    fields.len()
                )));
            }
        };

        let variant = Argon2Variant::parse(tag)
            .ok_or_else(|| AdapterError::malformed(format!("unknown argon2 variant '{tag}'")))?;
        if version != VERSION_10 && version != VERSION_13 {
            return Err(AdapterError::malformed(format!("unsupported argon2 version {version}")));
        }

        let mut values = params.split(',');
        let memory_cost_kib = named_decimal(values.next(), "m")?;
        let time_cost = named_decimal(values.next(), "t")?;
        let parallelism = named_decimal(values.next(), "p")?;
        if let Some(extra) = values.next() {
            return Err(AdapterError::malformed(format!("unexpected argon2 parameter '{extra}'")));
        }

        Ok(Self {
            variant,
            version,
            memory_cost_kib,
            time_cost,
            parallelism,
            salt: decode(salt, "salt")?,
            hash: decode(hash, "hash")?,
        })
    }

    /// Primitive parameter block with the output length taken from the digest.
    pub(crate) fn primitive_params(&self) -> Result<::argon2::Params> {
        ::argon2::Params::new(
            self.memory_cost_kib,
            self.time_cost,
            self.parallelism,
            Some(self.hash.len()),
        )
        .map_err(|e| AdapterError::malformed(format!("argon2 parameters: {e}")))
    }

    pub(crate) fn primitive_version(&self) -> ::argon2::Version {
        if self.version == VERSION_10 {
            ::argon2::Version::V0x10
        } else {
            ::argon2::Version::V0x13
        }
    }
}

fn decimal(text: &str, name: &str) -> Result<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AdapterError::malformed(format!("argon2 '{name}' must be decimal, got '{text}'")));
    }
    text.parse()
        .map_err(|_| AdapterError::malformed(format!("argon2 '{name}' out of range: '{text}'")))
}

fn named_decimal(pair: Option<&str>, name: &str) -> Result<u32> {
    let pair = pair.ok_or_else(|| AdapterError::malformed(format!("argon2 '{name}' missing")))?;
    match pair.split_once('=') {
        Some((key, value)) if key == name => decimal(value, name),
        _ => Err(AdapterError::malformed(format!("expected argon2 '{name}=', got '{pair}'"))),
    }
}

fn decode(text: &str, what: &str) -> Result<Vec<u8>> {
    if text.is_empty() {
        return Err(AdapterError::malformed(format!("argon2 {what} is empty")));
    }
    STANDARD_NO_PAD
        .decode(text)
        .map_err(|e| AdapterError::malformed(format!("argon2 {what}: {e}")))
}

impl fmt::Display for PhcHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "${}$v={}$m={},t={},p={}${}${}",
            self.variant.as_str(),
            self.version,
            self.memory_cost_kib,
            self.time_cost,
            self.parallelism,
            STANDARD_NO_PAD.encode(&self.salt),
            STANDARD_NO_PAD.encode(&self.hash)
        )
    }
}
