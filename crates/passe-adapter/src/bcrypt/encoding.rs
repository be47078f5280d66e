//! bcrypt's modular-crypt encoding: `$2b$cc$<22 salt chars><31 digest chars>`.

use crate::adapter::{SALT_LENGTH, Salt};
use crate::error::{AdapterError, Result};
use base64::{
    Engine as _, alphabet,
    engine::{GeneralPurpose, general_purpose},
};
use std::fmt;

/// bcrypt's base64 flavour: `./A-Za-z0-9`, no padding.
pub(crate) const BCRYPT_B64: GeneralPurpose =
    GeneralPurpose::new(&alphabet::BCRYPT, general_purpose::NO_PAD);

/// Bytes of the 24-byte primitive output that end up in the encoding.
pub const DIGEST_LENGTH: usize = 23;

const SALT_CHARS: usize = 22;
const DIGEST_CHARS: usize = 31;

/// Version tag after the leading `$`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BcryptVersion {
    /// `$2a$`
    TwoA,
    /// `$2b$`
    TwoB,
    /// `$2x$`
    TwoX,
    /// `$2y$`
    TwoY,
}

impl BcryptVersion {
    fn parse(tag: &str) -> Option<Self> {
        match tag {
            "2a" => Some(Self::TwoA),
            "2b" => Some(Self::TwoB),
            "2x" => Some(Self::TwoX),
            "2y" => Some(Self::TwoY),
            _ => None,
        }
    }

    /// Tag text without the surrounding `$`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TwoA => "2a",
            Self::TwoB => "2b",
            Self::TwoX => "2x",
            Self::TwoY => "2y",
        }
    }
}

/// A decoded bcrypt hash string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct McfHash {
    /// Version tag.
    pub version: BcryptVersion,
    /// Cost factor.
    pub cost: u32,
    /// Raw salt.
    pub salt: Salt,
    /// Truncated digest.
    pub digest: [u8; DIGEST_LENGTH],
}

impl McfHash {
    /// Decode `$2?$cc$<salt><digest>`.
    pub fn parse(encoded: &str) -> Result<Self> {
        let rest = encoded
            .strip_prefix('$')
            .ok_or_else(|| AdapterError::malformed("bcrypt hash must start with '$'"))?;
        let mut fields = rest.splitn(3, '$');
        let (Some(tag), Some(cost), Some(payload)) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(AdapterError::malformed("bcrypt hash needs version, cost and payload"));
        };

        let version = BcryptVersion::parse(tag)
            .ok_or_else(|| AdapterError::malformed(format!("unknown bcrypt version '{tag}'")))?;

        if cost.len() != 2 || !cost.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AdapterError::malformed(format!(
                "bcrypt cost must be two digits, got '{cost}'"
            )));
        }
        let cost: u32 = cost
            .parse()
            .map_err(|_| AdapterError::malformed("bcrypt cost is not a number"))?;
        if !(super::MIN_COST..=super::MAX_COST).contains(&cost) {
            return Err(AdapterError::malformed(format!(
                "bcrypt cost {cost} outside {}..={}",
                super::MIN_COST,
                super::MAX_COST
            )));
        }

        if payload.len() != SALT_CHARS + DIGEST_CHARS || !payload.is_ascii() {
            return Err(AdapterError::malformed(format!(
                "bcrypt payload must be {} characters, got {}",
                SALT_CHARS + DIGEST_CHARS,
                payload.len()
            )));
        }
        let (salt_b64, digest_b64) = payload.split_at(SALT_CHARS);

        let salt: Salt = decode_exact(salt_b64, "salt")?;
        let digest: [u8; DIGEST_LENGTH] = decode_exact(digest_b64, "digest")?;

        Ok(Self {
            version,
            cost,
            salt,
            digest,
        })
    }
}

fn decode_exact<const N: usize>(text: &str, what: &str) -> Result<[u8; N]> {
    let bytes = BCRYPT_B64
        .decode(text)
        .map_err(|e| AdapterError::malformed(format!("bcrypt {what}: {e}")))?;
    bytes.try_into().map_err(|v: Vec<u8>| {
        AdapterError::malformed(format!("bcrypt {what} decodes to {} bytes, expected {N}", v.len()))
    })
}

impl fmt::Display for McfHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "${}${:02}${}{}",
            self.version.as_str(),
            self.cost,
            BCRYPT_B64.encode(self.salt),
            BCRYPT_B64.encode(self.digest)
        )
    }
}

const _: () = assert!(SALT_LENGTH == 16);
