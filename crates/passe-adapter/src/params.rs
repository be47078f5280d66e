//! Scheme identifiers and per-scheme cost parameters.

use std::fmt;

/// Password-hashing scheme covered by the harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// bcrypt (`$2b$`).
    Bcrypt,
    /// Argon2id, version 0x13 (`$argon2id$v=19$`).
    Argon2id,
}

impl Scheme {
    /// Parse a scheme selector token (`bcrypt`, `argon2`, `argon2id`).
    pub fn from_selector(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "bcrypt" => Some(Self::Bcrypt),
            "argon2" | "argon2id" => Some(Self::Argon2id),
            _ => None,
        }
    }

    /// Lowercase scheme name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bcrypt => "bcrypt",
            Self::Argon2id => "argon2id",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameter set tied to a single scheme.
pub trait SchemeParams: Copy + Default + fmt::Debug + Into<SchemeParameters> {
    /// Scheme these parameters belong to.
    const SCHEME: Scheme;
}

/// bcrypt cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BcryptParameters {
    /// Base-2 logarithm of the key-expansion iteration count.
    pub cost: u32,
}

impl BcryptParameters {
    /// Default cost used when none is given.
    pub const DEFAULT_COST: u32 = 4;
    /// Lowest cost the primitive accepts.
    pub const MIN_COST: u32 = 4;
    /// Highest cost the primitive accepts.
    pub const MAX_COST: u32 = 31;

    /// Whether `cost` lies in the supported range.
    pub fn is_supported(&self) -> bool {
        (Self::MIN_COST..=Self::MAX_COST).contains(&self.cost)
    }
}

impl Default for BcryptParameters {
    fn default() -> Self {
        Self {
            cost: Self::DEFAULT_COST,
        }
    }
}

impl SchemeParams for BcryptParameters {
    const SCHEME: Scheme = Scheme::Bcrypt;
}

/// Argon2id cost parameters.
///
/// Output length, salt length and variant are fixed; see the associated
/// constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argon2Parameters {
    /// Number of passes over memory (`t`).
    pub time_cost: u32,
    /// Memory size in KiB (`m`).
    pub memory_cost_kib: u32,
    /// Number of lanes (`p`).
    pub parallelism: u32,
}

impl Argon2Parameters {
    /// Default number of passes.
    pub const DEFAULT_TIME_COST: u32 = 2;
    /// Default memory size in KiB (19 MiB).
    pub const DEFAULT_MEMORY_COST_KIB: u32 = 19_456;
    /// Default number of lanes.
    pub const DEFAULT_PARALLELISM: u32 = 1;
    /// Digest length in bytes.
    pub const HASH_LENGTH: usize = 32;
    /// Salt length in bytes.
    pub const SALT_LENGTH: usize = crate::adapter::SALT_LENGTH;

    /// Build the primitive's parameter block.
    pub(crate) fn to_primitive(self) -> Result<::argon2::Params, ::argon2::Error> {
        ::argon2::Params::new(
            self.memory_cost_kib,
            self.time_cost,
            self.parallelism,
            Some(Self::HASH_LENGTH),
        )
    }
}

impl Default for Argon2Parameters {
    fn default() -> Self {
        Self {
            time_cost: Self::DEFAULT_TIME_COST,
            memory_cost_kib: Self::DEFAULT_MEMORY_COST_KIB,
            parallelism: Self::DEFAULT_PARALLELISM,
        }
    }
}

impl SchemeParams for Argon2Parameters {
    const SCHEME: Scheme = Scheme::Argon2id;
}

/// Scheme parameters, tagged by scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeParameters {
    /// bcrypt parameters.
    Bcrypt(BcryptParameters),
    /// Argon2id parameters.
    Argon2(Argon2Parameters),
}

impl SchemeParameters {
    /// Scheme of the wrapped parameters.
    pub fn scheme(&self) -> Scheme {
        match self {
            Self::Bcrypt(_) => Scheme::Bcrypt,
            Self::Argon2(_) => Scheme::Argon2id,
        }
    }
}

impl From<BcryptParameters> for SchemeParameters {
    fn from(p: BcryptParameters) -> Self {
        Self::Bcrypt(p)
    }
}

impl From<Argon2Parameters> for SchemeParameters {
    fn from(p: Argon2Parameters) -> Self {
        Self::Argon2(p)
    }
}

impl fmt::Display for SchemeParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bcrypt(p) => write!(f, "cost={}", p.cost),
            Self::Argon2(p) => write!(
                f,
                "m={},t={},p={}",
                p.memory_cost_kib, p.time_cost, p.parallelism
            ),
        }
    }
}
