//! # passe-adapter
//!
//! Hash adapters for the passe cross-implementation compatibility harness.
//!
//! Every supported scheme exposes the same narrow capability set through
//! [`HashAdapter`]: produce an encoded hash from a password and parameters,
//! and decide whether a password matches a previously encoded hash. Each
//! scheme ships two independent implementations:
//!
//! - a *library* adapter that leaves encoding, parsing and comparison to the
//!   scheme crate's high-level API;
//! - a *raw* adapter that only calls the raw primitive and does its own
//!   textual encoding and constant-time comparison.
//!
//! Hashes produced by one are expected to verify with the other, bit for bit.
//!
//! ## Quick Start
//!
//! ```rust
//! use passe_adapter::{BcryptParameters, HashAdapter, VerificationOutcome};
//! use passe_adapter::bcrypt::{BcryptAdapter, RawBcryptAdapter};
//!
//! let params = BcryptParameters { cost: 4 };
//! let encoded = BcryptAdapter.hash(b"hunter2", &params).expect("cost 4 is valid");
//!
//! assert_eq!(RawBcryptAdapter.verify(b"hunter2", &encoded), VerificationOutcome::Match);
//! assert_eq!(RawBcryptAdapter.verify(b"wrong", &encoded), VerificationOutcome::Mismatch);
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod adapter;
pub mod argon2;
pub mod bcrypt;
pub mod error;
mod guard;
pub mod outcome;
pub mod params;
pub mod secret;

pub use adapter::{HashAdapter, HashRequest, SALT_LENGTH, Salt};
pub use error::{AdapterError, Result};
pub use outcome::{EncodedHash, VerificationOutcome};
pub use params::{Argon2Parameters, BcryptParameters, Scheme, SchemeParameters, SchemeParams};
pub use secret::Password;
