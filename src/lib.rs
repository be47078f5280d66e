//! passe-harness - password-hash compatibility harness.
//!
//! Resolves positional parameters, drives a [`HashAdapter`](passe_adapter::HashAdapter)
//! and reports results with the exact output lines and exit codes external
//! tooling matches against. Each binary in this package is a thin wrapper
//! around [`Harness`].

pub mod cli;
pub mod dispatch;
pub mod error;
pub mod resolve;
pub mod telemetry;

pub use dispatch::{Command, ExitStatus, Harness};
pub use error::{HarnessError, HarnessResult};
pub use resolve::{Positional, resolve};
