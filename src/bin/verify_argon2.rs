//! Argon2id compatibility harness.
//!
//! `verify_argon2 generate <password> [time_cost] [memory_cost] [parallelism]`
//! `verify_argon2 verify <password> <hash>`

use passe_adapter::argon2::Argon2Adapter;
use std::process::ExitCode;

fn main() -> ExitCode {
    passe_harness::cli::run_scheme(Argon2Adapter, "verify_argon2")
}
