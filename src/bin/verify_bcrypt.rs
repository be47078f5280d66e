//! bcrypt compatibility harness.
//!
//! `verify_bcrypt generate <password> [cost]`
//! `verify_bcrypt verify <password> <hash>`

use passe_adapter::bcrypt::BcryptAdapter;
use std::process::ExitCode;

fn main() -> ExitCode {
    passe_harness::cli::run_scheme(BcryptAdapter, "verify_bcrypt")
}
