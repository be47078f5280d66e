//! passe-harness - run any adapter, library or raw, by scheme selector.
//!
//! `passe-harness <scheme> generate <password> [params...]`
//! `passe-harness <scheme> verify <password> <hash>`

use std::process::ExitCode;

fn main() -> ExitCode {
    passe_harness::cli::run_unified("passe-harness")
}
