//! Process entry points shared by the binaries.

use crate::dispatch::{ExitStatus, Harness};
use crate::error::{HarnessError, HarnessResult};
use crate::resolve::Positional;
use passe_adapter::HashAdapter;
use passe_adapter::argon2::{Argon2Adapter, RawArgon2Adapter};
use passe_adapter::bcrypt::{BcryptAdapter, RawBcryptAdapter};
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::error;

/// Convert raw process arguments, rejecting anything that is not UTF-8.
pub fn collect_args<I>(args: I) -> HarnessResult<Vec<String>>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .enumerate()
        .map(|(index, arg)| {
            arg.into_string().map_err(|_| {
                HarnessError::Usage(format!("Error: argument {} is not valid UTF-8", index + 1))
            })
        })
        .collect()
}

fn setup() -> Option<Vec<String>> {
    if let Err(e) = crate::telemetry::init() {
        eprintln!("{e:#}");
    }
    match collect_args(std::env::args_os().skip(1)) {
        Ok(args) => Some(args),
        Err(e) => {
            eprintln!("{e}");
            None
        }
    }
}

/// Log a write or flush failure on the output streams.
fn report_io(result: io::Result<()>) {
    if let Err(e) = result {
        error!(error = %e, "Failed to write harness output");
    }
}

fn run_with_stdio<A>(harness: &Harness<A>, args: Vec<String>) -> ExitStatus
where
    A: HashAdapter,
    A::Params: Positional,
{
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();
    let status = harness.run(args, &mut out, &mut err);
    report_io(out.flush());
    status
}

/// Entry point for a single-scheme binary.
pub fn run_scheme<A>(adapter: A, program: &str) -> ExitCode
where
    A: HashAdapter,
    A::Params: Positional,
{
    let Some(args) = setup() else {
        return ExitStatus::FAILURE.into();
    };
    run_with_stdio(&Harness::new(adapter, program), args).into()
}

/// Which adapter a scheme selector names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// bcrypt via the `bcrypt` crate's high-level API.
    Bcrypt,
    /// bcrypt via the raw primitive.
    BcryptRaw,
    /// Argon2id via the `argon2` crate's password-hash API.
    Argon2,
    /// Argon2id via the raw primitive.
    Argon2Raw,
}

impl Selector {
    /// Accepted selector tokens.
    pub const TOKENS: &'static [&'static str] = &["bcrypt", "bcrypt-raw", "argon2", "argon2-raw"];

    /// Parse a selector token. `argon2id` is accepted as an alias of `argon2`.
    pub fn parse(token: &str) -> Option<Self> {
        let (scheme, raw) = match token.strip_suffix("-raw") {
            Some(scheme) => (scheme, true),
            None => (token, false),
        };
        match (passe_adapter::Scheme::from_selector(scheme)?, raw) {
            (passe_adapter::Scheme::Bcrypt, false) => Some(Self::Bcrypt),
            (passe_adapter::Scheme::Bcrypt, true) => Some(Self::BcryptRaw),
            (passe_adapter::Scheme::Argon2id, false) => Some(Self::Argon2),
            (passe_adapter::Scheme::Argon2id, true) => Some(Self::Argon2Raw),
        }
    }
}

/// Usage text for the unified binary.
pub fn selector_usage(program: &str) -> String {
    format!(
        "Usage:\n  {program} <scheme> generate <password> [params...]\n  {program} <scheme> verify <password> <hash>\n\nSchemes: {}\n",
        Selector::TOKENS.join(", ")
    )
}

/// Run the unified binary once `args` (without the program name) are known.
pub fn run_selected<O, E>(program: &str, args: Vec<String>, out: &mut O, err: &mut E) -> ExitStatus
where
    O: Write,
    E: Write,
{
    let mut args = args.into_iter();
    let Some(token) = args.next() else {
        report_io(err.write_all(selector_usage(program).as_bytes()));
        return ExitStatus::FAILURE;
    };
    let Some(selector) = Selector::parse(&token) else {
        report_io(writeln!(err, "Unknown scheme: {token}"));
        report_io(err.write_all(selector_usage(program).as_bytes()));
        return ExitStatus::FAILURE;
    };

    let program = format!("{program} {token}");
    let rest: Vec<String> = args.collect();
    match selector {
        Selector::Bcrypt => Harness::new(BcryptAdapter, program).run(rest, out, err),
        Selector::BcryptRaw => Harness::new(RawBcryptAdapter, program).run(rest, out, err),
        Selector::Argon2 => Harness::new(Argon2Adapter, program).run(rest, out, err),
        Selector::Argon2Raw => Harness::new(RawArgon2Adapter, program).run(rest, out, err),
    }
}

/// Entry point for the unified binary.
pub fn run_unified(program: &str) -> ExitCode {
    let Some(args) = setup() else {
        return ExitStatus::FAILURE.into();
    };
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();
    let status = run_selected(program, args, &mut out, &mut err);
    report_io(out.flush());
    status.into()
}
