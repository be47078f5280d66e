//! Command dispatch: `generate` / `verify`, output formatting, exit status.
//!
//! One invocation runs exactly one operation:
//!
//! ```text
//! START → PARSE_ARGS → { GENERATE | VERIFY | USAGE_ERROR } → EXIT(code)
//! ```
//!
//! Output goes to injected writers so the whole flow can be driven in-process.

use crate::error::{HarnessError, HarnessResult};
use crate::resolve::{Positional, resolve};
use passe_adapter::{EncodedHash, HashAdapter, HashRequest, Password, VerificationOutcome};
use std::io::{self, Write};
use tracing::{error, info, warn};

/// Label printed before a generated hash.
pub const GENERATED_LABEL: &str = "Python generated hash:";
/// Line printed when verification matches.
pub const SUCCESS_LINE: &str = "✓ Verification successful";
/// Line printed when verification does not match (or could not run).
pub const FAILURE_LINE: &str = "✗ Verification failed";
/// Prefix of the line reporting a verification error.
pub const VERIFY_ERROR_PREFIX: &str = "Error during verification:";

/// Process exit status of a harness invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitStatus(u8);

impl ExitStatus {
    /// Operation succeeded.
    pub const SUCCESS: Self = Self(0);
    /// Operation failed: mismatch, verification error, hashing failure,
    /// invalid parameter or usage error.
    pub const FAILURE: Self = Self(1);

    /// Exit status for a verification outcome.
    ///
    /// `Mismatch` and `Error` share a code; their output lines differ.
    pub fn for_outcome(outcome: &VerificationOutcome) -> Self {
        match outcome {
            VerificationOutcome::Match => Self::SUCCESS,
            VerificationOutcome::Mismatch | VerificationOutcome::Error(_) => Self::FAILURE,
        }
    }

    /// Numeric exit code.
    pub fn code(self) -> u8 {
        self.0
    }

    /// Whether this is [`ExitStatus::SUCCESS`].
    pub fn is_success(self) -> bool {
        self == Self::SUCCESS
    }
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        Self::from(status.code())
    }
}

/// A parsed harness command.
#[derive(Debug)]
pub enum Command {
    /// `generate <password> [params...]`
    Generate {
        /// Password to hash.
        password: Password,
        /// Unresolved parameter tokens.
        tokens: Vec<String>,
    },
    /// `verify <password> <hash>`
    Verify {
        /// Password to check.
        password: Password,
        /// Hash to check against.
        encoded: EncodedHash,
    },
}

impl Command {
    /// Parse the arguments that follow the program name.
    ///
    /// Takes ownership so the password string moves into its zeroizing buffer
    /// instead of being copied.
    pub fn parse(args: Vec<String>) -> HarnessResult<Self> {
        let mut args = args.into_iter();
        let Some(command) = args.next() else {
            return Err(HarnessError::Usage("missing command".to_string()));
        };

        match command.as_str() {
            "generate" => {
                let Some(password) = args.next() else {
                    return Err(HarnessError::Usage("Error: password required".to_string()));
                };
                Ok(Self::Generate {
                    password: Password::from(password),
                    tokens: args.collect(),
                })
            }
            "verify" => {
                let (Some(password), Some(encoded)) = (args.next(), args.next()) else {
                    return Err(HarnessError::Usage(
                        "Error: password and hash required".to_string(),
                    ));
                };
                let extra = args.count();
                if extra > 0 {
                    warn!(ignored = extra, "Ignoring extra verify arguments");
                }
                Ok(Self::Verify {
                    password: Password::from(password),
                    encoded: EncodedHash::from(encoded),
                })
            }
            other => Err(HarnessError::Usage(format!("Unknown command: {other}"))),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Generate { .. } => "generate",
            Self::Verify { .. } => "verify",
        }
    }
}

/// One scheme's harness: an adapter plus the program name used in usage text.
#[derive(Debug, Clone)]
pub struct Harness<A> {
    adapter: A,
    program: String,
}

impl<A> Harness<A>
where
    A: HashAdapter,
    A::Params: Positional,
{
    /// Create a harness around `adapter`.
    pub fn new(adapter: A, program: impl Into<String>) -> Self {
        Self {
            adapter,
            program: program.into(),
        }
    }

    /// Usage text for this scheme.
    pub fn usage(&self) -> String {
        let params: String = <A::Params as Positional>::NAMES
            .iter()
            .map(|name| format!(" [{name}]"))
            .collect();
        format!(
            "Usage:\n  Generate: {program} generate <password>{params}\n  Verify:   {program} verify <password> <hash>\n",
            program = self.program
        )
    }

    /// Run one invocation and report its exit status.
    pub fn run<O, E>(&self, args: Vec<String>, out: &mut O, err: &mut E) -> ExitStatus
    where
        O: Write,
        E: Write,
    {
        match self.execute(args, out, err) {
            Ok(status) => status,
            Err(e) => {
                error!(error = %e, "Failed to write harness output");
                ExitStatus::FAILURE
            }
        }
    }

    fn execute<O: Write, E: Write>(
        &self,
        args: Vec<String>,
        out: &mut O,
        err: &mut E,
    ) -> io::Result<ExitStatus> {
        if args.is_empty() {
            err.write_all(self.usage().as_bytes())?;
            return Ok(ExitStatus::FAILURE);
        }

        let command = match Command::parse(args) {
            Ok(command) => command,
            Err(e) => {
                info!(error_code = e.error_code(), "Usage error");
                writeln!(err, "{e}")?;
                err.write_all(self.usage().as_bytes())?;
                return Ok(ExitStatus::FAILURE);
            }
        };

        info!(
            scheme = %self.adapter.scheme(),
            implementation = A::IMPLEMENTATION,
            command = command.name(),
            "Dispatching"
        );

        match command {
            Command::Generate { password, tokens } => match self.generate(password, &tokens) {
                Ok(encoded) => {
                    writeln!(out, "{GENERATED_LABEL} {encoded}")?;
                    Ok(ExitStatus::SUCCESS)
                }
                Err(e) => {
                    warn!(error_code = e.error_code(), error = %e, "Generate failed");
                    writeln!(err, "Error: {e}")?;
                    Ok(ExitStatus::FAILURE)
                }
            },
            Command::Verify { password, encoded } => {
                let outcome = self.adapter.verify(password.as_bytes(), &encoded);
                info!(outcome = outcome.label(), "Verification finished");
                match &outcome {
                    VerificationOutcome::Match => writeln!(out, "{SUCCESS_LINE}")?,
                    VerificationOutcome::Mismatch => writeln!(out, "{FAILURE_LINE}")?,
                    VerificationOutcome::Error(e) => {
                        writeln!(err, "{VERIFY_ERROR_PREFIX} {e}")?;
                        writeln!(out, "{FAILURE_LINE}")?;
                    }
                }
                Ok(ExitStatus::for_outcome(&outcome))
            }
        }
    }

    fn generate(&self, password: Password, tokens: &[String]) -> HarnessResult<EncodedHash> {
        let params: A::Params = resolve(tokens)?;
        let request = HashRequest::new(password, params);
        info!(params = %request.parameters(), "Generating hash");
        Ok(request.hash_with(&self.adapter)?)
    }
}
