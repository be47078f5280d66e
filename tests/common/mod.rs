//! Integration test common infrastructure.
//!
//! Spawns the harness binaries and captures what they print.

use std::process::Command;

/// Path to the bcrypt binary.
pub const VERIFY_BCRYPT: &str = env!("CARGO_BIN_EXE_verify_bcrypt");
/// Path to the Argon2id binary.
pub const VERIFY_ARGON2: &str = env!("CARGO_BIN_EXE_verify_argon2");
/// Path to the unified binary.
pub const PASSE_HARNESS: &str = env!("CARGO_BIN_EXE_passe-harness");

/// Captured result of one harness invocation.
#[derive(Debug)]
pub struct Invocation {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl Invocation {
    /// Run `binary` with `args` and a quiet log filter.
    pub fn run(binary: &str, args: &[&str]) -> anyhow::Result<Self> {
        let output = Command::new(binary)
            .args(args)
            .env("RUST_LOG", "warn")
            .output()?;
        Ok(Self {
            code: output.status.code(),
            stdout: String::from_utf8(output.stdout)?,
            stderr: String::from_utf8(output.stderr)?,
        })
    }

    /// The encoded hash from a successful `generate` run.
    pub fn generated_hash(&self) -> anyhow::Result<String> {
        let line = self
            .stdout
            .lines()
            .find_map(|line| line.strip_prefix("Python generated hash: "))
            .ok_or_else(|| anyhow::anyhow!("no generated hash in {:?}", self.stdout))?;
        Ok(line.to_string())
    }
}
