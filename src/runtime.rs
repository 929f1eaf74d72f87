//! Runtime abstraction for environment operations.
//!
//! The tool touches its environment in exactly two places: reading secrets
//! from environment variables and emitting the final value to the invoking
//! environment. Both sit behind this trait so tests can substitute them.

use anyhow::{Context, Result};
use std::env;
use std::io::Write;

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    fn env_var(&self, key: &str) -> Result<String, env::VarError>;

    /// Emits the operation's output value to the invoking environment.
    fn write_output(&self, value: &str) -> Result<()>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    #[tracing::instrument(skip(self))]
    fn env_var(&self, key: &str) -> Result<String, env::VarError> {
        env::var(key)
    }

    #[tracing::instrument(skip(self, value))]
    fn write_output(&self, value: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", value).context("Failed to write output")?;
        stdout.flush().context("Failed to flush output")
    }
}
