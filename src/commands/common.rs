//! Common CLI options shared across commands.
//!
//! Shared argument structures composed into command structs with
//! `#[command(flatten)]`.

use std::path::PathBuf;

use clap::Args;

use fapipe_lib::validation::{validate_file_exists, validate_threads};

/// Input/output options common to every command.
#[derive(Debug, Clone, Default, Args)]
pub struct IoOptions {
    /// Input FASTA file; reads stdin when omitted. `.gz` files are
    /// decompressed transparently.
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file; writes stdout when omitted. `.gz` outputs are
    /// compressed.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

impl IoOptions {
    /// Validates that the input file exists (stdin needs no check).
    ///
    /// # Errors
    ///
    /// Returns an error if a named input file does not exist.
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(input) = &self.input {
            validate_file_exists(input, "Input FASTA")?;
        }
        Ok(())
    }
}

/// Worker-thread options for commands with parallel stages.
#[derive(Debug, Clone, Args)]
pub struct ThreadingOptions {
    /// Worker threads per parallel stage.
    #[arg(short = 't', long = "threads", default_value_t = 4)]
    pub threads: usize,
}

impl Default for ThreadingOptions {
    fn default() -> Self {
        Self { threads: 4 }
    }
}

impl ThreadingOptions {
    /// Validates the thread count.
    ///
    /// # Errors
    ///
    /// Returns an error if the thread count is 0.
    pub fn validate(&self) -> anyhow::Result<()> {
        validate_threads(self.threads)?;
        Ok(())
    }

    /// Number of workers for each parallel stage.
    #[must_use]
    pub fn num_threads(&self) -> usize {
        self.threads
    }
}
