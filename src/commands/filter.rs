//! Filter FASTA records by minimum sequence length.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use fapipe_lib::fasta::{FastaSink, FastaSource};
use fapipe_lib::filter::LengthFilter;
use fapipe_lib::logging::OperationTimer;
use fapipe_lib::pipeline::Pipeline;
use fapipe_lib::progress::ProgressTracker;

use crate::commands::command::Command;
use crate::commands::common::IoOptions;

/// Filter FASTA records by length.
///
/// Streams two-line FASTA records and keeps those whose sequence is at
/// least the minimum length.
#[derive(Debug, Parser)]
#[command(
    name = "filter",
    about = "Drop FASTA records shorter than a minimum length",
    long_about = r"
Stream two-line FASTA records and keep those with at least the minimum
number of bases.

EXAMPLES:

  # Keep reads of 1 kb and up
  fapipe filter -i reads.fa -o long.fa -l 1000

  # Filter a gzipped file from stdin to stdout
  zcat reads.fa.gz | fapipe filter -l 500 > long.fa
"
)]
pub struct Filter {
    /// Input/output paths.
    #[command(flatten)]
    pub io: IoOptions,

    /// Minimum sequence length to keep.
    #[arg(short = 'l', long = "min-length", default_value_t = 1)]
    pub min_length: usize,
}

impl Command for Filter {
    fn execute(&self) -> Result<()> {
        self.io.validate()?;

        let timer = OperationTimer::new("Filtering sequences");
        let tracker = Arc::new(ProgressTracker::new("Read sequences"));

        Pipeline::from_source(
            FastaSource::new(self.io.input.clone()).with_progress(Arc::clone(&tracker)),
        )
        .then(LengthFilter::new(self.min_length))
        .drain(FastaSink::new(self.io.output.clone()))?;

        tracker.log_final();
        timer.log_completion(tracker.count());
        Ok(())
    }
}
