//! Run-length encode homopolymer runs in FASTA records.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use fapipe_lib::fasta::{FastaSink, FastaSource};
use fapipe_lib::logging::OperationTimer;
use fapipe_lib::pipeline::Pipeline;
use fapipe_lib::progress::ProgressTracker;
use fapipe_lib::rle::{RleAnnotate, RleEncoder};

use crate::commands::command::Command;
use crate::commands::common::{IoOptions, ThreadingOptions};

/// Collapse homopolymer runs.
///
/// Each output record holds one base per run, with the run lengths
/// appended to the header as printable ASCII (count + 33, clamped to `~`
/// for runs of 93 and longer).
#[derive(Debug, Parser)]
#[command(
    name = "rle",
    about = "Collapse homopolymer runs, annotating headers with run lengths",
    long_about = r"
Run-length encode each record's homopolymer runs. The output is two-line
FASTA whose sequence keeps one base per run; the run lengths are appended
to the header, one printable character per run (count + 33, with counts of
93..=127 clamped to '~'). Runs longer than 127 bases are split.

EXAMPLES:

  fapipe rle -i reads.fa -o collapsed.fa

  # 'AACCC' becomes the record '>s #$' / 'AC'
  printf '>s\nAACCC\n' | fapipe rle
"
)]
pub struct Rle {
    /// Input/output paths.
    #[command(flatten)]
    pub io: IoOptions,

    /// Worker threads.
    #[command(flatten)]
    pub threading: ThreadingOptions,
}

impl Command for Rle {
    fn execute(&self) -> Result<()> {
        self.io.validate()?;
        self.threading.validate()?;
        let workers = self.threading.num_threads();

        let timer = OperationTimer::new("Run-length encoding sequences");
        let tracker = Arc::new(ProgressTracker::new("Read sequences"));

        Pipeline::from_source(
            FastaSource::new(self.io.input.clone()).with_progress(Arc::clone(&tracker)),
        )
        .then(RleEncoder::new(workers))
        .then(RleAnnotate::new(workers))
        .drain(FastaSink::new(self.io.output.clone()))?;

        tracker.log_final();
        timer.log_completion(tracker.count());
        Ok(())
    }
}
