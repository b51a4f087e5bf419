//! Count canonical k-mers across a FASTA stream.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use log::info;

use fapipe_lib::fasta::FastaSource;
use fapipe_lib::kmer::{KmerCounter, KmerEncoder};
use fapipe_lib::logging::OperationTimer;
use fapipe_lib::pipeline::Pipeline;
use fapipe_lib::progress::ProgressTracker;
use fapipe_lib::rle::{RleCollapse, RleEncoder};
use fapipe_lib::validation::validate_kmer_size;

use crate::commands::command::Command;
use crate::commands::common::{IoOptions, ThreadingOptions};

/// Count canonical k-mers.
///
/// Each k-length window is packed 2 bits per base; the reported code is
/// the smaller of the window's forward and reverse-complement packings,
/// so forward and reverse reads of the same molecule count together.
#[derive(Debug, Parser)]
#[command(
    name = "kmers",
    about = "Count canonical k-mers and report the 100 most frequent",
    long_about = r"
Count canonical k-mers across all records and write the 100 most frequent
as '<k-mer> <count>' lines, sorted by count descending.

K-mers are canonicalized: each window counts as the numerically smaller of
its forward and reverse-complement 2-bit packings, making counts
strand-independent. Sequences shorter than k contribute nothing.

With --collapse, homopolymer runs are collapsed to a single base before
k-mer extraction, which makes counts robust to homopolymer-length errors
(common in nanopore data).

EXAMPLES:

  fapipe kmers -i reads.fa -o report.txt -k 16

  # Collapse homopolymers first, 8 workers
  fapipe kmers -i reads.fa -k 12 --collapse -t 8
"
)]
pub struct Kmers {
    /// Input/output paths.
    #[command(flatten)]
    pub io: IoOptions,

    /// Worker threads.
    #[command(flatten)]
    pub threading: ThreadingOptions,

    /// K-mer size (1-32).
    #[arg(short = 'k', long = "kmer-size", default_value_t = 5)]
    pub kmer_size: usize,

    /// Collapse homopolymer runs before extracting k-mers.
    #[arg(short = 'c', long = "collapse", default_value_t = false)]
    pub collapse: bool,
}

impl Command for Kmers {
    fn execute(&self) -> Result<()> {
        self.io.validate()?;
        self.threading.validate()?;
        validate_kmer_size(self.kmer_size)?;
        let workers = self.threading.num_threads();

        info!(
            "Counting canonical {}-mers{}",
            self.kmer_size,
            if self.collapse { " over collapsed homopolymers" } else { "" }
        );
        let timer = OperationTimer::new("Counting k-mers");
        let tracker = Arc::new(ProgressTracker::new("Read sequences"));

        let source =
            FastaSource::new(self.io.input.clone()).with_progress(Arc::clone(&tracker));
        let counter = KmerCounter::new(self.io.output.clone(), self.kmer_size);

        if self.collapse {
            Pipeline::from_source(source)
                .then(RleEncoder::new(workers))
                .then(RleCollapse::new(workers))
                .then(KmerEncoder::new(self.kmer_size, workers))
                .drain(counter)?;
        } else {
            Pipeline::from_source(source)
                .then(KmerEncoder::new(self.kmer_size, workers))
                .drain(counter)?;
        }

        tracker.log_final();
        timer.log_completion(tracker.count());
        Ok(())
    }
}
