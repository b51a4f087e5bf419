//! Canonical k-mer encoding and counting stages.
//!
//! The encoder turns each sequence into the packed canonical codes of its
//! k-length windows (see [`fapipe_dna::kmer`] for the encoding itself).
//! The counter aggregates codes across the whole run and writes a ranked
//! report when its input ends.

use std::io::Write;
use std::path::PathBuf;

use ahash::AHashMap;
use anyhow::{Context, Result};
use crossbeam_channel::{Receiver, Sender};
use fapipe_dna::kmer::{CanonicalKmers, decode_kmer};

use crate::fasta::open_writer;
use crate::pipeline::{Sink, Stage};
use crate::seq::{KmerBatch, Sequence};

/// Rows written to the ranked report.
const REPORT_ROWS: usize = 100;

/// Initial count-table capacity.
const TABLE_CAPACITY: usize = 1 << 20;

/// Stage encoding sequences into canonical k-mer code batches.
///
/// Embarrassingly parallel: each worker keeps only per-sequence scratch.
/// Sequences shorter than `k` produce no batch.
pub struct KmerEncoder {
    k: usize,
    workers: usize,
}

impl KmerEncoder {
    /// Creates an encoder for windows of `k` bases across `workers`
    /// parallel workers. `k` must already be validated to `1..=32`.
    #[must_use]
    pub fn new(k: usize, workers: usize) -> Self {
        Self { k, workers }
    }
}

impl Stage for KmerEncoder {
    type In = Sequence;
    type Out = KmerBatch;

    fn worker_count(&self) -> usize {
        self.workers
    }

    fn run(&self, input: &Receiver<Sequence>, out: &Sender<KmerBatch>) -> Result<()> {
        for seq in input {
            if seq.len() < self.k {
                continue;
            }
            let kmers: Vec<u64> = CanonicalKmers::new(seq.bases(), self.k).collect();
            if out.send(KmerBatch::new(kmers, self.k)).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Sink counting k-mer occurrences and writing a ranked report.
///
/// Runs as the pipeline's single aggregation worker, so it owns the count
/// table outright; exclusivity is structural, not lock-based. On
/// end-of-stream the table is ranked by descending count (ties arbitrary)
/// and the top rows are written as `<k-mer> <count>` lines.
pub struct KmerCounter {
    output: Option<PathBuf>,
    k: usize,
    counts: AHashMap<u64, u64>,
}

impl KmerCounter {
    /// Creates a counter writing its report to `output`, or stdout when
    /// `None`.
    #[must_use]
    pub fn new(output: Option<PathBuf>, k: usize) -> Self {
        Self { output, k, counts: AHashMap::with_capacity(TABLE_CAPACITY) }
    }

    fn write_report(self) -> Result<()> {
        let mut rows: Vec<(u64, u64)> = self.counts.into_iter().collect();
        rows.sort_unstable_by(|a, b| b.1.cmp(&a.1));

        let mut out = open_writer(self.output.as_deref())?;
        for (code, count) in rows.into_iter().take(REPORT_ROWS) {
            writeln!(out, "{} {}", decode_kmer(code, self.k), count)
                .context("failed to write k-mer report")?;
        }
        out.flush().context("failed to flush k-mer report")
    }
}

impl Sink for KmerCounter {
    type In = KmerBatch;

    fn run(mut self, input: &Receiver<KmerBatch>) -> Result<()> {
        for batch in input {
            for &code in batch.kmers() {
                *self.counts.entry(code).or_insert(0) += 1;
            }
        }
        self.write_report()
    }
}
