//! Homopolymer run-length encoding and decoding stages.
//!
//! The encoder compacts consecutive repeated bases into (symbol, length)
//! runs; lengths are stored in a single byte and capped at 127, so longer
//! homopolymers split into multiple runs. The decoder is its exact
//! inverse. A textual projection of the run lengths exists for embedding
//! counts into FASTA headers; see [`run_lengths_to_ascii`] for its
//! (deliberately lossy) clamp behavior.

use anyhow::Result;
use crossbeam_channel::{Receiver, Sender};
use log::warn;

use crate::pipeline::Stage;
use crate::seq::{RleSequence, Sequence};

/// Longest run representable in one count byte.
pub const MAX_RUN: u8 = 127;

/// Offset mapping a count to a printable ASCII character.
const ASCII_OFFSET: u8 = 33;

/// Largest count with its own ASCII character; counts at or above this
/// clamp to [`CLAMP_CHAR`].
const CLAMP_THRESHOLD: u8 = 93;

/// `'~'`, the character all clamped counts collapse onto.
const CLAMP_CHAR: u8 = 126;

/// Run-length encodes a base slice into parallel (symbols, counts) runs.
///
/// A run ends when the next byte differs or the count reaches [`MAX_RUN`];
/// the final run is always flushed. An empty slice yields empty runs.
#[must_use]
pub fn run_length_encode(bases: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let mut symbols = Vec::new();
    let mut counts = Vec::new();
    let mut iter = bases.iter();
    let Some(&first) = iter.next() else {
        return (symbols, counts);
    };

    let mut prev = first;
    let mut count: u8 = 1;
    for &b in iter {
        if b == prev && count < MAX_RUN {
            count += 1;
        } else {
            symbols.push(prev);
            counts.push(count);
            prev = b;
            count = 1;
        }
    }
    symbols.push(prev);
    counts.push(count);
    (symbols, counts)
}

/// Expands parallel (symbols, counts) runs back into the original bases.
///
/// Exact inverse of [`run_length_encode`] for any valid run pair.
#[must_use]
pub fn run_length_decode(symbols: &[u8], counts: &[u8]) -> Vec<u8> {
    debug_assert_eq!(symbols.len(), counts.len(), "runs must be parallel");
    let total: usize = counts.iter().map(|&c| usize::from(c)).sum();
    let mut out = Vec::with_capacity(total);
    for (&symbol, &count) in symbols.iter().zip(counts) {
        out.extend(std::iter::repeat_n(symbol, usize::from(count)));
    }
    out
}

/// Projects run lengths onto printable ASCII, one character per run.
///
/// A count `c < 93` maps to `c + 33`; counts in `93..=127` all clamp to
/// `'~'`. The clamp makes this projection lossy for long runs: it is a
/// display encoding for FASTA headers, not a storage format, and the
/// binary counts remain the source of truth.
#[must_use]
pub fn run_lengths_to_ascii(counts: &[u8]) -> String {
    counts
        .iter()
        .map(|&c| if c >= CLAMP_THRESHOLD { CLAMP_CHAR as char } else { (c + ASCII_OFFSET) as char })
        .collect()
}

/// Inverts [`run_lengths_to_ascii`] as far as the clamp allows.
///
/// `'~'` maps back to 93, a floor for any clamped count in `93..=127`.
#[must_use]
pub fn ascii_to_run_lengths(text: &str) -> Vec<u8> {
    text.bytes().map(|c| c.saturating_sub(ASCII_OFFSET)).collect()
}

/// Stage run-length encoding sequences.
///
/// Empty sequences have no defined run decomposition; they are skipped
/// with a diagnostic rather than failing the run.
pub struct RleEncoder {
    workers: usize,
}

impl RleEncoder {
    /// Creates an encoder running `workers` parallel workers.
    #[must_use]
    pub fn new(workers: usize) -> Self {
        Self { workers }
    }
}

impl Stage for RleEncoder {
    type In = Sequence;
    type Out = RleSequence;

    fn worker_count(&self) -> usize {
        self.workers
    }

    fn run(&self, input: &Receiver<Sequence>, out: &Sender<RleSequence>) -> Result<()> {
        for seq in input {
            if seq.is_empty() {
                warn!("skipping empty sequence '{}'", seq.name());
                continue;
            }
            let (name, bases) = seq.into_parts();
            let (symbols, counts) = run_length_encode(&bases);
            if out.send(RleSequence::new(name, symbols, counts)).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Stage expanding run-length encoded sequences back to plain sequences.
pub struct RleDecoder {
    workers: usize,
}

impl RleDecoder {
    /// Creates a decoder running `workers` parallel workers.
    #[must_use]
    pub fn new(workers: usize) -> Self {
        Self { workers }
    }
}

impl Stage for RleDecoder {
    type In = RleSequence;
    type Out = Sequence;

    fn worker_count(&self) -> usize {
        self.workers
    }

    fn run(&self, input: &Receiver<RleSequence>, out: &Sender<Sequence>) -> Result<()> {
        for rle in input {
            let (name, symbols, counts) = rle.into_parts();
            let bases = run_length_decode(&symbols, &counts);
            if out.send(Sequence::new(name, bases)).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Stage projecting RLE sequences to plain sequences with the run lengths
/// appended to the name.
///
/// The output record's bases are the run symbols and its name becomes
/// `"<name> <ascii-counts>"`, ready for FASTA serialization.
pub struct RleAnnotate {
    workers: usize,
}

impl RleAnnotate {
    /// Creates an annotator running `workers` parallel workers.
    #[must_use]
    pub fn new(workers: usize) -> Self {
        Self { workers }
    }
}

impl Stage for RleAnnotate {
    type In = RleSequence;
    type Out = Sequence;

    fn worker_count(&self) -> usize {
        self.workers
    }

    fn run(&self, input: &Receiver<RleSequence>, out: &Sender<Sequence>) -> Result<()> {
        for rle in input {
            let annotated = format!("{} {}", rle.name(), run_lengths_to_ascii(rle.counts()));
            let (_, symbols, _) = rle.into_parts();
            if out.send(Sequence::new(annotated, symbols)).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Stage collapsing homopolymer runs: the output keeps one base per run
/// and discards the counts.
///
/// Feeds the k-mer encoder when counting over collapsed sequences.
pub struct RleCollapse {
    workers: usize,
}

impl RleCollapse {
    /// Creates a collapser running `workers` parallel workers.
    #[must_use]
    pub fn new(workers: usize) -> Self {
        Self { workers }
    }
}

impl Stage for RleCollapse {
    type In = RleSequence;
    type Out = Sequence;

    fn worker_count(&self) -> usize {
        self.workers
    }

    fn run(&self, input: &Receiver<RleSequence>, out: &Sender<Sequence>) -> Result<()> {
        for rle in input {
            let (name, symbols, _) = rle.into_parts();
            if out.send(Sequence::new(name, symbols)).is_err() {
                break;
            }
        }
        Ok(())
    }
}
