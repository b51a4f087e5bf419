//! Minimum-length sequence filter.

use anyhow::Result;
use crossbeam_channel::{Receiver, Sender};

use crate::pipeline::Stage;
use crate::seq::Sequence;

/// Stage passing through sequences of at least `min_length` bases.
///
/// Runs a single worker; order is preserved.
pub struct LengthFilter {
    min_length: usize,
}

impl LengthFilter {
    /// Creates a filter keeping sequences with `len >= min_length`.
    #[must_use]
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }
}

impl Stage for LengthFilter {
    type In = Sequence;
    type Out = Sequence;

    fn run(&self, input: &Receiver<Sequence>, out: &Sender<Sequence>) -> Result<()> {
        for seq in input {
            if seq.len() >= self.min_length && out.send(seq).is_err() {
                break;
            }
        }
        Ok(())
    }
}
