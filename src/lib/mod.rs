#![deny(unsafe_code)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::uninlined_format_args
)]

//! # fapipe - streaming FASTA toolkit library
//!
//! This library provides the building blocks behind the `fapipe` command
//! line tool: a typed, staged pipeline engine and the processing stages
//! that run inside it.
//!
//! ## Overview
//!
//! - **[`pipeline`]** - staged worker-pool engine over bounded channels
//! - **[`seq`]** - sequence record types ([`seq::Sequence`],
//!   [`seq::RleSequence`], [`seq::KmerBatch`])
//! - **[`fasta`]** - two-line FASTA source and sink stages
//! - **[`filter`]** - minimum-length filter stage
//! - **[`kmer`]** - canonical k-mer encoder stage and counting sink
//! - **[`rle`]** - homopolymer run-length encoder/decoder stages
//!
//! ### Utilities
//!
//! - **[`validation`]** - parameter and file validation
//! - **[`progress`]** - interval progress logging
//! - **[`logging`]** - count/duration/rate formatting helpers
//!
//! ## Quick Start
//!
//! ```no_run
//! use fapipe_lib::fasta::{FastaSink, FastaSource};
//! use fapipe_lib::filter::LengthFilter;
//! use fapipe_lib::pipeline::Pipeline;
//!
//! # fn main() -> anyhow::Result<()> {
//! Pipeline::from_source(FastaSource::new(Some("reads.fa".into())))
//!     .then(LengthFilter::new(100))
//!     .drain(FastaSink::new(Some("long.fa".into())))?;
//! # Ok(())
//! # }
//! ```
//!
//! Stage inputs and outputs are associated types, so an impossible wiring
//! (say, feeding k-mer batches to the FASTA sink) is a compile error, not a
//! runtime warning.

pub mod errors;
pub mod fasta;
pub mod filter;
pub mod kmer;
pub mod logging;
pub mod pipeline;
pub mod progress;
pub mod rle;
pub mod seq;
pub mod validation;

pub use errors::FapipeError;
pub use seq::{KmerBatch, RleSequence, Sequence};
