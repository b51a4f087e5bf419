//! CLI command implementations for fapipe.
//!
//! Each submodule implements one subcommand:
//!
//! - [`filter`] - drop FASTA records shorter than a minimum length
//! - [`rle`] - collapse homopolymer runs, annotating headers with run lengths
//! - [`kmers`] - count canonical k-mers and report the most frequent

pub mod command;
pub mod common;
pub mod filter;
pub mod kmers;
pub mod rle;
