//! Integration tests for the fapipe library.
//!
//! These tests run full pipelines end-to-end over temporary FASTA files,
//! validating the wiring each CLI command performs.

mod helpers;
mod test_filter_command;
mod test_kmers_command;
mod test_rle_command;
