#![deny(unsafe_code)]

//! Nucleotide packing primitives.
//!
//! This crate provides the low-level encoding used by the k-mer subsystem:
//! - 2-bit packing of A/C/G/T bytes
//! - the rolling forward/reverse-complement window that yields canonical
//!   k-mer codes
//! - decoding of packed codes back to base strings

pub mod base;
pub mod kmer;

// Re-export submodule contents at crate root for convenience
pub use base::{complement_code, decode_base, encode_base};
pub use kmer::{CanonicalKmers, MAX_K, decode_kmer};
