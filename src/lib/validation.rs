//! Input validation utilities.
//!
//! Common validation for command-line parameters and file paths with
//! consistent error messages, built on the structured error types in
//! [`crate::errors`].

use std::path::Path;

use fapipe_dna::MAX_K;

use crate::errors::{FapipeError, Result};

/// Validate that a file exists.
///
/// # Arguments
/// * `path` - Path to validate
/// * `description` - Human-readable description of the file (e.g., "Input FASTA")
///
/// # Errors
/// Returns an error if the file does not exist
///
/// # Example
/// ```
/// use fapipe_lib::validation::validate_file_exists;
///
/// let result = validate_file_exists("/nonexistent/reads.fa", "Input FASTA");
/// assert!(result.is_err());
/// ```
pub fn validate_file_exists<P: AsRef<Path>>(path: P, description: &str) -> Result<()> {
    let path_ref = path.as_ref();
    if !path_ref.exists() {
        return Err(FapipeError::InvalidFileFormat {
            file_type: description.to_string(),
            path: path_ref.display().to_string(),
            reason: "File does not exist".to_string(),
        });
    }
    Ok(())
}

/// Validate a k-mer size.
///
/// Two bits per base must fit into a 64-bit code, so `k` is limited to
/// `1..=32`.
///
/// # Errors
/// Returns an error if `k` is 0 or exceeds 32
///
/// # Example
/// ```
/// use fapipe_lib::validation::validate_kmer_size;
///
/// assert!(validate_kmer_size(5).is_ok());
/// assert!(validate_kmer_size(0).is_err());
/// assert!(validate_kmer_size(33).is_err());
/// ```
pub fn validate_kmer_size(k: usize) -> Result<()> {
    if k < 1 || k > MAX_K {
        return Err(FapipeError::InvalidParameter {
            parameter: "kmer-size".to_string(),
            reason: format!("must be between 1 and {MAX_K}, got {k}"),
        });
    }
    Ok(())
}

/// Validate a worker thread count.
///
/// # Errors
/// Returns an error if `threads` is 0
pub fn validate_threads(threads: usize) -> Result<()> {
    if threads == 0 {
        return Err(FapipeError::InvalidParameter {
            parameter: "threads".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(())
}
