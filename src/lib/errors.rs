//! Custom error types for fapipe operations.

use thiserror::Error;

/// Result type alias for fapipe operations
pub type Result<T> = std::result::Result<T, FapipeError>;

/// Error type for fapipe operations
#[derive(Error, Debug)]
pub enum FapipeError {
    /// Invalid parameter value provided
    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidParameter {
        /// The parameter name
        parameter: String,
        /// Explanation of why it's invalid
        reason: String,
    },

    /// File format or file access error
    #[error("Invalid {file_type} file '{path}': {reason}")]
    InvalidFileFormat {
        /// Type of file (e.g., "FASTA", "report")
        file_type: String,
        /// Path to the file
        path: String,
        /// Explanation of the problem
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter() {
        let error = FapipeError::InvalidParameter {
            parameter: "kmer-size".to_string(),
            reason: "must be between 1 and 32".to_string(),
        };
        let msg = format!("{error}");
        assert!(msg.contains("Invalid parameter 'kmer-size'"));
        assert!(msg.contains("between 1 and 32"));
    }

    #[test]
    fn test_invalid_file_format() {
        let error = FapipeError::InvalidFileFormat {
            file_type: "FASTA".to_string(),
            path: "/path/to/reads.fa".to_string(),
            reason: "File does not exist".to_string(),
        };
        let msg = format!("{error}");
        assert!(msg.contains("Invalid FASTA file"));
        assert!(msg.contains("does not exist"));
    }
}
