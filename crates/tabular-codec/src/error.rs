//! Error types for codec operations.

use thiserror::Error;

/// Errors that can occur when converting values through the codec.
///
/// Parsing and grid normalization are total and never fail; only the JSON
/// ingestion boundary rejects input.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Input is not tabular.
    #[error("invalid input: expected {expected}, found {found}")]
    InvalidInput {
        expected: &'static str,
        found: &'static str,
    },
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
