//! Error types for ISCC code generation.
//!
//! Every stage of an identifier computation reports failures through
//! [`IsccError`]. Nothing is retried internally; the first failing stage
//! aborts the whole computation for that call.

use crate::codec::CodecError;
use thiserror::Error;

/// Main error type for ISCC operations.
#[derive(Debug, Error)]
pub enum IsccError {
    /// Meta-ID requested for a protocol version other than 1
    #[error("Unsupported ISCC version: {version} (only version 1 is supported)")]
    UnsupportedVersion { version: u32 },

    /// Sliding window narrower than two elements
    #[error("Invalid window width {width}: sliding window width must be 2 or bigger")]
    InvalidWindowWidth { width: usize },

    /// Base58 encoding or decoding failed
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    /// SimHash inputs of differing byte length
    #[error("Inconsistent digest length at index {index}: expected {expected} bytes, found {found}")]
    InconsistentLength {
        expected: usize,
        found: usize,
        index: usize,
    },

    /// A reduction stage received no input at all
    #[error("Empty input for {stage}")]
    EmptyInput { stage: &'static str },

    /// A component code handed to Content-ID-Mixed could not be decoded
    #[error("Failed to decode component code {code:?}: {source}")]
    DecodeFailure {
        code: String,
        #[source]
        source: CodecError,
    },

    /// Image decoding errors
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Perceptual hash sample too small for the coefficient block, or not square
    #[error("Invalid image sample {width}x{height}: must be square and at least {min} pixels wide")]
    InvalidSample { width: u32, height: u32, min: u32 },

    /// Content-defined chunking failed for a reason other than I/O
    #[error("Chunking error: {0}")]
    Chunking(String),

    /// Configuration values out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Stream I/O errors, surfaced verbatim
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for ISCC operations
pub type Result<T> = std::result::Result<T, IsccError>;

/// Convert ISCC errors to PyO3 exceptions
#[cfg(feature = "python-ext")]
impl From<IsccError> for pyo3::PyErr {
    fn from(err: IsccError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyException, PyIOError, PyValueError};

        match err {
            IsccError::Io(e) => PyIOError::new_err(e.to_string()),
            IsccError::UnsupportedVersion { .. }
            | IsccError::InvalidWindowWidth { .. }
            | IsccError::Codec(_)
            | IsccError::InconsistentLength { .. }
            | IsccError::EmptyInput { .. }
            | IsccError::DecodeFailure { .. }
            | IsccError::InvalidSample { .. }
            | IsccError::InvalidConfig(_) => PyValueError::new_err(err.to_string()),
            _ => PyException::new_err(err.to_string()),
        }
    }
}
