//! Custom error types for the codec module.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Invalid length {length}: must be {expected}")]
    InvalidLength {
        length: usize,
        expected: &'static str,
    },

    #[error("Invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("Code {code:?} encodes a value wider than its byte width")]
    ValueOutOfRange { code: String },
}

pub type Result<T> = std::result::Result<T, CodecError>;
