// tests/src/suites/kat/error.rs
//! Structured error types for the known-answer runner

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KatError {
    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("failed to read suite: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse suite: {0}")]
    Json(#[from] serde_json::Error),

    #[error("crypto operation failed: {0}")]
    Crypto(String),

    #[error("{field} must be {expected} bytes, got {actual}")]
    FieldLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("unknown suite or variant: {0}")]
    Unknown(String),

    #[error("mismatch - expected: {expected}, got: {actual}")]
    Mismatch { expected: String, actual: String },
}

pub type Result<T> = std::result::Result<T, KatError>;

impl From<saturnin_algorithms::error::Error> for KatError {
    fn from(e: saturnin_algorithms::error::Error) -> Self {
        KatError::Crypto(e.to_string())
    }
}

impl From<saturnin_api::error::Error> for KatError {
    fn from(e: saturnin_api::error::Error) -> Self {
        KatError::Crypto(e.to_string())
    }
}

/// Decode a hex field into a fixed-size array
pub fn decode_array<const N: usize>(field: &'static str, value: &str) -> Result<[u8; N]> {
    let bytes = hex::decode(value)?;
    let actual = bytes.len();
    bytes.try_into().map_err(|_| KatError::FieldLength {
        field,
        expected: N,
        actual,
    })
}
