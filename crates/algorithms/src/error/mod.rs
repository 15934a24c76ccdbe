//! Error handling for the Saturnin primitives

use core::fmt;

use saturnin_api::Error as CoreError;

/// The error type for the Saturnin primitives
///
/// Variants only carry public facts (lengths, parameter names). An
/// authentication failure says nothing about why the ciphertext was
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Non-empty associated data given to a scheme that cannot bind it
    AssociatedDataUnsupported {
        /// Algorithm that rejected the input
        algorithm: &'static str,
    },

    /// Plaintext exceeds what a single block can carry
    MessageTooLong {
        /// Algorithm that rejected the input
        algorithm: &'static str,
        /// Largest accepted plaintext length
        max: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// Ciphertext is not exactly one block
    InvalidCiphertextLength {
        /// Algorithm that rejected the input
        algorithm: &'static str,
        /// Required ciphertext length
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// Redundancy check failed on a decrypted block
    Authentication {
        /// Algorithm that failed authentication
        algorithm: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for the Saturnin primitives
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length { context, expected, actual } => {
                write!(f, "Invalid length for {}: expected {}, got {}",
                    context, expected, actual)
            }
            Error::AssociatedDataUnsupported { algorithm } => {
                write!(f, "{} does not support associated data", algorithm)
            }
            Error::MessageTooLong { algorithm, max, actual } => {
                write!(f, "Message too long for {}: at most {} bytes, got {}",
                    algorithm, max, actual)
            }
            Error::InvalidCiphertextLength { algorithm, expected, actual } => {
                write!(f, "Invalid ciphertext length for {}: expected {}, got {}",
                    algorithm, expected, actual)
            }
            Error::Authentication { algorithm } => {
                write!(f, "Authentication failed for {}", algorithm)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                #[cfg(feature = "std")]
                message: reason.to_string(),
            },
            Error::Length { context, expected, actual } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::AssociatedDataUnsupported { algorithm } => {
                CoreError::AssociatedDataUnsupported { context: algorithm }
            }
            Error::MessageTooLong { algorithm, max, actual } => CoreError::MessageTooLong {
                context: algorithm,
                max,
                actual,
            },
            Error::InvalidCiphertextLength { algorithm, expected, actual } => {
                #[cfg(not(feature = "std"))]
                let _ = (expected, actual);
                CoreError::InvalidCiphertext {
                    context: algorithm,
                    #[cfg(feature = "std")]
                    message: format!("expected {} bytes, got {}", expected, actual),
                }
            }
            Error::Authentication { algorithm } => CoreError::AuthenticationFailed {
                context: algorithm,
                #[cfg(feature = "std")]
                message: "authentication failed".to_string(),
            },
        }
    }
}

// Re-export the API result extension for convenience
pub use saturnin_api::error::ResultExt;

pub mod validate;
