//! Error type definitions for cryptographic operations

/// Primary error type for cryptographic operations
///
/// None of the variants carries secret-derived data. In particular
/// `AuthenticationFailed` never says which redundancy check rejected the
/// ciphertext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid parameter error (e.g. a super-round count above 31)
    InvalidParameter {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Associated data was supplied to a scheme that cannot authenticate it
    AssociatedDataUnsupported {
        context: &'static str,
    },

    /// Plaintext longer than the scheme can carry
    MessageTooLong {
        context: &'static str,
        max: usize,
        actual: usize,
    },

    /// Ciphertext has the wrong shape
    InvalidCiphertext {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Authentication failed error
    AuthenticationFailed {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidParameter { .. } => Self::InvalidParameter {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::AssociatedDataUnsupported { .. } => Self::AssociatedDataUnsupported { context },
            Self::MessageTooLong { max, actual, .. } => Self::MessageTooLong {
                context,
                max,
                actual,
            },
            Self::InvalidCiphertext { .. } => Self::InvalidCiphertext {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::AuthenticationFailed { .. } => Self::AuthenticationFailed {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
        }
    }

    /// Add a message to an existing error (when std is available)
    ///
    /// Variants without a message slot are returned unchanged.
    #[cfg(feature = "std")]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::InvalidCiphertext { context, .. } => Self::InvalidCiphertext { context, message },
            Self::AuthenticationFailed { context, .. } => {
                Self::AuthenticationFailed { context, message }
            }
            other => other,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            },
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { context } => {
                write!(f, "Invalid parameter: {}", context)
            },
            Self::InvalidLength { context, expected, actual } => {
                write!(f, "{}: invalid length (expected {}, got {})",
                    context, expected, actual)
            },
            Self::AssociatedDataUnsupported { context } => {
                write!(f, "{}: associated data is not supported", context)
            },
            Self::MessageTooLong { context, max, actual } => {
                write!(f, "{}: message too long (at most {} bytes, got {})",
                    context, max, actual)
            },
            #[cfg(feature = "std")]
            Self::InvalidCiphertext { context, message } => {
                write!(f, "Invalid ciphertext: {}: {}", context, message)
            },
            #[cfg(not(feature = "std"))]
            Self::InvalidCiphertext { context } => {
                write!(f, "Invalid ciphertext: {}", context)
            },
            #[cfg(feature = "std")]
            Self::AuthenticationFailed { context, message } => {
                write!(f, "Authentication failed: {}: {}", context, message)
            },
            #[cfg(not(feature = "std"))]
            Self::AuthenticationFailed { context } => {
                write!(f, "Authentication failed: {}", context)
            },
        }
    }
}
