//! Validation utilities for the Saturnin primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a plaintext fits the scheme
#[inline(always)]
pub fn message_length(algorithm: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual > max {
        return Err(Error::MessageTooLong {
            algorithm,
            max,
            actual,
        });
    }
    Ok(())
}

/// Validate that a ciphertext has the exact block length
#[inline(always)]
pub fn ciphertext_length(algorithm: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidCiphertextLength {
            algorithm,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Reject non-empty associated data
///
/// `None` and an empty slice are treated alike.
#[inline(always)]
pub fn no_associated_data(algorithm: &'static str, associated_data: Option<&[u8]>) -> Result<()> {
    match associated_data {
        Some(ad) if !ad.is_empty() => Err(Error::AssociatedDataUnsupported { algorithm }),
        _ => Ok(()),
    }
}

/// Validate authentication
#[inline(always)]
pub fn authentication(is_valid: bool, algorithm: &'static str) -> Result<()> {
    if !is_valid {
        return Err(Error::Authentication { algorithm });
    }
    Ok(())
}
