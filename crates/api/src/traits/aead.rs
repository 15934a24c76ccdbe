//! Trait for nonce-based authenticated encryption schemes

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::Result;

/// A nonce-based authenticated encryption scheme
///
/// Implementors own their key. Nonce uniqueness per key is the caller's
/// responsibility; nothing here detects reuse.
pub trait AuthenticatedCipher {
    /// Key size in bytes
    const KEY_SIZE: usize;
    /// Nonce size in bytes
    const NONCE_SIZE: usize;
    /// Largest plaintext accepted by `seal`
    const MAX_PLAINTEXT_SIZE: usize;

    /// Algorithm name used in error contexts
    fn name() -> &'static str;

    /// Encrypt and authenticate `plaintext` under `nonce`
    fn seal(&self, nonce: &[u8], plaintext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>>;

    /// Verify and decrypt `ciphertext` under `nonce`
    ///
    /// On failure no plaintext bytes are returned.
    fn open(&self, nonce: &[u8], ciphertext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>>;
}
