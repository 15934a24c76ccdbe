//! Block cipher implementations with type-level guarantees
//!
//! ## Example usage
//!
//! ```
//! use saturnin_algorithms::block::{BlockCipher, Saturnin};
//! use rand::rngs::OsRng;
//!
//! let key = Saturnin::generate_key(&mut OsRng);
//! let cipher = Saturnin::new(&key, 10, 6).unwrap();
//!
//! let mut block = [0x42u8; 32];
//! cipher.encrypt_block(&mut block).unwrap();
//! cipher.decrypt_block(&mut block).unwrap();
//! assert_eq!(block, [0x42u8; 32]);
//! ```

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::Result;

pub mod saturnin;

// Re-exports
pub use saturnin::{Saturnin, SaturninAlgorithm};

/// Marker trait for cipher algorithms with compile-time properties
pub trait CipherAlgorithm {
    /// Key size in bytes
    const KEY_SIZE: usize;

    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Algorithm name
    fn name() -> &'static str;
}

/// Trait for keyed block ciphers
///
/// Construction is left to the implementor: a cipher may take parameters
/// beyond the key, such as Saturnin's round count and domain separator.
pub trait BlockCipher {
    /// The algorithm this cipher implements
    type Algorithm: CipherAlgorithm;

    /// Key type with appropriate size guarantee
    type Key: AsRef<[u8]> + AsMut<[u8]> + Clone + Zeroize;

    /// Encrypts a single block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts a single block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Returns the key size in bytes
    fn key_size() -> usize {
        Self::Algorithm::KEY_SIZE
    }

    /// Returns the block size in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Returns the name of the block cipher
    fn name() -> &'static str {
        Self::Algorithm::name()
    }

    /// Generate a random key
    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key;
}
