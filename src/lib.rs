//! # saturnin
//!
//! The Saturnin 256-bit block cipher and the single-block Saturnin-Short
//! authenticated encryption scheme.
//!
//! ## Usage
//!
//! ```
//! use saturnin::prelude::*;
//!
//! let key = [0x42u8; 32];
//! let nonce = Nonce::<16>::new([7u8; 16]);
//!
//! let aead = SaturninShort10::new(&key);
//! let ciphertext = aead.seal(&nonce, b"short message", None).unwrap();
//! assert_eq!(ciphertext.len(), 32);
//!
//! let plaintext = aead.open(&nonce, &ciphertext, None).unwrap();
//! assert_eq!(plaintext, b"short message");
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `aead` (default): Saturnin-Short; implies `alloc`
//! - `alloc`: heap allocation without `std`
//! - `trace`: a stdout printer for round snapshots
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`saturnin-api`]: public error type, key container and AEAD trait
//! - [`saturnin-internal`]: constant-time helpers and endian conversion
//! - [`saturnin-params`]: size and round constants
//! - [`saturnin-algorithms`]: the cipher and the AEAD

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use saturnin_api as api;
pub use saturnin_internal as internal;
pub use saturnin_params as params;

pub use subtle;
pub use zeroize;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use saturnin_algorithms as algorithms;

/// Common imports for Saturnin users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export security types
    pub use crate::api::SecretBytes;

    #[cfg(feature = "alloc")]
    pub use crate::api::AuthenticatedCipher;

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{BlockCipher, Nonce, Saturnin};

    #[cfg(feature = "aead")]
    pub use crate::algorithms::aead::{SaturninShort, SaturninShort10, SaturninShortAead};
}
