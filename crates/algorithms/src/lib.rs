//! Saturnin block cipher and Saturnin-Short authenticated encryption
//!
//! Saturnin is a 256-bit block cipher with a 256-bit key. Its state is
//! sixteen 16-bit words and every layer is written in bit-sliced form, so
//! the implementation runs in constant time with no lookup tables.
//! Saturnin-Short builds a tagless AEAD for plaintexts of up to 15 bytes
//! on top of a single block call.
//!
//! The library works in both `std` and `no_std` environments. The AEAD
//! needs `alloc` because `open` returns an owned plaintext.
//!
//! # Security Features
//!
//! - Keys live in zeroizing containers; scratch state is wiped before
//!   every block call returns
//! - Branch-free padding and nonce verification
//! - Errors never carry secret-derived data

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Block cipher implementation
pub mod block;
pub use block::{BlockCipher, CipherAlgorithm, Saturnin};

// AEAD scheme
#[cfg(feature = "aead")]
pub mod aead;
#[cfg(feature = "aead")]
pub use aead::{AuthenticatedCipher, SaturninShort, SaturninShort10};

// Type system
pub mod types;
pub use types::{Nonce, SecretBytes};
