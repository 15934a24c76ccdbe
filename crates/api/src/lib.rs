//! Public API traits and types for the Saturnin library
//!
//! This crate provides the public API surface: the error type shared by every
//! crate in the workspace, the zeroizing `SecretBytes` container used for keys,
//! and the traits an application programs against.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod traits;
pub mod error;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;

#[cfg(feature = "alloc")]
pub use traits::AuthenticatedCipher;
