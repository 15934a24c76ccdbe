//! Type-safe wrappers used by the Saturnin primitives
//!
//! Nonces carry their size in the type, so a Saturnin-Short call with the
//! wrong nonce length fails to compile instead of failing at runtime.

pub mod nonce;

// Sealed trait module (not public)
pub(crate) mod sealed;

pub use nonce::{Nonce, SaturninShortCompatible};

// Keys are the API crate's zeroizing container
pub use saturnin_api::types::SecretBytes;
