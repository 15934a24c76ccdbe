//! Public traits for the Saturnin library

#[cfg(feature = "alloc")]
pub mod aead;

#[cfg(feature = "alloc")]
pub use aead::AuthenticatedCipher;
