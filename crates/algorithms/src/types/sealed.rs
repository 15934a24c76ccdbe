//! Sealed marker for traits that only this crate may implement

/// Implemented by nonce sizes and Saturnin-Short variants defined here
pub trait Sealed {}
