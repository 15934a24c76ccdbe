//! Authenticated encryption
//!
//! Saturnin-Short is the only scheme here. It encrypts a single block and
//! authenticates through redundancy, so it has no tag and no associated
//! data.

pub mod saturnin_short;

pub use saturnin_short::{
    DemoRounds, SaturninShort, SaturninShort10, SaturninShortAead, ShortVariant, StandardRounds,
};

// Re-export the API trait so callers of this module need only one import
pub use saturnin_api::traits::AuthenticatedCipher;
