//! Constants for the Saturnin block cipher and Saturnin-Short

/// Saturnin key size in bytes
pub const SATURNIN_KEY_SIZE: usize = 32;

/// Saturnin block size in bytes
pub const SATURNIN_BLOCK_SIZE: usize = 32;

/// Number of 16-bit words in the cipher state (and in the key)
pub const SATURNIN_STATE_WORDS: usize = 16;

/// Largest supported number of super-rounds
pub const SATURNIN_MAX_SUPER_ROUNDS: usize = 31;

/// Largest supported domain separation value
pub const SATURNIN_MAX_DOMAIN: u8 = 15;

/// Fixed prefix folded into the round-constant LFSR seed
pub const SATURNIN_RC_SEED: u16 = 0xFE00;

/// Feedback taps of the first round-constant LFSR
pub const SATURNIN_RC0_TAP: u16 = 0x2D;

/// Feedback taps of the second round-constant LFSR
pub const SATURNIN_RC1_TAP: u16 = 0x53;

/// LFSR clock cycles between two consecutive round constants
pub const SATURNIN_RC_STEPS: usize = 16;

/// Saturnin-Short nonce size in bytes
pub const SATURNIN_SHORT_NONCE_SIZE: usize = 16;

/// Longest plaintext accepted by Saturnin-Short
pub const SATURNIN_SHORT_MAX_PLAINTEXT: usize = 15;

/// Saturnin-Short ciphertext size in bytes (independent of plaintext length)
pub const SATURNIN_SHORT_CIPHERTEXT_SIZE: usize = 32;

/// Domain separation value used by Saturnin-Short
pub const SATURNIN_SHORT_DOMAIN: u8 = 6;

/// Reduced super-round count of the demonstration parameterization
pub const SATURNIN_SHORT_DEMO_ROUNDS: usize = 1;

/// Super-round count of the submitted Saturnin-Short parameterization
pub const SATURNIN_SHORT_ROUNDS: usize = 10;

/// Padding marker appended after the Saturnin-Short plaintext
pub const SATURNIN_SHORT_PAD_MARKER: u8 = 0x80;
