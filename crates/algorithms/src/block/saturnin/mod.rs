//! Saturnin 256-bit block cipher
//!
//! The 32-byte block and the 32-byte key are each viewed as sixteen 16-bit
//! words (little-endian). Every layer works on whole words with AND, OR,
//! XOR and fixed rotations, so the cipher has no secret-dependent memory
//! accesses or branches.
//!
//! A cipher instance is parameterized by the number of super-rounds
//! `R` (0..=31) and a domain separator `D` (0..=15). Both only feed the
//! round constants. Different `(R, D)` pairs are different permutations.
//!
//! ## Example
//!
//! ```
//! use saturnin_algorithms::block::saturnin::{decrypt_block, encrypt_block};
//!
//! let key = [7u8; 32];
//! let mut block = *b"thirty-two bytes of plain text!!";
//! encrypt_block(10, 6, &key, &mut block).unwrap();
//! decrypt_block(10, 6, &key, &mut block).unwrap();
//! assert_eq!(&block, b"thirty-two bytes of plain text!!");
//! ```

use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};
#[cfg(feature = "std")]
use std::sync::atomic::{compiler_fence, Ordering};
#[cfg(not(feature = "std"))]
use portable_atomic::{compiler_fence, Ordering};

use saturnin_internal::endian::{load_u16_words_le, store_u16_words_le};
use saturnin_params::utils::symmetric::{
    SATURNIN_BLOCK_SIZE, SATURNIN_KEY_SIZE, SATURNIN_MAX_DOMAIN, SATURNIN_MAX_SUPER_ROUNDS,
    SATURNIN_STATE_WORDS,
};

use super::{BlockCipher, CipherAlgorithm};
use crate::error::{validate, Error, Result};
use crate::types::SecretBytes;

pub mod key_mix;
pub mod mds;
pub mod round_constants;
pub mod sbox;
pub mod shift;
pub mod trace;

pub use round_constants::RoundConstants;
pub use trace::{Direction, NoopObserver, Phase, RoundObserver, StateSnapshot};
#[cfg(all(feature = "trace", feature = "std"))]
pub use trace::print_snapshot;

use key_mix::{add_key, add_rotated_key};
use mds::{mds, mds_inv};
use sbox::{sbox, sbox_inv};
use shift::{sheet, sheet_inv, slice, slice_inv};

/// Sixteen 16-bit words: the working form of a block or a key
pub type State = [u16; SATURNIN_STATE_WORDS];

/// Reject super-round counts above 31 and domains above 15
pub(crate) fn check_parameters(rounds: usize, domain: u8) -> Result<()> {
    validate::parameter(
        rounds <= SATURNIN_MAX_SUPER_ROUNDS,
        "Saturnin super-rounds",
        "must be in 0..=31",
    )?;
    validate::parameter(
        domain <= SATURNIN_MAX_DOMAIN,
        "Saturnin domain",
        "must be in 0..=15",
    )
}

fn encrypt_words<O>(rc: &RoundConstants, key: &State, state: &mut State, observer: &mut O)
where
    O: RoundObserver + ?Sized,
{
    add_key(key, state);

    for round in 0..rc.len() {
        sbox(state);
        mds(state);
        observer.observe(&StateSnapshot::new(Direction::Encrypt, round, Phase::Even, state));

        sbox(state);
        let phase = if round % 2 == 0 {
            slice(state);
            mds(state);
            slice_inv(state);
            rc.apply(state, round);
            add_rotated_key(key, state);
            Phase::OddSlice
        } else {
            sheet(state);
            mds(state);
            sheet_inv(state);
            rc.apply(state, round);
            add_key(key, state);
            Phase::OddSheet
        };
        observer.observe(&StateSnapshot::new(Direction::Encrypt, round, phase, state));
    }
}

fn decrypt_words<O>(rc: &RoundConstants, key: &State, state: &mut State, observer: &mut O)
where
    O: RoundObserver + ?Sized,
{
    for round in (0..rc.len()).rev() {
        let phase = if round % 2 == 0 {
            add_rotated_key(key, state);
            rc.apply(state, round);
            slice(state);
            mds_inv(state);
            slice_inv(state);
            Phase::OddSlice
        } else {
            add_key(key, state);
            rc.apply(state, round);
            sheet(state);
            mds_inv(state);
            sheet_inv(state);
            Phase::OddSheet
        };
        observer.observe(&StateSnapshot::new(Direction::Decrypt, round, phase, state));

        sbox_inv(state);
        mds_inv(state);
        sbox_inv(state);
        observer.observe(&StateSnapshot::new(Direction::Decrypt, round, Phase::Even, state));
    }

    add_key(key, state);
}

fn process_block<O>(
    direction: Direction,
    rounds: usize,
    domain: u8,
    key: &[u8; SATURNIN_KEY_SIZE],
    block: &mut [u8; SATURNIN_BLOCK_SIZE],
    observer: &mut O,
) -> Result<()>
where
    O: RoundObserver + ?Sized,
{
    let rc = RoundConstants::generate(rounds, domain)?;

    let mut key_words: State = [0u16; SATURNIN_STATE_WORDS];
    let mut state: State = [0u16; SATURNIN_STATE_WORDS];
    load_u16_words_le(key, &mut key_words);
    load_u16_words_le(block, &mut state);

    match direction {
        Direction::Encrypt => encrypt_words(&rc, &key_words, &mut state, observer),
        Direction::Decrypt => decrypt_words(&rc, &key_words, &mut state, observer),
    }
    compiler_fence(Ordering::SeqCst);

    store_u16_words_le(&state, block);
    key_words.zeroize();
    state.zeroize();
    Ok(())
}

/// Encrypt one block in place with `rounds` super-rounds under `domain`
///
/// With `rounds == 0` only the key is added. Fails with
/// [`Error::Parameter`] when `rounds > 31` or `domain > 15`, leaving the
/// block untouched.
pub fn encrypt_block(
    rounds: usize,
    domain: u8,
    key: &[u8; SATURNIN_KEY_SIZE],
    block: &mut [u8; SATURNIN_BLOCK_SIZE],
) -> Result<()> {
    process_block(Direction::Encrypt, rounds, domain, key, block, &mut NoopObserver)
}

/// Decrypt one block in place; the exact inverse of [`encrypt_block`]
pub fn decrypt_block(
    rounds: usize,
    domain: u8,
    key: &[u8; SATURNIN_KEY_SIZE],
    block: &mut [u8; SATURNIN_BLOCK_SIZE],
) -> Result<()> {
    process_block(Direction::Decrypt, rounds, domain, key, block, &mut NoopObserver)
}

/// [`encrypt_block`] reporting two snapshots per super-round to `observer`
pub fn encrypt_block_traced<O>(
    rounds: usize,
    domain: u8,
    key: &[u8; SATURNIN_KEY_SIZE],
    block: &mut [u8; SATURNIN_BLOCK_SIZE],
    observer: &mut O,
) -> Result<()>
where
    O: RoundObserver + ?Sized,
{
    process_block(Direction::Encrypt, rounds, domain, key, block, observer)
}

/// [`decrypt_block`] reporting two snapshots per super-round to `observer`
pub fn decrypt_block_traced<O>(
    rounds: usize,
    domain: u8,
    key: &[u8; SATURNIN_KEY_SIZE],
    block: &mut [u8; SATURNIN_BLOCK_SIZE],
    observer: &mut O,
) -> Result<()>
where
    O: RoundObserver + ?Sized,
{
    process_block(Direction::Decrypt, rounds, domain, key, block, observer)
}

/// Type-level constants for Saturnin
pub enum SaturninAlgorithm {}

impl CipherAlgorithm for SaturninAlgorithm {
    const KEY_SIZE: usize = SATURNIN_KEY_SIZE;
    const BLOCK_SIZE: usize = SATURNIN_BLOCK_SIZE;

    fn name() -> &'static str {
        "Saturnin"
    }
}

/// Saturnin block cipher bound to a key and a `(rounds, domain)` pair
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Saturnin {
    key: SecretBytes<SATURNIN_KEY_SIZE>,
    rounds: usize,
    domain: u8,
}

impl Saturnin {
    /// Create a cipher instance, validating the parameters once
    pub fn new(key: &SecretBytes<SATURNIN_KEY_SIZE>, rounds: usize, domain: u8) -> Result<Self> {
        check_parameters(rounds, domain)?;
        Ok(Self {
            key: key.clone(),
            rounds,
            domain,
        })
    }

    /// Number of super-rounds
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Domain separator
    pub fn domain(&self) -> u8 {
        self.domain
    }

    fn block_array(block: &mut [u8]) -> Result<&mut [u8; SATURNIN_BLOCK_SIZE]> {
        let actual = block.len();
        <&mut [u8; SATURNIN_BLOCK_SIZE]>::try_from(block).map_err(|_| Error::Length {
            context: "Saturnin block",
            expected: SATURNIN_BLOCK_SIZE,
            actual,
        })
    }
}

impl BlockCipher for Saturnin {
    type Algorithm = SaturninAlgorithm;
    type Key = SecretBytes<SATURNIN_KEY_SIZE>;

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        let block = Self::block_array(block)?;
        encrypt_block(self.rounds, self.domain, &self.key, block)
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        let block = Self::block_array(block)?;
        decrypt_block(self.rounds, self.domain, &self.key, block)
    }

    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key {
        SecretBytes::random(rng)
    }
}
