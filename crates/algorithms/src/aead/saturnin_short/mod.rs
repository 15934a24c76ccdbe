//! Saturnin-Short authenticated encryption
//!
//! A single Saturnin call over `nonce || plaintext || 0x80 || 0x00*`
//! yields a 32-byte ciphertext for plaintexts of up to 15 bytes. There is
//! no separate tag: on decryption the recovered nonce and the padding act
//! as the redundancy that authenticates the block.
//!
//! ## Constant-Time Guarantees
//!
//! * The nonce comparison and the padding scan visit all 32 bytes of the
//!   recovered block, whatever they contain.
//! * Both checks fold into one mask; the only branch is on the final
//!   verdict, after the scan.
//! * The recovered block is zeroized on success and on failure alike, and
//!   a failed `open` leaves no plaintext bytes in the output buffer.
//!
//! Nonces must never repeat under one key. Nothing here detects reuse.

use core::marker::PhantomData;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::sync::atomic::{compiler_fence, Ordering};
#[cfg(not(feature = "std"))]
use portable_atomic::{compiler_fence, Ordering};

use saturnin_api::error::Error as CoreError;
use saturnin_api::traits::AuthenticatedCipher;
use saturnin_internal::constant_time::{
    ct_diff_accumulate, ct_eq_mask_u8, ct_is_zero_choice, ct_lt_mask_u8, ct_nonzero_mask_u8,
};
use saturnin_params::utils::symmetric::{
    SATURNIN_KEY_SIZE, SATURNIN_SHORT_CIPHERTEXT_SIZE, SATURNIN_SHORT_MAX_PLAINTEXT,
    SATURNIN_SHORT_NONCE_SIZE, SATURNIN_SHORT_PAD_MARKER,
};
use subtle::Choice;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::block::saturnin::{decrypt_block, encrypt_block};
use crate::error::{validate, Result};
use crate::types::nonce::SaturninShortCompatible;
use crate::types::{Nonce, SecretBytes};

mod variant;

pub use variant::{DemoRounds, ShortVariant, StandardRounds};

/// Size of a Saturnin-Short key in bytes
pub const SATURNIN_SHORT_KEY_SIZE: usize = SATURNIN_KEY_SIZE;

/// Saturnin-Short over the demonstration parameters (one super-round)
pub type SaturninShort = SaturninShortAead<DemoRounds>;

/// Saturnin-Short over the published ten super-rounds
pub type SaturninShort10 = SaturninShortAead<StandardRounds>;

/// Saturnin-Short AEAD bound to one key
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SaturninShortAead<V> {
    key: SecretBytes<SATURNIN_KEY_SIZE>,
    #[zeroize(skip)]
    _variant: PhantomData<V>,
}

impl<V: ShortVariant> core::fmt::Debug for SaturninShortAead<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SaturninShortAead")
            .field("variant", &V::NAME)
            .field("key", &self.key)
            .finish()
    }
}

/// Check the recovered nonce and padding without branching on them
///
/// Returns the plaintext length (the index of the last `0x80` in the
/// lower half) and a `Choice` that is 1 only when the nonce matches and
/// the bytes above the marker are all zero.
fn check_redundancy(
    block: &[u8; SATURNIN_SHORT_CIPHERTEXT_SIZE],
    nonce: &[u8; SATURNIN_SHORT_NONCE_SIZE],
) -> (usize, Choice) {
    compiler_fence(Ordering::SeqCst);

    let mut mismatch = ct_diff_accumulate(&block[..SATURNIN_SHORT_NONCE_SIZE], nonce);
    let mut searching: u8 = 0xFF;
    let mut length: u8 = 0;

    for i in (0..SATURNIN_SHORT_NONCE_SIZE).rev() {
        let b = block[SATURNIN_SHORT_NONCE_SIZE + i];
        let found = searching & ct_eq_mask_u8(b, SATURNIN_SHORT_PAD_MARKER);
        length |= found & (i as u8);
        searching &= !found;
        mismatch |= searching & ct_nonzero_mask_u8(b);
    }
    // no marker at all
    mismatch |= searching;

    compiler_fence(Ordering::SeqCst);
    (length as usize, ct_is_zero_choice(mismatch))
}

impl<V: ShortVariant> SaturninShortAead<V> {
    /// Key size in bytes
    pub const KEY_SIZE: usize = SATURNIN_KEY_SIZE;
    /// Nonce size in bytes
    pub const NONCE_SIZE: usize = SATURNIN_SHORT_NONCE_SIZE;
    /// Largest plaintext in bytes
    pub const MAX_PLAINTEXT_SIZE: usize = SATURNIN_SHORT_MAX_PLAINTEXT;
    /// Ciphertext size in bytes, whatever the plaintext length
    pub const CIPHERTEXT_SIZE: usize = SATURNIN_SHORT_CIPHERTEXT_SIZE;

    /// Create a new instance from a 256-bit key
    pub fn new(key: &[u8; SATURNIN_KEY_SIZE]) -> Self {
        Self {
            key: SecretBytes::new(*key),
            _variant: PhantomData,
        }
    }

    /// Create a new instance from a key already held in a secret container
    pub fn from_secret(key: &SecretBytes<SATURNIN_KEY_SIZE>) -> Self {
        Self {
            key: key.clone(),
            _variant: PhantomData,
        }
    }

    /// Super-rounds used by this variant
    pub fn rounds() -> usize {
        V::ROUNDS
    }

    /* --------------------------------------------------------------------- */
    /*                                 SEAL                                  */
    /* --------------------------------------------------------------------- */

    /// Encrypt `plaintext` (at most 15 bytes) under a raw nonce
    ///
    /// Associated data must be absent or empty.
    pub fn seal_with_nonce(
        &self,
        nonce: &[u8; SATURNIN_SHORT_NONCE_SIZE],
        plaintext: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<[u8; SATURNIN_SHORT_CIPHERTEXT_SIZE]> {
        validate::no_associated_data(V::NAME, aad)?;
        validate::message_length(V::NAME, plaintext.len(), SATURNIN_SHORT_MAX_PLAINTEXT)?;

        let len = plaintext.len();
        let body = SATURNIN_SHORT_NONCE_SIZE;

        let mut buffer = Zeroizing::new([0u8; SATURNIN_SHORT_CIPHERTEXT_SIZE]);
        buffer[..body].copy_from_slice(nonce);
        buffer[body..body + len].copy_from_slice(plaintext);
        buffer[body + len] = SATURNIN_SHORT_PAD_MARKER;

        encrypt_block(V::ROUNDS, V::DOMAIN, &self.key, &mut buffer)?;
        Ok(*buffer)
    }

    /// Encrypt with a type-checked nonce
    pub fn seal<const N: usize>(
        &self,
        nonce: &Nonce<N>,
        plaintext: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<[u8; SATURNIN_SHORT_CIPHERTEXT_SIZE]>
    where
        Nonce<N>: SaturninShortCompatible,
    {
        let mut nonce_array = [0u8; SATURNIN_SHORT_NONCE_SIZE];
        nonce_array.copy_from_slice(nonce.as_ref());
        self.seal_with_nonce(&nonce_array, plaintext, aad)
    }

    /* --------------------------------------------------------------------- */
    /*                                 OPEN                                  */
    /* --------------------------------------------------------------------- */

    /// Verify and decrypt into a caller buffer, returning the plaintext length
    ///
    /// On success `out[..len]` holds the plaintext and the rest of `out` is
    /// zero. On authentication failure `out` is all zero.
    pub fn open_in_place(
        &self,
        nonce: &[u8; SATURNIN_SHORT_NONCE_SIZE],
        ciphertext: &[u8],
        aad: Option<&[u8]>,
        out: &mut [u8; SATURNIN_SHORT_MAX_PLAINTEXT],
    ) -> Result<usize> {
        validate::no_associated_data(V::NAME, aad)?;
        validate::ciphertext_length(V::NAME, ciphertext.len(), SATURNIN_SHORT_CIPHERTEXT_SIZE)?;

        let mut buffer = Zeroizing::new([0u8; SATURNIN_SHORT_CIPHERTEXT_SIZE]);
        buffer.copy_from_slice(ciphertext);
        decrypt_block(V::ROUNDS, V::DOMAIN, &self.key, &mut buffer)?;

        let (len, valid) = check_redundancy(&buffer, nonce);

        // mask = 0xFF when valid, else 0x00; every output byte is written
        let verdict = 0u8.wrapping_sub(valid.unwrap_u8());
        let body = &buffer[SATURNIN_SHORT_NONCE_SIZE..];
        for (i, o) in out.iter_mut().enumerate() {
            *o = body[i] & verdict & ct_lt_mask_u8(i as u8, len as u8);
        }

        validate::authentication(bool::from(valid), V::NAME)?;
        Ok(len)
    }

    /// Verify and decrypt under a raw nonce
    pub fn open_with_nonce(
        &self,
        nonce: &[u8; SATURNIN_SHORT_NONCE_SIZE],
        ciphertext: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        let mut out = Zeroizing::new([0u8; SATURNIN_SHORT_MAX_PLAINTEXT]);
        let len = self.open_in_place(nonce, ciphertext, aad, &mut out)?;
        Ok(out[..len].to_vec())
    }

    /// Verify and decrypt with a type-checked nonce
    pub fn open<const N: usize>(
        &self,
        nonce: &Nonce<N>,
        ciphertext: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>>
    where
        Nonce<N>: SaturninShortCompatible,
    {
        let mut nonce_array = [0u8; SATURNIN_SHORT_NONCE_SIZE];
        nonce_array.copy_from_slice(nonce.as_ref());
        self.open_with_nonce(&nonce_array, ciphertext, aad)
    }
}

fn nonce_array(nonce: &[u8]) -> saturnin_api::Result<[u8; SATURNIN_SHORT_NONCE_SIZE]> {
    if nonce.len() != SATURNIN_SHORT_NONCE_SIZE {
        return Err(CoreError::InvalidLength {
            context: "Saturnin-Short nonce",
            expected: SATURNIN_SHORT_NONCE_SIZE,
            actual: nonce.len(),
        });
    }
    let mut array = [0u8; SATURNIN_SHORT_NONCE_SIZE];
    array.copy_from_slice(nonce);
    Ok(array)
}

impl<V: ShortVariant> AuthenticatedCipher for SaturninShortAead<V> {
    const KEY_SIZE: usize = SATURNIN_KEY_SIZE;
    const NONCE_SIZE: usize = SATURNIN_SHORT_NONCE_SIZE;
    const MAX_PLAINTEXT_SIZE: usize = SATURNIN_SHORT_MAX_PLAINTEXT;

    fn name() -> &'static str {
        V::NAME
    }

    fn seal(
        &self,
        nonce: &[u8],
        plaintext: &[u8],
        associated_data: &[u8],
    ) -> saturnin_api::Result<Vec<u8>> {
        let nonce = nonce_array(nonce)?;
        let ciphertext = self.seal_with_nonce(&nonce, plaintext, Some(associated_data))?;
        Ok(ciphertext.to_vec())
    }

    fn open(
        &self,
        nonce: &[u8],
        ciphertext: &[u8],
        associated_data: &[u8],
    ) -> saturnin_api::Result<Vec<u8>> {
        let nonce = nonce_array(nonce)?;
        Ok(self.open_with_nonce(&nonce, ciphertext, Some(associated_data))?)
    }
}

/// Seal with the demonstration parameters
///
/// Shorthand for `SaturninShort::new(key).seal_with_nonce(..)`.
pub fn seal(
    key: &[u8; SATURNIN_KEY_SIZE],
    nonce: &[u8; SATURNIN_SHORT_NONCE_SIZE],
    plaintext: &[u8],
    associated_data: &[u8],
) -> Result<[u8; SATURNIN_SHORT_CIPHERTEXT_SIZE]> {
    SaturninShort::new(key).seal_with_nonce(nonce, plaintext, Some(associated_data))
}

/// Open with the demonstration parameters
pub fn open(
    key: &[u8; SATURNIN_KEY_SIZE],
    nonce: &[u8; SATURNIN_SHORT_NONCE_SIZE],
    ciphertext: &[u8],
    associated_data: &[u8],
) -> Result<Vec<u8>> {
    SaturninShort::new(key).open_with_nonce(nonce, ciphertext, Some(associated_data))
}
