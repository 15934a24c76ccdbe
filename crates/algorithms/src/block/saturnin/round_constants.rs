//! Round constant generation
//!
//! Two 16-bit LFSRs are seeded from the super-round count and the domain
//! separator, then clocked sixteen times per super-round. After each batch
//! of sixteen steps the registers hold that super-round's `RC0` and `RC1`.

use saturnin_params::utils::symmetric::{
    SATURNIN_MAX_SUPER_ROUNDS, SATURNIN_RC0_TAP, SATURNIN_RC1_TAP, SATURNIN_RC_SEED,
    SATURNIN_RC_STEPS,
};

use super::check_parameters;
use crate::error::Result;

/// Per-super-round constants for one `(rounds, domain)` pair
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundConstants {
    rc0: [u16; SATURNIN_MAX_SUPER_ROUNDS],
    rc1: [u16; SATURNIN_MAX_SUPER_ROUNDS],
    len: usize,
}

/// One LFSR clock: shift left, fold the tap in when the top bit falls out
#[inline(always)]
fn lfsr_step(x: u16, tap: u16) -> u16 {
    (x << 1) ^ (tap & (x >> 15).wrapping_neg())
}

impl RoundConstants {
    /// Derive the constants for `rounds` super-rounds under `domain`
    ///
    /// `rounds` must be in `0..=31` and `domain` in `0..=15`. Zero rounds
    /// yields an empty sequence.
    pub fn generate(rounds: usize, domain: u8) -> Result<Self> {
        check_parameters(rounds, domain)?;

        // rounds <= 31 and domain <= 15, so the sum stays below 0x10000
        let seed = domain as u16 + ((rounds as u16) << 4) + SATURNIN_RC_SEED;

        let mut rc0 = [0u16; SATURNIN_MAX_SUPER_ROUNDS];
        let mut rc1 = [0u16; SATURNIN_MAX_SUPER_ROUNDS];
        let mut x0 = seed;
        let mut x1 = seed;

        for n in 0..rounds {
            for _ in 0..SATURNIN_RC_STEPS {
                x0 = lfsr_step(x0, SATURNIN_RC0_TAP);
                x1 = lfsr_step(x1, SATURNIN_RC1_TAP);
            }
            rc0[n] = x0;
            rc1[n] = x1;
        }

        Ok(Self { rc0, rc1, len: rounds })
    }

    /// Number of super-rounds covered
    pub fn len(&self) -> usize {
        self.len
    }

    /// True for the zero-round schedule
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Constants XORed into word 0, one per super-round
    pub fn rc0(&self) -> &[u16] {
        &self.rc0[..self.len]
    }

    /// Constants XORed into word 8, one per super-round
    pub fn rc1(&self) -> &[u16] {
        &self.rc1[..self.len]
    }

    /// XOR the constants of super-round `round` into the state
    #[inline(always)]
    pub(crate) fn apply(&self, state: &mut super::State, round: usize) {
        state[0] ^= self.rc0[round];
        state[8] ^= self.rc1[round];
    }
}
