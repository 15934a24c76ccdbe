//! Round snapshots for test and debugging harnesses
//!
//! The cipher reports the state at fixed points of every super-round to a
//! caller-supplied [`RoundObserver`]. Any `FnMut(&StateSnapshot<'_>)`
//! closure is an observer, so collecting a trace is one line:
//!
//! ```
//! use saturnin_algorithms::block::saturnin::{encrypt_block_traced, StateSnapshot};
//!
//! let key = [0u8; 32];
//! let mut block = [0u8; 32];
//! let mut seen = 0;
//! encrypt_block_traced(2, 0, &key, &mut block, &mut |_: &StateSnapshot<'_>| seen += 1).unwrap();
//! assert_eq!(seen, 4);
//! ```
//!
//! Snapshots expose cipher state. Never wire an observer into a
//! deployment that handles real keys.

use core::fmt;

use super::State;

/// Which way the block is travelling
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Plaintext to ciphertext
    Encrypt,
    /// Ciphertext to plaintext
    Decrypt,
}

/// Point within a super-round at which a snapshot was taken
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// After the first S-box and MDS of the super-round
    Even,
    /// After the slice-sandwiched half of an even super-round
    OddSlice,
    /// After the sheet-sandwiched half of an odd super-round
    OddSheet,
}

impl Phase {
    fn label(self) -> &'static str {
        match self {
            Phase::Even => "even",
            Phase::OddSlice => "odd/slice",
            Phase::OddSheet => "odd/sheet",
        }
    }
}

/// Borrowed view of the state at one observation point
#[derive(Clone, Copy, Debug)]
pub struct StateSnapshot<'a> {
    /// Encryption or decryption
    pub direction: Direction,
    /// Zero-based super-round index
    pub super_round: usize,
    /// Observation point within the super-round
    pub phase: Phase,
    /// The sixteen state words
    pub words: &'a State,
}

impl<'a> StateSnapshot<'a> {
    pub(crate) fn new(direction: Direction, super_round: usize, phase: Phase, words: &'a State) -> Self {
        Self { direction, super_round, phase, words }
    }
}

/// Prints the header line followed by the words as a 4x4 hex grid
impl fmt::Display for StateSnapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:?} super-round {} ({}):",
            self.direction,
            self.super_round,
            self.phase.label()
        )?;
        for row in self.words.chunks(4) {
            writeln!(f, "{:04x} {:04x} {:04x} {:04x}", row[0], row[1], row[2], row[3])?;
        }
        Ok(())
    }
}

/// Receives state snapshots while a block is processed
pub trait RoundObserver {
    /// Called once per observation point
    fn observe(&mut self, snapshot: &StateSnapshot<'_>);
}

impl<F> RoundObserver for F
where
    F: FnMut(&StateSnapshot<'_>),
{
    #[inline(always)]
    fn observe(&mut self, snapshot: &StateSnapshot<'_>) {
        self(snapshot)
    }
}

/// Observer that discards every snapshot
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl RoundObserver for NoopObserver {
    #[inline(always)]
    fn observe(&mut self, _snapshot: &StateSnapshot<'_>) {}
}

/// Observer that prints every snapshot to stdout
#[cfg(all(feature = "trace", feature = "std"))]
pub fn print_snapshot(snapshot: &StateSnapshot<'_>) {
    std::print!("{}", snapshot);
}
