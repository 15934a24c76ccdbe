//! Parameter sets for Saturnin-Short

use saturnin_params::utils::symmetric::{
    SATURNIN_SHORT_DEMO_ROUNDS, SATURNIN_SHORT_DOMAIN, SATURNIN_SHORT_ROUNDS,
};

use crate::types::sealed::Sealed;

/// A fixed `(rounds, domain)` choice for Saturnin-Short
///
/// Sealed: the parameters are part of the type, never caller input.
pub trait ShortVariant: Sealed {
    /// Super-rounds of the underlying Saturnin call
    const ROUNDS: usize;
    /// Domain separator of the underlying Saturnin call
    const DOMAIN: u8;
    /// Name used in error contexts
    const NAME: &'static str;
}

/// One super-round, domain 6
///
/// This is a reduced-round demonstration parameterization. It is kept
/// because existing ciphertexts were produced with it; it offers no
/// meaningful security margin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DemoRounds;

impl Sealed for DemoRounds {}

impl ShortVariant for DemoRounds {
    const ROUNDS: usize = SATURNIN_SHORT_DEMO_ROUNDS;
    const DOMAIN: u8 = SATURNIN_SHORT_DOMAIN;
    const NAME: &'static str = "Saturnin-Short";
}

/// Ten super-rounds, domain 6: the published Saturnin-Short parameters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StandardRounds;

impl Sealed for StandardRounds {}

impl ShortVariant for StandardRounds {
    const ROUNDS: usize = SATURNIN_SHORT_ROUNDS;
    const DOMAIN: u8 = SATURNIN_SHORT_DOMAIN;
    const NAME: &'static str = "Saturnin-Short-10";
}
