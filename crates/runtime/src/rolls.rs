//! Bridges `rand` generators into the engine's roll source.

use battle_core::RollSource;
use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Adapts any [`rand::RngCore`] into a [`RollSource`].
#[derive(Clone, Debug)]
pub struct RngRolls<R> {
    rng: R,
}

impl<R: RngCore> RngRolls<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngRolls<StdRng> {
    /// Unpredictable rolls seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible `StdRng` rolls.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> RollSource for RngRolls<R> {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }
}
