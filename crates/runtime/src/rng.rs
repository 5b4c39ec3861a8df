//! `rand`-backed symbol source for the hosted controller.
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use slot_core::SymbolRng;

/// Adapts [`StdRng`] to [`SymbolRng`].
#[derive(Clone, Debug)]
pub struct StdSymbolRng(StdRng);

impl StdSymbolRng {
    /// Seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    /// Replays the same reel sequence for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl SymbolRng for StdSymbolRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_generators_agree() {
        let mut a = StdSymbolRng::seeded(9);
        let mut b = StdSymbolRng::seeded(9);
        for _ in 0..16 {
            assert_eq!(a.below(6), b.below(6));
        }
    }
}
