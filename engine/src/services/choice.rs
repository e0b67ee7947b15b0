//! `rand`-backed choice source

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::traits::ChoiceSource;

/// Adapts any [`rand::Rng`] to [`ChoiceSource`]
#[derive(Debug, Clone)]
pub struct RngChoiceSource<R: Rng = StdRng> {
    rng: R,
}

impl<R: Rng> RngChoiceSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngChoiceSource<StdRng> {
    /// Deterministic source for reproducible conversations
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> ChoiceSource for RngChoiceSource<R> {
    fn pick(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }

    fn delay_between(&mut self, min_ms: u64, max_ms: u64) -> u64 {
        if max_ms <= min_ms {
            return min_ms;
        }
        self.rng.gen_range(min_ms..max_ms)
    }
}
