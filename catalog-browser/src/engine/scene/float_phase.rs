use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of per-item float phases. Seeded when reproducible motion is
/// wanted, otherwise drawn from entropy.
#[derive(Resource)]
pub struct FloatPhaseRng(ChaCha8Rng);

impl FloatPhaseRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(ChaCha8Rng::seed_from_u64(seed)),
            None => Self(ChaCha8Rng::from_entropy()),
        }
    }

    /// Uniform phase in [0, 2pi).
    pub fn next_phase(&mut self) -> f32 {
        self.0.gen_range(0.0..TAU)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_stay_in_one_cycle() {
        let mut rng = FloatPhaseRng::new(None);
        for _ in 0..1000 {
            let phase = rng.next_phase();
            assert!((0.0..TAU).contains(&phase));
        }
    }

    #[test]
    fn seeded_sources_repeat() {
        let mut first = FloatPhaseRng::new(Some(42));
        let mut second = FloatPhaseRng::new(Some(42));
        for _ in 0..16 {
            assert_eq!(first.next_phase(), second.next_phase());
        }
    }
}
