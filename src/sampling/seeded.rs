use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

use crate::sampling::Sampler;

/// Reproducible sampler, for demos and debugging a specific pick sequence
pub struct SeededSampler {
    rng: Mutex<StdRng>,
}

impl SeededSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Sampler for SeededSampler {
    fn pick(&self, len: usize) -> usize {
        // A poisoned lock still holds a usable RNG state
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..len)
    }

    fn name(&self) -> &str {
        "seeded"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let a = SeededSampler::new(42);
        let b = SeededSampler::new(42);

        let seq_a: Vec<usize> = (0..20).map(|_| a.pick(7)).collect();
        let seq_b: Vec<usize> = (0..20).map(|_| b.pick(7)).collect();

        assert_eq!(seq_a, seq_b);
        assert!(seq_a.iter().all(|&i| i < 7));
    }
}
