use rand::Rng;

use crate::sampling::Sampler;

/// Non-reproducible sampler backed by the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSampler;

impl ThreadRngSampler {
    pub fn new() -> Self {
        Self
    }
}

impl Sampler for ThreadRngSampler {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }

    fn name(&self) -> &str {
        "thread_rng"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_stays_in_range() {
        let sampler = ThreadRngSampler::new();
        for len in [1, 5, 7, 40] {
            for _ in 0..200 {
                assert!(sampler.pick(len) < len);
            }
        }
    }

    #[test]
    fn test_single_choice() {
        assert_eq!(ThreadRngSampler::new().pick(1), 0);
    }
}
