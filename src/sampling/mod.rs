pub mod seeded;
pub mod thread_rng;

pub use seeded::SeededSampler;
pub use thread_rng::ThreadRngSampler;

/// Source of uniform random indices for the random-game flow
pub trait Sampler: Send + Sync {
    /// Uniform index in `0..len`; `len` is never zero
    fn pick(&self, len: usize) -> usize;

    /// Get sampler name for logging
    fn name(&self) -> &str;
}
