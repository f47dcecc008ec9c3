//! Synthesis modules.
//!
//! - `voice` - Text-driven voice synthesis (per-character partials and noise)

pub mod voice;

use rand_pcg::Pcg32;

/// Common trait for synthesis modules.
pub trait Synthesizer {
    /// Generates audio samples.
    ///
    /// # Arguments
    /// * `num_samples` - Number of samples to generate
    /// * `sample_rate` - Audio sample rate in Hz
    /// * `rng` - RNG for any randomness
    ///
    /// # Returns
    /// Vector of audio samples in range [-1.0, 1.0]
    fn synthesize(&self, num_samples: usize, sample_rate: f64, rng: &mut Pcg32) -> Vec<f64>;
}
