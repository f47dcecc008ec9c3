//! voxwave Audio Backend
//!
//! This crate turns text into a playable 16-bit mono WAV file without any
//! speech engine. The audio is procedural: its length comes from a word-count
//! heuristic and its content from the characters of the text, so it varies
//! with the input without being intelligible speech.
//!
//! # Pipeline
//!
//! 1. [`duration::estimate_duration`] turns word count and rate into whole seconds
//! 2. [`synthesis::voice::TextVoiceSynth`] renders one value per sample from the
//!    character under that sample
//! 3. [`wav::quantize_sample`] converts each value to 16-bit PCM as it is produced
//! 4. [`wav::WavResult::from_samples`] writes the 44-byte RIFF/WAVE header and the
//!    samples into a single buffer
//!
//! # Determinism
//!
//! Whitespace and vowels are fully deterministic. Consonants add noise drawn
//! from a PCG32 generator owned by the call; a request with a `seed` gets a
//! reproducible generator (seed derived via BLAKE3), one without gets a fresh
//! generator from OS entropy.
//!
//! # Example
//!
//! ```
//! use voxwave_backend_audio::generate;
//! use voxwave_spec::SynthesisRequest;
//!
//! let request = SynthesisRequest::new("Hello world").with_seed(42);
//! let result = generate(&request).unwrap();
//!
//! assert_eq!(result.duration_seconds, 2);
//! assert_eq!(result.wav.wav_data.len(), 176_444);
//! ```

pub mod duration;
pub mod envelope;
pub mod error;
pub mod generate;
pub mod rng;
pub mod synthesis;
pub mod wav;

pub use duration::{estimate_duration, sample_count};
pub use error::{AudioError, AudioResult};
pub use generate::{generate, generate_placeholder, generate_with_rng, GenerateResult};
pub use wav::{parse_header, WavHeader, WavResult};
