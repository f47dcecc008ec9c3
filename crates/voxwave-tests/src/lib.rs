//! voxwave End-to-End Test Infrastructure
//!
//! This crate provides integration tests for the full request-to-WAV flow:
//!
//! - Generation: request -> WAV bytes
//! - Validation: WAV layout checked by an independent chunk-walking parser
//! - **Determinism**: seeded and vowel-only requests give byte-identical output
//! - CLI: the `voxwave` binary driven through [`harness::TestHarness`]
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p voxwave-tests
//! ```
//!
//! ## Determinism Testing
//!
//! ```rust,ignore
//! use voxwave_tests::determinism::verify_determinism;
//!
//! let request = SynthesisRequest::new("Hello").with_seed(1);
//! let result = verify_determinism(|| generate(&request).unwrap().wav.wav_data, 3);
//! result.assert_deterministic();
//! ```

pub mod determinism;
pub mod format_validators;
pub mod harness;

pub use determinism::{compute_hash, verify_determinism, verify_hash_determinism, DeterminismResult};
pub use format_validators::{validate_wav, FormatError, WavInfo};
