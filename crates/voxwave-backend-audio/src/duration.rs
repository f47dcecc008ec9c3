//! Duration estimation from word count and speaking rate.
//!
//! Both the synthesis path and the placeholder path call [`estimate_duration`],
//! so the two tiers always agree on the length of the artifact.

use voxwave_spec::voice::{clamp_param, MAX_RATE, MIN_RATE};

/// Neutral speaking rate in words per minute.
pub const NEUTRAL_WORDS_PER_MINUTE: f64 = 155.0;

/// Shortest artifact ever produced, in seconds.
pub const MIN_DURATION_SECONDS: u32 = 2;

/// Counts whitespace-separated words in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimates the number of whole seconds needed to speak `text` at `rate`.
///
/// A text without any words is treated as a single word. The result is never
/// below [`MIN_DURATION_SECONDS`].
pub fn estimate_duration(text: &str, rate: f64) -> u32 {
    let rate = clamp_param(rate, MIN_RATE, MAX_RATE, 1.0);
    let words = word_count(text).max(1) as f64;
    let words_per_minute = NEUTRAL_WORDS_PER_MINUTE * rate;
    let raw_seconds = (words / words_per_minute) * 60.0;

    (raw_seconds.ceil() as u32).max(MIN_DURATION_SECONDS)
}

/// Number of samples for `duration_seconds` at `sample_rate`.
pub fn sample_count(duration_seconds: u32, sample_rate: u32) -> usize {
    (duration_seconds as u64 * sample_rate as u64) as usize
}
