//! Property-based tests for voxwave using proptest.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p voxwave-tests --test proptest_synthesis
//! ```

use proptest::prelude::*;

use voxwave_backend_audio::envelope::FadeEnvelope;
use voxwave_backend_audio::rng::create_rng;
use voxwave_backend_audio::synthesis::voice::{char_sample, synthesize};
use voxwave_backend_audio::{estimate_duration, WavResult};
use voxwave_spec::{validate_text, VoiceParameters, MAX_TEXT_CHARS};
use voxwave_tests::validate_wav;

/// Short texts mixing letters, digits, punctuation and whitespace.
fn arbitrary_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 .,!?'\\t\\n]{0,80}").unwrap()
}

// ============================================================================
// 1. Duration estimation
// ============================================================================

proptest! {
    /// The estimate never drops below two seconds.
    #[test]
    fn duration_is_at_least_two_seconds(text in arbitrary_text(), rate in 0.1f64..=10.0) {
        prop_assert!(estimate_duration(&text, rate) >= 2);
    }

    /// Any f64 rate, including NaN and infinities, yields a sane estimate.
    #[test]
    fn duration_handles_any_rate(text in arbitrary_text(), rate in any::<f64>()) {
        let seconds = estimate_duration(&text, rate);
        prop_assert!(seconds >= 2);
        // 80 chars is at most 40 words; at the slowest rate that is < 155 s
        prop_assert!(seconds <= 155);
    }

    /// Slowing down never shortens the estimate.
    #[test]
    fn duration_is_monotonic_in_rate(text in arbitrary_text(), a in 0.1f64..=10.0, b in 0.1f64..=10.0) {
        let (slow, fast) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(estimate_duration(&text, slow) >= estimate_duration(&text, fast));
    }
}

// ============================================================================
// 2. Synthesis
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// The buffer always holds exactly `sample_rate * duration` samples.
    #[test]
    fn buffer_length_matches_duration(
        text in arbitrary_text(),
        seconds in 1u32..=3,
        sample_rate in prop::sample::select(vec![4000u32, 8000, 11025]),
        seed in any::<u32>(),
    ) {
        let voice = VoiceParameters::default();
        let samples = synthesize(&text, seconds, sample_rate, &voice, &mut create_rng(seed));
        prop_assert_eq!(samples.len(), (sample_rate * seconds) as usize);
    }

    /// Extreme voice settings stay well inside the 16-bit range.
    #[test]
    fn extreme_parameters_do_not_clip(text in "[a-zA-Z !]{1,40}", seed in any::<u32>()) {
        let voice = VoiceParameters::new(10.0, 2.0, 1.0);
        let samples = synthesize(&text, 2, 8000, &voice, &mut create_rng(seed));
        // rate gain 2.8 * headroom 0.3 bounds the signal at 0.84 of full scale
        prop_assert!(samples.iter().all(|s| s.unsigned_abs() <= 27_600));
    }

    /// Out-of-range and non-finite parameters are clamped before use.
    #[test]
    fn clamped_parameters_are_in_range(rate in any::<f64>(), pitch in any::<f64>(), volume in any::<f64>()) {
        prop_assert!(VoiceParameters::new(rate, pitch, volume).clamped().is_in_range());
    }
}

proptest! {
    /// Whitespace contributes exactly zero before envelope and volume.
    #[test]
    fn whitespace_is_silent(
        c in prop::sample::select(vec![' ', '\t', '\n', '\r', '\u{a0}', '\u{2003}']),
        time in 0.0f64..100.0,
        pitch in 0.0f64..=2.0,
    ) {
        prop_assert_eq!(char_sample(c, time, pitch, &mut create_rng(0)), 0.0);
    }

    /// The fade envelope is zero at both ends and rises through the fade-in.
    #[test]
    fn envelope_shape(duration in 0.01f64..600.0, a in 0.0f64..1.0, b in 0.0f64..1.0) {
        let env = FadeEnvelope::new(duration);
        prop_assert_eq!(env.gain(0.0), 0.0);
        prop_assert_eq!(env.gain(duration), 0.0);

        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let (t0, t1) = (lo * env.fade_time, hi * env.fade_time);
        prop_assert!(env.gain(t0) <= env.gain(t1));
        prop_assert!((0.0..=1.0).contains(&env.gain(t1)));
    }
}

// ============================================================================
// 3. Container encoding
// ============================================================================

proptest! {
    /// Header sizes always agree with the byte length.
    #[test]
    fn header_sizes_follow_length(samples in prop::collection::vec(any::<i16>(), 0..2048)) {
        let wav = WavResult::from_mono(&samples, 44100).unwrap();
        let info = validate_wav(&wav.wav_data).unwrap();

        prop_assert_eq!(wav.wav_data.len(), 44 + samples.len() * 2);
        prop_assert_eq!(info.riff_size as usize, wav.wav_data.len() - 8);
        prop_assert_eq!(info.data_size, samples.len() * 2);
        prop_assert_eq!(info.samples_i16(&wav.wav_data), samples);
    }
}

// ============================================================================
// 4. Text validation
// ============================================================================

proptest! {
    /// Validation never panics and accepts exactly the non-empty texts within
    /// the limit after trimming.
    #[test]
    fn text_validation_matches_trimmed_length(text in arbitrary_text()) {
        let trimmed = text.trim();
        let ok = validate_text(Some(&text)).is_ok();
        prop_assert_eq!(ok, !trimmed.is_empty() && trimmed.chars().count() <= MAX_TEXT_CHARS);
    }

    /// Multi-byte characters count once each toward the limit.
    #[test]
    fn limit_counts_characters_not_bytes(n in 4990usize..=5010) {
        let text = "é".repeat(n);
        prop_assert_eq!(validate_text(Some(&text)).is_ok(), n <= MAX_TEXT_CHARS);
    }
}
