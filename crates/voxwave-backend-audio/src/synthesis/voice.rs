//! Text-driven voice synthesis.
//!
//! Each output sample is tied to one character of the input text: the sample
//! index is mapped proportionally onto the text, and the character found there
//! decides what is played. Whitespace is silence, vowels are three
//! harmonically related partials, and everything else is a single sine with
//! added noise. The result is input-sensitive audio, not intelligible speech.

use std::f64::consts::PI;

use rand::Rng;
use rand_pcg::Pcg32;
use voxwave_spec::VoiceParameters;

use super::Synthesizer;
use crate::envelope::FadeEnvelope;
use crate::error::AudioResult;
use crate::wav::{quantize_sample, WavResult};

/// Headroom factor applied after the envelope.
pub const HEADROOM: f64 = 0.3;

/// Vowel partial ratios relative to the fundamental.
const VOWEL_RATIOS: [f64; 3] = [1.0, 2.1, 3.2];
/// Vowel partial weights.
const VOWEL_WEIGHTS: [f64; 3] = [0.6, 0.3, 0.1];

const CONSONANT_TONE_WEIGHT: f64 = 0.7;
const CONSONANT_NOISE_WEIGHT: f64 = 0.3;

/// Sound class of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Whitespace: a pause.
    Silence,
    /// `a e i o u` in either case.
    Vowel,
    /// Anything else.
    Consonant,
}

/// Classifies a character.
pub fn classify(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Silence
    } else if matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u') {
        CharClass::Vowel
    } else {
        CharClass::Consonant
    }
}

/// Per-character frequency seed: `200 + (code point mod 300)` Hz.
pub fn base_char_freq(c: char) -> f64 {
    200.0 + (c as u32 % 300) as f64
}

/// Frequencies of the three vowel partials for `c` at `pitch`.
pub fn vowel_partials(c: char, pitch: f64) -> [f64; 3] {
    let f1 = base_char_freq(c) * (1.0 + pitch * 0.5);
    VOWEL_RATIOS.map(|ratio| f1 * ratio)
}

/// Frequency of the consonant tone for `c` at `pitch`.
pub fn consonant_freq(c: char, pitch: f64) -> f64 {
    base_char_freq(c) * (1.5 + pitch * 0.8)
}

/// Amplitude scale standing in for speaking tempo.
pub fn rate_gain(rate: f64) -> f64 {
    1.0 + (rate - 1.0) * 0.2
}

/// Raw sample for character `c` at `time` seconds, before rate, envelope,
/// and volume are applied.
///
/// Only the consonant branch draws from `rng`.
pub fn char_sample<R: Rng + ?Sized>(c: char, time: f64, pitch: f64, rng: &mut R) -> f64 {
    let two_pi_t = 2.0 * PI * time;

    match classify(c) {
        CharClass::Silence => 0.0,
        CharClass::Vowel => vowel_partials(c, pitch)
            .iter()
            .zip(VOWEL_WEIGHTS.iter())
            .map(|(&freq, &weight)| (two_pi_t * freq).sin() * weight)
            .sum(),
        CharClass::Consonant => {
            let tone = (two_pi_t * consonant_freq(c, pitch)).sin() * CONSONANT_TONE_WEIGHT;
            let noise = (rng.gen::<f64>() - 0.5) * CONSONANT_NOISE_WEIGHT;
            tone + noise
        }
    }
}

/// Synthesizer that renders a text with a voice.
#[derive(Debug, Clone)]
pub struct TextVoiceSynth {
    chars: Vec<char>,
    voice: VoiceParameters,
}

impl TextVoiceSynth {
    /// Creates a synthesizer for `text`. Voice parameters are clamped.
    pub fn new(text: &str, voice: &VoiceParameters) -> Self {
        Self {
            chars: text.chars().collect(),
            voice: voice.clamped(),
        }
    }

    /// The clamped voice parameters in use.
    pub fn voice(&self) -> &VoiceParameters {
        &self.voice
    }

    /// Character played at sample `index` of `num_samples`.
    ///
    /// Computes `floor(index / num_samples * len)` in integer arithmetic, so
    /// the result is always a valid index while `index < num_samples`.
    pub fn char_at(&self, index: usize, num_samples: usize) -> Option<char> {
        if self.chars.is_empty() || num_samples == 0 {
            return None;
        }
        let pos = (index as u128 * self.chars.len() as u128 / num_samples as u128) as usize;
        self.chars.get(pos).copied()
    }
}

impl TextVoiceSynth {
    /// Lazily renders `num_samples` normalized samples.
    ///
    /// Values are produced one at a time in index order, so consonant noise is
    /// drawn from `rng` in the same order regardless of how the caller
    /// consumes them.
    pub fn samples<'a>(
        &'a self,
        num_samples: usize,
        sample_rate: f64,
        rng: &'a mut Pcg32,
    ) -> impl Iterator<Item = f64> + 'a {
        let duration = num_samples as f64 / sample_rate;
        let envelope = FadeEnvelope::new(duration);
        let rate_gain = rate_gain(self.voice.rate);
        let level = self.voice.volume * HEADROOM;
        let pitch = self.voice.pitch;

        (0..num_samples).map(move |i| match self.char_at(i, num_samples) {
            Some(c) => {
                let time = i as f64 / sample_rate;
                char_sample(c, time, pitch, &mut *rng) * rate_gain * envelope.gain(time) * level
            }
            None => 0.0,
        })
    }
}

impl Synthesizer for TextVoiceSynth {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, rng: &mut Pcg32) -> Vec<f64> {
        self.samples(num_samples, sample_rate, rng).collect()
    }
}

/// Renders `text` for `duration_seconds` into signed 16-bit samples.
///
/// Returns exactly `sample_rate * duration_seconds` samples.
pub fn synthesize(
    text: &str,
    duration_seconds: u32,
    sample_rate: u32,
    voice: &VoiceParameters,
    rng: &mut Pcg32,
) -> Vec<i16> {
    let num_samples = crate::duration::sample_count(duration_seconds, sample_rate);
    let synth = TextVoiceSynth::new(text, voice);
    synth
        .samples(num_samples, sample_rate as f64, rng)
        .map(quantize_sample)
        .collect()
}

/// Renders `text` for `duration_seconds` straight into an encoded WAV file.
///
/// Each sample is quantized as it is produced and appended to the file
/// buffer, so no intermediate signal buffer is kept.
pub fn render_wav(
    text: &str,
    duration_seconds: u32,
    sample_rate: u32,
    voice: &VoiceParameters,
    rng: &mut Pcg32,
) -> AudioResult<WavResult> {
    let num_samples = crate::duration::sample_count(duration_seconds, sample_rate);
    let synth = TextVoiceSynth::new(text, voice);
    let samples = synth
        .samples(num_samples, sample_rate as f64, rng)
        .map(quantize_sample);
    WavResult::from_samples(sample_rate, num_samples, samples)
}
