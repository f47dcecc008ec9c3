//! Main entry point for text-to-audio generation.
//!
//! This module takes a synthesis request and produces a WAV file. The
//! pipeline is: validate, clamp, estimate duration, then synthesize, quantize
//! and encode in a single pass over the samples.

use rand_pcg::Pcg32;
use tracing::{debug, trace, warn};
use voxwave_spec::{validate_request, SynthesisRequest, VoiceParameters, SAMPLE_RATE};

use crate::duration::{estimate_duration, sample_count};
use crate::error::{AudioError, AudioResult};
use crate::rng::noise_rng;
use crate::synthesis::voice::render_wav;
use crate::wav::{WavResult, HEADER_SIZE};

/// Result of audio generation.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// WAV file data.
    pub wav: WavResult,
    /// Duration in whole seconds.
    pub duration_seconds: u32,
    /// The clamped voice parameters used for synthesis.
    pub voice: VoiceParameters,
}

impl GenerateResult {
    /// Voice label carried through from the request.
    pub fn voice_name(&self) -> Option<&str> {
        self.voice.voice_name.as_deref()
    }
}

/// Validates `request` and returns its trimmed text and clamped voice.
fn prepare(request: &SynthesisRequest) -> AudioResult<(&str, VoiceParameters)> {
    let validation = validate_request(request);
    for warning in &validation.warnings {
        warn!(code = %warning.code, "{}", warning.message);
    }
    if let Err(mut errors) = validation.into_result() {
        return Err(AudioError::InvalidInput(errors.remove(0)));
    }

    // Validation guarantees text is present
    let text = request.trimmed_text().unwrap_or_default();
    Ok((text, request.voice.clamped()))
}

fn finish(
    wav: WavResult,
    duration_seconds: u32,
    voice: VoiceParameters,
) -> GenerateResult {
    debug_assert_eq!(wav.len(), HEADER_SIZE + wav.num_samples * 2);
    trace!(bytes = wav.len(), pcm_hash = %wav.pcm_hash, "encoded WAV");

    GenerateResult {
        wav,
        duration_seconds,
        voice,
    }
}

/// Generates audio for a request.
///
/// The consonant noise source is seeded from `request.seed` when present and
/// from OS entropy otherwise. Each call owns its own generator.
pub fn generate(request: &SynthesisRequest) -> AudioResult<GenerateResult> {
    let mut rng = noise_rng(request.seed);
    generate_with_rng(request, &mut rng)
}

/// Generates audio for a request using a caller-supplied noise source.
pub fn generate_with_rng(
    request: &SynthesisRequest,
    rng: &mut Pcg32,
) -> AudioResult<GenerateResult> {
    let (text, voice) = prepare(request)?;

    let duration_seconds = estimate_duration(text, voice.rate);
    debug!(
        chars = text.chars().count(),
        duration_seconds,
        rate = voice.rate,
        pitch = voice.pitch,
        volume = voice.volume,
        "synthesizing"
    );

    let wav = render_wav(text, duration_seconds, SAMPLE_RATE, &voice, rng)?;
    Ok(finish(wav, duration_seconds, voice))
}

/// Generates the silent placeholder artifact for a request.
///
/// The placeholder has the same duration the synthesized audio would have,
/// computed with the same estimator.
pub fn generate_placeholder(request: &SynthesisRequest) -> AudioResult<GenerateResult> {
    let (text, voice) = prepare(request)?;

    let duration_seconds = estimate_duration(text, voice.rate);
    debug!(duration_seconds, "rendering silent placeholder");

    let num_samples = sample_count(duration_seconds, SAMPLE_RATE);
    let wav = WavResult::from_samples(SAMPLE_RATE, num_samples, std::iter::repeat(0i16))?;
    Ok(finish(wav, duration_seconds, voice))
}
