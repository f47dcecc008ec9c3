//! Voice parameters shared by the duration estimator and the synthesizer.

use serde::{Deserialize, Serialize};

/// Minimum speaking rate.
pub const MIN_RATE: f64 = 0.1;
/// Maximum speaking rate.
pub const MAX_RATE: f64 = 10.0;
/// Minimum pitch.
pub const MIN_PITCH: f64 = 0.0;
/// Maximum pitch.
pub const MAX_PITCH: f64 = 2.0;
/// Minimum volume.
pub const MIN_VOLUME: f64 = 0.0;
/// Maximum volume.
pub const MAX_VOLUME: f64 = 1.0;

/// Voice settings for one synthesis call.
///
/// `rate`, `pitch` and `volume` are clamped to their documented ranges by
/// [`VoiceParameters::clamped`] rather than rejected. `voice_name` is carried
/// through as metadata and never changes the synthesized signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VoiceParameters {
    /// Speaking rate, 1.0 = neutral (range 0.1 to 10.0).
    #[serde(default = "default_one")]
    pub rate: f64,
    /// Pitch, 1.0 = neutral (range 0.0 to 2.0).
    #[serde(default = "default_one")]
    pub pitch: f64,
    /// Volume (range 0.0 to 1.0).
    #[serde(default = "default_one")]
    pub volume: f64,
    /// Informational voice label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_name: Option<String>,
}

fn default_one() -> f64 {
    1.0
}

impl Default for VoiceParameters {
    fn default() -> Self {
        Self {
            rate: 1.0,
            pitch: 1.0,
            volume: 1.0,
            voice_name: None,
        }
    }
}

impl VoiceParameters {
    /// Creates voice parameters. Values are stored as given; call
    /// [`clamped`](Self::clamped) before synthesis.
    pub fn new(rate: f64, pitch: f64, volume: f64) -> Self {
        Self {
            rate,
            pitch,
            volume,
            voice_name: None,
        }
    }

    /// Sets the informational voice name.
    pub fn with_voice_name(mut self, name: impl Into<String>) -> Self {
        self.voice_name = Some(name.into());
        self
    }

    /// Returns a copy with every parameter inside its documented range.
    ///
    /// Non-finite values fall back to the neutral default of 1.0.
    pub fn clamped(&self) -> Self {
        Self {
            rate: clamp_param(self.rate, MIN_RATE, MAX_RATE, 1.0),
            pitch: clamp_param(self.pitch, MIN_PITCH, MAX_PITCH, 1.0),
            volume: clamp_param(self.volume, MIN_VOLUME, MAX_VOLUME, 1.0),
            voice_name: self.voice_name.clone(),
        }
    }

    /// Returns true if every parameter is finite and inside its range.
    pub fn is_in_range(&self) -> bool {
        in_range(self.rate, MIN_RATE, MAX_RATE)
            && in_range(self.pitch, MIN_PITCH, MAX_PITCH)
            && in_range(self.volume, MIN_VOLUME, MAX_VOLUME)
    }
}

/// Clamps a single parameter, replacing NaN and infinities with `neutral`.
pub fn clamp_param(value: f64, min: f64, max: f64, neutral: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        neutral
    }
}

fn in_range(value: f64, min: f64, max: f64) -> bool {
    value.is_finite() && (min..=max).contains(&value)
}
