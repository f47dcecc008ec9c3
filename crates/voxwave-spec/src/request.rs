//! Synthesis request type and JSON (de)serialization.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::SpecResult;
use crate::voice::VoiceParameters;

/// Maximum number of characters allowed in the trimmed request text.
pub const MAX_TEXT_CHARS: usize = 5000;

/// A request to synthesize `text` with the given voice.
///
/// `text` is optional at the serde level so that a missing field surfaces as a
/// validation error with a stable code instead of a JSON parse error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynthesisRequest {
    /// Input text to synthesize.
    #[serde(default)]
    pub text: Option<String>,
    /// Voice parameters.
    #[serde(default)]
    pub voice: VoiceParameters,
    /// Optional seed for the consonant noise source. Without a seed every
    /// synthesis draws fresh noise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
}

impl SynthesisRequest {
    /// Creates a request with neutral voice parameters.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            voice: VoiceParameters::default(),
            seed: None,
        }
    }

    /// Sets the voice parameters.
    pub fn with_voice(mut self, voice: VoiceParameters) -> Self {
        self.voice = voice;
        self
    }

    /// Sets the noise seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the text with surrounding whitespace removed.
    pub fn trimmed_text(&self) -> Option<&str> {
        self.text.as_deref().map(str::trim)
    }

    /// Parses a request from a JSON string.
    ///
    /// Unknown fields are rejected. Parsing does not validate the text or
    /// parameter ranges; see [`crate::validate_request`].
    pub fn from_json(json: &str) -> SpecResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a request file.
    pub fn from_file(path: impl AsRef<Path>) -> SpecResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Serializes the request to a JSON string.
    pub fn to_json(&self) -> SpecResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the request to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> SpecResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
