//! Loading synthesis requests from JSON files and command-line overrides.

use anyhow::{Context, Result};
use std::path::Path;
use voxwave_spec::SynthesisRequest;

/// A request loaded from disk together with its provenance.
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// The parsed request.
    pub request: SynthesisRequest,
    /// BLAKE3 hash of the source file bytes.
    pub source_hash: String,
}

/// Loads a request from a JSON file.
pub fn load_request(path: &Path) -> Result<LoadResult> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file: {}", path.display()))?;
    let source_hash = blake3::hash(content.as_bytes()).to_hex().to_string();

    let request = SynthesisRequest::from_json(&content)
        .with_context(|| format!("Failed to parse request JSON: {}", path.display()))?;

    Ok(LoadResult {
        request,
        source_hash,
    })
}

/// Command-line values that override fields of a loaded request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOverrides {
    /// Replacement text.
    pub text: Option<String>,
    /// Replacement rate.
    pub rate: Option<f64>,
    /// Replacement pitch.
    pub pitch: Option<f64>,
    /// Replacement volume.
    pub volume: Option<f64>,
    /// Replacement voice label.
    pub voice_name: Option<String>,
    /// Replacement seed.
    pub seed: Option<u32>,
}

impl RequestOverrides {
    /// Applies every set field to `request`.
    pub fn apply(self, mut request: SynthesisRequest) -> SynthesisRequest {
        if let Some(text) = self.text {
            request.text = Some(text);
        }
        if let Some(rate) = self.rate {
            request.voice.rate = rate;
        }
        if let Some(pitch) = self.pitch {
            request.voice.pitch = pitch;
        }
        if let Some(volume) = self.volume {
            request.voice.volume = volume;
        }
        if let Some(name) = self.voice_name {
            request.voice.voice_name = Some(name);
        }
        if let Some(seed) = self.seed {
            request.seed = Some(seed);
        }
        request
    }
}

/// Builds the effective request from an optional request file and overrides.
///
/// Without a file, the overrides are applied to an empty request with
/// neutral voice parameters.
pub fn resolve_request(
    request_path: Option<&str>,
    overrides: RequestOverrides,
) -> Result<(SynthesisRequest, Option<String>)> {
    let (base, source_hash) = match request_path {
        Some(path) => {
            let loaded = load_request(Path::new(path))?;
            (loaded.request, Some(loaded.source_hash))
        }
        None => (SynthesisRequest::default(), None),
    };

    Ok((overrides.apply(base), source_hash))
}
