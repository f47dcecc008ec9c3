//! JSON output types for machine-readable CLI output.
//!
//! Every command accepts `--json`. In that mode nothing but a single JSON
//! document is written to stdout, so the output can be piped into other
//! tools.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use voxwave_backend_audio::{AudioError, WavHeader};
use voxwave_spec::{BackendError, SpecError, ValidationError, ValidationWarning};

/// Error codes for CLI operations.
///
/// These codes are stable. Validation and backend failures pass their own
/// codes through (`E00x`, `AUDIO_00x`).
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_002";
    /// Output file could not be written
    pub const FILE_WRITE: &str = "CLI_003";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E002", "AUDIO_003")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
            file: None,
        }
    }

    /// Sets the JSON path for this error.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonWarning {
    /// Creates a new warning with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }

    /// Sets the JSON path for this warning.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// JSON output for the `synth` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthOutput {
    /// Whether synthesis succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Parameter warnings
    pub warnings: Vec<JsonWarning>,
    /// Synthesis result details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<SynthResult>,
    /// BLAKE3 hash of the request file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
}

/// Details of a rendered WAV file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthResult {
    /// Path the WAV file was written to
    pub output_path: String,
    /// Whether the file is a silent placeholder
    pub placeholder: bool,
    /// Duration in whole seconds
    pub duration_seconds: u32,
    /// Number of PCM samples
    pub num_samples: usize,
    /// Total file size in bytes
    pub bytes: usize,
    /// BLAKE3 hash of the PCM payload
    pub pcm_hash: String,
    /// Clamped rate used
    pub rate: f64,
    /// Clamped pitch used
    pub pitch: f64,
    /// Clamped volume used
    pub volume: f64,
    /// Voice label, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_name: Option<String>,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl SynthOutput {
    /// Creates a successful synth output.
    pub fn success(
        result: SynthResult,
        warnings: Vec<JsonWarning>,
        source_hash: Option<String>,
    ) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
            source_hash,
        }
    }

    /// Creates a failed synth output.
    pub fn failure(
        errors: Vec<JsonError>,
        warnings: Vec<JsonWarning>,
        source_hash: Option<String>,
    ) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            result: None,
            source_hash,
        }
    }
}

/// JSON output for the `estimate` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EstimateOutput {
    /// Always true; estimation cannot fail
    pub success: bool,
    /// Number of whitespace-separated words
    pub words: usize,
    /// Clamped rate used
    pub rate: f64,
    /// Estimated duration in whole seconds
    pub duration_seconds: u32,
    /// Number of samples at the output sample rate
    pub num_samples: usize,
    /// Size of the WAV file that would be written
    pub bytes: u64,
}

/// JSON output for the `validate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    /// Whether validation succeeded (no errors)
    pub success: bool,
    /// Validation errors
    pub errors: Vec<JsonError>,
    /// Validation warnings
    pub warnings: Vec<JsonWarning>,
    /// BLAKE3 hash of the request file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
}

/// JSON output for the `inspect` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectOutput {
    /// Whether the header parsed and its sizes agree with the file length
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Parsed header details (when the header parsed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<InspectResult>,
}

/// Parsed header fields plus derived values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectResult {
    /// File size in bytes
    pub file_size: usize,
    /// RIFF chunk size
    pub chunk_size: u32,
    /// Audio format code (1 = PCM)
    pub audio_format: u16,
    /// Number of channels
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Bytes per second
    pub byte_rate: u32,
    /// Bytes per sample frame
    pub block_align: u16,
    /// Bits per sample
    pub bits_per_sample: u16,
    /// data chunk size
    pub data_size: u32,
    /// Number of samples implied by the data chunk
    pub num_samples: usize,
    /// Duration in seconds
    pub duration_seconds: f64,
    /// BLAKE3 hash of the PCM payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcm_hash: Option<String>,
}

impl InspectResult {
    /// Builds the result from a parsed header.
    pub fn from_header(header: &WavHeader, file_size: usize, pcm_hash: Option<String>) -> Self {
        Self {
            file_size,
            chunk_size: header.chunk_size,
            audio_format: header.audio_format,
            channels: header.channels,
            sample_rate: header.sample_rate,
            byte_rate: header.byte_rate,
            block_align: header.block_align,
            bits_per_sample: header.bits_per_sample,
            data_size: header.data_size,
            num_samples: header.num_samples(),
            duration_seconds: header.duration_seconds(),
            pcm_hash,
        }
    }
}

/// Converts a validation error to a JSON error.
pub fn validation_error_to_json(error: &ValidationError) -> JsonError {
    let mut json = JsonError::new(error.code.code(), &error.message);
    if let Some(path) = &error.path {
        json = json.with_path(path);
    }
    json
}

/// Converts a validation warning to a JSON warning.
pub fn validation_warning_to_json(warning: &ValidationWarning) -> JsonWarning {
    let mut json = JsonWarning::new(warning.code.code(), &warning.message);
    if let Some(path) = &warning.path {
        json = json.with_path(path);
    }
    json
}

/// Converts a backend error to a JSON error.
///
/// Input errors keep their validation code so callers see `E002` rather than
/// the wrapping `AUDIO_001`.
pub fn audio_error_to_json(error: &AudioError) -> JsonError {
    match error {
        AudioError::InvalidInput(e) => validation_error_to_json(e),
        other => JsonError::new(other.code(), other.to_string()),
    }
}

/// Converts a request loading failure to a JSON error.
pub fn load_error_to_json(error: &anyhow::Error, file: &str) -> JsonError {
    let code = if let Some(SpecError::JsonParse(_)) = error.downcast_ref::<SpecError>() {
        error_codes::JSON_PARSE
    } else {
        error_codes::FILE_READ
    };
    JsonError::new(code, format!("{:#}", error)).with_file(file)
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
