//! Error types for the audio backend.

use voxwave_spec::{BackendError, ValidationError};
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during audio generation.
#[derive(Debug, Error)]
pub enum AudioError {
    /// The request failed validation before synthesis started.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// A byte sequence is not a well-formed PCM WAV container.
    #[error("invalid WAV container at offset {offset}: {message}")]
    InvalidContainer {
        /// Byte offset of the offending field.
        offset: usize,
        /// Error message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an invalid container error.
    pub fn invalid_container(offset: usize, message: impl Into<String>) -> Self {
        Self::InvalidContainer {
            offset,
            message: message.into(),
        }
    }
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidInput(_) => "AUDIO_001",
            AudioError::InvalidSampleRate { .. } => "AUDIO_002",
            AudioError::InvalidContainer { .. } => "AUDIO_003",
            AudioError::Io(_) => "AUDIO_004",
        }
    }

    fn category(&self) -> &'static str {
        "audio"
    }
}
