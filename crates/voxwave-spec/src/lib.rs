//! voxwave request library
//!
//! This crate provides the types and validation for voxwave synthesis
//! requests. A request is a JSON document carrying the text to render and the
//! voice settings to render it with.
//!
//! # Example
//!
//! ```
//! use voxwave_spec::{validate_request, SynthesisRequest, VoiceParameters};
//!
//! let request = SynthesisRequest::new("Hello world")
//!     .with_voice(VoiceParameters::new(1.2, 1.0, 0.8).with_voice_name("Samantha"));
//!
//! let result = validate_request(&request);
//! assert!(result.is_ok());
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error and warning types for validation
//! - [`request`]: The synthesis request and its JSON form
//! - [`validation`]: Request validation functions
//! - [`voice`]: Voice parameters and their ranges

pub mod error;
pub mod request;
pub mod validation;
pub mod voice;

pub use error::{
    BackendError, ErrorCode, SpecError, SpecResult, ValidationError, ValidationResult,
    ValidationWarning, WarningCode,
};
pub use request::{SynthesisRequest, MAX_TEXT_CHARS};
pub use validation::{validate_request, validate_text};
pub use voice::VoiceParameters;

/// Output sample rate in Hz.
pub const SAMPLE_RATE: u32 = 44100;
