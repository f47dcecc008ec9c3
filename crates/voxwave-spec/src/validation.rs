//! Request validation.
//!
//! Text problems are errors and stop the request before any synthesis work.
//! Out-of-range voice parameters are warnings: the backend clamps them.

use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::request::{SynthesisRequest, MAX_TEXT_CHARS};
use crate::voice::{MAX_PITCH, MAX_RATE, MAX_VOLUME, MIN_PITCH, MIN_RATE, MIN_VOLUME};

/// Validates the request text.
///
/// # Returns
/// * `Ok(&str)` - the trimmed text
/// * `Err(ValidationError)` - missing, empty, or too long
pub fn validate_text(text: Option<&str>) -> Result<&str, ValidationError> {
    let text = text.ok_or_else(|| {
        ValidationError::with_path(ErrorCode::MissingText, "text is required", "text")
    })?;

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::with_path(
            ErrorCode::EmptyText,
            "text must contain at least one non-whitespace character",
            "text",
        ));
    }

    let len = trimmed.chars().count();
    if len > MAX_TEXT_CHARS {
        return Err(ValidationError::with_path(
            ErrorCode::TextTooLong,
            format!(
                "text is too long: {} characters (max {})",
                len, MAX_TEXT_CHARS
            ),
            "text",
        ));
    }

    Ok(trimmed)
}

/// Validates a synthesis request.
pub fn validate_request(request: &SynthesisRequest) -> ValidationResult {
    let mut result = ValidationResult::success();

    if let Err(e) = validate_text(request.text.as_deref()) {
        result.add_error(e);
    }

    let voice = &request.voice;
    check_param(&mut result, "voice.rate", voice.rate, MIN_RATE, MAX_RATE);
    check_param(&mut result, "voice.pitch", voice.pitch, MIN_PITCH, MAX_PITCH);
    check_param(
        &mut result,
        "voice.volume",
        voice.volume,
        MIN_VOLUME,
        MAX_VOLUME,
    );

    result
}

fn check_param(result: &mut ValidationResult, path: &str, value: f64, min: f64, max: f64) {
    if !value.is_finite() {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::ParameterNotFinite,
            format!("{} is not a finite number; using 1.0", value),
            path,
        ));
    } else if value < min || value > max {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::ParameterClamped,
            format!("{} is outside [{}, {}] and will be clamped", value, min, max),
            path,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voice::VoiceParameters;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validate_text_trims() {
        assert_eq!(validate_text(Some("  hello  ")).unwrap(), "hello");
    }

    #[test]
    fn test_validate_text_missing() {
        let err = validate_text(None).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingText);
    }

    #[test]
    fn test_validate_text_whitespace_only() {
        let err = validate_text(Some(" \t\n ")).unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyText);
    }

    #[test]
    fn test_validate_text_length_bound_is_inclusive() {
        let at_limit = "a".repeat(MAX_TEXT_CHARS);
        assert!(validate_text(Some(&at_limit)).is_ok());

        let over = "a".repeat(MAX_TEXT_CHARS + 1);
        let err = validate_text(Some(&over)).unwrap_err();
        assert_eq!(err.code, ErrorCode::TextTooLong);
    }

    #[test]
    fn test_validate_text_length_counts_after_trim() {
        let padded = format!("   {}   ", "a".repeat(MAX_TEXT_CHARS));
        assert!(validate_text(Some(&padded)).is_ok());
    }

    #[test]
    fn test_validate_text_counts_chars_not_bytes() {
        // 5000 two-byte characters are within the limit.
        let text = "é".repeat(MAX_TEXT_CHARS);
        assert!(validate_text(Some(&text)).is_ok());
    }

    #[test]
    fn test_validate_request_ok() {
        let request = SynthesisRequest::new("Hello world");
        let result = validate_request(&request);
        assert!(result.is_ok());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validate_request_out_of_range_params_warn() {
        let request =
            SynthesisRequest::new("Hello").with_voice(VoiceParameters::new(20.0, 1.0, f64::NAN));
        let result = validate_request(&request);

        assert!(result.is_ok());
        let codes: Vec<_> = result.warnings.iter().map(|w| w.code).collect();
        assert_eq!(
            codes,
            vec![WarningCode::ParameterClamped, WarningCode::ParameterNotFinite]
        );
        assert_eq!(result.warnings[0].path.as_deref(), Some("voice.rate"));
    }

    #[test]
    fn test_validate_request_empty_text_fails() {
        let request = SynthesisRequest::new("   ");
        let result = validate_request(&request);
        assert!(!result.is_ok());
        assert_eq!(result.errors[0].code, ErrorCode::EmptyText);
    }
}
