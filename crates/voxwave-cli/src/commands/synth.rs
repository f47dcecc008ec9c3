//! Synth command implementation
//!
//! Renders a request to a WAV file on disk.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;
use voxwave_backend_audio::{generate, generate_placeholder, AudioError, GenerateResult};
use voxwave_spec::{validate_request, SynthesisRequest};

use super::json_output::{
    audio_error_to_json, error_codes, load_error_to_json, print_json, validation_error_to_json,
    validation_warning_to_json, JsonError, SynthOutput, SynthResult,
};
use crate::input::{resolve_request, RequestOverrides};

/// Run the synth command
///
/// # Arguments
/// * `request_path` - Optional request JSON file
/// * `overrides` - Flag values applied on top of the request file
/// * `output` - Destination WAV path
/// * `placeholder` - Write a silent file of the estimated duration instead
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 on success, 1 for invalid input, 2 if rendering or writing failed
pub fn run(
    request_path: Option<&str>,
    overrides: RequestOverrides,
    output: &str,
    placeholder: bool,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(request_path, overrides, output, placeholder)
    } else {
        run_human(request_path, overrides, output, placeholder)
    }
}

fn render(request: &SynthesisRequest, placeholder: bool) -> Result<GenerateResult, AudioError> {
    if placeholder {
        generate_placeholder(request)
    } else {
        generate(request)
    }
}

fn write_output(output: &str, data: &[u8]) -> Result<()> {
    let path = Path::new(output);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    std::fs::write(path, data).with_context(|| format!("Failed to write WAV file: {}", output))
}

fn exit_code_for(error: &AudioError) -> ExitCode {
    match error {
        AudioError::InvalidInput(_) => ExitCode::from(1),
        _ => ExitCode::from(2),
    }
}

/// Run synth with human-readable (colored) output
fn run_human(
    request_path: Option<&str>,
    overrides: RequestOverrides,
    output: &str,
    placeholder: bool,
) -> Result<ExitCode> {
    let start = Instant::now();

    let (request, source_hash) = resolve_request(request_path, overrides)?;

    match request_path {
        Some(path) => println!("{} {}", "Synthesizing:".cyan().bold(), path),
        None => println!("{} <--text>", "Synthesizing:".cyan().bold()),
    }
    if let Some(hash) = &source_hash {
        println!("{} {}", "Source:".dimmed(), &hash[..16]);
    }

    let validation = validate_request(&request);
    for warning in &validation.warnings {
        println!("  {} {}", "!".yellow(), warning);
    }
    if !validation.is_ok() {
        for error in &validation.errors {
            println!("  {} {}", "x".red(), error);
        }
        println!(
            "\n{} Request has {} error(s)",
            "FAILED".red().bold(),
            validation.errors.len()
        );
        return Ok(ExitCode::from(1));
    }

    let result = match render(&request, placeholder) {
        Ok(result) => result,
        Err(e) => {
            println!("\n{} {}", "FAILED".red().bold(), e);
            return Ok(exit_code_for(&e));
        }
    };

    if let Err(e) = write_output(output, &result.wav.wav_data) {
        println!("\n{} {:#}", "FAILED".red().bold(), e);
        return Ok(ExitCode::from(2));
    }

    let duration_ms = start.elapsed().as_millis() as u64;

    println!(
        "{} rate {:.2}, pitch {:.2}, volume {:.2}{}",
        "Voice:".dimmed(),
        result.voice.rate,
        result.voice.pitch,
        result.voice.volume,
        result
            .voice_name()
            .map(|name| format!(" ({})", name))
            .unwrap_or_default()
    );
    println!(
        "{} {}s, {} samples, {} bytes",
        "Audio:".dimmed(),
        result.duration_seconds,
        result.wav.num_samples,
        result.wav.len()
    );
    println!("{} {}", "PCM hash:".dimmed(), &result.wav.pcm_hash[..16]);

    let kind = if placeholder { "placeholder" } else { "audio" };
    println!(
        "\n{} Wrote {} to {} ({}ms)",
        "SUCCESS".green().bold(),
        kind,
        output,
        duration_ms
    );
    Ok(ExitCode::SUCCESS)
}

/// Run synth with machine-readable JSON output
fn run_json(
    request_path: Option<&str>,
    overrides: RequestOverrides,
    output: &str,
    placeholder: bool,
) -> Result<ExitCode> {
    let start = Instant::now();

    let (request, source_hash) = match resolve_request(request_path, overrides) {
        Ok(resolved) => resolved,
        Err(e) => {
            let error = load_error_to_json(&e, request_path.unwrap_or_default());
            print_json(&SynthOutput::failure(vec![error], vec![], None))?;
            return Ok(ExitCode::from(1));
        }
    };

    let validation = validate_request(&request);
    let warnings: Vec<_> = validation
        .warnings
        .iter()
        .map(validation_warning_to_json)
        .collect();
    if !validation.is_ok() {
        let errors = validation
            .errors
            .iter()
            .map(validation_error_to_json)
            .collect();
        print_json(&SynthOutput::failure(errors, warnings, source_hash))?;
        return Ok(ExitCode::from(1));
    }

    let result = match render(&request, placeholder) {
        Ok(result) => result,
        Err(e) => {
            let output = SynthOutput::failure(vec![audio_error_to_json(&e)], warnings, source_hash);
            print_json(&output)?;
            return Ok(exit_code_for(&e));
        }
    };

    if let Err(e) = write_output(output, &result.wav.wav_data) {
        let error = JsonError::new(error_codes::FILE_WRITE, format!("{:#}", e)).with_file(output);
        print_json(&SynthOutput::failure(vec![error], warnings, source_hash))?;
        return Ok(ExitCode::from(2));
    }

    let synth_result = SynthResult {
        output_path: output.to_string(),
        placeholder,
        duration_seconds: result.duration_seconds,
        num_samples: result.wav.num_samples,
        bytes: result.wav.len(),
        pcm_hash: result.wav.pcm_hash.clone(),
        rate: result.voice.rate,
        pitch: result.voice.pitch,
        volume: result.voice.volume,
        voice_name: result.voice_name().map(str::to_string),
        duration_ms: start.elapsed().as_millis() as u64,
    };

    print_json(&SynthOutput::success(synth_result, warnings, source_hash))?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxwave_backend_audio::parse_header;

    fn text_overrides(text: &str) -> RequestOverrides {
        RequestOverrides {
            text: Some(text.to_string()),
            seed: Some(1),
            ..Default::default()
        }
    }

    #[test]
    fn test_synth_writes_wav_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("hello.wav");
        let out = out.to_str().unwrap();

        let code = run(None, text_overrides("Hello world"), out, false, true).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let data = std::fs::read(out).unwrap();
        assert_eq!(data.len(), 176444);
        parse_header(&data).unwrap().verify_sizes(data.len()).unwrap();
    }

    #[test]
    fn test_synth_placeholder_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("silent.wav");
        let out = out.to_str().unwrap();

        let code = run(None, text_overrides("Hello world"), out, true, false).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let data = std::fs::read(out).unwrap();
        assert_eq!(data.len(), 176444);
        assert!(data[44..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_synth_rejects_empty_text() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("empty.wav");

        let code = run(
            None,
            text_overrides("   "),
            out.to_str().unwrap(),
            false,
            true,
        )
        .unwrap();
        assert_eq!(code, ExitCode::from(1));
        assert!(!out.exists());
    }

    #[test]
    fn test_synth_missing_request_file_is_invalid_input() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("x.wav");

        let code = run(
            Some("/nonexistent/request.json"),
            RequestOverrides::default(),
            out.to_str().unwrap(),
            false,
            true,
        )
        .unwrap();
        assert_eq!(code, ExitCode::from(1));

        let err = run(
            Some("/nonexistent/request.json"),
            RequestOverrides::default(),
            out.to_str().unwrap(),
            false,
            false,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Failed to read request file"));
    }

    #[test]
    fn test_synth_reads_request_file_and_applies_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let request = dir.path().join("req.json");
        std::fs::write(&request, r#"{"text": "", "voice": {"rate": 3.0}}"#).unwrap();
        let out = dir.path().join("req.wav");

        let code = run(
            Some(request.to_str().unwrap()),
            text_overrides("Hello world"),
            out.to_str().unwrap(),
            false,
            false,
        )
        .unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(out.exists());
    }
}
