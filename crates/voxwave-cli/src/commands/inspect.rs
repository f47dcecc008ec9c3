//! Inspect command implementation
//!
//! Parses the header of a WAV file and checks its sizes against the file
//! length.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;
use voxwave_backend_audio::parse_header;
use voxwave_backend_audio::wav::compute_pcm_hash;

use super::json_output::{
    audio_error_to_json, error_codes, print_json, InspectOutput, InspectResult, JsonError,
};

/// Run the inspect command
///
/// # Arguments
/// * `input` - Path to the WAV file
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if the header is well formed, 2 if it is not
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(input)
    } else {
        run_human(input)
    }
}

/// Run inspect with human-readable (colored) output
fn run_human(input: &str) -> Result<ExitCode> {
    println!("{} {}", "Inspecting:".cyan().bold(), input);

    let data =
        std::fs::read(input).with_context(|| format!("Failed to read WAV file: {}", input))?;

    let header = match parse_header(&data) {
        Ok(header) => header,
        Err(e) => {
            println!("\n{} {}", "FAILED".red().bold(), e);
            return Ok(ExitCode::from(2));
        }
    };

    let info = InspectResult::from_header(&header, data.len(), compute_pcm_hash(&data));
    println!(
        "{} PCM {} ch, {} Hz, {} bit",
        "Format:".dimmed(),
        info.channels,
        info.sample_rate,
        info.bits_per_sample
    );
    println!(
        "{} {} samples, {:.3}s",
        "Audio:".dimmed(),
        info.num_samples,
        info.duration_seconds
    );
    println!(
        "{} file {} bytes, RIFF {} bytes, data {} bytes",
        "Sizes:".dimmed(),
        info.file_size,
        info.chunk_size,
        info.data_size
    );
    if let Some(hash) = &info.pcm_hash {
        println!("{} {}", "PCM hash:".dimmed(), &hash[..16]);
    }

    if let Err(e) = header.verify_sizes(data.len()) {
        println!("\n{} {}", "FAILED".red().bold(), e);
        return Ok(ExitCode::from(2));
    }

    println!("\n{} Header is consistent", "SUCCESS".green().bold());
    Ok(ExitCode::SUCCESS)
}

/// Run inspect with machine-readable JSON output
fn run_json(input: &str) -> Result<ExitCode> {
    let data = match std::fs::read(input) {
        Ok(data) => data,
        Err(e) => {
            let error = JsonError::new(
                error_codes::FILE_READ,
                format!("Failed to read WAV file: {}", e),
            )
            .with_file(input);
            print_json(&InspectOutput {
                success: false,
                errors: vec![error],
                result: None,
            })?;
            return Ok(ExitCode::from(1));
        }
    };

    let header = match parse_header(&data) {
        Ok(header) => header,
        Err(e) => {
            print_json(&InspectOutput {
                success: false,
                errors: vec![audio_error_to_json(&e)],
                result: None,
            })?;
            return Ok(ExitCode::from(2));
        }
    };

    let result = InspectResult::from_header(&header, data.len(), compute_pcm_hash(&data));
    let errors: Vec<_> = header
        .verify_sizes(data.len())
        .err()
        .map(|e| audio_error_to_json(&e))
        .into_iter()
        .collect();
    let success = errors.is_empty();

    print_json(&InspectOutput {
        success,
        errors,
        result: Some(result),
    })?;

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxwave_backend_audio::WavResult;

    fn write_file(dir: &tempfile::TempDir, name: &str, data: &[u8]) -> String {
        let path = dir.path().join(name);
        std::fs::write(&path, data).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_inspect_valid_wav() {
        let dir = tempfile::tempdir().unwrap();
        let wav = WavResult::from_mono(&[0, 100, -100], 44100).unwrap();
        let path = write_file(&dir, "ok.wav", &wav.wav_data);

        assert_eq!(run(&path, false).unwrap(), ExitCode::SUCCESS);
        assert_eq!(run(&path, true).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_inspect_truncated_wav() {
        let dir = tempfile::tempdir().unwrap();
        let wav = WavResult::from_mono(&[0; 32], 44100).unwrap();
        let path = write_file(&dir, "short.wav", &wav.wav_data[..wav.len() - 4]);

        assert_eq!(run(&path, true).unwrap(), ExitCode::from(2));
        assert_eq!(run(&path, false).unwrap(), ExitCode::from(2));
    }

    #[test]
    fn test_inspect_not_a_wav() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "junk.wav", b"definitely not a riff file at all");

        assert_eq!(run(&path, true).unwrap(), ExitCode::from(2));
    }

    #[test]
    fn test_inspect_missing_file() {
        assert_eq!(
            run("/nonexistent/file.wav", true).unwrap(),
            ExitCode::from(1)
        );
        assert!(run("/nonexistent/file.wav", false).is_err());
    }
}
