//! Estimate command implementation
//!
//! Prints the duration the synthesizer would give a text, without rendering.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;
use voxwave_backend_audio::duration::word_count;
use voxwave_backend_audio::wav::HEADER_SIZE;
use voxwave_backend_audio::{estimate_duration, sample_count};
use voxwave_spec::voice::{clamp_param, MAX_RATE, MIN_RATE};
use voxwave_spec::SAMPLE_RATE;

use super::json_output::{print_json, EstimateOutput};

/// Computes the estimate for `text` at `rate`.
pub fn estimate(text: &str, rate: f64) -> EstimateOutput {
    let text = text.trim();
    let rate = clamp_param(rate, MIN_RATE, MAX_RATE, 1.0);
    let duration_seconds = estimate_duration(text, rate);
    let num_samples = sample_count(duration_seconds, SAMPLE_RATE);

    EstimateOutput {
        success: true,
        words: word_count(text),
        rate,
        duration_seconds,
        num_samples,
        bytes: HEADER_SIZE as u64 + num_samples as u64 * 2,
    }
}

/// Run the estimate command
///
/// # Returns
/// Exit code: always 0
pub fn run(text: &str, rate: f64, json_output: bool) -> Result<ExitCode> {
    let output = estimate(text, rate);

    if json_output {
        print_json(&output)?;
    } else {
        println!("{} {}", "Words:".dimmed(), output.words);
        println!("{} {:.2}", "Rate:".dimmed(), output.rate);
        println!(
            "{} {}s ({} samples, {} bytes)",
            "Estimated duration:".cyan().bold(),
            output.duration_seconds,
            output.num_samples,
            output.bytes
        );
    }

    Ok(ExitCode::SUCCESS)
}
