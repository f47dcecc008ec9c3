//! Validate command implementation
//!
//! Checks a request file without synthesizing it.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use voxwave_spec::{validate_request, ValidationResult};

use super::json_output::{
    load_error_to_json, print_json, validation_error_to_json, validation_warning_to_json,
    ValidateOutput,
};
use crate::input::{load_request, LoadResult};

/// Run the validate command
///
/// # Arguments
/// * `request_path` - Path to the request JSON file
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(request_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(request_path)
    } else {
        run_human(request_path)
    }
}

/// Run validate with human-readable (colored) output
fn run_human(request_path: &str) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), request_path);

    let LoadResult {
        request,
        source_hash,
    } = load_request(Path::new(request_path))?;
    println!("{} {}", "Source:".dimmed(), &source_hash[..16]);

    let validation = validate_request(&request);
    print_validation_results(&validation);

    if validation.is_ok() {
        println!("\n{} Request is valid", "SUCCESS".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Request has {} error(s)",
            "FAILED".red().bold(),
            validation.errors.len()
        );
        Ok(ExitCode::from(1))
    }
}

fn print_validation_results(validation: &ValidationResult) {
    for error in &validation.errors {
        println!("  {} {}", "x".red(), error);
    }
    for warning in &validation.warnings {
        println!("  {} {}", "!".yellow(), warning);
    }
}

/// Run validate with machine-readable JSON output
fn run_json(request_path: &str) -> Result<ExitCode> {
    let LoadResult {
        request,
        source_hash,
    } = match load_request(Path::new(request_path)) {
        Ok(loaded) => loaded,
        Err(e) => {
            let output = ValidateOutput {
                success: false,
                errors: vec![load_error_to_json(&e, request_path)],
                warnings: Vec::new(),
                source_hash: None,
            };
            print_json(&output)?;
            return Ok(ExitCode::from(1));
        }
    };

    let validation = validate_request(&request);
    let output = ValidateOutput {
        success: validation.is_ok(),
        errors: validation
            .errors
            .iter()
            .map(validation_error_to_json)
            .collect(),
        warnings: validation
            .warnings
            .iter()
            .map(validation_warning_to_json)
            .collect(),
        source_hash: Some(source_hash),
    };
    print_json(&output)?;

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
