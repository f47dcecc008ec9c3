//! voxwave CLI - Command-line interface for procedural text-to-WAV rendering
//!
//! This binary renders text to 16-bit mono WAV files, estimates durations,
//! validates request files and inspects WAV headers.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use voxwave_cli::commands;
use voxwave_cli::input::RequestOverrides;
use voxwave_cli::logging;

/// voxwave - Procedural text-to-WAV synthesizer
#[derive(Parser)]
#[command(name = "voxwave")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging on stderr (overridden by VOXWAVE_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render text to a WAV file
    Synth {
        /// Text to synthesize (overrides the request file's text)
        #[arg(short, long, required_unless_present = "request")]
        text: Option<String>,

        /// Path to a request JSON file
        #[arg(short, long)]
        request: Option<String>,

        /// Speaking rate, 0.1 to 10.0
        #[arg(long)]
        rate: Option<f64>,

        /// Pitch, 0.0 to 2.0
        #[arg(long)]
        pitch: Option<f64>,

        /// Volume, 0.0 to 1.0
        #[arg(long)]
        volume: Option<f64>,

        /// Voice label recorded with the result
        #[arg(long)]
        voice: Option<String>,

        /// Seed for reproducible consonant noise
        #[arg(long)]
        seed: Option<u32>,

        /// Output WAV path
        #[arg(short, long)]
        output: String,

        /// Write a silent file of the estimated duration
        #[arg(long)]
        placeholder: bool,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Estimate the duration of a text without rendering it
    Estimate {
        /// Text to estimate
        #[arg(short, long)]
        text: String,

        /// Speaking rate, 0.1 to 10.0
        #[arg(long, default_value_t = 1.0)]
        rate: f64,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate a request file without synthesizing
    Validate {
        /// Path to the request JSON file
        #[arg(short, long)]
        request: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Parse a WAV header and check its sizes
    Inspect {
        /// Path to the WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Synth {
            text,
            request,
            rate,
            pitch,
            volume,
            voice,
            seed,
            output,
            placeholder,
            json,
        } => {
            let overrides = RequestOverrides {
                text,
                rate,
                pitch,
                volume,
                voice_name: voice,
                seed,
            };
            commands::synth::run(request.as_deref(), overrides, &output, placeholder, json)
        }
        Commands::Estimate { text, rate, json } => commands::estimate::run(&text, rate, json),
        Commands::Validate { request, json } => commands::validate::run(&request, json),
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
