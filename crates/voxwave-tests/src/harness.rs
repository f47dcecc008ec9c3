//! Test harness utilities for running the `voxwave` CLI and checking its
//! outputs.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::OnceLock;
use tempfile::TempDir;

use crate::format_validators::{validate_wav, FormatError, WavInfo};

/// Result of running the voxwave CLI.
#[derive(Debug)]
pub struct CliResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Create a CliResult from a Command Output.
    pub fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Assert that the command succeeded.
    pub fn assert_success(&self) {
        assert!(
            self.success,
            "Command failed with exit code {}.\nstdout: {}\nstderr: {}",
            self.exit_code, self.stdout, self.stderr
        );
    }

    /// Assert that the command exited with `code`.
    pub fn assert_exit_code(&self, code: i32) {
        assert_eq!(
            self.exit_code, code,
            "Unexpected exit code.\nstdout: {}\nstderr: {}",
            self.stdout, self.stderr
        );
    }

    /// Parses stdout as a JSON document (for `--json` runs).
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({}):\n{}", e, self.stdout))
    }
}

/// A test harness for running voxwave CLI commands in a scratch directory.
pub struct TestHarness {
    /// Working directory for test outputs.
    pub work_dir: TempDir,
}

impl TestHarness {
    /// Create a new test harness.
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("Failed to create work dir"),
        }
    }

    /// Get the working directory path.
    pub fn path(&self) -> &Path {
        self.work_dir.path()
    }

    /// Run the voxwave CLI with the given arguments.
    pub fn run_cli(&self, args: &[&str]) -> CliResult {
        let output = Command::new(env!("CARGO"))
            .args(["run", "--quiet", "--manifest-path"])
            .arg(workspace_manifest_path())
            .args(["-p", "voxwave-cli", "--bin", "voxwave", "--"])
            .args(args)
            .current_dir(self.path())
            .env_remove("VOXWAVE_LOG")
            .output();

        match output {
            Ok(out) => CliResult::from_output(out),
            Err(e) => CliResult {
                success: false,
                exit_code: -1,
                stdout: String::new(),
                stderr: format!("Failed to run CLI: {}", e),
            },
        }
    }

    /// Writes a request JSON file into the work directory.
    pub fn write_request(&self, name: &str, json: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, json).expect("Failed to write request file");
        path
    }

    /// Absolute path of `name` inside the work directory.
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.path().join(name)
    }

    /// Reads and validates a WAV file from the work directory.
    pub fn read_wav(&self, name: &str) -> Result<(Vec<u8>, WavInfo), FormatError> {
        let data = fs::read(self.output_path(name))
            .map_err(|e| FormatError::new("WAV", format!("Failed to read {}: {}", name, e)))?;
        let info = validate_wav(&data)?;
        Ok((data, info))
    }
}

fn workspace_manifest_path() -> PathBuf {
    static PATH: OnceLock<PathBuf> = OnceLock::new();
    PATH.get_or_init(|| {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let manifest_path = manifest_dir.join("..").join("..").join("Cargo.toml");
        manifest_path.canonicalize().unwrap_or(manifest_path)
    })
    .clone()
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
