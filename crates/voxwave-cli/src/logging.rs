//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "VOXWAVE_LOG";

/// Filter used when `VOXWAVE_LOG` is unset or unparseable.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Builds the log filter from `VOXWAVE_LOG`, falling back to the default.
pub fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Installs a stderr fmt subscriber.
///
/// Stdout stays reserved for command output so `--json` remains parseable.
/// Calling this more than once is a no-op.
pub fn init_logging(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
