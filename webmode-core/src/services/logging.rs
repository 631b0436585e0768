//! Logging service

use crate::models::{ApplicationMode, LogLevel};

/// Initialize logging with the specified level.
///
/// `RUST_LOG`, when set, takes precedence over `level`. Fails if a global
/// subscriber is already installed.
pub fn init_logging(level: LogLevel) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directive(level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
}

fn filter_directive(level: LogLevel) -> String {
    let level = level.as_str();
    format!("webmode={level},webmode_core={level}")
}

/// Log the outcome of a detection pass
pub fn log_detection(mode: ApplicationMode, present: usize, source: Option<&str>) {
    tracing::info!(
        mode = %mode,
        present = present,
        source = source.unwrap_or("command line"),
        "Application mode determined"
    );
}

/// Log a system error
pub fn log_error(error: &str, context: Option<&str>) {
    tracing::error!(
        error = error,
        context = context.unwrap_or(""),
        "System error occurred"
    );
}
