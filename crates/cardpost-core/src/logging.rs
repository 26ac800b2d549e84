use crate::error::CardPostError;
use crate::result::CardPostResult;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Environment variable naming a file that receives debug logs.
pub const DEBUG_LOG_ENV: &str = "CARDPOST_DEBUG_LOG";

/// Where logs go when no debug log file is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFallback {
    /// Warnings and errors on stderr.
    Stderr,
    /// Nothing; used while the terminal is in raw mode.
    Silent,
}

/// Installs the global tracing subscriber.
///
/// With a debug log file, everything at DEBUG (or `RUST_LOG`, when set) is
/// appended to it with source locations and without ANSI colors.
pub fn init(debug_log: Option<&Path>, fallback: LogFallback) -> CardPostResult<()> {
    let result = if let Some(log_path) = debug_log {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .try_init()
    } else {
        match fallback {
            LogFallback::Stderr => tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_max_level(tracing::Level::WARN)
                .try_init(),
            LogFallback::Silent => tracing_subscriber::fmt()
                .with_max_level(tracing::level_filters::LevelFilter::OFF)
                .try_init(),
        }
    };

    result.map_err(|e| CardPostError::Config(format!("failed to install logger: {}", e)))
}
