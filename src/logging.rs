//! Logging System
//!
//! Structured logging using the `tracing` crate. Level, format and destination
//! come from CLI flags, with `KUBETF_LOG*` environment variables taking priority.

use crate::error::ProviderError;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    pub level: String,

    /// Output format: json, text
    pub format: String,

    /// Output destination: stdout, stderr, file
    pub output: String,

    /// Log file path (required when output is "file")
    pub file: Option<PathBuf>,

    /// Enable colored output (text format on a terminal stream only)
    pub color: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "off".to_string(),
            format: "text".to_string(),
            output: "stderr".to_string(),
            file: None,
            color: true,
        }
    }
}

/// Output destination
#[derive(Debug, Clone, PartialEq, Eq)]
enum Output {
    Stdout,
    Stderr,
    File(PathBuf),
}

/// Initialize the global subscriber.
///
/// Priority order (highest to lowest):
/// 1. Environment variables (KUBETF_LOG, KUBETF_LOG_FORMAT, KUBETF_LOG_OUTPUT)
/// 2. `config`
pub fn init_logging(config: &LoggingConfig) -> Result<(), ProviderError> {
    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let output = determine_output(config)?;

    let base_subscriber = Registry::default().with(filter);

    match (format.as_str(), output) {
        ("json", Output::File(path)) => {
            let writer = open_log_file(&path)?;
            base_subscriber
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_writer(std::sync::Mutex::new(writer)),
                )
                .init();
        }
        ("json", Output::Stdout) => {
            base_subscriber
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_writer(std::io::stdout),
                )
                .init();
        }
        ("json", Output::Stderr) => {
            base_subscriber
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        (_, Output::File(path)) => {
            let writer = open_log_file(&path)?;
            base_subscriber
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_ansi(false)
                        .with_writer(std::sync::Mutex::new(writer)),
                )
                .init();
        }
        (_, Output::Stdout) => {
            base_subscriber
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_ansi(use_ansi(config, std::io::stdout().is_terminal()))
                        .with_writer(std::io::stdout),
                )
                .init();
        }
        (_, Output::Stderr) => {
            base_subscriber
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_ansi(use_ansi(config, std::io::stderr().is_terminal()))
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    }

    Ok(())
}

fn open_log_file(path: &Path) -> Result<std::fs::File, ProviderError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ProviderError::Config(format!("Failed to create log directory: {}", e))
            })?;
        }
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ProviderError::Config(format!("Failed to open log file {:?}: {}", path, e)))
}

fn use_ansi(config: &LoggingConfig, is_terminal: bool) -> bool {
    config.color && is_terminal
}

/// Build environment filter from KUBETF_LOG or config
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, ProviderError> {
    if let Ok(filter) = EnvFilter::try_from_env("KUBETF_LOG") {
        return Ok(filter);
    }

    // A bare word is a valid target directive, so parse the level alone.
    let level: LevelFilter = config.level.parse().map_err(|e| {
        ProviderError::Config(format!("Invalid log level {:?}: {}", config.level, e))
    })?;

    Ok(EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(""))
}

fn determine_format(config: &LoggingConfig) -> Result<String, ProviderError> {
    if let Ok(format) = std::env::var("KUBETF_LOG_FORMAT") {
        if format == "json" || format == "text" {
            return Ok(format);
        }
    }

    match config.format.as_str() {
        "json" | "text" => Ok(config.format.clone()),
        other => Err(ProviderError::Config(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            other
        ))),
    }
}

fn determine_output(config: &LoggingConfig) -> Result<Output, ProviderError> {
    let output = std::env::var("KUBETF_LOG_OUTPUT").unwrap_or_else(|_| config.output.clone());
    parse_output(&output, config.file.as_ref())
}

fn parse_output(output: &str, file: Option<&PathBuf>) -> Result<Output, ProviderError> {
    match output {
        "stdout" => Ok(Output::Stdout),
        "stderr" => Ok(Output::Stderr),
        "file" => file.cloned().map(Output::File).ok_or_else(|| {
            ProviderError::Config("Log output 'file' requires a log file path".to_string())
        }),
        _ => Err(ProviderError::Config(format!(
            "Invalid log output: {} (must be 'stdout', 'stderr' or 'file')",
            output
        ))),
    }
}
