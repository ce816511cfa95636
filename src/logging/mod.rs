//! Logging configuration and initialization
//!
//! Diagnostic logging for the simulator goes through the `tracing` ecosystem.
//! This is separate from the execution log kept by
//! [`ExecutionLogger`](crate::profiling::ExecutionLogger): that one is
//! simulation *output*, this one is for watching the simulator itself.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Standard tracing filter (e.g., "info", "debug,vecforge=trace")
//! - `VECFORGE_LOG_LEVEL`: Simple log level (error, warn, info, debug, trace)
//! - `VECFORGE_LOG_FORMAT`: Output format ("human" or "json")
//! - `VECFORGE_LOG_FILE`: Optional file path for log output (always JSON)
//!
//! Console output goes to stderr; stdout belongs to the simulation reports.
//!
//! Every recorded instruction emits a `trace` event under the
//! `vecforge::profiling` target, so `RUST_LOG=vecforge::profiling=trace`
//! streams the simulated instruction trace.

use once_cell::sync::OnceCell;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Set once the global subscriber has been installed
static TRACING_INITIALIZED: OnceCell<()> = OnceCell::new();

const LOG_LEVEL_ENV: &str = "VECFORGE_LOG_LEVEL";
const LOG_FORMAT_ENV: &str = "VECFORGE_LOG_FORMAT";
const LOG_FILE_ENV: &str = "VECFORGE_LOG_FILE";

/// Errors that can occur during logging initialization
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `RUST_LOG` could not be parsed as a filter directive
    #[error("invalid log filter: {0}")]
    InvalidFilter(String),

    /// Failed to create log file directory
    #[error("failed to create log directory: {0}")]
    DirectoryCreationFailed(String),

    /// Failed to open log file
    #[error("failed to open log file: {0}")]
    FileOpenFailed(String),

    /// Another global subscriber was installed first
    #[error("global subscriber already set: {0}")]
    SubscriberAlreadySet(String),
}

/// Log level enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to tracing Level
    pub fn as_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    /// Filter directive understood by `EnvFilter`
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Console output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable colored output (default)
    #[default]
    Human,
    /// JSON structured output
    Json,
}

impl LogFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "human" | "pretty" | "console" => Some(LogFormat::Human),
            "json" | "structured" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    /// Include file/line in console events
    pub with_file_info: bool,
    /// Emit span close events (with timings)
    pub with_span_events: bool,
    /// Mirror events as JSON lines into this file
    pub log_file: Option<PathBuf>,
}

impl LoggingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `VECFORGE_LOG_LEVEL`, `VECFORGE_LOG_FORMAT` and `VECFORGE_LOG_FILE`.
    /// Unset or unparseable values keep their defaults.
    pub fn from_env() -> Self {
        let mut config = Self::new();
        if let Some(level) = std::env::var(LOG_LEVEL_ENV)
            .ok()
            .and_then(|s| LogLevel::parse(&s))
        {
            config.level = level;
        }
        if let Some(format) = std::env::var(LOG_FORMAT_ENV)
            .ok()
            .and_then(|s| LogFormat::parse(&s))
        {
            config.format = format;
        }
        config.log_file = std::env::var(LOG_FILE_ENV).ok().map(PathBuf::from);
        config
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_file_info(mut self, with_file_info: bool) -> Self {
        self.with_file_info = with_file_info;
        self
    }

    pub fn with_span_events(mut self, with_span_events: bool) -> Self {
        self.with_span_events = with_span_events;
        self
    }

    pub fn with_log_file(mut self, path: PathBuf) -> Self {
        self.log_file = Some(path);
        self
    }
}

/// Initialize logging from the environment, ignoring failures.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_logging_default() {
    let _ = init_with_config(&LoggingConfig::from_env());
}

/// Initialize logging with a custom configuration.
///
/// Idempotent. The first successful call decides the configuration; later
/// calls return `Ok(())` without touching the installed subscriber. A failed
/// call leaves logging uninitialized, so a corrected config can still be
/// installed afterwards.
pub fn init_with_config(config: &LoggingConfig) -> Result<(), LoggingError> {
    if is_initialized() {
        return Ok(());
    }
    install(config)?;
    let _ = TRACING_INITIALIZED.set(());
    Ok(())
}

fn install(config: &LoggingConfig) -> Result<(), LoggingError> {
    let env_filter = build_env_filter(config.level)?;
    let log_file = match &config.log_file {
        Some(path) => Some(open_log_file(path)?),
        None => None,
    };

    let console: Box<dyn Layer<Registry> + Send + Sync> = match config.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_file(config.with_file_info)
            .with_line_number(config.with_file_info)
            .with_span_events(span_events(config.with_span_events))
            .boxed(),
        LogFormat::Human => fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(config.with_file_info)
            .with_line_number(config.with_file_info)
            .with_span_events(span_events(config.with_span_events))
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(log_file.map(|file| {
            fmt::layer()
                .json()
                .with_writer(Mutex::new(file))
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false)
        }))
        .with(env_filter)
        .try_init()
        .map_err(|e| LoggingError::SubscriberAlreadySet(e.to_string()))
}

fn span_events(enabled: bool) -> FmtSpan {
    if enabled {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    }
}

fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| LoggingError::DirectoryCreationFailed(e.to_string()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LoggingError::FileOpenFailed(e.to_string()))
}

/// `RUST_LOG` wins over the configured level.
fn build_env_filter(default_level: LogLevel) -> Result<EnvFilter, LoggingError> {
    match std::env::var("RUST_LOG") {
        Ok(directives) => {
            EnvFilter::try_new(directives).map_err(|e| LoggingError::InvalidFilter(e.to_string()))
        }
        Err(_) => Ok(EnvFilter::new(default_level.as_filter_str())),
    }
}

/// Check if tracing has been initialized
pub fn is_initialized() -> bool {
    TRACING_INITIALIZED.get().is_some()
}
