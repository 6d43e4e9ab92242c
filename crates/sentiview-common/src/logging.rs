//! Structured logging infrastructure for SentiView

use std::fs::OpenOptions;
use std::path::PathBuf;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::error::{Result, SentiViewError};

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "sentiview_web=debug,tower_http=debug")
    pub level: String,
    /// Whether to emit one JSON object per event instead of pretty text
    pub json_format: bool,
    /// Optional file path for log output
    pub file_path: Option<PathBuf>,
    /// Whether to include span open/close events
    pub include_spans: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            file_path: None,
            include_spans: false,
            include_targets: true,
        }
    }
}

impl LoggingConfig {
    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new("info"))
    }

    fn span_events(&self) -> FmtSpan {
        if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }
}

/// Initialize the global tracing subscriber with the given configuration.
///
/// Fails if a subscriber is already installed or the log file cannot be opened.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(config.env_filter());

    let file = match &config.file_path {
        Some(path) => Some(OpenOptions::new().create(true).append(true).open(path)?),
        None => None,
    };

    let outcome = if config.json_format {
        let layer = fmt::layer()
            .json()
            .with_span_events(config.span_events())
            .with_target(config.include_targets);

        match file {
            Some(file) => registry.with(layer.with_writer(file)).try_init(),
            None => registry.with(layer).try_init(),
        }
    } else {
        let layer = fmt::layer()
            .with_span_events(config.span_events())
            .with_target(config.include_targets);

        match file {
            Some(file) => registry.with(layer.with_ansi(false).with_writer(file)).try_init(),
            None => registry.with(layer).try_init(),
        }
    };

    outcome.map_err(|e| SentiViewError::with_source("Failed to initialize logging", e))
}
