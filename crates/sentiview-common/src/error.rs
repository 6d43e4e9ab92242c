//! Error types and utilities for SentiView

use thiserror::Error;

/// Result type alias for SentiView operations
pub type Result<T> = std::result::Result<T, SentiViewError>;

/// Main error type for SentiView operations
#[derive(Error, Debug)]
pub enum SentiViewError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Network related errors (HTTP requests, etc.)
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Translation service errors
    #[error("Translation error: {message}")]
    Translation {
        message: String,
        status_code: Option<u16>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Lexicon or model loading errors
    #[error("Lexicon error: {message}")]
    Lexicon {
        message: String,
        line: Option<usize>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Chart generation and plotting errors
    #[error("Chart error: {message}")]
    Chart {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for user input or data
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// Generic error with custom message
    #[error("{message}")]
    Generic {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl SentiViewError {
    /// Create a new generic error with a custom message
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new generic error with a custom message and source
    pub fn with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Generic {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new network error with source
    pub fn network_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Network {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new translation error
    pub fn translation(msg: impl Into<String>) -> Self {
        Self::Translation {
            message: msg.into(),
            status_code: None,
            source: None,
        }
    }

    /// Create a new translation error carrying the HTTP status of the service
    pub fn translation_with_status(msg: impl Into<String>, status: u16) -> Self {
        Self::Translation {
            message: msg.into(),
            status_code: Some(status),
            source: None,
        }
    }

    /// Create a new lexicon error
    pub fn lexicon(msg: impl Into<String>) -> Self {
        Self::Lexicon {
            message: msg.into(),
            line: None,
        }
    }

    /// Create a new lexicon error pointing at a line of the source file
    pub fn lexicon_at_line(msg: impl Into<String>, line: usize) -> Self {
        Self::Lexicon {
            message: msg.into(),
            line: Some(line),
        }
    }

    /// Create a new chart error
    pub fn chart(msg: impl Into<String>) -> Self {
        Self::Chart {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new chart error with source
    pub fn chart_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Chart {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }
}

// Error conversion implementations for external types

/// Convert from reqwest::Error to SentiViewError
impl From<reqwest::Error> for SentiViewError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::network_with_source("Request timeout", err)
        } else if err.is_connect() {
            Self::network_with_source("Connection failed", err)
        } else if err.is_status() {
            let status_code = err.status().map(|s| s.as_u16()).unwrap_or(0);
            Self::network_with_source(format!("HTTP error: {}", status_code), err)
        } else {
            Self::network_with_source("Network request failed", err)
        }
    }
}

/// Convert from toml::de::Error to SentiViewError
impl From<toml::de::Error> for SentiViewError {
    fn from(err: toml::de::Error) -> Self {
        Self::config_with_source("TOML parsing error", err)
    }
}

/// Convert from serde_yaml::Error to SentiViewError
impl From<serde_yaml::Error> for SentiViewError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::config_with_source("YAML parsing error", err)
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to SentiViewError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for SentiViewError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::chart_with_source("Chart rendering failed", err)
    }
}
