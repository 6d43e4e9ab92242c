//! Configuration schema definitions using serde.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Main configuration structure for SentiView.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server configuration.
    pub server: ServerConfig,
    /// Classifier configuration.
    pub analysis: AnalysisConfig,
    /// Translation pre-pass configuration.
    pub translation: TranslationConfig,
    /// Chart output configuration.
    pub charts: ChartsConfig,
    /// Logging configuration.
    pub logging: LogConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on.
    pub bind_address: String,
}

/// Which classifier the server runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// Lexicon compound score with translation pre-pass and negation override.
    Lexicon,
    /// Pretrained polarity model with a zero threshold.
    Polarity,
}

impl Engine {
    /// Config-file spelling of the engine.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lexicon => "lexicon",
            Self::Polarity => "polarity",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Engine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lexicon" | "vader" => Ok(Self::Lexicon),
            "polarity" | "pattern" => Ok(Self::Polarity),
            other => Err(format!("unknown engine '{other}' (expected 'lexicon' or 'polarity')")),
        }
    }
}

/// Classifier configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Selected engine.
    pub engine: Engine,
    /// Optional VADER-format lexicon file replacing the built-in lexicon.
    pub lexicon_path: Option<PathBuf>,
    /// Optional polarity model file replacing the built-in model.
    pub polarity_model_path: Option<PathBuf>,
}

/// Translation pre-pass configuration (lexicon engine only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationConfig {
    /// Whether lines are translated before scoring.
    pub enabled: bool,
    /// Target language code.
    pub target_language: String,
    /// Translation endpoint URL.
    pub endpoint: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
    /// Maximum number of memoised translations; 0 disables the cache.
    pub cache_capacity: u64,
}

/// Chart output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartsConfig {
    /// Directory the chart images are written to and static files are served from.
    pub static_dir: PathBuf,
    /// URL prefix the static directory is mounted under.
    pub static_url_prefix: String,
    /// Pie chart file name.
    pub pie_file: String,
    /// Bar chart file name.
    pub bar_file: String,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive, e.g. `info` or `sentiview_web=debug`.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json_format: bool,
    /// Optional file to append logs to.
    pub file_path: Option<PathBuf>,
}

impl From<&LogConfig> for sentiview_common::LoggingConfig {
    fn from(config: &LogConfig) -> Self {
        Self {
            level: config.level.clone(),
            json_format: config.json_format,
            file_path: config.file_path.clone(),
            ..Self::default()
        }
    }
}
