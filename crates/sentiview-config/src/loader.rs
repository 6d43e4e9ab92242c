//! Configuration loading utilities

use crate::schema::{Config, Engine};
use crate::validator::ConfigValidator;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming a config file.
pub const CONFIG_PATH_ENV: &str = "SENTIVIEW_CONFIG_PATH";

/// Config files looked for in the working directory when nothing else is given.
const DEFAULT_CONFIG_FILES: &[&str] = &["config.yaml", "config.yml", "config.toml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Invalid value for '{field}': {message}")]
    ValidationError {
        /// Dotted path of the offending field
        field: String,
        /// What is wrong with it
        message: String,
    },

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        /// Variable name
        var: String,
        /// Underlying parse failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for sentiview_common::SentiViewError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::ValidationError { field, message } => {
                sentiview_common::SentiViewError::validation_field(message, field)
            }
            other => sentiview_common::SentiViewError::config_with_source(
                "Failed to load configuration",
                other,
            ),
        }
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML or TOML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let mut config = Self::parse_file(path.as_ref())?;
        Self::apply_env_overrides(&mut config)?;
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from an explicit path, `SENTIVIEW_CONFIG_PATH`, a
    /// config file in the working directory, or defaults, in that order.
    pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
        Self::load_with(explicit, |_| {})
    }

    /// Like [`ConfigLoader::load`], but `adjust` runs after the environment
    /// overrides and before validation, so command line values take part in it.
    pub fn load_with<F>(explicit: Option<&Path>, adjust: F) -> Result<Config, ConfigError>
    where
        F: FnOnce(&mut Config),
    {
        let mut config = match Self::locate(explicit) {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                Self::parse_file(&path)?
            }
            None => {
                info!("No configuration file found, using defaults");
                Config::default()
            }
        };
        Self::apply_env_overrides(&mut config)?;
        adjust(&mut config);
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        DEFAULT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|candidate| candidate.exists())
    }

    /// Parse a config file; `.toml` files are read as TOML, everything else as YAML.
    pub fn parse_file(path: &Path) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            Ok(toml::from_str(&content)?)
        } else {
            Ok(serde_yaml::from_str(&content)?)
        }
    }

    /// Apply environment variable overrides to configuration
    pub fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        Self::apply_overrides_from(config, |name| env::var(name).ok())
    }

    /// Apply overrides using `lookup` in place of the process environment.
    pub fn apply_overrides_from<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind) = lookup("SENTIVIEW_BIND") {
            debug!(bind = %bind, "bind address overridden from environment");
            config.server.bind_address = bind;
        }

        if let Some(engine) = lookup("SENTIVIEW_ENGINE") {
            config.analysis.engine = parse_var::<Engine>("SENTIVIEW_ENGINE", &engine)?;
        }

        if let Some(path) = lookup("SENTIVIEW_LEXICON_PATH") {
            config.analysis.lexicon_path = Some(PathBuf::from(path));
        }

        if let Some(path) = lookup("SENTIVIEW_POLARITY_MODEL_PATH") {
            config.analysis.polarity_model_path = Some(PathBuf::from(path));
        }

        if let Some(enabled) = lookup("SENTIVIEW_TRANSLATION_ENABLED") {
            config.translation.enabled = parse_var("SENTIVIEW_TRANSLATION_ENABLED", &enabled)?;
        }

        if let Some(target) = lookup("SENTIVIEW_TRANSLATION_TARGET") {
            config.translation.target_language = target;
        }

        if let Some(timeout) = lookup("SENTIVIEW_TRANSLATION_TIMEOUT") {
            config.translation.timeout_seconds =
                parse_var("SENTIVIEW_TRANSLATION_TIMEOUT", &timeout)?;
        }

        if let Some(dir) = lookup("SENTIVIEW_STATIC_DIR") {
            config.charts.static_dir = PathBuf::from(dir);
        }

        if let Some(level) = lookup("SENTIVIEW_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(())
    }
}

fn parse_var<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError::EnvParseError {
        var: var.to_string(),
        source: e.to_string().into(),
    })
}
