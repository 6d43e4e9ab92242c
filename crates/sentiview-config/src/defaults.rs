//! Default values for every configuration section.

use crate::schema::*;
use std::path::PathBuf;

/// Default listen address.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";
/// Default translation endpoint.
pub const DEFAULT_TRANSLATION_ENDPOINT: &str =
    "https://translate.googleapis.com/translate_a/single";
/// Default pie chart file name.
pub const DEFAULT_PIE_FILE: &str = "pie_chart.png";
/// Default bar chart file name.
pub const DEFAULT_BAR_FILE: &str = "bar_chart.png";

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            analysis: AnalysisConfig::default(),
            translation: TranslationConfig::default(),
            charts: ChartsConfig::default(),
            logging: LogConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            engine: Engine::Lexicon,
            lexicon_path: None,
            polarity_model_path: None,
        }
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            target_language: "en".to_string(),
            endpoint: DEFAULT_TRANSLATION_ENDPOINT.to_string(),
            timeout_seconds: 10,
            cache_capacity: 1024,
        }
    }
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("static"),
            static_url_prefix: "/static".to_string(),
            pie_file: DEFAULT_PIE_FILE.to_string(),
            bar_file: DEFAULT_BAR_FILE.to_string(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            file_path: None,
        }
    }
}
