//! Runtime validation of a loaded configuration.

use crate::loader::ConfigError;
use crate::schema::Config;
use std::net::SocketAddr;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting the first offending field.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let bind = config.server.bind_address.trim();
        if bind.is_empty() {
            return Err(invalid("server.bind_address", "must not be empty"));
        }
        if bind.parse::<SocketAddr>().is_err() {
            return Err(invalid(
                "server.bind_address",
                format!("'{bind}' is not a socket address (expected host:port)"),
            ));
        }

        if config.translation.enabled {
            if config.translation.timeout_seconds == 0 {
                return Err(invalid("translation.timeout_seconds", "must be greater than zero"));
            }
            if config.translation.target_language.trim().is_empty() {
                return Err(invalid("translation.target_language", "must not be empty"));
            }
            if !config.translation.endpoint.starts_with("http://")
                && !config.translation.endpoint.starts_with("https://")
            {
                return Err(invalid("translation.endpoint", "must be an http(s) URL"));
            }
        }

        validate_file_name("charts.pie_file", &config.charts.pie_file)?;
        validate_file_name("charts.bar_file", &config.charts.bar_file)?;
        if config.charts.pie_file == config.charts.bar_file {
            return Err(invalid("charts.bar_file", "must differ from charts.pie_file"));
        }
        if !config.charts.static_url_prefix.starts_with('/') {
            return Err(invalid("charts.static_url_prefix", "must start with '/'"));
        }
        let prefix = &config.charts.static_url_prefix;
        if prefix.len() > 1 && prefix.ends_with('/') {
            return Err(invalid("charts.static_url_prefix", "must not end with '/'"));
        }

        Ok(())
    }
}

/// Chart file names are joined onto the static directory, so they must be bare names.
fn validate_file_name(field: &str, name: &str) -> Result<(), ConfigError> {
    if name.trim().is_empty() {
        return Err(invalid(field, "must not be empty"));
    }
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(invalid(field, "must be a plain file name"));
    }
    Ok(())
}

fn invalid(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        field: field.to_string(),
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(result: Result<(), ConfigError>) -> String {
        match result {
            Err(ConfigError::ValidationError { field, .. }) => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigValidator::validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_bind_address() {
        let mut config = Config::default();
        config.server.bind_address = String::new();
        assert_eq!(field_of(ConfigValidator::validate(&config)), "server.bind_address");

        config.server.bind_address = "localhost".to_string();
        assert_eq!(field_of(ConfigValidator::validate(&config)), "server.bind_address");

        config.server.bind_address = "0.0.0.0:80".to_string();
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_translation_checks_only_when_enabled() {
        let mut config = Config::default();
        config.translation.timeout_seconds = 0;
        assert_eq!(field_of(ConfigValidator::validate(&config)), "translation.timeout_seconds");

        config.translation.enabled = false;
        assert!(ConfigValidator::validate(&config).is_ok());

        config.translation.enabled = true;
        config.translation.timeout_seconds = 5;
        config.translation.endpoint = "ftp://example.com".to_string();
        assert_eq!(field_of(ConfigValidator::validate(&config)), "translation.endpoint");
    }

    #[test]
    fn test_chart_file_names() {
        let mut config = Config::default();
        config.charts.pie_file = "../pie.png".to_string();
        assert_eq!(field_of(ConfigValidator::validate(&config)), "charts.pie_file");

        config.charts.pie_file = "chart.png".to_string();
        config.charts.bar_file = "chart.png".to_string();
        assert_eq!(field_of(ConfigValidator::validate(&config)), "charts.bar_file");
    }

    #[test]
    fn test_static_prefix() {
        let mut config = Config::default();
        config.charts.static_url_prefix = "static".to_string();
        assert_eq!(field_of(ConfigValidator::validate(&config)), "charts.static_url_prefix");

        config.charts.static_url_prefix = "/assets/".to_string();
        assert_eq!(field_of(ConfigValidator::validate(&config)), "charts.static_url_prefix");

        config.charts.static_url_prefix = "/assets".to_string();
        assert!(ConfigValidator::validate(&config).is_ok());
    }
}
