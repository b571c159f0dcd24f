use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::model::product_code;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/checkmate/config.toml` on Unix/macOS, or the
    /// platform equivalent via `dirs::config_dir()`. Falls back to the
    /// current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("checkmate").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The event queue can hold at least one event
    /// - The start route is not empty
    /// - Catalogue codes are well-formed product codes and unique once trimmed
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.defaults.event_queue_capacity == 0 {
            return Err(ConfigError::ValidationError {
                message: "event_queue_capacity must be greater than zero".to_string(),
            });
        }

        if self.defaults.start_route.as_str().trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "start_route must not be empty".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for entry in &self.catalog {
            let Some(code) = product_code(&entry.code) else {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "Catalog entry '{}' has an invalid code '{}' \
                         (letters, digits and '-' only)",
                        entry.name, entry.code
                    ),
                });
            };
            if !seen.insert(code) {
                return Err(ConfigError::ValidationError {
                    message: format!("Duplicate catalog code '{}'", code),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemCategory;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.defaults.start_route.as_str(), "items");
        assert_eq!(config.defaults.event_queue_capacity, 64);
        assert_eq!(config.logging.level, "info");
        assert!(config.catalog.is_empty());
    }

    #[test]
    fn parses_catalog() {
        let file = write_config(
            r#"
[defaults]
start_route = "home"

[[catalog]]
code = "4901234567894"
name = "Pen"
description = "Blue ink"
category = "study_supplies"
"#,
        );
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.defaults.start_route.as_str(), "home");
        assert_eq!(config.defaults.event_queue_capacity, 64);
        assert_eq!(config.catalog.len(), 1);
        assert_eq!(config.catalog[0].category, ItemCategory::StudySupplies);
    }

    #[test]
    fn rejects_duplicate_codes() {
        let file = write_config(
            r#"
[[catalog]]
code = "1"
name = "A"
category = "other_supplies"

[[catalog]]
code = "1"
name = "B"
category = "other_supplies"
"#,
        );
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[test]
    fn rejects_zero_queue_capacity() {
        let file = write_config("[defaults]\nevent_queue_capacity = 0\n");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("event_queue_capacity"));
    }

    #[test]
    fn reports_parse_errors_with_path() {
        let file = write_config("[defaults\n");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn rejects_unknown_category() {
        let file = write_config(
            "[[catalog]]\ncode = \"1\"\nname = \"A\"\ncategory = \"gadgets\"\n",
        );
        assert!(Config::load_from(file.path()).is_err());
    }

    #[test]
    fn rejects_malformed_code() {
        let file = write_config(
            "[[catalog]]\ncode = \"ISBN 978\"\nname = \"Book\"\ncategory = \"study_supplies\"\n",
        );
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("ISBN 978"));
    }

    #[test]
    fn padded_duplicate_codes_collide() {
        let file = write_config(
            r#"
[[catalog]]
code = " 4901 "
name = "A"
category = "other_supplies"

[[catalog]]
code = "4901"
name = "B"
category = "other_supplies"
"#,
        );
        assert!(matches!(
            Config::load_from(file.path()),
            Err(ConfigError::ValidationError { .. })
        ));
    }
}
