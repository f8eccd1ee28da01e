//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading parser
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::ParserConfig;

/// Loads parser configuration from YAML.
///
/// # File Format
///
/// ```text
/// reference_date: 2020-05-01   # required
/// summary:
///   removed_start: 5           # optional, defaults to 5
///   removed_end: 9             # optional, defaults to 9
/// ```
///
/// # Example
///
/// ```no_run
/// use holerite_parser::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/holerite.yaml")?;
/// println!("Batch date: {}", loader.config().reference_date);
/// # Ok::<(), holerite_parser::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ParserConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file is not valid YAML or lacks `reference_date` (`ConfigParseError`)
    /// - The summary range ends before it starts (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, path_str)
    }

    /// Parses configuration from an in-memory YAML document.
    ///
    /// # Example
    ///
    /// ```
    /// use holerite_parser::config::ConfigLoader;
    /// use chrono::NaiveDate;
    ///
    /// let loader = ConfigLoader::from_yaml_str("reference_date: 2020-05-01")?;
    /// assert_eq!(
    ///     loader.config().reference_date,
    ///     NaiveDate::from_ymd_opt(2020, 5, 1).unwrap()
    /// );
    /// # Ok::<(), holerite_parser::error::EngineError>(())
    /// ```
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Self::parse(content, "<inline>".to_string())
    }

    fn parse(content: &str, path: String) -> EngineResult<Self> {
        let config = match serde_yaml::from_str::<ParserConfig>(content) {
            Ok(config) => config,
            Err(e) => {
                return Err(EngineError::ConfigParseError {
                    path,
                    message: e.to_string(),
                });
            }
        };

        if !config.summary.is_valid() {
            return Err(EngineError::ConfigParseError {
                path,
                message: format!(
                    "summary.removed_start ({}) is after summary.removed_end ({})",
                    config.summary.removed_start, config.summary.removed_end
                ),
            });
        }

        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> ParserConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SummaryLayout;
    use chrono::NaiveDate;

    fn config_path() -> &'static str {
        "./config/holerite.yaml"
    }

    #[test]
    fn test_load_shipped_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let config = result.unwrap().into_config();
        assert_eq!(
            config.reference_date,
            NaiveDate::from_ymd_opt(2020, 5, 1).unwrap()
        );
        assert_eq!(config.summary.removed_start, 5);
        assert_eq!(config.summary.removed_end, 9);
    }

    #[test]
    fn test_summary_section_is_optional() {
        let loader = ConfigLoader::from_yaml_str("reference_date: 2021-01-01").unwrap();
        assert_eq!(loader.config().summary, SummaryLayout::default());
    }

    #[test]
    fn test_removed_range_override() {
        let yaml = "reference_date: 2021-01-01\nsummary:\n  removed_start: 0\n  removed_end: 0\n";
        let loader = ConfigLoader::from_yaml_str(yaml).unwrap();
        assert_eq!(loader.config().summary.removed_start, 0);
        assert_eq!(loader.config().summary.removed_end, 0);
    }

    #[test]
    fn test_inverted_removed_range_returns_error() {
        let yaml = "reference_date: 2021-01-01\nsummary:\n  removed_start: 9\n  removed_end: 5\n";

        match ConfigLoader::from_yaml_str(yaml) {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert_eq!(
                    message,
                    "summary.removed_start (9) is after summary.removed_end (5)"
                );
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_huge_removed_range_loads_without_overflow() {
        let yaml = "reference_date: 2021-01-01\nsummary:\n  removed_start: 5\n  removed_end: 18446744073709551615\n";
        let loader = ConfigLoader::from_yaml_str(yaml).unwrap();
        assert_eq!(loader.config().summary.removed_end, usize::MAX);
    }

    #[test]
    fn test_missing_reference_date_returns_error() {
        let result = ConfigLoader::from_yaml_str("summary:\n  removed_start: 5\n");

        match result {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert_eq!(path, "<inline>");
                assert!(message.contains("reference_date"), "got: {}", message);
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_date_returns_error() {
        let result = ConfigLoader::from_yaml_str("reference_date: not-a-date");
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/holerite.yaml");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("holerite.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }
}
