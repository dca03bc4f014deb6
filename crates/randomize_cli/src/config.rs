//! CLI configuration management.
//!
//! Handles loading of generator defaults from a TOML file with environment
//! variable override support. Command line flags take precedence over both.
//!
//! ```toml
//! log_level = "info"
//! output_dir = "output"
//! seed = 42
//!
//! [timeseries]
//! length = 1250
//! start_value = 100.0
//! max_change_pct = 15.0
//! annual_drift_pct = 7.0
//! start_date = "2020-01-01"
//! distribution = "normal"
//! include_returns = true
//!
//! [fund_figures]
//! start_date = "2024-01-01"
//! num_weekdays = 5
//! num_share_classes = 3
//! ```

use randomize_core::types::Date;
use randomize_generators::fund_figures::FundFigureRequest;
use randomize_generators::timeseries::{ChangeDistribution, TimeseriesParams};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Timeseries defaults
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimeseriesSection {
    /// Number of points
    pub length: usize,
    /// First value
    pub start_value: f64,
    /// Max daily change in percent
    pub max_change_pct: f64,
    /// Annual drift in percent
    pub annual_drift_pct: f64,
    /// First date
    pub start_date: Date,
    /// Change distribution
    pub distribution: ChangeDistribution,
    /// Whether exports carry the daily return column
    pub include_returns: bool,
}

impl Default for TimeseriesSection {
    fn default() -> Self {
        let params = TimeseriesParams::default();
        Self {
            length: params.length,
            start_value: params.start_value,
            max_change_pct: params.max_change_pct,
            annual_drift_pct: params.annual_drift_pct,
            start_date: params.start_date,
            distribution: ChangeDistribution::default(),
            include_returns: true,
        }
    }
}

impl TimeseriesSection {
    /// Generator parameters described by this section.
    pub fn params(&self) -> TimeseriesParams {
        TimeseriesParams::new(
            self.length,
            self.start_value,
            self.max_change_pct,
            self.annual_drift_pct,
        )
        .with_start_date(self.start_date)
    }
}

/// Fund-figure defaults
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FundFigureSection {
    /// First value date
    pub start_date: Date,
    /// Number of business days
    pub num_weekdays: usize,
    /// Number of share classes
    pub num_share_classes: u32,
}

impl Default for FundFigureSection {
    fn default() -> Self {
        let request = FundFigureRequest::default();
        Self {
            start_date: request.start_date,
            num_weekdays: request.num_weekdays,
            num_share_classes: request.num_share_classes,
        }
    }
}

impl FundFigureSection {
    /// Generation request described by this section.
    pub fn request(&self) -> FundFigureRequest {
        FundFigureRequest {
            start_date: self.start_date,
            num_weekdays: self.num_weekdays,
            num_share_classes: self.num_share_classes,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RandomizeConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Directory exports are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Fixed seed; a fresh seed is drawn per run when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Timeseries defaults
    #[serde(default)]
    pub timeseries: TimeseriesSection,

    /// Fund-figure defaults
    #[serde(default)]
    pub fund_figures: FundFigureSection,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for RandomizeConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            output_dir: default_output_dir(),
            seed: None,
            timeseries: TimeseriesSection::default(),
            fund_figures: FundFigureSection::default(),
        }
    }
}

impl RandomizeConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or the defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides.
    ///
    /// Returns the messages for values that were ignored; the caller logs
    /// them once tracing is up, since the log level itself may come from here.
    pub fn with_env_override(self) -> (Self, Vec<String>) {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `RANDOMIZE_*` overrides read through `var`.
    pub fn with_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let mut ignored = Vec::new();

        if let Some(log_level) = var("RANDOMIZE_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Some(output_dir) = var("RANDOMIZE_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(output_dir);
        }

        if let Some(seed) = var("RANDOMIZE_SEED") {
            match seed.parse() {
                Ok(seed) => self.seed = Some(seed),
                Err(_) => ignored.push(format!(
                    "Ignoring RANDOMIZE_SEED '{}', not an unsigned integer",
                    seed
                )),
            }
        }

        if let Some(distribution) = var("RANDOMIZE_DISTRIBUTION") {
            match distribution.parse() {
                Ok(distribution) => self.timeseries.distribution = distribution,
                Err(e) => ignored.push(format!("Ignoring RANDOMIZE_DISTRIBUTION: {}", e)),
            }
        }

        (self, ignored)
    }

    /// Validate the settings every command depends on: log level and output
    /// directory. Generator parameters are checked after flags are merged.
    pub fn validate_settings(&self) -> Result<(), ConfigError> {
        into_result(self.settings_errors())
    }

    /// Validate the configuration, including the generator sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = self.settings_errors();

        if let Err(e) = self.timeseries.params().validate() {
            errors.push(format!("[timeseries] {}", e));
        }

        if self.fund_figures.num_weekdays == 0 {
            errors.push("[fund_figures] num_weekdays must be greater than 0".to_string());
        }
        if self.fund_figures.num_share_classes == 0 {
            errors.push("[fund_figures] num_share_classes must be greater than 0".to_string());
        }

        into_result(errors)
    }

    fn settings_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();

        // Validate log level
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if self.output_dir.as_os_str().is_empty() {
            errors.push("output_dir cannot be empty".to_string());
        }

        errors
    }
}

fn into_result(errors: Vec<String>) -> Result<(), ConfigError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Validation(errors))
    }
}

/// Configuration error type
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// IO error reading config file
    Io(String),
    /// Parse error in config file
    Parse(String),
    /// Validation error
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {}", msg),
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
            Self::Validation(errors) => write!(f, "Validation errors: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = RandomizeConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.seed, None);
        assert_eq!(config.timeseries.length, 1250);
        assert_eq!(config.timeseries.start_date.to_string(), "2020-01-01");
        assert_eq!(config.fund_figures.num_share_classes, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = RandomizeConfig::from_toml(
            r#"
            seed = 7

            [timeseries]
            length = 20
            distribution = "uniform"

            [fund_figures]
            start_date = "2024-03-04"
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.timeseries.length, 20);
        assert_eq!(config.timeseries.distribution, ChangeDistribution::Uniform);
        assert_eq!(config.timeseries.start_value, 100.0);
        assert_eq!(config.fund_figures.start_date.to_string(), "2024-03-04");
        assert_eq!(config.fund_figures.num_weekdays, 5);
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"debug\"\noutput_dir = \"exports\"").unwrap();

        let config = RandomizeConfig::load(file.path()).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.output_dir, PathBuf::from("exports"));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = RandomizeConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, RandomizeConfig::default());

        assert!(matches!(
            RandomizeConfig::load(&dir.path().join("absent.toml")),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let result = RandomizeConfig::from_toml("[timeseries]\nlength = \"many\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_env_override() {
        std::env::set_var("RANDOMIZE_OUTPUT_DIR", "from-env");
        let (config, ignored) = RandomizeConfig::default().with_env_override();
        assert_eq!(config.output_dir, PathBuf::from("from-env"));
        assert!(ignored.is_empty());
        std::env::remove_var("RANDOMIZE_OUTPUT_DIR");
    }

    #[test]
    fn test_overrides_apply() {
        let (config, ignored) = RandomizeConfig::default().with_overrides(vars(&[
            ("RANDOMIZE_SEED", "99"),
            ("RANDOMIZE_DISTRIBUTION", "Uniform"),
            ("RANDOMIZE_LOG_LEVEL", "debug"),
        ]));
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.timeseries.distribution, ChangeDistribution::Uniform);
        assert_eq!(config.log_level, "debug");
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_ignored_overrides_are_reported() {
        let (config, ignored) = RandomizeConfig::default().with_overrides(vars(&[
            ("RANDOMIZE_SEED", "abc"),
            ("RANDOMIZE_DISTRIBUTION", "cauchy"),
        ]));

        assert_eq!(config.seed, None);
        assert_eq!(config.timeseries.distribution, ChangeDistribution::Normal);
        assert_eq!(ignored.len(), 2);
        assert!(ignored[0].contains("RANDOMIZE_SEED") && ignored[0].contains("abc"));
        assert!(ignored[1].contains("RANDOMIZE_DISTRIBUTION") && ignored[1].contains("cauchy"));
    }

    #[test]
    fn test_settings_validation_ignores_generator_sections() {
        let mut config = RandomizeConfig::default();
        config.timeseries.length = 0;
        assert!(config.validate_settings().is_ok());
        assert!(config.validate().is_err());

        config.log_level = "loud".to_string();
        assert!(config.validate_settings().is_err());
    }

    #[test]
    fn test_validation_collects_every_error() {
        let mut config = RandomizeConfig::default();
        config.log_level = "loud".to_string();
        config.timeseries.length = 0;
        config.fund_figures.num_weekdays = 0;

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 3);
                assert!(errors[0].contains("log_level"));
                assert!(errors[1].contains("length"));
                assert!(errors[2].contains("num_weekdays"));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_valid_log_levels() {
        for level in &["trace", "debug", "info", "warn", "error", "INFO"] {
            let mut config = RandomizeConfig::default();
            config.log_level = level.to_string();
            assert!(config.validate().is_ok(), "Log level '{}' should be valid", level);
        }
    }

    #[test]
    fn test_sections_map_to_generator_inputs() {
        let config = RandomizeConfig::default();
        assert_eq!(config.timeseries.params(), TimeseriesParams::default());
        assert_eq!(config.fund_figures.request(), FundFigureRequest::default());
    }
}
