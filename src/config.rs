//! Configuration management for `airwatch`
//!
//! Handles loading configuration from a TOML file and environment variables,
//! and validates every setting before it is used.

use crate::AirwatchError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable that points at an alternative config file
pub const CONFIG_PATH_ENV: &str = "AIRWATCH_CONFIG";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AirwatchConfig {
    /// Dashboard API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Trajectory sampling and trend settings
    #[serde(default)]
    pub forecast: ForecastConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dashboard API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST API, including the `/api` prefix
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_api_timeout")]
    pub timeout_seconds: u32,
    /// Maximum number of retries for transient failures
    #[serde(default = "default_api_max_retries")]
    pub max_retries: u32,
}

/// Forecast trajectory settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Hours between trajectory points
    #[serde(default = "default_step_hours")]
    pub step_hours: u32,
    /// Last hour covered by the trajectory
    #[serde(default = "default_horizon_hours")]
    pub horizon_hours: u32,
    /// AQI drift still reported as a stable trend
    #[serde(default = "default_trend_tolerance")]
    pub trend_tolerance: f64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_api_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_api_timeout() -> u32 {
    30
}

fn default_api_max_retries() -> u32 {
    3
}

fn default_step_hours() -> u32 {
    6
}

fn default_horizon_hours() -> u32 {
    72
}

fn default_trend_tolerance() -> f64 {
    crate::descriptor::DEFAULT_TREND_TOLERANCE
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            timeout_seconds: default_api_timeout(),
            max_retries: default_api_max_retries(),
        }
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            step_hours: default_step_hours(),
            horizon_hours: default_horizon_hours(),
            trend_tolerance: default_trend_tolerance(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl AirwatchConfig {
    /// Load configuration from the default file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from the given TOML file (if it exists) plus
    /// `AIRWATCH_` environment overrides, e.g. `AIRWATCH_API__BASE_URL`.
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(Self::get_config_path);

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix("AIRWATCH")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: AirwatchConfig = settings.try_deserialize().with_context(|| {
            format!(
                "Failed to deserialize configuration from {}",
                config_file.display()
            )
        })?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Config file path: `$AIRWATCH_CONFIG` or `airwatch.toml` in the working directory
    #[must_use]
    pub fn get_config_path() -> PathBuf {
        std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("airwatch.toml"))
    }

    /// Replace empty or zero values with their defaults
    pub fn apply_defaults(&mut self) {
        if self.api.base_url.is_empty() {
            self.api.base_url = default_api_base_url();
        }
        if self.api.timeout_seconds == 0 {
            self.api.timeout_seconds = default_api_timeout();
        }
        if self.forecast.step_hours == 0 {
            self.forecast.step_hours = default_step_hours();
        }
        if self.forecast.horizon_hours == 0 {
            self.forecast.horizon_hours = default_horizon_hours();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.api.timeout_seconds > 300 {
            return Err(AirwatchError::config("API timeout cannot exceed 300 seconds").into());
        }

        if self.api.max_retries > 10 {
            return Err(AirwatchError::config("API max retries cannot exceed 10").into());
        }

        if self.forecast.horizon_hours < self.forecast.step_hours {
            return Err(AirwatchError::config(format!(
                "Forecast horizon ({}h) cannot be shorter than the step ({}h)",
                self.forecast.horizon_hours, self.forecast.step_hours
            ))
            .into());
        }

        if self.forecast.horizon_hours > 168 {
            return Err(
                AirwatchError::config("Forecast horizon cannot exceed 168 hours (1 week)").into(),
            );
        }

        if !self.forecast.trend_tolerance.is_finite() || self.forecast.trend_tolerance < 0.0 {
            return Err(AirwatchError::config(
                "Trend tolerance must be a non-negative number",
            )
            .into());
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(AirwatchError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(AirwatchError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://") {
            return Err(
                AirwatchError::config("API base URL must be a valid HTTP or HTTPS URL").into(),
            );
        }

        Ok(())
    }
}
