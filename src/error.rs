//! Error types and handling for the `airwatch` crate

use thiserror::Error;

/// Main error type for the `airwatch` crate
#[derive(Error, Debug)]
pub enum AirwatchError {
    /// Non-finite or negative numeric input, or a payload missing a required value
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Step/horizon combination that cannot produce a trajectory
    #[error("Invalid range: {message}")]
    InvalidRange { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Dashboard API communication errors
    #[error("API error: {message}")]
    Api { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Malformed JSON payloads
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

impl AirwatchError {
    /// Create a new invalid input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a new invalid range error
    pub fn invalid_range<S: Into<String>>(message: S) -> Self {
        Self::InvalidRange {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            AirwatchError::InvalidInput { message } => format!("Invalid input: {message}"),
            AirwatchError::InvalidRange { message } => format!("Invalid range: {message}"),
            AirwatchError::Config { .. } => {
                "Configuration error. Please check your config file and environment.".to_string()
            }
            AirwatchError::Api { .. } => {
                "Unable to reach the air-quality API. Please check the configured base URL."
                    .to_string()
            }
            AirwatchError::Io { .. } => {
                "File operation failed. Please check the path and file permissions.".to_string()
            }
            AirwatchError::Json { .. } => {
                "The forecast payload is not valid JSON.".to_string()
            }
        }
    }
}

/// Reject NaN, infinities and negative values, naming the offending field.
pub(crate) fn ensure_non_negative(field: &str, value: f64) -> Result<f64, AirwatchError> {
    if !value.is_finite() {
        return Err(AirwatchError::invalid_input(format!(
            "{field} must be a finite number, got {value}"
        )));
    }
    if value < 0.0 {
        return Err(AirwatchError::invalid_input(format!(
            "{field} must not be negative, got {value}"
        )));
    }
    Ok(value)
}
