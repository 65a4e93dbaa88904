//! `airwatch` - AQI classification and forecast outlooks
//!
//! This library provides the deterministic core of the air-quality dashboard:
//! classifying AQI values into severity tiers, interpolating the 72h forecast
//! trajectory, describing trend and confidence, and assembling the alerts and
//! health advice shown next to a forecast.

pub mod advisory;
pub mod alerts;
pub mod classifier;
pub mod client;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod interpolation;
pub mod logging;
pub mod models;
pub mod outlook;
pub mod source;

// Re-export core types for public API
pub use advisory::{HealthAdvisory, advise, advisory_for};
pub use alerts::{Alert, AlertSeverity, forecast_alerts};
pub use classifier::{Classification, SeverityTier, classify};
pub use client::ForecastClient;
pub use config::AirwatchConfig;
pub use descriptor::{
    ConfidenceDescription, ConfidenceTier, DEFAULT_TREND_TOLERANCE, describe_confidence,
    describe_trend,
};
pub use error::AirwatchError;
pub use interpolation::interpolate;
pub use models::{
    AqiReading, ForecastAnchors, ForecastPayload, Trajectory, TrajectoryPoint, TrendDirection,
};
pub use outlook::{ForecastOutlook, OutlookSettings};
pub use source::{FileForecastSource, ForecastSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, AirwatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
