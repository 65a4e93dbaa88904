//! Data models for the airwatch crate
//!
//! This module contains the core domain models organized by concern:
//! - Reading: live AQI snapshot and pollutant breakdown
//! - Forecast: anchors, wire payload and trend direction
//! - Trajectory: interpolated forecast points

pub mod forecast;
pub mod reading;
pub mod trajectory;

// Re-export all public types for convenient access
pub use forecast::{ForecastAnchors, ForecastPayload, TrendDirection, WeatherConditions};
pub use reading::AqiReading;
pub use trajectory::{Trajectory, TrajectoryPoint};
