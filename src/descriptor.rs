//! Confidence and trend descriptors for a forecast

use crate::models::{ForecastAnchors, TrendDirection};
use serde::Serialize;
use std::fmt;

/// Drift, in AQI points, that still reads as a stable forecast
pub const DEFAULT_TREND_TOLERANCE: f64 = 5.0;

/// Qualitative confidence bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    Low,
    Medium,
    High,
}

/// Confidence band plus the label shown next to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfidenceDescription {
    pub tier: ConfidenceTier,
    pub label: &'static str,
}

impl ConfidenceTier {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "High Confidence",
            ConfidenceTier::Medium => "Medium Confidence",
            ConfidenceTier::Low => "Lower Confidence",
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "high",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::Low => "low",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compare the 72h anchor with the current AQI.
///
/// Differences within `tolerance_aqi` (inclusive) are reported as stable.
#[must_use]
pub fn describe_trend(anchors: &ForecastAnchors, tolerance_aqi: f64) -> TrendDirection {
    let change = anchors.at72h() - anchors.current();
    if change.abs() <= tolerance_aqi {
        TrendDirection::Stable
    } else if change > 0.0 {
        TrendDirection::Increasing
    } else {
        TrendDirection::Decreasing
    }
}

/// Map a model confidence percentage onto a band. NaN reads as low.
#[must_use]
pub fn describe_confidence(confidence: f64) -> ConfidenceDescription {
    let tier = match confidence {
        c if c >= 80.0 => ConfidenceTier::High,
        c if c >= 60.0 => ConfidenceTier::Medium,
        _ => ConfidenceTier::Low,
    };

    ConfidenceDescription {
        tier,
        label: tier.label(),
    }
}
