//! Forecast alerts derived from the 48-72h anchors
//!
//! Rules are evaluated in a fixed order and every rule that matches adds one
//! alert. When nothing matches a single informational "stable" alert is
//! returned, so the list is never empty.

use crate::models::{ForecastAnchors, TrendDirection};
use serde::Serialize;
use std::fmt;

/// AQI above which a forecast is treated as severe
const SEVERE_THRESHOLD: f64 = 250.0;
/// AQI above which a forecast is treated as unhealthy
const UNHEALTHY_THRESHOLD: f64 = 150.0;
/// Wind speed below which pollutants are expected to linger
const LOW_WIND_SPEED: f64 = 5.0;

/// Alert severity, ordered from least to most urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Info,
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertSeverity::Info => write!(f, "info"),
            AlertSeverity::Low => write!(f, "low"),
            AlertSeverity::Medium => write!(f, "medium"),
            AlertSeverity::High => write!(f, "high"),
            AlertSeverity::Critical => write!(f, "critical"),
        }
    }
}

/// A single forecast alert
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub id: String,
    pub severity: AlertSeverity,
    pub title: &'static str,
    pub message: String,
    pub time_window: &'static str,
    pub affected_groups: &'static [&'static str],
    pub aqi_range: String,
}

struct AlertDraft {
    severity: AlertSeverity,
    title: &'static str,
    message: String,
    time_window: &'static str,
    affected_groups: &'static [&'static str],
    aqi_range: String,
}

/// Whole AQI points as shown in alert text
fn whole(aqi: f64) -> u64 {
    aqi.trunc() as u64
}

/// Evaluate all alert rules against a forecast.
///
/// The low-wind rule needs a reported `wind_speed`; a missing speed is not treated as calm.
#[must_use]
pub fn forecast_alerts(
    anchors: &ForecastAnchors,
    trend: TrendDirection,
    wind_speed: Option<f64>,
) -> Vec<Alert> {
    let current = anchors.current();
    let at48h = anchors.at48h();
    let at72h = anchors.at72h();
    let mut drafts = Vec::new();

    if at48h > SEVERE_THRESHOLD || at72h > SEVERE_THRESHOLD {
        let max_aqi = at48h.max(at72h);
        drafts.push(AlertDraft {
            severity: AlertSeverity::Critical,
            title: "Severe Pollution Alert",
            message: format!(
                "AQI forecast to reach {} in next 48-72 hours. Hazardous conditions expected.",
                whole(max_aqi)
            ),
            time_window: "Next 48-72 hours",
            affected_groups: &[
                "All residents",
                "Children",
                "Elderly",
                "People with respiratory conditions",
            ],
            aqi_range: format!("{}-{}", whole(at48h), whole(at72h)),
        });
    }

    if at48h > UNHEALTHY_THRESHOLD && at48h <= SEVERE_THRESHOLD {
        drafts.push(AlertDraft {
            severity: AlertSeverity::High,
            title: "Unhealthy Air Quality Expected",
            message: format!(
                "Air quality will deteriorate to unhealthy levels (AQI ~{}) in next 48 hours.",
                whole(at48h)
            ),
            time_window: "Next 24-48 hours",
            affected_groups: &["Sensitive groups", "Children", "Elderly", "Outdoor workers"],
            aqi_range: format!("{}-{}", whole(at48h), whole(at72h)),
        });
    }

    if trend == TrendDirection::Increasing {
        drafts.push(AlertDraft {
            severity: AlertSeverity::Medium,
            title: "Deteriorating Air Quality",
            message: format!(
                "Air quality is worsening. Current AQI: {}, forecast to reach {}.",
                whole(current),
                whole(at72h)
            ),
            time_window: "Next 72 hours",
            affected_groups: &["People with pre-existing conditions", "Sensitive individuals"],
            aqi_range: format!("{}-{}", whole(current), whole(at72h)),
        });
    }

    if trend == TrendDirection::Decreasing && current > UNHEALTHY_THRESHOLD {
        drafts.push(AlertDraft {
            severity: AlertSeverity::Low,
            title: "Air Quality Improving",
            message: format!(
                "Good news! Air quality expected to improve from {} to {} over next 72 hours.",
                whole(current),
                whole(at72h)
            ),
            time_window: "Next 72 hours",
            affected_groups: &["General public"],
            aqi_range: format!("{}-{}", whole(at72h), whole(current)),
        });
    }

    if wind_speed.is_some_and(|speed| speed < LOW_WIND_SPEED) {
        drafts.push(AlertDraft {
            severity: AlertSeverity::Medium,
            title: "Low Wind Conditions",
            message: "Low wind speed may trap pollutants. Expect slower dispersion of pollution."
                .to_string(),
            time_window: "Next 24-48 hours",
            affected_groups: &["Respiratory sensitive individuals", "Asthma patients"],
            aqi_range: format!("{}-{}", whole(at48h), whole(at72h)),
        });
    }

    if drafts.is_empty() {
        drafts.push(AlertDraft {
            severity: AlertSeverity::Info,
            title: "Air Quality Stable",
            message: format!(
                "Air quality expected to remain relatively stable around AQI {}. Continue monitoring.",
                whole(at48h)
            ),
            time_window: "Next 72 hours",
            affected_groups: &["All residents"],
            aqi_range: format!("{}-{}", whole(at48h), whole(at72h)),
        });
    }

    drafts
        .into_iter()
        .enumerate()
        .map(|(i, draft)| Alert {
            id: format!("alert_{}", i + 1),
            severity: draft.severity,
            title: draft.title,
            message: draft.message,
            time_window: draft.time_window,
            affected_groups: draft.affected_groups,
            aqi_range: draft.aqi_range,
        })
        .collect()
}
