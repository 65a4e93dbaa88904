//! Forecast outlook: the full pipeline from anchors to a labelled,
//! annotated trajectory ready for presentation.

use crate::advisory::{HealthAdvisory, advisory_for};
use crate::alerts::{Alert, forecast_alerts};
use crate::classifier::{Classification, classify};
use crate::config::ForecastConfig;
use crate::descriptor::{
    ConfidenceDescription, DEFAULT_TREND_TOLERANCE, describe_confidence, describe_trend,
};
use crate::interpolation::interpolate;
use crate::models::{ForecastAnchors, ForecastPayload, TrajectoryPoint, TrendDirection};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{instrument, warn};

/// Sampling and trend parameters for an outlook
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlookSettings {
    pub step_hours: u32,
    pub horizon_hours: u32,
    pub trend_tolerance: f64,
}

impl Default for OutlookSettings {
    fn default() -> Self {
        Self {
            step_hours: 6,
            horizon_hours: 72,
            trend_tolerance: DEFAULT_TREND_TOLERANCE,
        }
    }
}

impl From<&ForecastConfig> for OutlookSettings {
    fn from(config: &ForecastConfig) -> Self {
        Self {
            step_hours: config.step_hours,
            horizon_hours: config.horizon_hours,
            trend_tolerance: config.trend_tolerance,
        }
    }
}

/// Trajectory point with its display value and classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LabelledPoint {
    pub offset_hours: u32,
    /// Raw interpolated AQI
    pub aqi: f64,
    /// Rounded, non-negative AQI for display
    pub display_aqi: u32,
    pub classification: Classification,
}

impl LabelledPoint {
    fn label(point: &TrajectoryPoint) -> crate::Result<Self> {
        // Late segments can dip below zero for steep improvements.
        let classification = classify(point.aqi.max(0.0))?;
        Ok(Self {
            offset_hours: point.offset_hours,
            aqi: point.aqi,
            display_aqi: point.display_aqi(),
            classification,
        })
    }
}

/// Headline value for one of the fixed forecast horizons
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryCard {
    pub offset_hours: u32,
    pub aqi: u32,
    pub classification: Classification,
}

impl SummaryCard {
    fn new(offset_hours: u32, aqi: f64) -> crate::Result<Self> {
        let point = TrajectoryPoint { offset_hours, aqi };
        let labelled = LabelledPoint::label(&point)?;
        Ok(Self {
            offset_hours,
            aqi: labelled.display_aqi,
            classification: labelled.classification,
        })
    }
}

/// Everything the dashboard shows for a forecast
#[derive(Debug, Clone, Serialize)]
pub struct ForecastOutlook {
    pub generated_at: DateTime<Utc>,
    pub anchors: ForecastAnchors,
    pub points: Vec<LabelledPoint>,
    pub peak: Option<LabelledPoint>,
    /// Now, 24h, 48h and 72h
    pub summary: Vec<SummaryCard>,
    pub trend: TrendDirection,
    pub confidence: ConfidenceDescription,
    pub alerts: Vec<Alert>,
    pub advisory: &'static HealthAdvisory,
}

impl ForecastOutlook {
    /// Build an outlook from validated anchors
    pub fn build(anchors: &ForecastAnchors, settings: &OutlookSettings) -> crate::Result<Self> {
        Self::assemble(anchors, settings, None)
    }

    /// Build an outlook from the dashboard's forecast payload
    pub fn from_payload(
        payload: &ForecastPayload,
        settings: &OutlookSettings,
    ) -> crate::Result<Self> {
        let anchors = payload.anchors()?;
        let outlook = Self::assemble(&anchors, settings, payload.wind_speed())?;

        if let Some(reported) = payload.reported_trend() {
            if reported != outlook.trend {
                warn!(
                    %reported,
                    derived = %outlook.trend,
                    "Backend trend disagrees with the anchors, using the derived trend"
                );
            }
        }

        Ok(outlook)
    }

    #[instrument(name = "build_outlook", level = "debug", skip(anchors))]
    fn assemble(
        anchors: &ForecastAnchors,
        settings: &OutlookSettings,
        wind_speed: Option<f64>,
    ) -> crate::Result<Self> {
        let trajectory = interpolate(anchors, settings.step_hours, settings.horizon_hours)?;

        let points = trajectory
            .iter()
            .map(LabelledPoint::label)
            .collect::<crate::Result<Vec<_>>>()?;
        let peak = trajectory.peak().map(LabelledPoint::label).transpose()?;

        let current = anchors.current();
        let summary = vec![
            SummaryCard::new(0, current)?,
            SummaryCard::new(24, (current + anchors.at48h()) / 2.0)?,
            SummaryCard::new(48, anchors.at48h())?,
            SummaryCard::new(72, anchors.at72h())?,
        ];

        let trend = describe_trend(anchors, settings.trend_tolerance);
        let confidence = describe_confidence(anchors.confidence());
        let alerts = forecast_alerts(anchors, trend, wind_speed);
        let advisory = advisory_for(classify(current)?.tier);

        tracing::debug!(
            %trend,
            confidence = %confidence.tier,
            alerts = alerts.len(),
            "Forecast outlook assembled"
        );

        Ok(Self {
            generated_at: Utc::now(),
            anchors: *anchors,
            points,
            peak,
            summary,
            trend,
            confidence,
            alerts,
            advisory,
        })
    }

    /// Worst tier anywhere on the trajectory
    #[must_use]
    pub fn worst_tier(&self) -> Option<crate::SeverityTier> {
        self.points.iter().map(|p| p.classification.tier).max()
    }
}
