//! Forecast anchors, the dashboard's forecast payload and trend direction

use crate::error::{AirwatchError, ensure_non_negative};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Current AQI plus the two forecast anchors the trajectory is drawn through.
///
/// All AQI values are finite and non-negative; confidence is clamped to `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastAnchors {
    current: f64,
    at48h: f64,
    at72h: f64,
    confidence: f64,
}

impl ForecastAnchors {
    /// Validate and build a set of anchors
    pub fn new(current: f64, at48h: f64, at72h: f64, confidence: f64) -> crate::Result<Self> {
        let current = ensure_non_negative("current AQI", current)?;
        let at48h = ensure_non_negative("48h AQI", at48h)?;
        let at72h = ensure_non_negative("72h AQI", at72h)?;
        if !confidence.is_finite() {
            return Err(AirwatchError::invalid_input(format!(
                "confidence must be a finite number, got {confidence}"
            )));
        }

        Ok(Self {
            current,
            at48h,
            at72h,
            confidence: confidence.clamp(0.0, 100.0),
        })
    }

    #[must_use]
    pub fn current(&self) -> f64 {
        self.current
    }

    #[must_use]
    pub fn at48h(&self) -> f64 {
        self.at48h
    }

    #[must_use]
    pub fn at72h(&self) -> f64 {
        self.at72h
    }

    /// Model confidence in percent
    #[must_use]
    pub fn confidence(&self) -> f64 {
        self.confidence
    }
}

/// Direction of the forecast between now and the 72h anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    #[serde(alias = "worsening")]
    Increasing,
    #[serde(alias = "improving")]
    Decreasing,
    Stable,
}

impl TrendDirection {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Increasing => "increasing",
            TrendDirection::Decreasing => "decreasing",
            TrendDirection::Stable => "stable",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrendDirection {
    type Err = AirwatchError;

    /// Accepts the dashboard's trend words as well as the backend's
    /// `worsening`/`improving` spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "increasing" | "worsening" => Ok(TrendDirection::Increasing),
            "decreasing" | "improving" => Ok(TrendDirection::Decreasing),
            "stable" => Ok(TrendDirection::Stable),
            other => Err(AirwatchError::invalid_input(format!(
                "unknown trend '{other}'"
            ))),
        }
    }
}

/// Weather context attached to a forecast. Only wind speed feeds the alert rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherConditions {
    /// Wind speed in km/h
    #[serde(default)]
    pub wind_speed: Option<f64>,
}

/// Body of `GET /api/aqi/forecast`
///
/// Anchors are optional on the wire; [`ForecastPayload::anchors`] rejects
/// payloads that cannot be turned into a trajectory. The backend's `aqi_24h`
/// is ignored in favour of the interpolated value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastPayload {
    pub current_aqi: Option<f64>,
    pub aqi_48h: Option<f64>,
    pub aqi_72h: Option<f64>,
    pub confidence: f64,
    /// Trend as reported by the backend, kept verbatim
    #[serde(default)]
    pub trend: Option<String>,
    #[serde(default)]
    pub weather_conditions: Option<WeatherConditions>,
}

impl ForecastPayload {
    /// Parse a payload from its JSON text
    pub fn from_json(text: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Build validated anchors from the payload
    pub fn anchors(&self) -> crate::Result<ForecastAnchors> {
        let current = self
            .current_aqi
            .ok_or_else(|| AirwatchError::invalid_input("forecast payload has no current_aqi"))?;
        let at48h = self
            .aqi_48h
            .ok_or_else(|| AirwatchError::invalid_input("forecast payload has no aqi_48h"))?;
        let at72h = self
            .aqi_72h
            .ok_or_else(|| AirwatchError::invalid_input("forecast payload has no aqi_72h"))?;

        ForecastAnchors::new(current, at48h, at72h, self.confidence)
    }

    /// Trend reported by the backend, if present and recognised
    #[must_use]
    pub fn reported_trend(&self) -> Option<TrendDirection> {
        self.trend.as_deref().and_then(|t| t.parse().ok())
    }

    /// Reported wind speed, if any
    #[must_use]
    pub fn wind_speed(&self) -> Option<f64> {
        self.weather_conditions.as_ref().and_then(|w| w.wind_speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_anchors_clamp_confidence() {
        let anchors = ForecastAnchors::new(100.0, 120.0, 130.0, 140.0).unwrap();
        assert_eq!(anchors.confidence(), 100.0);

        let anchors = ForecastAnchors::new(100.0, 120.0, 130.0, -3.0).unwrap();
        assert_eq!(anchors.confidence(), 0.0);
    }

    #[rstest]
    #[case(-5.0, 100.0, 100.0)]
    #[case(100.0, -1.0, 100.0)]
    #[case(100.0, 100.0, f64::NAN)]
    #[case(f64::INFINITY, 100.0, 100.0)]
    fn test_anchors_reject_invalid_aqi(
        #[case] current: f64,
        #[case] at48h: f64,
        #[case] at72h: f64,
    ) {
        let result = ForecastAnchors::new(current, at48h, at72h, 80.0);
        assert!(matches!(result, Err(AirwatchError::InvalidInput { .. })));
    }

    #[test]
    fn test_anchors_reject_nan_confidence() {
        let result = ForecastAnchors::new(100.0, 100.0, 100.0, f64::NAN);
        assert!(matches!(result, Err(AirwatchError::InvalidInput { .. })));
    }

    #[rstest]
    #[case("increasing", TrendDirection::Increasing)]
    #[case("worsening", TrendDirection::Increasing)]
    #[case("Decreasing", TrendDirection::Decreasing)]
    #[case("improving", TrendDirection::Decreasing)]
    #[case(" stable ", TrendDirection::Stable)]
    fn test_trend_parsing(#[case] input: &str, #[case] expected: TrendDirection) {
        assert_eq!(input.parse::<TrendDirection>().unwrap(), expected);
    }

    #[test]
    fn test_trend_parsing_unknown() {
        assert!("sideways".parse::<TrendDirection>().is_err());
    }

    #[test]
    fn test_payload_from_backend_json() {
        let json = r#"{
            "current_aqi": 165.0,
            "aqi_24h": 155.0,
            "aqi_48h": 145.0,
            "aqi_72h": 120.0,
            "trend": "improving",
            "confidence": 72.0,
            "confidence_level": "medium",
            "model_version": "lstm_v2",
            "weather_conditions": {"wind_speed": 3.2, "humidity": 61}
        }"#;

        let payload = ForecastPayload::from_json(json).unwrap();
        assert_eq!(payload.reported_trend(), Some(TrendDirection::Decreasing));
        assert_eq!(payload.wind_speed(), Some(3.2));

        let anchors = payload.anchors().unwrap();
        assert_eq!(anchors.current(), 165.0);
        assert_eq!(anchors.at48h(), 145.0);
        assert_eq!(anchors.at72h(), 120.0);
        assert_eq!(anchors.confidence(), 72.0);
    }

    #[test]
    fn test_payload_missing_anchor() {
        let json = r#"{"current_aqi": 100.0, "aqi_48h": 110.0, "confidence": 80.0, "trend": "stable"}"#;
        let payload = ForecastPayload::from_json(json).unwrap();

        let err = payload.anchors().unwrap_err();
        assert!(err.to_string().contains("aqi_72h"));
    }

    #[test]
    fn test_payload_invalid_json() {
        let result = ForecastPayload::from_json("{not json");
        assert!(matches!(result, Err(AirwatchError::Json { .. })));
    }

    #[test]
    fn test_trend_serializes_lowercase() {
        let json = serde_json::to_string(&TrendDirection::Increasing).unwrap();
        assert_eq!(json, "\"increasing\"");
    }
}
