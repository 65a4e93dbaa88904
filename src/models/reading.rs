//! Live AQI reading with its pollutant breakdown

use crate::classifier::{Classification, SeverityTier};
use crate::error::ensure_non_negative;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Snapshot of the current air quality as reported by the dashboard API
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AqiReading {
    value: f64,
    pollutants: BTreeMap<String, f64>,
    /// Monitoring location name
    pub location: Option<String>,
    /// When the reading was taken
    pub observed_at: Option<DateTime<Utc>>,
}

impl AqiReading {
    /// Create a reading, rejecting negative or non-finite values
    pub fn new(value: f64, pollutants: BTreeMap<String, f64>) -> crate::Result<Self> {
        let value = ensure_non_negative("AQI", value)?;
        for (code, concentration) in &pollutants {
            ensure_non_negative(code, *concentration)?;
        }

        Ok(Self {
            value,
            pollutants,
            location: None,
            observed_at: None,
        })
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn observed_at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.observed_at = Some(timestamp);
        self
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Concentration per pollutant code
    #[must_use]
    pub fn pollutants(&self) -> &BTreeMap<String, f64> {
        &self.pollutants
    }

    /// Classification of the reading's AQI
    #[must_use]
    pub fn classification(&self) -> Classification {
        // value was validated in `new`
        Classification::from(SeverityTier::from_aqi(self.value))
    }

    /// Pollutants with a measurable concentration, codes upper-cased for display
    #[must_use]
    pub fn significant_pollutants(&self) -> Vec<(String, f64)> {
        self.pollutants
            .iter()
            .filter(|(_, value)| **value > 0.0)
            .map(|(code, value)| (code.to_uppercase(), *value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AirwatchError;

    fn pollutants() -> BTreeMap<String, f64> {
        BTreeMap::from([
            ("pm25".to_string(), 89.0),
            ("pm10".to_string(), 142.0),
            ("so2".to_string(), 0.0),
            ("no2".to_string(), 38.5),
        ])
    }

    #[test]
    fn test_reading_classification() {
        let reading = AqiReading::new(156.0, pollutants()).unwrap();
        assert_eq!(reading.classification().tier, SeverityTier::Unhealthy);
    }

    #[test]
    fn test_significant_pollutants_skip_zero() {
        let reading = AqiReading::new(156.0, pollutants()).unwrap();
        let significant = reading.significant_pollutants();

        assert_eq!(
            significant,
            vec![
                ("NO2".to_string(), 38.5),
                ("PM10".to_string(), 142.0),
                ("PM25".to_string(), 89.0),
            ]
        );
    }

    #[test]
    fn test_reading_rejects_negative_values() {
        assert!(matches!(
            AqiReading::new(-1.0, BTreeMap::new()),
            Err(AirwatchError::InvalidInput { .. })
        ));

        let mut bad = pollutants();
        bad.insert("co".to_string(), -0.4);
        let err = AqiReading::new(80.0, bad).unwrap_err();
        assert!(err.to_string().contains("co"));
    }

    #[test]
    fn test_reading_metadata() {
        let now = Utc::now();
        let reading = AqiReading::new(42.0, BTreeMap::new())
            .unwrap()
            .with_location("Delhi")
            .observed_at(now);

        assert_eq!(reading.location.as_deref(), Some("Delhi"));
        assert_eq!(reading.observed_at, Some(now));
    }
}
