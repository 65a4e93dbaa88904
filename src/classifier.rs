//! AQI Classifier
//!
//! Maps a numeric Air Quality Index onto one of the six EPA severity tiers.
//! Every presentation attribute (label, colour band, chart colour, health
//! text) is looked up from the tier, so a value can never be shown with a
//! label from one band and a colour from another.

use crate::error::ensure_non_negative;
use serde::Serialize;
use std::fmt;

/// EPA severity tiers, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SeverityTier {
    /// 0-50
    Good,
    /// 51-100
    Moderate,
    /// 101-150
    UnhealthySensitive,
    /// 151-200
    Unhealthy,
    /// 201-300
    VeryUnhealthy,
    /// Above 300
    Hazardous,
}

/// Result of classifying a single AQI value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub tier: SeverityTier,
    pub label: &'static str,
    pub color_band: &'static str,
}

/// Presentation attributes of a tier
struct TierStyle {
    label: &'static str,
    color_band: &'static str,
    chart_color: &'static str,
    range_label: &'static str,
    description: &'static str,
}

const GOOD: TierStyle = TierStyle {
    label: "Good",
    color_band: "bg-emerald-500",
    chart_color: "#10B981",
    range_label: "0-50",
    description: "Air quality is satisfactory, and air pollution poses little or no risk.",
};

const MODERATE: TierStyle = TierStyle {
    label: "Moderate",
    color_band: "bg-amber-500",
    chart_color: "#F59E0B",
    range_label: "51-100",
    description: "Air quality is acceptable. However, there may be a risk for some people.",
};

const UNHEALTHY_SENSITIVE: TierStyle = TierStyle {
    label: "Unhealthy for Sensitive Groups",
    color_band: "bg-orange-500",
    chart_color: "#F97316",
    range_label: "101-150",
    description: "Members of sensitive groups may experience health effects.",
};

const UNHEALTHY: TierStyle = TierStyle {
    label: "Unhealthy",
    color_band: "bg-red-500",
    chart_color: "#EF4444",
    range_label: "151-200",
    description: "Everyone may begin to experience health effects.",
};

const VERY_UNHEALTHY: TierStyle = TierStyle {
    label: "Very Unhealthy",
    color_band: "bg-red-700",
    chart_color: "#9333EA",
    range_label: "201-300",
    description: "Health alert: The risk of health effects is increased for everyone.",
};

const HAZARDOUS: TierStyle = TierStyle {
    label: "Hazardous",
    color_band: "bg-red-900",
    chart_color: "#991B1B",
    range_label: "300+",
    description: "Health warning of emergency conditions: everyone is more likely to be affected.",
};

impl SeverityTier {
    /// All tiers in ascending severity
    pub const ALL: [SeverityTier; 6] = [
        SeverityTier::Good,
        SeverityTier::Moderate,
        SeverityTier::UnhealthySensitive,
        SeverityTier::Unhealthy,
        SeverityTier::VeryUnhealthy,
        SeverityTier::Hazardous,
    ];

    /// Tier for an already validated, non-negative AQI.
    ///
    /// Each band is tested against its inclusive upper bound, so fractional
    /// values such as 50.4 fall into the next tier only once they exceed it.
    pub(crate) fn from_aqi(aqi: f64) -> Self {
        match aqi {
            a if a <= 50.0 => SeverityTier::Good,
            a if a <= 100.0 => SeverityTier::Moderate,
            a if a <= 150.0 => SeverityTier::UnhealthySensitive,
            a if a <= 200.0 => SeverityTier::Unhealthy,
            a if a <= 300.0 => SeverityTier::VeryUnhealthy,
            _ => SeverityTier::Hazardous,
        }
    }

    fn style(&self) -> &'static TierStyle {
        match self {
            SeverityTier::Good => &GOOD,
            SeverityTier::Moderate => &MODERATE,
            SeverityTier::UnhealthySensitive => &UNHEALTHY_SENSITIVE,
            SeverityTier::Unhealthy => &UNHEALTHY,
            SeverityTier::VeryUnhealthy => &VERY_UNHEALTHY,
            SeverityTier::Hazardous => &HAZARDOUS,
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        self.style().label
    }

    /// Background colour class used by the dashboard cards
    #[must_use]
    pub fn color_band(&self) -> &'static str {
        self.style().color_band
    }

    /// Hex colour used for chart series
    #[must_use]
    pub fn chart_color(&self) -> &'static str {
        self.style().chart_color
    }

    /// AQI range covered by the tier, e.g. `"101-150"`
    #[must_use]
    pub fn range_label(&self) -> &'static str {
        self.style().range_label
    }

    /// One-sentence health description
    #[must_use]
    pub fn description(&self) -> &'static str {
        self.style().description
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<SeverityTier> for Classification {
    fn from(tier: SeverityTier) -> Self {
        Self {
            tier,
            label: tier.label(),
            color_band: tier.color_band(),
        }
    }
}

/// Classify an AQI value.
///
/// Fails with [`crate::AirwatchError::InvalidInput`] for negative or
/// non-finite input instead of falling back to a tier.
pub fn classify(aqi: f64) -> crate::Result<Classification> {
    let aqi = ensure_non_negative("AQI", aqi)?;
    Ok(SeverityTier::from_aqi(aqi).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AirwatchError;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, SeverityTier::Good)]
    #[case(25.0, SeverityTier::Good)]
    #[case(50.0, SeverityTier::Good)]
    #[case(50.5, SeverityTier::Moderate)]
    #[case(51.0, SeverityTier::Moderate)]
    #[case(100.0, SeverityTier::Moderate)]
    #[case(101.0, SeverityTier::UnhealthySensitive)]
    #[case(150.0, SeverityTier::UnhealthySensitive)]
    #[case(151.0, SeverityTier::Unhealthy)]
    #[case(200.0, SeverityTier::Unhealthy)]
    #[case(201.0, SeverityTier::VeryUnhealthy)]
    #[case(300.0, SeverityTier::VeryUnhealthy)]
    #[case(301.0, SeverityTier::Hazardous)]
    #[case(999.0, SeverityTier::Hazardous)]
    fn test_classify_boundaries(#[case] aqi: f64, #[case] expected: SeverityTier) {
        assert_eq!(classify(aqi).unwrap().tier, expected);
    }

    #[rstest]
    #[case(-1.0)]
    #[case(-0.001)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    fn test_classify_rejects_invalid(#[case] aqi: f64) {
        assert!(matches!(classify(aqi), Err(AirwatchError::InvalidInput { .. })));
    }

    #[test]
    fn test_tiers_never_regress() {
        let mut previous = SeverityTier::Good;
        for step in 0..=4000 {
            let tier = classify(f64::from(step) * 0.125).unwrap().tier;
            assert!(tier >= previous, "tier regressed at {}", f64::from(step) * 0.125);
            previous = tier;
        }
        assert_eq!(previous, SeverityTier::Hazardous);
    }

    #[test]
    fn test_label_and_color_follow_tier() {
        for tier in SeverityTier::ALL {
            let classification = Classification::from(tier);
            assert_eq!(classification.label, tier.label());
            assert_eq!(classification.color_band, tier.color_band());
        }

        let c = classify(165.0).unwrap();
        assert_eq!(c.label, "Unhealthy");
        assert_eq!(c.color_band, "bg-red-500");
    }

    #[test]
    fn test_tier_styles_are_distinct() {
        let mut labels: Vec<_> = SeverityTier::ALL.iter().map(|t| t.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 6);

        let mut colors: Vec<_> = SeverityTier::ALL.iter().map(|t| t.chart_color()).collect();
        colors.sort_unstable();
        colors.dedup();
        assert_eq!(colors.len(), 6);
    }

    #[test]
    fn test_classify_is_deterministic() {
        assert_eq!(classify(123.4).unwrap(), classify(123.4).unwrap());
    }

    #[test]
    fn test_display() {
        assert_eq!(SeverityTier::UnhealthySensitive.to_string(), "Unhealthy for Sensitive Groups");
        assert_eq!(SeverityTier::Hazardous.range_label(), "300+");
        assert!(SeverityTier::Hazardous.description().starts_with("Health warning"));
    }
}
