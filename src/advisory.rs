//! Rule-based health advisories tied to AQI severity tiers

use crate::classifier::{SeverityTier, classify};
use serde::Serialize;

/// Health guidance for one severity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthAdvisory {
    pub aqi_level: &'static str,
    pub health_impact: &'static str,
    pub recommendations: &'static [&'static str],
    pub vulnerable_groups: &'static [&'static str],
    pub outdoor_activity: &'static str,
}

const GOOD: HealthAdvisory = HealthAdvisory {
    aqi_level: "Good (0-50)",
    health_impact: "Air quality is satisfactory, and air pollution poses little or no risk.",
    recommendations: &[
        "Enjoy outdoor activities",
        "No restrictions needed",
        "Ideal conditions for exercise and outdoor sports",
    ],
    vulnerable_groups: &["None - safe for everyone"],
    outdoor_activity: "Unrestricted - all outdoor activities safe",
};

const MODERATE: HealthAdvisory = HealthAdvisory {
    aqi_level: "Moderate (51-100)",
    health_impact: "Air quality is acceptable. However, there may be a risk for some people, particularly those who are unusually sensitive to air pollution.",
    recommendations: &[
        "Unusually sensitive people should consider limiting prolonged outdoor exertion",
        "General public can enjoy outdoor activities with normal precautions",
        "Monitor air quality if you have respiratory conditions",
    ],
    vulnerable_groups: &[
        "People with respiratory diseases",
        "Unusually sensitive individuals",
    ],
    outdoor_activity: "Generally safe - sensitive groups should monitor symptoms",
};

const UNHEALTHY_SENSITIVE: HealthAdvisory = HealthAdvisory {
    aqi_level: "Unhealthy for Sensitive Groups (101-150)",
    health_impact: "Members of sensitive groups may experience health effects. The general public is less likely to be affected.",
    recommendations: &[
        "Sensitive groups should limit prolonged outdoor exertion",
        "Consider wearing N95 masks for extended outdoor activities",
        "Keep windows closed during high pollution hours",
        "Use air purifiers indoors if available",
    ],
    vulnerable_groups: &[
        "Children and elderly",
        "People with asthma or respiratory diseases",
        "People with heart disease",
        "Pregnant women",
    ],
    outdoor_activity: "Moderate - sensitive groups should reduce outdoor exposure",
};

const UNHEALTHY: HealthAdvisory = HealthAdvisory {
    aqi_level: "Unhealthy (151-200)",
    health_impact: "Everyone may begin to experience health effects. Members of sensitive groups may experience more serious health effects.",
    recommendations: &[
        "Everyone should reduce prolonged or heavy outdoor exertion",
        "Wear N95 masks when going outdoors",
        "Avoid outdoor activities during peak pollution hours (7-10 AM, 6-9 PM)",
        "Use air purifiers and keep indoor air clean",
        "Stay hydrated and monitor health symptoms",
    ],
    vulnerable_groups: &[
        "Children and elderly",
        "People with respiratory or heart conditions",
        "Pregnant women",
        "Outdoor workers",
    ],
    outdoor_activity: "Unhealthy - limit outdoor activities, especially prolonged exertion",
};

const VERY_UNHEALTHY: HealthAdvisory = HealthAdvisory {
    aqi_level: "Very Unhealthy (201-300)",
    health_impact: "Health alert: The risk of health effects is increased for everyone. Serious health effects for sensitive groups.",
    recommendations: &[
        "Everyone should avoid prolonged or heavy outdoor exertion",
        "Mandatory N95 mask use when outdoors",
        "Stay indoors as much as possible",
        "Schools and outdoor events should be cancelled",
        "Use air purifiers continuously",
        "Seek medical attention if experiencing breathing difficulties",
    ],
    vulnerable_groups: &[
        "Everyone, especially children and elderly",
        "All people with respiratory or cardiovascular conditions",
        "Pregnant women",
        "All outdoor workers should take precautions",
    ],
    outdoor_activity: "Very Unhealthy - avoid all outdoor activities",
};

const HAZARDOUS: HealthAdvisory = HealthAdvisory {
    aqi_level: "Hazardous (300+)",
    health_impact: "Health warning of emergency conditions: everyone is more likely to be affected. Serious aggravation of heart or lung disease.",
    recommendations: &[
        "Everyone must avoid all outdoor activities",
        "Stay indoors with windows and doors sealed",
        "Use N95 masks even indoors if air quality is poor",
        "Emergency health measures should be in place",
        "Schools, offices, and public places should close",
        "Seek immediate medical attention for any respiratory distress",
        "Use air purifiers on maximum settings",
    ],
    vulnerable_groups: &[
        "Entire population at risk",
        "Critical risk for children, elderly, and people with pre-existing conditions",
    ],
    outdoor_activity: "Hazardous - complete avoidance of all outdoor exposure mandatory",
};

/// Advisory for a tier
#[must_use]
pub fn advisory_for(tier: SeverityTier) -> &'static HealthAdvisory {
    match tier {
        SeverityTier::Good => &GOOD,
        SeverityTier::Moderate => &MODERATE,
        SeverityTier::UnhealthySensitive => &UNHEALTHY_SENSITIVE,
        SeverityTier::Unhealthy => &UNHEALTHY,
        SeverityTier::VeryUnhealthy => &VERY_UNHEALTHY,
        SeverityTier::Hazardous => &HAZARDOUS,
    }
}

/// Classify `aqi` and return the matching advisory
pub fn advise(aqi: f64) -> crate::Result<&'static HealthAdvisory> {
    Ok(advisory_for(classify(aqi)?.tier))
}
