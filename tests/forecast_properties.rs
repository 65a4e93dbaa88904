//! End-to-end properties of classification, interpolation and description

use airwatch::{
    AirwatchError, ConfidenceTier, DEFAULT_TREND_TOLERANCE, ForecastAnchors, ForecastOutlook,
    OutlookSettings, SeverityTier, TrendDirection, classify, describe_confidence, describe_trend,
    interpolate,
};

#[test]
fn test_boundary_exactness() {
    assert_eq!(classify(50.0).unwrap().tier, SeverityTier::Good);
    assert_eq!(classify(51.0).unwrap().tier, SeverityTier::Moderate);
    assert_eq!(classify(300.0).unwrap().tier, SeverityTier::VeryUnhealthy);
    assert_eq!(classify(301.0).unwrap().tier, SeverityTier::Hazardous);
}

#[test]
fn test_flat_trajectory_invariant() {
    let anchors = ForecastAnchors::new(100.0, 100.0, 100.0, 80.0).unwrap();
    let trajectory = interpolate(&anchors, 6, 72).unwrap();

    assert!(!trajectory.is_empty());
    for point in trajectory.iter() {
        assert_eq!(point.aqi, 100.0, "offset {}h drifted", point.offset_hours);
    }
}

#[test]
fn test_first_point_is_current_for_many_anchors() {
    for current in [0.0, 12.5, 99.0, 165.0, 420.0] {
        for at48h in [0.0, 80.0, 300.0] {
            let anchors = ForecastAnchors::new(current, at48h, 150.0, 70.0).unwrap();
            let trajectory = interpolate(&anchors, 6, 72).unwrap();
            assert_eq!(trajectory.points[0].aqi, current);
        }
    }
}

#[test]
fn test_trend_tolerance_examples() {
    let near = ForecastAnchors::new(100.0, 102.0, 104.0, 80.0).unwrap();
    assert_eq!(describe_trend(&near, DEFAULT_TREND_TOLERANCE), TrendDirection::Stable);

    let rising = ForecastAnchors::new(100.0, 105.0, 110.0, 80.0).unwrap();
    assert_eq!(describe_trend(&rising, DEFAULT_TREND_TOLERANCE), TrendDirection::Increasing);
}

#[test]
fn test_repeated_calls_are_identical() {
    let anchors = ForecastAnchors::new(187.3, 143.9, 211.4, 64.0).unwrap();

    assert_eq!(classify(187.3).unwrap(), classify(187.3).unwrap());
    assert_eq!(interpolate(&anchors, 3, 96).unwrap(), interpolate(&anchors, 3, 96).unwrap());
}

#[test]
fn test_negative_input_fails() {
    assert!(matches!(classify(-1.0), Err(AirwatchError::InvalidInput { .. })));

    let result = ForecastAnchors::new(-5.0, 100.0, 100.0, 80.0).and_then(|a| interpolate(&a, 6, 72));
    assert!(matches!(result, Err(AirwatchError::InvalidInput { .. })));
}

#[test]
fn test_improving_forecast_scenario() {
    let anchors = ForecastAnchors::new(165.0, 145.0, 120.0, 72.0).unwrap();

    assert_eq!(describe_trend(&anchors, DEFAULT_TREND_TOLERANCE), TrendDirection::Decreasing);
    assert_eq!(describe_confidence(72.0).tier, ConfidenceTier::Medium);
    assert_eq!(classify(165.0).unwrap().tier, SeverityTier::Unhealthy);
    assert_eq!(classify(120.0).unwrap().tier, SeverityTier::UnhealthySensitive);

    let outlook = ForecastOutlook::build(&anchors, &OutlookSettings::default()).unwrap();
    assert_eq!(outlook.trend, TrendDirection::Decreasing);
    assert_eq!(outlook.alerts[0].title, "Air Quality Improving");
}

#[test]
fn test_outlook_is_shareable_across_threads() {
    let anchors = ForecastAnchors::new(165.0, 145.0, 120.0, 72.0).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(move || {
                ForecastOutlook::build(&anchors, &OutlookSettings::default())
                    .unwrap()
                    .points
                    .iter()
                    .map(|p| p.aqi.to_bits())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}
