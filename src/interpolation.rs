//! Forecast Interpolator
//!
//! Turns the current AQI and the 48h/72h anchors into a sampled trajectory.
//! The curve is piecewise linear:
//!
//! - `0..=24h`: walks the `current -> at48h` line at a 48h slope
//! - `24..=48h`: same base slope plus a damped correction of 0.3x the 24h slope
//! - `>48h`: straight line from `at48h` towards `at72h`, extrapolated past 72h
//!
//! Values stay unrounded here; rounding is a display concern.

use crate::error::AirwatchError;
use crate::models::{ForecastAnchors, Trajectory, TrajectoryPoint};
use tracing::instrument;

const FIRST_SEGMENT_END: f64 = 24.0;
const ANCHOR_48H: f64 = 48.0;
const SEGMENT_SPAN: f64 = 24.0;
const CORRECTION_DAMPING: f64 = 0.3;

/// AQI predicted by the three-segment model `offset_hours` from now
#[must_use]
pub fn aqi_at(anchors: &ForecastAnchors, offset_hours: f64) -> f64 {
    let current = anchors.current();
    let delta_48h = anchors.at48h() - current;
    let base_slope = delta_48h / ANCHOR_48H;

    if offset_hours <= 0.0 {
        current
    } else if offset_hours <= FIRST_SEGMENT_END {
        current + base_slope * offset_hours
    } else if offset_hours <= ANCHOR_48H {
        let correction = delta_48h / SEGMENT_SPAN * CORRECTION_DAMPING;
        current + base_slope * offset_hours + correction * (offset_hours - FIRST_SEGMENT_END)
    } else {
        let late_slope = (anchors.at72h() - anchors.at48h()) / SEGMENT_SPAN;
        anchors.at48h() + late_slope * (offset_hours - ANCHOR_48H)
    }
}

/// Sample the forecast every `step_hours` from `0` up to `horizon_hours`.
///
/// The last point is the largest multiple of the step that does not exceed
/// the horizon.
#[instrument(level = "debug", skip(anchors))]
pub fn interpolate(
    anchors: &ForecastAnchors,
    step_hours: u32,
    horizon_hours: u32,
) -> crate::Result<Trajectory> {
    if step_hours == 0 {
        return Err(AirwatchError::invalid_range("step must be at least one hour"));
    }
    if horizon_hours == 0 {
        return Err(AirwatchError::invalid_range("horizon must be at least one hour"));
    }
    if horizon_hours < step_hours {
        return Err(AirwatchError::invalid_range(format!(
            "horizon of {horizon_hours}h is shorter than the {step_hours}h step"
        )));
    }

    let points: Vec<TrajectoryPoint> = (0..=horizon_hours)
        .step_by(step_hours as usize)
        .map(|offset_hours| TrajectoryPoint {
            offset_hours,
            aqi: aqi_at(anchors, f64::from(offset_hours)),
        })
        .collect();

    tracing::debug!(points = points.len(), "Interpolated forecast trajectory");

    Ok(Trajectory {
        step_hours,
        horizon_hours,
        points,
    })
}
