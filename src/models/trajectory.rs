//! Interpolated forecast trajectory

use serde::{Deserialize, Serialize};

/// One sampled point of a trajectory
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    /// Hours from now
    pub offset_hours: u32,
    /// Raw interpolated AQI, unrounded
    pub aqi: f64,
}

impl TrajectoryPoint {
    /// AQI as shown to users: rounded to the nearest integer, never below zero
    #[must_use]
    pub fn display_aqi(&self) -> u32 {
        self.aqi.max(0.0).round() as u32
    }
}

/// Ordered sequence of points from `0` to the horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub step_hours: u32,
    pub horizon_hours: u32,
    pub points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrajectoryPoint> {
        self.points.iter()
    }

    /// Point sampled exactly at `offset_hours`, if the step lands on it
    #[must_use]
    pub fn point_at(&self, offset_hours: u32) -> Option<&TrajectoryPoint> {
        self.points.iter().find(|p| p.offset_hours == offset_hours)
    }

    /// Highest point; the earliest one wins ties
    #[must_use]
    pub fn peak(&self) -> Option<&TrajectoryPoint> {
        self.points
            .iter()
            .fold(None, |best: Option<&TrajectoryPoint>, p| match best {
                Some(b) if b.aqi >= p.aqi => Some(b),
                _ => Some(p),
            })
    }
}
