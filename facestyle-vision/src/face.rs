use crate::error::FaceError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// Number of points in the 68-point landmark layout.
pub const LANDMARK_COUNT: usize = 68;

// Index ranges into the 68-point layout
pub const JAW: RangeInclusive<usize> = 0..=16;
pub const NOSE_BRIDGE: RangeInclusive<usize> = 27..=30;
pub const LEFT_EYE: RangeInclusive<usize> = 36..=41;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Landmark set guaranteed to hold the full 68-point layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Landmarks {
    points: Vec<Point>,
}

impl Landmarks {
    pub fn new(points: Vec<Point>) -> Result<Self, FaceError> {
        if points.len() < LANDMARK_COUNT {
            return Err(FaceError::IncompleteLandmarks {
                expected: LANDMARK_COUNT,
                found: points.len(),
            });
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn jaw(&self) -> &[Point] {
        &self.points[JAW]
    }

    pub fn nose_bridge(&self) -> &[Point] {
        &self.points[NOSE_BRIDGE]
    }

    pub fn left_eye(&self) -> &[Point] {
        &self.points[LEFT_EYE]
    }
}

impl<'de> Deserialize<'de> for Landmarks {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let points = Vec::<Point>::deserialize(deserializer)?;
        Landmarks::new(points).map_err(serde::de::Error::custom)
    }
}

/// Expression label → probability. Sorted by label, which fixes tie-breaking.
pub type ExpressionScores = BTreeMap<String, f32>;

/// One face as reported by the external landmark detector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectedFace {
    pub landmarks: Landmarks,
    #[serde(default)]
    pub expressions: ExpressionScores,
}

impl DetectedFace {
    pub fn new(landmarks: Landmarks, expressions: ExpressionScores) -> Self {
        Self {
            landmarks,
            expressions,
        }
    }

    /// Probability of `label`, 0 when the detector did not report it.
    pub fn expression(&self, label: &str) -> f32 {
        self.expressions.get(label).copied().unwrap_or(0.0)
    }
}

/// Axis-aligned extent of a contour: (min_x, min_y, max_x, max_y).
pub fn extent(points: &[Point]) -> (f32, f32, f32, f32) {
    points.iter().fold(
        (f32::MAX, f32::MAX, f32::MIN, f32::MIN),
        |(min_x, min_y, max_x, max_y), p| {
            (min_x.min(p.x), min_y.min(p.y), max_x.max(p.x), max_y.max(p.y))
        },
    )
}
