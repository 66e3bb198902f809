use crate::face::{extent, DetectedFace, ExpressionScores, Landmarks};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EyeSize {
    Small,
    Medium,
    Large,
}

impl EyeSize {
    /// Non-finite ratios (degenerate contours) count as small.
    pub fn from_ratio(ratio: f32) -> Self {
        if !ratio.is_finite() {
            EyeSize::Small
        } else if ratio > 0.35 {
            EyeSize::Large
        } else if ratio > 0.25 {
            EyeSize::Medium
        } else {
            EyeSize::Small
        }
    }

    /// Steps apart on the small < medium < large scale.
    pub fn distance(self, other: EyeSize) -> u8 {
        (self as i8 - other as i8).unsigned_abs()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceShape {
    Round,
    Oval,
    Angular,
    Square,
}

impl FaceShape {
    /// Non-finite ratios (degenerate contours) count as round.
    pub fn from_ratio(ratio: f32) -> Self {
        if !ratio.is_finite() {
            FaceShape::Round
        } else if ratio > 1.3 {
            FaceShape::Oval
        } else if ratio > 1.1 {
            FaceShape::Angular
        } else if ratio > 0.9 {
            FaceShape::Square
        } else {
            FaceShape::Round
        }
    }
}

impl fmt::Display for EyeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EyeSize::Small => "small",
            EyeSize::Medium => "medium",
            EyeSize::Large => "large",
        };
        f.write_str(s)
    }
}

impl fmt::Display for FaceShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FaceShape::Round => "round",
            FaceShape::Oval => "oval",
            FaceShape::Angular => "angular",
            FaceShape::Square => "square",
        };
        f.write_str(s)
    }
}

/// Coarse feature buckets derived from one detected face.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureProfile {
    pub eye_size: EyeSize,
    pub face_shape: FaceShape,
    pub dominant_expression: Option<String>,
    pub eye_ratio: f32,
    pub face_ratio: f32,
    pub expressions: ExpressionScores,
}

impl FeatureProfile {
    /// Probability of `label`, 0 when absent.
    pub fn expression(&self, label: &str) -> f32 {
        self.expressions.get(label).copied().unwrap_or(0.0)
    }
}

/// Eye opening height over width, on the left-eye contour.
pub fn eye_ratio(landmarks: &Landmarks) -> f32 {
    let (min_x, min_y, max_x, max_y) = extent(landmarks.left_eye());
    (max_y - min_y) / (max_x - min_x)
}

/// Chin-to-nose-bridge height over jaw width.
pub fn face_ratio(landmarks: &Landmarks) -> f32 {
    let (jaw_left, _, jaw_right, jaw_bottom) = extent(landmarks.jaw());
    let nose_top = landmarks.nose_bridge()[0].y;
    (jaw_bottom - nose_top).abs() / (jaw_right - jaw_left).abs()
}

/// Highest-probability label. Equal probabilities resolve to the label that
/// sorts first.
pub fn dominant_expression(expressions: &ExpressionScores) -> Option<String> {
    expressions
        .iter()
        .fold(None::<(&String, f32)>, |acc, (label, &p)| match acc {
            Some((_, best)) if best >= p => acc,
            _ => Some((label, p)),
        })
        .map(|(label, _)| label.clone())
}

pub fn classify(face: &DetectedFace) -> FeatureProfile {
    let eye_ratio = eye_ratio(&face.landmarks);
    let face_ratio = face_ratio(&face.landmarks);
    FeatureProfile {
        eye_size: EyeSize::from_ratio(eye_ratio),
        face_shape: FaceShape::from_ratio(face_ratio),
        dominant_expression: dominant_expression(&face.expressions),
        eye_ratio,
        face_ratio,
        expressions: face.expressions.clone(),
    }
}
