use anyhow::{Context, Result};

use crate::detector::FaceDetector;
use crate::error::FaceError;
use crate::features::{self, FeatureProfile};

/// Full pipeline: detect face → classify features
pub struct Pipeline<D: FaceDetector> {
    pub detector: D,
}

impl<D: FaceDetector> Pipeline<D> {
    pub fn new(detector: D) -> Self {
        Self { detector }
    }

    /// Run one capture attempt and bucket the detected face.
    pub fn process(&mut self) -> Result<FeatureProfile> {
        let face = self
            .detector
            .detect()
            .context("detecting face")?
            .ok_or(FaceError::NoFaceDetected)?;

        let profile = features::classify(&face);
        log::debug!(
            "eye ratio {:.3} ({}), face ratio {:.3} ({})",
            profile.eye_ratio,
            profile.eye_size,
            profile.face_ratio,
            profile.face_shape
        );
        Ok(profile)
    }
}
