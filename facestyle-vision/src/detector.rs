use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::error::FaceError;
use crate::face::DetectedFace;

/// Source of face detections. One call is one capture attempt; `None` means
/// the detector ran but found no face.
pub trait FaceDetector {
    fn detect(&mut self) -> Result<Option<DetectedFace>>;
}

/// Replays a detection recorded as JSON by an external landmark detector.
///
/// The file holds either a single face object or `null`.
pub struct RecordedDetector {
    path: PathBuf,
}

impl RecordedDetector {
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl FaceDetector for RecordedDetector {
    fn detect(&mut self) -> Result<Option<DetectedFace>> {
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading detection {}", self.path.display()))?;
        let face = parse_detection(&raw)
            .with_context(|| format!("parsing detection {}", self.path.display()))?;
        log::debug!(
            "recorded detection {}: face={}",
            self.path.display(),
            face.is_some()
        );
        Ok(face)
    }
}

pub fn parse_detection(raw: &str) -> Result<Option<DetectedFace>, FaceError> {
    Ok(serde_json::from_str(raw)?)
}
