use thiserror::Error;

#[derive(Debug, Error)]
pub enum FaceError {
    #[error("no face detected")]
    NoFaceDetected,

    #[error("expected {expected} landmark points, got {found}")]
    IncompleteLandmarks { expected: usize, found: usize },

    #[error("failed to parse detection: {0}")]
    InvalidDetection(#[from] serde_json::Error),
}
