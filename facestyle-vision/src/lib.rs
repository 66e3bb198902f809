pub mod detector;
pub mod error;
pub mod face;
pub mod features;
pub mod pipeline;

// Re-export commonly used types
pub use detector::{FaceDetector, RecordedDetector};
pub use error::FaceError;
pub use face::{DetectedFace, ExpressionScores, Landmarks, Point};
pub use features::{EyeSize, FaceShape, FeatureProfile};
pub use pipeline::Pipeline;
