pub mod archetypes;
pub mod config;
pub mod i18n;
pub mod matcher;
pub mod photo;
pub mod random;
pub mod report;

// Re-export vision types for convenience
pub use facestyle_vision::{
    detector, face, features, pipeline, DetectedFace, FaceError, FeatureProfile, Pipeline,
};
