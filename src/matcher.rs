use anyhow::Result;
use facestyle_vision::{features, DetectedFace, EyeSize, FaceError, FaceShape, FeatureProfile};
use serde::Serialize;

use crate::archetypes::{AnimalArchetype, ARCHETYPES};
use crate::i18n::Locale;
use crate::random::RandomSource;

pub const BASE_SCORE: f64 = 50.0;
pub const MAX_SCORE: f64 = 95.0;
pub const AFFINITY_BONUS: f64 = 10.0;
pub const JITTER: f64 = 10.0;

#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub archetype: &'static AnimalArchetype,
    pub score: f64,
}

/// Display form of a match, translated and with the rounded score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalizedMatch {
    pub animal: &'static str,
    pub emoji: &'static str,
    pub name: String,
    pub description: String,
    pub percent: u8,
}

impl MatchResult {
    /// Score rounded to a whole percentage.
    pub fn percent(&self) -> u8 {
        self.score.round() as u8
    }

    pub fn localize(&self, locale: &Locale) -> LocalizedMatch {
        LocalizedMatch {
            animal: self.archetype.name,
            emoji: self.archetype.emoji,
            name: locale.get(self.archetype.title).into_owned(),
            description: locale.get(self.archetype.description).into_owned(),
            percent: self.percent(),
        }
    }
}

pub fn eye_points(archetype: EyeSize, profile: EyeSize) -> f64 {
    match archetype.distance(profile) {
        0 => 15.0,
        1 => 8.0,
        _ => 0.0,
    }
}

/// Only round and oval count as neighbours.
pub fn face_points(archetype: FaceShape, profile: FaceShape) -> f64 {
    use FaceShape::*;
    match (archetype, profile) {
        (a, b) if a == b => 20.0,
        (Round, Oval) | (Oval, Round) => 10.0,
        _ => 0.0,
    }
}

/// Score without the random term.
pub fn base_score(archetype: &AnimalArchetype, profile: &FeatureProfile) -> f64 {
    let mut score = BASE_SCORE;
    score += eye_points(archetype.traits.eye_size, profile.eye_size);
    score += face_points(archetype.traits.face_shape, profile.face_shape);
    if archetype.affinity.matches(profile) {
        score += AFFINITY_BONUS;
    }
    score
}

/// Score every archetype, best first. Equal scores keep list order.
pub fn rank(profile: &FeatureProfile, rng: &mut impl RandomSource) -> Vec<MatchResult> {
    let mut results: Vec<MatchResult> = ARCHETYPES
        .iter()
        .map(|archetype| {
            let jitter = rng.next_unit() * JITTER;
            MatchResult {
                archetype,
                score: (base_score(archetype, profile) + jitter).min(MAX_SCORE),
            }
        })
        .collect();
    // sort_by is stable
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results
}

pub fn best_match(profile: &FeatureProfile, rng: &mut impl RandomSource) -> MatchResult {
    let mut ranked = rank(profile, rng);
    log::debug!(
        "ranking: {}",
        ranked
            .iter()
            .map(|r| format!("{}={:.1}", r.archetype.name, r.score))
            .collect::<Vec<_>>()
            .join(" ")
    );
    ranked.swap_remove(0)
}

pub fn classify_and_match(
    face: Option<&DetectedFace>,
    rng: &mut impl RandomSource,
) -> Result<MatchResult> {
    let face = face.ok_or(FaceError::NoFaceDetected)?;
    let profile = features::classify(face);
    Ok(best_match(&profile, rng))
}
