use facestyle_vision::{EyeSize, FaceShape, FeatureProfile};
use serde::Serialize;

use EyeSize::*;
use FaceShape::*;

/// Expression condition that earns an archetype its affinity bonus.
/// Each threshold is an exclusive lower bound on a probability.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Affinity {
    Any(&'static [(&'static str, f32)]),
    All(&'static [(&'static str, f32)]),
}

impl Affinity {
    pub fn matches(&self, profile: &FeatureProfile) -> bool {
        match self {
            Affinity::Any(rules) => rules.iter().any(|&(l, t)| profile.expression(l) > t),
            Affinity::All(rules) => rules.iter().all(|&(l, t)| profile.expression(l) > t),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Traits {
    pub eye_size: EyeSize,
    pub face_shape: FaceShape,
    pub expression: &'static str,
}

#[derive(Debug, Serialize)]
pub struct AnimalArchetype {
    pub name: &'static str,
    pub emoji: &'static str,
    /// Translation key of the display name.
    pub title: &'static str,
    /// Translation key of the description.
    pub description: &'static str,
    pub traits: Traits,
    pub affinity: Affinity,
}

const fn archetype(
    name: &'static str,
    emoji: &'static str,
    title: &'static str,
    description: &'static str,
    eye_size: EyeSize,
    face_shape: FaceShape,
    expression: &'static str,
    affinity: Affinity,
) -> AnimalArchetype {
    AnimalArchetype {
        name,
        emoji,
        title,
        description,
        traits: Traits {
            eye_size,
            face_shape,
            expression,
        },
        affinity,
    }
}

pub static ARCHETYPES: [AnimalArchetype; 10] = [
    archetype(
        "dog",
        "🐶",
        "animalDogName",
        "animalDogDesc",
        Medium,
        Round,
        "friendly",
        Affinity::Any(&[("happy", 0.3), ("surprised", 0.3)]),
    ),
    archetype(
        "cat",
        "🐱",
        "animalCatName",
        "animalCatDesc",
        Large,
        Oval,
        "neutral",
        Affinity::Any(&[("neutral", 0.4)]),
    ),
    archetype(
        "fox",
        "🦊",
        "animalFoxName",
        "animalFoxDesc",
        Medium,
        Angular,
        "sly",
        Affinity::All(&[("happy", 0.2), ("neutral", 0.2)]),
    ),
    archetype(
        "rabbit",
        "🐰",
        "animalRabbitName",
        "animalRabbitDesc",
        Medium,
        Oval,
        "cute",
        Affinity::Any(&[("happy", 0.4)]),
    ),
    archetype(
        "bear",
        "🐻",
        "animalBearName",
        "animalBearDesc",
        Small,
        Square,
        "calm",
        Affinity::Any(&[("neutral", 0.5)]),
    ),
    archetype(
        "deer",
        "🦌",
        "animalDeerName",
        "animalDeerDesc",
        Large,
        Angular,
        "gentle",
        Affinity::Any(&[("sad", 0.1), ("neutral", 0.5)]),
    ),
    archetype(
        "hamster",
        "🐹",
        "animalHamsterName",
        "animalHamsterDesc",
        Small,
        Round,
        "cheerful",
        Affinity::Any(&[("happy", 0.5)]),
    ),
    archetype(
        "wolf",
        "🐺",
        "animalWolfName",
        "animalWolfDesc",
        Small,
        Angular,
        "fierce",
        Affinity::Any(&[("angry", 0.2)]),
    ),
    archetype(
        "owl",
        "🦉",
        "animalOwlName",
        "animalOwlDesc",
        Large,
        Round,
        "wise",
        Affinity::Any(&[("surprised", 0.2)]),
    ),
    archetype(
        "tiger",
        "🐯",
        "animalTigerName",
        "animalTigerDesc",
        Medium,
        Square,
        "bold",
        Affinity::Any(&[("angry", 0.3), ("disgusted", 0.2)]),
    ),
];

pub fn find(name: &str) -> Option<&'static AnimalArchetype> {
    ARCHETYPES.iter().find(|a| a.name == name)
}
