//! Quiz answers.
//!
//! Every question has a fixed key and a closed answer vocabulary. String
//! input from the presentation layer is validated here, so an [`AnswerSet`]
//! can never hold an unknown key or value.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Question identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QuestionKey {
    #[serde(rename = "shape")]
    Shape,
    #[serde(rename = "bandFit")]
    BandFit,
}

impl QuestionKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shape => "shape",
            Self::BandFit => "bandFit",
        }
    }

    /// Accepted answer tags for this question.
    pub fn choices(&self) -> &'static [&'static str] {
        match self {
            Self::Shape => &[
                "round",
                "teardrop",
                "bell",
                "east-west",
                "side-set",
                "slender",
            ],
            Self::BandFit => &["tight", "good", "loose"],
        }
    }

    fn unknown_answer(&self, value: &str) -> ModelError {
        ModelError::UnknownAnswer {
            question: self.as_str().to_string(),
            value: value.to_string(),
            expected: self.choices().join(", "),
        }
    }
}

impl fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionKey {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "shape" => Ok(Self::Shape),
            "bandFit" | "band_fit" => Ok(Self::BandFit),
            _ => Err(ModelError::UnknownQuestion(s.to_string())),
        }
    }
}

/// Breast shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shape {
    Round,
    Teardrop,
    Bell,
    EastWest,
    SideSet,
    Slender,
}

impl Shape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Round => "round",
            Self::Teardrop => "teardrop",
            Self::Bell => "bell",
            Self::EastWest => "east-west",
            Self::SideSet => "side-set",
            Self::Slender => "slender",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Round => "Round",
            Self::Teardrop => "Teardrop",
            Self::Bell => "Bell",
            Self::EastWest => "East-West",
            Self::SideSet => "Side Set",
            Self::Slender => "Slender",
        }
    }

    pub const fn all() -> &'static [Shape] {
        &[
            Self::Round,
            Self::Teardrop,
            Self::Bell,
            Self::EastWest,
            Self::SideSet,
            Self::Slender,
        ]
    }
}

impl FromStr for Shape {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Shape::all()
            .iter()
            .copied()
            .find(|shape| shape.as_str() == s.trim())
            .ok_or_else(|| QuestionKey::Shape.unknown_answer(s))
    }
}

/// How the band of the current bra feels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandFit {
    Tight,
    Good,
    Loose,
}

impl BandFit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tight => "tight",
            Self::Good => "good",
            Self::Loose => "loose",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Tight => "Too Tight",
            Self::Good => "Just Right",
            Self::Loose => "Too Loose",
        }
    }

    pub const fn all() -> &'static [BandFit] {
        &[Self::Tight, Self::Good, Self::Loose]
    }
}

impl FromStr for BandFit {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        BandFit::all()
            .iter()
            .copied()
            .find(|fit| fit.as_str() == s.trim())
            .ok_or_else(|| QuestionKey::BandFit.unknown_answer(s))
    }
}

/// A validated answer to one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Shape(Shape),
    BandFit(BandFit),
}

impl Answer {
    /// Validate a raw `(key, value)` pair from the presentation layer.
    pub fn parse(key: &str, value: &str) -> Result<Self> {
        match key.parse::<QuestionKey>()? {
            QuestionKey::Shape => value.parse().map(Self::Shape),
            QuestionKey::BandFit => value.parse().map(Self::BandFit),
        }
    }

    pub fn key(&self) -> QuestionKey {
        match self {
            Self::Shape(_) => QuestionKey::Shape,
            Self::BandFit(_) => QuestionKey::BandFit,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shape(shape) => shape.as_str(),
            Self::BandFit(fit) => fit.as_str(),
        }
    }
}

/// Collected answers, keyed by question.
///
/// Serialize-only: a deserialized map could pair a key with another
/// question's value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionKey, Answer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the answer for its question.
    pub fn insert(&mut self, answer: Answer) -> Option<Answer> {
        self.answers.insert(answer.key(), answer)
    }

    pub fn get(&self, key: QuestionKey) -> Option<&Answer> {
        self.answers.get(&key)
    }

    pub fn shape(&self) -> Option<Shape> {
        match self.answers.get(&QuestionKey::Shape) {
            Some(Answer::Shape(shape)) => Some(*shape),
            _ => None,
        }
    }

    pub fn band_fit(&self) -> Option<BandFit> {
        match self.answers.get(&QuestionKey::BandFit) {
            Some(Answer::BandFit(fit)) => Some(*fit),
            _ => None,
        }
    }

    /// Drop the band-fit answer.
    pub fn discard_band_fit(&mut self) -> Option<Answer> {
        self.answers.remove(&QuestionKey::BandFit)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionKey, &Answer)> {
        self.answers.iter().map(|(key, answer)| (*key, answer))
    }
}
