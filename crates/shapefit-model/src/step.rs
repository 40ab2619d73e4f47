//! Quiz navigation types.
//!
//! This module contains the closed enumerations that drive the quiz:
//! - `Step`: The single current screen of the quiz
//! - `Path`: The branch chosen at the hub

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

// =============================================================================
// STEP ENUM
// =============================================================================

/// Current step of the quiz.
///
/// Exactly one step is current at any time. External step tags that do not
/// name a variant are mapped to [`Step::Error`] by [`Step::from_tag_lossy`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Path selection screen.
    #[default]
    Hub,

    /// Measurement entry (underband and overbust).
    SizeCalculator,

    /// Size recommendation produced from the measurements.
    #[serde(rename = "size_results")]
    SizeResult,

    /// Breast shape selection.
    ShapeSelect,

    /// Final style recommendations.
    Results,

    /// Band fit question of the legacy flow.
    BandFit,

    /// Terminal error screen; only a restart leaves it.
    Error,
}

impl Step {
    /// Stable tag used when a step crosses the presentation boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hub => "hub",
            Self::SizeCalculator => "size_calculator",
            Self::SizeResult => "size_results",
            Self::ShapeSelect => "shape_select",
            Self::Results => "results",
            Self::BandFit => "band_fit",
            Self::Error => "error",
        }
    }

    /// Heading shown for this step.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Hub => "How can we help you find your fit?",
            Self::SizeCalculator => "Let's calculate your size.",
            Self::SizeResult => "Your Size Recommendation",
            Self::ShapeSelect => "Which shape best describes you?",
            Self::Results => "Your Personalised Recommendations",
            Self::BandFit => "Let's check your band fit.",
            Self::Error => "Quiz Error.",
        }
    }

    /// Parse a step tag, degrading unknown tags to [`Step::Error`].
    pub fn from_tag_lossy(tag: &str) -> Self {
        tag.parse().unwrap_or(Self::Error)
    }

    /// Get all steps.
    pub const fn all() -> &'static [Step] {
        &[
            Self::Hub,
            Self::SizeCalculator,
            Self::SizeResult,
            Self::ShapeSelect,
            Self::Results,
            Self::BandFit,
            Self::Error,
        ]
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Step {
    type Err = ModelError;

    /// Accepts the canonical tags plus the legacy band-fit flow tags
    /// (`size_1`, `shape_1`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hub" => Ok(Self::Hub),
            "size_calculator" => Ok(Self::SizeCalculator),
            "size_results" | "size_result" => Ok(Self::SizeResult),
            "shape_select" | "shape_1" => Ok(Self::ShapeSelect),
            "results" => Ok(Self::Results),
            "band_fit" | "size_1" => Ok(Self::BandFit),
            "error" => Ok(Self::Error),
            _ => Err(ModelError::UnknownStep(s.to_string())),
        }
    }
}

// =============================================================================
// PATH ENUM
// =============================================================================

/// Branch selected at the hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Path {
    /// "Find My Style": the user knows their size.
    Style,

    /// "Check My Size": size only.
    Size,

    /// "The Full Fitting": size, then style.
    Full,
}

impl Path {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Style => "style",
            Self::Size => "size",
            Self::Full => "full",
        }
    }

    /// Card title on the hub.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Style => "Find My Style",
            Self::Size => "Check My Size",
            Self::Full => "The Full Fitting",
        }
    }

    /// Card subtitle on the hub.
    pub fn tagline(&self) -> &'static str {
        match self {
            Self::Style => "I know my size, help me with style.",
            Self::Size => "Let's evaluate your current bra fit.",
            Self::Full => "Start from scratch for size & style.",
        }
    }

    /// Whether this path visits the measurement branch.
    pub fn measures(&self) -> bool {
        !matches!(self, Self::Style)
    }

    /// Get all paths in hub order.
    pub const fn all() -> &'static [Path] {
        &[Self::Style, Self::Size, Self::Full]
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Path {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "style" => Ok(Self::Style),
            "size" => Ok(Self::Size),
            "full" => Ok(Self::Full),
            _ => Err(ModelError::UnknownPath(s.to_string())),
        }
    }
}
