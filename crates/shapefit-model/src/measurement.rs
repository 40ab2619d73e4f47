//! Body measurements and their units.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Measurement unit system.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "in", alias = "inches")]
    Inches,
    #[serde(rename = "cm", alias = "centimeters")]
    Centimeters,
}

impl Unit {
    /// Largest accepted distance between a measured overbust and the nearest
    /// chart overbust.
    pub fn tolerance(&self) -> f64 {
        match self {
            Self::Inches => 1.0,
            Self::Centimeters => 2.5,
        }
    }

    /// Short tag ("in" / "cm").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inches => "in",
            Self::Centimeters => "cm",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Inches => "inches",
            Self::Centimeters => "centimeters",
        }
    }

    pub const fn all() -> &'static [Unit] {
        &[Self::Inches, Self::Centimeters]
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in" | "inch" | "inches" => Ok(Self::Inches),
            "cm" | "centimeter" | "centimeters" => Ok(Self::Centimeters),
            _ => Err(ModelError::UnknownUnit(s.to_string())),
        }
    }
}

/// An underband / overbust pair in one unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub underband: f64,
    pub overbust: f64,
    pub unit: Unit,
}

impl Measurement {
    /// Build a measurement, rejecting missing, non-finite and non-positive
    /// values.
    pub fn new(underband: f64, overbust: f64, unit: Unit) -> Result<Self> {
        let measurement = Self {
            underband,
            overbust,
            unit,
        };
        if measurement.is_valid() {
            Ok(measurement)
        } else {
            Err(ModelError::InvalidMeasurement {
                underband,
                overbust,
            })
        }
    }

    pub fn is_valid(&self) -> bool {
        is_positive(self.underband) && is_positive(self.overbust)
    }
}

/// True for finite values greater than zero.
pub fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
