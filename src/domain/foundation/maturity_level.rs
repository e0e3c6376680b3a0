//! Maturity level value object (1 to 5 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Capability maturity level: 1 (Ad-hoc) to 5 (Optimized).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum MaturityLevel {
    AdHoc = 1,
    Emerging = 2,
    Developing = 3,
    Integrated = 4,
    Optimized = 5,
}

impl MaturityLevel {
    /// All levels in ascending order.
    pub const ALL: [MaturityLevel; 5] = [
        MaturityLevel::AdHoc,
        MaturityLevel::Emerging,
        MaturityLevel::Developing,
        MaturityLevel::Integrated,
        MaturityLevel::Optimized,
    ];

    /// Lowest selectable level.
    pub const MIN: MaturityLevel = MaturityLevel::AdHoc;

    /// Highest selectable level.
    pub const MAX: MaturityLevel = MaturityLevel::Optimized;

    /// Creates a MaturityLevel from an integer, returning error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        match value {
            1 => Ok(MaturityLevel::AdHoc),
            2 => Ok(MaturityLevel::Emerging),
            3 => Ok(MaturityLevel::Developing),
            4 => Ok(MaturityLevel::Integrated),
            5 => Ok(MaturityLevel::Optimized),
            _ => Err(ValidationError::out_of_range(
                "maturity_level",
                1,
                5,
                value as i32,
            )),
        }
    }

    /// Creates a MaturityLevel from a wide integer, as received over the wire.
    pub fn try_from_i64(value: i64) -> Result<Self, ValidationError> {
        match u8::try_from(value) {
            Ok(narrow) => Self::try_from_u8(narrow),
            Err(_) => Err(ValidationError::out_of_range(
                "maturity_level",
                1,
                5,
                value.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            )),
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            MaturityLevel::AdHoc => "Ad-hoc",
            MaturityLevel::Emerging => "Emerging",
            MaturityLevel::Developing => "Developing",
            MaturityLevel::Integrated => "Integrated",
            MaturityLevel::Optimized => "Optimized",
        }
    }

    /// Returns the one-line description shown next to the label.
    pub fn description(&self) -> &'static str {
        match self {
            MaturityLevel::AdHoc => "No formal processes, highly reactive.",
            MaturityLevel::Emerging => "Initial efforts, informal practices.",
            MaturityLevel::Developing => "Defined processes, inconsistent execution.",
            MaturityLevel::Integrated => "Capabilities are coordinated and embedded.",
            MaturityLevel::Optimized => "Continuous improvement and best practices in place.",
        }
    }

    /// Axis tick label for a numeric position on the 1..=5 scale.
    pub fn tick_label(value: u8) -> Option<&'static str> {
        Self::try_from_u8(value).ok().map(|level| level.label())
    }

    /// Nearest level to an averaged score, for display only.
    ///
    /// Halves round up; values outside the scale clamp to its ends.
    pub fn nearest(score: f64) -> Self {
        let rounded = score.round().clamp(Self::MIN.value() as f64, Self::MAX.value() as f64);
        Self::try_from_u8(rounded as u8).unwrap_or(Self::MIN)
    }
}

impl From<MaturityLevel> for u8 {
    fn from(level: MaturityLevel) -> Self {
        level.value()
    }
}

impl TryFrom<u8> for MaturityLevel {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from_u8(value)
    }
}

impl fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
