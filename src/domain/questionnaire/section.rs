//! Sections - the navigation steps of the questionnaire.
//!
//! # Step Order
//!
//! 1. Organizational → 2. Contextual → 3. Technical

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Top-level grouping of capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Organizational,
    Contextual,
    Technical,
}

impl Section {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Organizational => "Organizational",
            Section::Contextual => "Contextual",
            Section::Technical => "Technical",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Section {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "organizational" => Ok(Section::Organizational),
            "contextual" => Ok(Section::Contextual),
            "technical" => Ok(Section::Technical),
            other => Err(ValidationError::invalid_format(
                "section",
                format!("unknown section '{}'", other),
            )),
        }
    }
}

/// Central location for step ordering logic.
pub struct SectionSequence;

impl SectionSequence {
    /// The canonical step order.
    pub const ORDER: [Section; 3] = [Section::Organizational, Section::Contextual, Section::Technical];

    /// Returns all sections in order.
    pub fn all() -> &'static [Section; 3] {
        &Self::ORDER
    }

    /// Number of navigation steps.
    pub fn count() -> usize {
        Self::ORDER.len()
    }

    /// Returns the 0-based step index of a section.
    #[inline]
    pub fn order_index(section: Section) -> usize {
        match section {
            Section::Organizational => 0,
            Section::Contextual => 1,
            Section::Technical => 2,
        }
    }

    /// Returns the section at a step index, if in range.
    pub fn at(index: usize) -> Option<Section> {
        Self::ORDER.get(index).copied()
    }

    /// First step.
    pub fn first() -> Section {
        Self::ORDER[0]
    }

    /// Last step.
    pub fn last() -> Section {
        Self::ORDER[Self::ORDER.len() - 1]
    }

    /// Returns the next section, or None at the end.
    pub fn next(section: Section) -> Option<Section> {
        Self::at(Self::order_index(section) + 1)
    }

    /// Returns the previous section, or None at the start.
    pub fn previous(section: Section) -> Option<Section> {
        Self::order_index(section)
            .checked_sub(1)
            .and_then(Self::at)
    }
}
