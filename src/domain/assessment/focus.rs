//! Focus requests - "bring this into view" hints for the UI layer.
//!
//! A request is emitted after a state update and carries no correctness
//! weight: the UI may honor it, delay it or ignore it. Each assessment
//! keeps at most one pending request; issuing a new one supersedes the old.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::QuestionId;
use crate::domain::questionnaire::Section;

/// Monotonic per-assessment identifier of a focus request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FocusRequestId(u64);

impl FocusRequestId {
    /// Wraps a raw id.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw id.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for FocusRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FocusRequestId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// What the UI should bring into view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum FocusTarget {
    /// A question needing attention (first unanswered one).
    Question(QuestionId),
    /// The top of a freshly entered section.
    SectionStart(Section),
    /// The results panel after submission.
    Results,
}

/// A cancellable request to focus a UI element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusRequest {
    pub id: FocusRequestId,
    pub target: FocusTarget,
}
