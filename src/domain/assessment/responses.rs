//! Responses - the user's maturity selections keyed by question.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{MaturityLevel, QuestionId};

/// Mapping from question to selected maturity level.
///
/// Entries are only ever added or overwritten, never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Responses(BTreeMap<QuestionId, MaturityLevel>);

impl Responses {
    /// Creates an empty response set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a selection, returning the value it replaced.
    pub fn record(&mut self, question_id: QuestionId, level: MaturityLevel) -> Option<MaturityLevel> {
        self.0.insert(question_id, level)
    }

    /// Returns the selection for a question.
    pub fn get(&self, question_id: &QuestionId) -> Option<MaturityLevel> {
        self.0.get(question_id).copied()
    }

    /// Returns true if the question has a selection.
    pub fn is_answered(&self, question_id: &QuestionId) -> bool {
        self.0.contains_key(question_id)
    }

    /// Number of answered questions.
    pub fn answered_count(&self) -> usize {
        self.0.len()
    }

    /// Iterates over all selections.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, MaturityLevel)> {
        self.0.iter().map(|(id, level)| (id, *level))
    }
}

impl FromIterator<(QuestionId, MaturityLevel)> for Responses {
    fn from_iter<I: IntoIterator<Item = (QuestionId, MaturityLevel)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
