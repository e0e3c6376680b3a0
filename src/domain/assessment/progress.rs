//! AssessmentProgress value object - completion snapshot for step indicators.

use serde::Serialize;

use crate::domain::questionnaire::{Questionnaire, Section, SectionSequence};

use super::{validation, Responses};

/// Completion of one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionProgress {
    pub section: Section,
    pub answered: usize,
    pub total: usize,
}

impl SectionProgress {
    /// Returns true if every question in the section is answered.
    pub fn is_complete(&self) -> bool {
        self.answered == self.total
    }
}

/// A read-only snapshot of how much of the questionnaire is answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentProgress {
    pub answered: usize,
    pub total: usize,
    pub sections: Vec<SectionProgress>,
}

impl AssessmentProgress {
    /// Builds the snapshot for a response set.
    pub fn compute(catalog: &Questionnaire, responses: &Responses) -> Self {
        let sections: Vec<SectionProgress> = SectionSequence::all()
            .iter()
            .map(|section| {
                let total = catalog.questions_in(*section).count();
                let missing = validation::unanswered_in(catalog, responses, *section).len();
                SectionProgress {
                    section: *section,
                    answered: total - missing,
                    total,
                }
            })
            .collect();

        Self {
            answered: sections.iter().map(|s| s.answered).sum(),
            total: catalog.question_count(),
            sections,
        }
    }

    /// Completion percentage (0-100), rounded down.
    pub fn percent_complete(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.answered * 100) / self.total) as u8
    }

    /// Returns true if every question is answered.
    pub fn is_complete(&self) -> bool {
        self.sections.iter().all(SectionProgress::is_complete)
    }
}
