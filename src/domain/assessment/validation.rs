//! Completion checks over a response set.
//!
//! Pure functions: no state, no side effects. Results are always in
//! catalog iteration order so "first missing" is deterministic.

use crate::domain::foundation::QuestionId;
use crate::domain::questionnaire::{Questionnaire, Section, SectionSequence};

use super::Responses;

/// Questions in `section` that have no response yet.
pub fn unanswered_in(
    catalog: &Questionnaire,
    responses: &Responses,
    section: Section,
) -> Vec<QuestionId> {
    catalog
        .questions_in(section)
        .filter(|q| !responses.is_answered(&q.id))
        .map(|q| q.id.clone())
        .collect()
}

/// The first unanswered question across the whole questionnaire.
pub fn first_unanswered(
    catalog: &Questionnaire,
    responses: &Responses,
) -> Option<(Section, QuestionId)> {
    catalog
        .questions()
        .iter()
        .find(|q| !responses.is_answered(&q.id))
        .map(|q| (q.section, q.id.clone()))
}

/// Total number of unanswered questions.
pub fn unanswered_count(catalog: &Questionnaire, responses: &Responses) -> usize {
    catalog
        .questions()
        .iter()
        .filter(|q| !responses.is_answered(&q.id))
        .count()
}

/// True when every section is fully answered.
pub fn is_complete(catalog: &Questionnaire, responses: &Responses) -> bool {
    SectionSequence::all()
        .iter()
        .all(|section| unanswered_in(catalog, responses, *section).is_empty())
}
