//! Capability results - a pure projection over the response map.
//!
//! Results are never stored. They are recomputed from responses on demand,
//! so they cannot drift from their inputs.

use serde::Serialize;
use thiserror::Error;

use crate::domain::foundation::{MaturityLevel, QuestionId};
use crate::domain::questionnaire::{Questionnaire, Section};

use super::{validation, Responses};

/// Averaged maturity of one capability.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityResult {
    pub capability: String,
    pub section: Section,
    /// Arithmetic mean of the capability's responses, unrounded.
    pub average: f64,
}

impl CapabilityResult {
    /// Nearest named level, for display.
    pub fn nearest_level(&self) -> MaturityLevel {
        MaturityLevel::nearest(self.average)
    }
}

/// Results were requested while questions are still unanswered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{missing_count} question(s) unanswered, first is {first_missing} in {section}")]
pub struct IncompleteAssessment {
    pub first_missing: QuestionId,
    pub section: Section,
    pub missing_count: usize,
}

/// Computes one result per capability, in catalog iteration order.
///
/// # Errors
///
/// Returns `IncompleteAssessment` if any question lacks a response. No
/// partial averages are ever produced.
pub fn compute_results(
    catalog: &Questionnaire,
    responses: &Responses,
) -> Result<Vec<CapabilityResult>, IncompleteAssessment> {
    if let Some((section, first_missing)) = validation::first_unanswered(catalog, responses) {
        return Err(IncompleteAssessment {
            first_missing,
            section,
            missing_count: validation::unanswered_count(catalog, responses),
        });
    }

    let results = catalog
        .capabilities()
        .iter()
        .map(|capability| {
            let sum: u32 = capability
                .question_ids
                .iter()
                .filter_map(|id| responses.get(id))
                .map(|level| level.value() as u32)
                .sum();
            CapabilityResult {
                capability: capability.name.clone(),
                section: capability.section,
                average: sum as f64 / capability.question_ids.len() as f64,
            }
        })
        .collect();

    Ok(results)
}
