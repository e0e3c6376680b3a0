//! HTTP DTOs (Data Transfer Objects) for assessment endpoints.
//!
//! These types define the JSON request/response structure for the assessment
//! API. They are the boundary between HTTP and the application layer.

use serde::{Deserialize, Serialize};

use crate::application::DispatchResult;
use crate::domain::assessment::{
    ActionOutcome, Assessment, AssessmentProgress, FocusRequest, FocusRequestId, Responses,
};
use crate::domain::foundation::{MaturityLevel, QuestionId, Timestamp, ValidationError};
use crate::domain::questionnaire::{Question, Questionnaire, Section, SectionSequence};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to record an answer.
///
/// `level` is kept as a raw JSON number so that negative, fractional and
/// oversized values reach the range check instead of failing extraction.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordAnswerRequest {
    /// Selected maturity level, 1-5.
    pub level: serde_json::Number,
}

impl RecordAnswerRequest {
    /// Validates the submitted level.
    pub fn maturity_level(&self) -> Result<MaturityLevel, ValidationError> {
        match self.level.as_i64() {
            Some(value) => MaturityLevel::try_from_i64(value),
            None => Err(ValidationError::invalid_format(
                "level",
                format!("expected an integer from 1 to 5, got {}", self.level),
            )),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// One maturity level with its description.
#[derive(Debug, Clone, Serialize)]
pub struct MaturityLevelView {
    pub value: u8,
    pub label: &'static str,
    pub description: &'static str,
}

/// A capability and its questions.
#[derive(Debug, Clone, Serialize)]
pub struct CapabilityView {
    pub name: String,
    pub questions: Vec<Question>,
}

/// A section and its capabilities.
#[derive(Debug, Clone, Serialize)]
pub struct SectionView {
    pub section: Section,
    pub label: &'static str,
    pub capabilities: Vec<CapabilityView>,
}

/// The static questionnaire a UI renders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireView {
    pub title: String,
    pub about: String,
    pub maturity_levels: Vec<MaturityLevelView>,
    pub sections: Vec<SectionView>,
}

impl From<&Questionnaire> for QuestionnaireView {
    fn from(catalog: &Questionnaire) -> Self {
        let maturity_levels = MaturityLevel::ALL
            .iter()
            .map(|level| MaturityLevelView {
                value: level.value(),
                label: level.label(),
                description: level.description(),
            })
            .collect();

        let sections = SectionSequence::all()
            .iter()
            .map(|section| SectionView {
                section: *section,
                label: section.label(),
                capabilities: catalog
                    .capabilities_in(*section)
                    .map(|capability| CapabilityView {
                        name: capability.name.clone(),
                        questions: capability
                            .question_ids
                            .iter()
                            .filter_map(|id| catalog.question(id).cloned())
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            title: catalog.title().to_string(),
            about: catalog.about().to_string(),
            maturity_levels,
            sections,
        }
    }
}

/// State snapshot of one assessment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentView {
    pub id: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub active_section: Section,
    pub active_step: usize,
    pub step_count: usize,
    pub show_errors: bool,
    pub submitted: bool,
    pub progress: AssessmentProgress,
    pub unanswered_in_active: Vec<QuestionId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlighted_question: Option<QuestionId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_focus: Option<FocusRequest>,
    pub responses: Responses,
}

impl AssessmentView {
    pub fn build(assessment: &Assessment, catalog: &Questionnaire) -> Self {
        let state = assessment.state();
        Self {
            id: assessment.id().to_string(),
            created_at: *assessment.created_at(),
            updated_at: *assessment.updated_at(),
            active_section: state.active_section(),
            active_step: state.active_step(),
            step_count: SectionSequence::count(),
            show_errors: state.show_errors(),
            submitted: state.is_submitted(),
            progress: state.progress(catalog),
            unanswered_in_active: state.unanswered_in_active(catalog),
            highlighted_question: state.highlighted_question(catalog),
            pending_focus: state.pending_focus().cloned(),
            responses: state.responses().clone(),
        }
    }
}

/// Response to a user action: the new state plus what happened.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    #[serde(flatten)]
    pub outcome: ActionOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<FocusRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub superseded_focus: Option<FocusRequestId>,
    pub assessment: AssessmentView,
}

impl ActionResponse {
    pub fn build(result: DispatchResult, catalog: &Questionnaire) -> Self {
        Self {
            assessment: AssessmentView::build(&result.assessment, catalog),
            outcome: result.transition.outcome,
            focus: result.transition.focus,
            superseded_focus: result.transition.superseded,
        }
    }
}

/// Health check body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
