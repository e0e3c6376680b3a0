//! Domain events emitted by the Assessment aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    domain_event, AssessmentId, EventEnvelope, EventId, MaturityLevel, QuestionId,
    SerializableDomainEvent, Timestamp,
};
use crate::domain::questionnaire::Section;

use super::{ActionOutcome, FocusRequest, Transition};

/// A new assessment was started.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentStarted {
    pub event_id: EventId,
    pub assessment_id: AssessmentId,
    pub question_count: usize,
    pub started_at: Timestamp,
}

domain_event!(
    AssessmentStarted,
    event_type = "assessment.started.v1",
    schema_version = 1,
    aggregate_id = assessment_id,
    aggregate_type = "Assessment",
    occurred_at = started_at,
    event_id = event_id
);

/// A maturity level was selected for a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRecorded {
    pub event_id: EventId,
    pub assessment_id: AssessmentId,
    pub question_id: QuestionId,
    pub level: MaturityLevel,
    pub previous: Option<MaturityLevel>,
    pub recorded_at: Timestamp,
}

domain_event!(
    AnswerRecorded,
    event_type = "assessment.answer_recorded.v1",
    schema_version = 1,
    aggregate_id = assessment_id,
    aggregate_type = "Assessment",
    occurred_at = recorded_at,
    event_id = event_id
);

/// The active section changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionChanged {
    pub event_id: EventId,
    pub assessment_id: AssessmentId,
    pub from: Section,
    pub to: Section,
    pub changed_at: Timestamp,
}

domain_event!(
    SectionChanged,
    event_type = "assessment.section_changed.v1",
    schema_version = 1,
    aggregate_id = assessment_id,
    aggregate_type = "Assessment",
    occurred_at = changed_at,
    event_id = event_id
);

/// Navigation or submission was refused because of unanswered questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationBlocked {
    pub event_id: EventId,
    pub assessment_id: AssessmentId,
    pub section: Section,
    pub missing: Vec<QuestionId>,
    pub blocked_at: Timestamp,
}

domain_event!(
    NavigationBlocked,
    event_type = "assessment.navigation_blocked.v1",
    schema_version = 1,
    aggregate_id = assessment_id,
    aggregate_type = "Assessment",
    occurred_at = blocked_at,
    event_id = event_id
);

/// Every question was answered and the assessment was submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentSubmitted {
    pub event_id: EventId,
    pub assessment_id: AssessmentId,
    pub submitted_at: Timestamp,
}

domain_event!(
    AssessmentSubmitted,
    event_type = "assessment.submitted.v1",
    schema_version = 1,
    aggregate_id = assessment_id,
    aggregate_type = "Assessment",
    occurred_at = submitted_at,
    event_id = event_id
);

/// A focus request was issued to the UI layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusRequested {
    pub event_id: EventId,
    pub assessment_id: AssessmentId,
    pub request: FocusRequest,
    pub requested_at: Timestamp,
}

domain_event!(
    FocusRequested,
    event_type = "assessment.focus_requested.v1",
    schema_version = 1,
    aggregate_id = assessment_id,
    aggregate_type = "Assessment",
    occurred_at = requested_at,
    event_id = event_id
);

/// Maps a transition to the envelopes it should publish.
///
/// `Unchanged` and `FocusCleared` publish nothing of their own.
pub fn envelopes_for(assessment_id: AssessmentId, transition: &Transition) -> Vec<EventEnvelope> {
    let now = Timestamp::now();
    let mut envelopes = Vec::new();

    match &transition.outcome {
        ActionOutcome::AnswerRecorded {
            question_id,
            level,
            previous,
        } => envelopes.push(
            AnswerRecorded {
                event_id: EventId::new(),
                assessment_id,
                question_id: question_id.clone(),
                level: *level,
                previous: *previous,
                recorded_at: now,
            }
            .to_envelope(),
        ),
        ActionOutcome::SectionChanged { from, to } => envelopes.push(
            SectionChanged {
                event_id: EventId::new(),
                assessment_id,
                from: *from,
                to: *to,
                changed_at: now,
            }
            .to_envelope(),
        ),
        ActionOutcome::Blocked { section, missing } => envelopes.push(
            NavigationBlocked {
                event_id: EventId::new(),
                assessment_id,
                section: *section,
                missing: missing.clone(),
                blocked_at: now,
            }
            .to_envelope(),
        ),
        ActionOutcome::Submitted => envelopes.push(
            AssessmentSubmitted {
                event_id: EventId::new(),
                assessment_id,
                submitted_at: now,
            }
            .to_envelope(),
        ),
        ActionOutcome::FocusCleared { .. } | ActionOutcome::Unchanged => {}
    }

    if let Some(request) = &transition.focus {
        envelopes.push(
            FocusRequested {
                event_id: EventId::new(),
                assessment_id,
                request: request.clone(),
                requested_at: now,
            }
            .to_envelope(),
        );
    }

    envelopes
}
