//! StartAssessmentHandler - Command handler for beginning a new assessment.

use std::sync::Arc;

use crate::domain::assessment::{Assessment, AssessmentStarted};
use crate::domain::foundation::{
    AssessmentId, CommandMetadata, EventId, SerializableDomainEvent,
};
use crate::domain::questionnaire::Questionnaire;
use crate::ports::{AssessmentRepository, EventPublisher};

use super::AssessmentHandlerError;

/// Command to start a new assessment. Carries no input.
#[derive(Debug, Clone, Default)]
pub struct StartAssessmentCommand;

/// Result of a successful start.
#[derive(Debug, Clone)]
pub struct StartAssessmentResult {
    pub assessment: Assessment,
    pub event: AssessmentStarted,
}

/// Handler for starting assessments.
pub struct StartAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    catalog: Arc<Questionnaire>,
    emit_focus_requests: bool,
}

impl StartAssessmentHandler {
    pub fn new(
        repository: Arc<dyn AssessmentRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        catalog: Arc<Questionnaire>,
        emit_focus_requests: bool,
    ) -> Self {
        Self {
            repository,
            event_publisher,
            catalog,
            emit_focus_requests,
        }
    }

    pub async fn handle(
        &self,
        _cmd: StartAssessmentCommand,
        metadata: CommandMetadata,
    ) -> Result<StartAssessmentResult, AssessmentHandlerError> {
        let assessment = Assessment::start(AssessmentId::new(), self.emit_focus_requests);

        self.repository.save(&assessment).await?;

        let event = AssessmentStarted {
            event_id: EventId::new(),
            assessment_id: assessment.id(),
            question_count: self.catalog.question_count(),
            started_at: *assessment.created_at(),
        };
        let correlation_id = metadata.correlation_id();
        self.event_publisher
            .publish(metadata.stamp(event.to_envelope(), &correlation_id))
            .await?;

        tracing::info!(assessment_id = %assessment.id(), "Assessment started");

        Ok(StartAssessmentResult { assessment, event })
    }
}
