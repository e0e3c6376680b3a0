//! SubmitAssessmentHandler - Command handler for the final Submit.

use std::sync::Arc;

use crate::domain::assessment::AssessmentAction;
use crate::domain::foundation::{AssessmentId, CommandMetadata};

use super::{AssessmentDispatcher, AssessmentHandlerError, DispatchResult};

/// Command to submit an assessment.
#[derive(Debug, Clone)]
pub struct SubmitAssessmentCommand {
    pub assessment_id: AssessmentId,
}

/// Handler for submission.
///
/// An incomplete assessment is not an error: the result carries a
/// `Blocked` outcome and the state points at the first missing answer.
pub struct SubmitAssessmentHandler {
    dispatcher: Arc<AssessmentDispatcher>,
}

impl SubmitAssessmentHandler {
    pub fn new(dispatcher: Arc<AssessmentDispatcher>) -> Self {
        Self { dispatcher }
    }

    pub async fn handle(
        &self,
        cmd: SubmitAssessmentCommand,
        metadata: CommandMetadata,
    ) -> Result<DispatchResult, AssessmentHandlerError> {
        let result = self
            .dispatcher
            .dispatch(cmd.assessment_id, AssessmentAction::Submit, &metadata)
            .await?;

        if result.assessment.state().is_submitted() {
            tracing::info!(assessment_id = %cmd.assessment_id, "Assessment submitted");
        }
        Ok(result)
    }
}
