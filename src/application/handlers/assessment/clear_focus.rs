//! ClearFocusHandler - Command handler for acknowledging a focus request.

use std::sync::Arc;

use crate::domain::assessment::{AssessmentAction, FocusRequestId};
use crate::domain::foundation::{AssessmentId, CommandMetadata};

use super::{AssessmentDispatcher, AssessmentHandlerError, DispatchResult};

/// Command to cancel the pending focus request.
#[derive(Debug, Clone)]
pub struct ClearFocusCommand {
    pub assessment_id: AssessmentId,
    pub request_id: FocusRequestId,
}

/// Handler for focus cancellation. A stale id is a no-op.
pub struct ClearFocusHandler {
    dispatcher: Arc<AssessmentDispatcher>,
}

impl ClearFocusHandler {
    pub fn new(dispatcher: Arc<AssessmentDispatcher>) -> Self {
        Self { dispatcher }
    }

    pub async fn handle(
        &self,
        cmd: ClearFocusCommand,
        metadata: CommandMetadata,
    ) -> Result<DispatchResult, AssessmentHandlerError> {
        self.dispatcher
            .dispatch(
                cmd.assessment_id,
                AssessmentAction::ClearFocus {
                    request_id: cmd.request_id,
                },
                &metadata,
            )
            .await
    }
}
