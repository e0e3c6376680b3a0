//! NavigateSectionHandler - Command handler for Next/Back between sections.

use std::sync::Arc;

use serde::Deserialize;

use crate::domain::assessment::AssessmentAction;
use crate::domain::foundation::{AssessmentId, CommandMetadata};

use super::{AssessmentDispatcher, AssessmentHandlerError, DispatchResult};

/// Which way to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationDirection {
    /// Next; gated on the active section being complete.
    Forward,
    /// Back; never gated.
    Backward,
}

/// Command to move between sections.
#[derive(Debug, Clone)]
pub struct NavigateSectionCommand {
    pub assessment_id: AssessmentId,
    pub direction: NavigationDirection,
}

/// Handler for section navigation.
pub struct NavigateSectionHandler {
    dispatcher: Arc<AssessmentDispatcher>,
}

impl NavigateSectionHandler {
    pub fn new(dispatcher: Arc<AssessmentDispatcher>) -> Self {
        Self { dispatcher }
    }

    pub async fn handle(
        &self,
        cmd: NavigateSectionCommand,
        metadata: CommandMetadata,
    ) -> Result<DispatchResult, AssessmentHandlerError> {
        let action = match cmd.direction {
            NavigationDirection::Forward => AssessmentAction::Advance,
            NavigationDirection::Backward => AssessmentAction::Retreat,
        };
        self.dispatcher
            .dispatch(cmd.assessment_id, action, &metadata)
            .await
    }
}
