//! AssessmentDispatcher - the single path every user event takes.
//!
//! Load the aggregate, run the reducer, persist, publish. An async mutex
//! wraps the whole sequence so one event finishes before the next starts.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;

use crate::domain::assessment::{envelopes_for, Assessment, AssessmentAction, Transition};
use crate::domain::foundation::{AssessmentId, CommandMetadata, DomainError, ErrorCode};
use crate::domain::questionnaire::Questionnaire;
use crate::ports::{AssessmentRepository, EventPublisher};

/// Errors shared by the assessment command and query handlers.
#[derive(Debug, Clone, Error)]
pub enum AssessmentHandlerError {
    #[error("Assessment not found: {0}")]
    NotFound(AssessmentId),

    #[error("Results for assessment {0} are not available until it is submitted")]
    ResultsNotAvailable(AssessmentId),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AssessmentHandlerError {
    /// Error code for API responses.
    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentHandlerError::NotFound(_) => ErrorCode::AssessmentNotFound,
            AssessmentHandlerError::ResultsNotAvailable(_) => ErrorCode::ResultsNotAvailable,
            AssessmentHandlerError::Domain(err) => err.code,
        }
    }
}

/// The assessment after an action, and what the action did.
#[derive(Debug, Clone)]
pub struct DispatchResult {
    pub assessment: Assessment,
    pub transition: Transition,
}

/// Serialized load-apply-save-publish pipeline.
pub struct AssessmentDispatcher {
    repository: Arc<dyn AssessmentRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    catalog: Arc<Questionnaire>,
    lock: Mutex<()>,
}

impl AssessmentDispatcher {
    pub fn new(
        repository: Arc<dyn AssessmentRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        catalog: Arc<Questionnaire>,
    ) -> Self {
        Self {
            repository,
            event_publisher,
            catalog,
            lock: Mutex::new(()),
        }
    }

    pub async fn dispatch(
        &self,
        assessment_id: AssessmentId,
        action: AssessmentAction,
        metadata: &CommandMetadata,
    ) -> Result<DispatchResult, AssessmentHandlerError> {
        let _guard = self.lock.lock().await;

        // 1. Load
        let mut assessment = self
            .repository
            .find_by_id(&assessment_id)
            .await?
            .ok_or(AssessmentHandlerError::NotFound(assessment_id))?;

        // 2. Reduce
        let transition = assessment.dispatch(&self.catalog, action)?;

        tracing::info!(
            assessment_id = %assessment_id,
            outcome = transition.outcome.name(),
            section = %assessment.state().active_section(),
            "Assessment action applied"
        );

        if !transition.changed_state() {
            return Ok(DispatchResult {
                assessment,
                transition,
            });
        }

        // 3. Persist
        self.repository.update(&assessment).await?;

        // 4. Publish
        let correlation_id = metadata.correlation_id();
        let envelopes = envelopes_for(assessment_id, &transition)
            .into_iter()
            .map(|envelope| metadata.stamp(envelope, &correlation_id))
            .collect();
        self.event_publisher.publish_all(envelopes).await?;

        Ok(DispatchResult {
            assessment,
            transition,
        })
    }
}
