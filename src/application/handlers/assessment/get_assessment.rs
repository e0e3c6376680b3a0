//! GetAssessmentHandler - Query handler for the current assessment state.

use std::sync::Arc;

use crate::domain::assessment::Assessment;
use crate::domain::foundation::AssessmentId;
use crate::ports::AssessmentRepository;

use super::AssessmentHandlerError;

/// Query to get an assessment by ID.
#[derive(Debug, Clone)]
pub struct GetAssessmentQuery {
    pub assessment_id: AssessmentId,
}

/// Handler for retrieving an assessment.
pub struct GetAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl GetAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetAssessmentQuery,
    ) -> Result<Assessment, AssessmentHandlerError> {
        self.repository
            .find_by_id(&query.assessment_id)
            .await?
            .ok_or(AssessmentHandlerError::NotFound(query.assessment_id))
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::Fixture;
    use super::*;

    #[tokio::test]
    async fn returns_started_assessment() {
        let fixture = Fixture::new();
        let id = fixture.start().await;

        let assessment = GetAssessmentHandler::new(fixture.repository.clone())
            .handle(GetAssessmentQuery { assessment_id: id })
            .await
            .unwrap();

        assert_eq!(assessment.id(), id);
    }

    #[tokio::test]
    async fn missing_assessment_is_not_found() {
        let fixture = Fixture::new();
        let result = GetAssessmentHandler::new(fixture.repository.clone())
            .handle(GetAssessmentQuery {
                assessment_id: AssessmentId::new(),
            })
            .await;
        assert!(matches!(result, Err(AssessmentHandlerError::NotFound(_))));
    }
}
