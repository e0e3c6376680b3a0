//! GetReportHandler - Query handler for results, chart and recommendation.

use std::sync::Arc;

use crate::domain::foundation::AssessmentId;
use crate::domain::questionnaire::Questionnaire;
use crate::domain::report::{AssessmentReport, ChartStyle};
use crate::ports::AssessmentRepository;

use super::AssessmentHandlerError;

/// Query to build the report for a submitted assessment.
#[derive(Debug, Clone)]
pub struct GetReportQuery {
    pub assessment_id: AssessmentId,
}

/// Handler for the results view.
pub struct GetReportHandler {
    repository: Arc<dyn AssessmentRepository>,
    catalog: Arc<Questionnaire>,
    style: ChartStyle,
}

impl GetReportHandler {
    pub fn new(
        repository: Arc<dyn AssessmentRepository>,
        catalog: Arc<Questionnaire>,
        style: ChartStyle,
    ) -> Self {
        Self {
            repository,
            catalog,
            style,
        }
    }

    pub async fn handle(
        &self,
        query: GetReportQuery,
    ) -> Result<AssessmentReport, AssessmentHandlerError> {
        let assessment = self
            .repository
            .find_by_id(&query.assessment_id)
            .await?
            .ok_or(AssessmentHandlerError::NotFound(query.assessment_id))?;

        let results = assessment
            .state()
            .results(&self.catalog)
            .ok_or(AssessmentHandlerError::ResultsNotAvailable(query.assessment_id))?;

        Ok(AssessmentReport::build(results, &self.style))
    }
}
