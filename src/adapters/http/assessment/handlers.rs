//! HTTP handlers for assessment endpoints.
//!
//! These handlers connect Axum routes to application layer command/query
//! handlers. Every mutation goes through the shared dispatcher.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

use crate::application::{
    AssessmentDispatcher, AssessmentHandlerError, ClearFocusCommand, ClearFocusHandler,
    GetAssessmentHandler, GetAssessmentQuery, GetReportHandler, GetReportQuery,
    NavigateSectionCommand, NavigateSectionHandler, NavigationDirection, RecordAnswerCommand,
    RecordAnswerHandler, StartAssessmentCommand, StartAssessmentHandler, SubmitAssessmentCommand,
    SubmitAssessmentHandler,
};
use crate::domain::assessment::FocusRequestId;
use crate::domain::foundation::{AssessmentId, CommandMetadata, DomainError, ErrorCode, QuestionId};
use crate::domain::questionnaire::Questionnaire;
use crate::domain::report::ChartStyle;
use crate::ports::{AssessmentRepository, EventPublisher};

use super::dto::{
    ActionResponse, AssessmentView, ErrorResponse, QuestionnaireView, RecordAnswerRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct AssessmentAppState {
    pub repository: Arc<dyn AssessmentRepository>,
    pub event_publisher: Arc<dyn EventPublisher>,
    pub catalog: Arc<Questionnaire>,
    pub dispatcher: Arc<AssessmentDispatcher>,
    pub chart_style: ChartStyle,
    pub text_width: usize,
    pub emit_focus_requests: bool,
    pub verbose_errors: bool,
}

impl AssessmentAppState {
    pub fn new(
        repository: Arc<dyn AssessmentRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        catalog: Arc<Questionnaire>,
    ) -> Self {
        let dispatcher = Arc::new(AssessmentDispatcher::new(
            repository.clone(),
            event_publisher.clone(),
            catalog.clone(),
        ));
        Self {
            repository,
            event_publisher,
            catalog,
            dispatcher,
            chart_style: ChartStyle::default(),
            text_width: 40,
            emit_focus_requests: true,
            verbose_errors: false,
        }
    }

    pub fn start_assessment_handler(&self) -> StartAssessmentHandler {
        StartAssessmentHandler::new(
            self.repository.clone(),
            self.event_publisher.clone(),
            self.catalog.clone(),
            self.emit_focus_requests,
        )
    }

    pub fn record_answer_handler(&self) -> RecordAnswerHandler {
        RecordAnswerHandler::new(self.dispatcher.clone())
    }

    pub fn navigate_section_handler(&self) -> NavigateSectionHandler {
        NavigateSectionHandler::new(self.dispatcher.clone())
    }

    pub fn submit_assessment_handler(&self) -> SubmitAssessmentHandler {
        SubmitAssessmentHandler::new(self.dispatcher.clone())
    }

    pub fn clear_focus_handler(&self) -> ClearFocusHandler {
        ClearFocusHandler::new(self.dispatcher.clone())
    }

    pub fn get_assessment_handler(&self) -> GetAssessmentHandler {
        GetAssessmentHandler::new(self.repository.clone())
    }

    pub fn get_report_handler(&self) -> GetReportHandler {
        GetReportHandler::new(
            self.repository.clone(),
            self.catalog.clone(),
            self.chart_style.clone(),
        )
    }

    fn api_error(&self, err: AssessmentHandlerError) -> AssessmentApiError {
        AssessmentApiError::from(err).redact(self.verbose_errors)
    }
}

fn api_metadata() -> CommandMetadata {
    CommandMetadata::new().with_source("api")
}

fn parse_assessment_id(raw: &str) -> Result<AssessmentId, AssessmentApiError> {
    raw.parse()
        .map_err(|_| AssessmentApiError::BadRequest("Invalid assessment ID format".to_string()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/questionnaire - The static questionnaire
pub async fn get_questionnaire(State(state): State<AssessmentAppState>) -> impl IntoResponse {
    Json(QuestionnaireView::from(state.catalog.as_ref()))
}

/// GET /api/assessments/:id - Current state snapshot
pub async fn get_assessment(
    State(state): State<AssessmentAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let assessment_id = parse_assessment_id(&id)?;
    let assessment = state
        .get_assessment_handler()
        .handle(GetAssessmentQuery { assessment_id })
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(Json(AssessmentView::build(&assessment, &state.catalog)))
}

/// GET /api/assessments/:id/report - Chart data and recommendation
pub async fn get_report(
    State(state): State<AssessmentAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let assessment_id = parse_assessment_id(&id)?;
    let report = state
        .get_report_handler()
        .handle(GetReportQuery { assessment_id })
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(Json(report))
}

/// GET /api/assessments/:id/report.txt - Plain-text chart
pub async fn get_report_text(
    State(state): State<AssessmentAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let assessment_id = parse_assessment_id(&id)?;
    let report = state
        .get_report_handler()
        .handle(GetReportQuery { assessment_id })
        .await
        .map_err(|e| state.api_error(e))?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        report.to_text(state.text_width),
    ))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST/PUT/DELETE endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/assessments - Start a new assessment
pub async fn start_assessment(
    State(state): State<AssessmentAppState>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let result = state
        .start_assessment_handler()
        .handle(StartAssessmentCommand, api_metadata())
        .await
        .map_err(|e| state.api_error(e))?;

    Ok((
        StatusCode::CREATED,
        Json(AssessmentView::build(&result.assessment, &state.catalog)),
    ))
}

/// PUT /api/assessments/:id/answers/:question_id - Record an answer
pub async fn record_answer(
    State(state): State<AssessmentAppState>,
    Path((id, question_id)): Path<(String, String)>,
    request: Result<Json<RecordAnswerRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let assessment_id = parse_assessment_id(&id)?;
    let question_id = QuestionId::new(question_id)
        .map_err(|e| AssessmentApiError::BadRequest(e.to_string()))?;
    let Json(request) = request.map_err(|e| AssessmentApiError::BadRequest(e.body_text()))?;
    let level = request
        .maturity_level()
        .map_err(|e| AssessmentApiError::BadRequest(e.to_string()))?;

    let result = state
        .record_answer_handler()
        .handle(
            RecordAnswerCommand {
                assessment_id,
                question_id,
                level,
            },
            api_metadata(),
        )
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(Json(ActionResponse::build(result, &state.catalog)))
}

/// POST /api/assessments/:id/advance - Next section
pub async fn advance(
    State(state): State<AssessmentAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    navigate(state, &id, NavigationDirection::Forward).await
}

/// POST /api/assessments/:id/retreat - Previous section
pub async fn retreat(
    State(state): State<AssessmentAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    navigate(state, &id, NavigationDirection::Backward).await
}

async fn navigate(
    state: AssessmentAppState,
    id: &str,
    direction: NavigationDirection,
) -> Result<Json<ActionResponse>, AssessmentApiError> {
    let assessment_id = parse_assessment_id(id)?;
    let result = state
        .navigate_section_handler()
        .handle(
            NavigateSectionCommand {
                assessment_id,
                direction,
            },
            api_metadata(),
        )
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(Json(ActionResponse::build(result, &state.catalog)))
}

/// POST /api/assessments/:id/submit - Submit the questionnaire
pub async fn submit(
    State(state): State<AssessmentAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let assessment_id = parse_assessment_id(&id)?;
    let result = state
        .submit_assessment_handler()
        .handle(SubmitAssessmentCommand { assessment_id }, api_metadata())
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(Json(ActionResponse::build(result, &state.catalog)))
}

/// DELETE /api/assessments/:id/focus/:request_id - Acknowledge a focus request
pub async fn clear_focus(
    State(state): State<AssessmentAppState>,
    Path((id, request_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let assessment_id = parse_assessment_id(&id)?;
    let request_id: FocusRequestId = request_id
        .parse()
        .map_err(|_| AssessmentApiError::BadRequest("Invalid focus request ID".to_string()))?;

    let result = state
        .clear_focus_handler()
        .handle(
            ClearFocusCommand {
                assessment_id,
                request_id,
            },
            api_metadata(),
        )
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(Json(ActionResponse::build(result, &state.catalog)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts handler errors to HTTP responses.
#[derive(Debug)]
pub enum AssessmentApiError {
    BadRequest(String),
    NotFound { code: ErrorCode, message: String },
    Conflict { code: ErrorCode, message: String },
    Internal(String),
}

impl AssessmentApiError {
    /// Hides internal error text unless verbose errors are enabled.
    fn redact(self, verbose: bool) -> Self {
        match self {
            AssessmentApiError::Internal(msg) if !verbose => {
                tracing::error!(error = %msg, "Internal error");
                AssessmentApiError::Internal("Internal server error".to_string())
            }
            other => other,
        }
    }
}

impl From<AssessmentHandlerError> for AssessmentApiError {
    fn from(err: AssessmentHandlerError) -> Self {
        match err {
            AssessmentHandlerError::NotFound(id) => AssessmentApiError::NotFound {
                code: ErrorCode::AssessmentNotFound,
                message: format!("Assessment not found: {}", id),
            },
            AssessmentHandlerError::ResultsNotAvailable(id) => AssessmentApiError::Conflict {
                code: ErrorCode::ResultsNotAvailable,
                message: format!("Assessment {} has not been submitted", id),
            },
            AssessmentHandlerError::Domain(e) => e.into(),
        }
    }
}

impl From<DomainError> for AssessmentApiError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::AssessmentNotFound | ErrorCode::QuestionNotFound => {
                AssessmentApiError::NotFound {
                    code: err.code,
                    message: err.message,
                }
            }
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => AssessmentApiError::BadRequest(err.message),
            ErrorCode::AssessmentIncomplete | ErrorCode::ResultsNotAvailable => {
                AssessmentApiError::Conflict {
                    code: err.code,
                    message: err.message,
                }
            }
            ErrorCode::StorageError | ErrorCode::InternalError => {
                AssessmentApiError::Internal(err.to_string())
            }
        }
    }
}

impl IntoResponse for AssessmentApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            AssessmentApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("BAD_REQUEST", msg),
            ),
            AssessmentApiError::NotFound { code, message } => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(code.to_string(), message),
            ),
            AssessmentApiError::Conflict { code, message } => (
                StatusCode::CONFLICT,
                ErrorResponse::new(code.to_string(), message),
            ),
            AssessmentApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("INTERNAL_ERROR", msg),
            ),
        };

        (status, Json(error)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::MaturityLevel;

    #[test]
    fn question_not_found_maps_to_404() {
        let err: AssessmentApiError =
            DomainError::new(ErrorCode::QuestionNotFound, "Question not found: 9-9").into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn results_not_available_maps_to_409() {
        let err: AssessmentApiError =
            AssessmentHandlerError::ResultsNotAvailable(AssessmentId::new()).into();
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn internal_errors_are_redacted_unless_verbose() {
        let err = AssessmentApiError::Internal("lock poisoned".to_string());
        match err.redact(false) {
            AssessmentApiError::Internal(msg) => assert_eq!(msg, "Internal server error"),
            other => panic!("Expected Internal, got {:?}", other),
        }

        let err = AssessmentApiError::Internal("lock poisoned".to_string());
        match err.redact(true) {
            AssessmentApiError::Internal(msg) => assert_eq!(msg, "lock poisoned"),
            other => panic!("Expected Internal, got {:?}", other),
        }
    }

    #[test]
    fn out_of_range_maps_to_400() {
        let err: AssessmentApiError =
            DomainError::from(MaturityLevel::try_from_u8(9).unwrap_err()).into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
