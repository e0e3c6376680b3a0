//! Route configuration for assessment endpoints.

use axum::routing::{delete, get, post, put};
use axum::Router;

use super::handlers::{
    advance, clear_focus, get_assessment, get_questionnaire, get_report, get_report_text,
    record_answer, retreat, start_assessment, submit, AssessmentAppState,
};

/// Creates the assessment router with all endpoints.
///
/// Routes:
/// - `GET /api/questionnaire` - Static questionnaire definition
/// - `POST /api/assessments` - Start a new assessment
/// - `GET /api/assessments/:id` - State snapshot
/// - `PUT /api/assessments/:id/answers/:question_id` - Record an answer
/// - `POST /api/assessments/:id/advance` - Next section
/// - `POST /api/assessments/:id/retreat` - Previous section
/// - `POST /api/assessments/:id/submit` - Submit
/// - `DELETE /api/assessments/:id/focus/:request_id` - Acknowledge focus request
/// - `GET /api/assessments/:id/report` - Results as JSON
/// - `GET /api/assessments/:id/report.txt` - Results as text
pub fn assessment_router() -> Router<AssessmentAppState> {
    Router::new()
        .route("/api/questionnaire", get(get_questionnaire))
        .route("/api/assessments", post(start_assessment))
        .route("/api/assessments/:id", get(get_assessment))
        .route(
            "/api/assessments/:id/answers/:question_id",
            put(record_answer),
        )
        .route("/api/assessments/:id/advance", post(advance))
        .route("/api/assessments/:id/retreat", post(retreat))
        .route("/api/assessments/:id/submit", post(submit))
        .route(
            "/api/assessments/:id/focus/:request_id",
            delete(clear_focus),
        )
        .route("/api/assessments/:id/report", get(get_report))
        .route("/api/assessments/:id/report.txt", get(get_report_text))
}
