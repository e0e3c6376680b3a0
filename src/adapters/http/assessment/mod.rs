//! HTTP adapter for the assessment module.
//!
//! Exposes the questionnaire and assessment operations as REST endpoints
//! for a UI layer to drive.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{AssessmentApiError, AssessmentAppState};
pub use routes::assessment_router;
