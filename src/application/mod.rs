//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::assessment::{
    AssessmentDispatcher, AssessmentHandlerError, ClearFocusCommand, ClearFocusHandler,
    DispatchResult, GetAssessmentHandler, GetAssessmentQuery, GetReportHandler, GetReportQuery,
    NavigateSectionCommand, NavigateSectionHandler, NavigationDirection, RecordAnswerCommand,
    RecordAnswerHandler, StartAssessmentCommand, StartAssessmentHandler, StartAssessmentResult,
    SubmitAssessmentCommand, SubmitAssessmentHandler,
};
