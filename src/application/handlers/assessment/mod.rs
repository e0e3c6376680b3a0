//! Assessment command and query handlers.
//!
//! Every command goes through `AssessmentDispatcher`, which serializes
//! user events against the in-memory aggregate.

mod dispatcher;

// Command handlers
mod clear_focus;
mod navigate_section;
mod record_answer;
mod start_assessment;
mod submit_assessment;

// Query handlers
mod get_assessment;
mod get_report;

#[cfg(test)]
mod testing;

pub use dispatcher::{AssessmentDispatcher, AssessmentHandlerError, DispatchResult};

pub use clear_focus::{ClearFocusCommand, ClearFocusHandler};
pub use navigate_section::{NavigateSectionCommand, NavigateSectionHandler, NavigationDirection};
pub use record_answer::{RecordAnswerCommand, RecordAnswerHandler};
pub use start_assessment::{StartAssessmentCommand, StartAssessmentHandler, StartAssessmentResult};
pub use submit_assessment::{SubmitAssessmentCommand, SubmitAssessmentHandler};

// Query handlers
pub use get_assessment::{GetAssessmentHandler, GetAssessmentQuery};
pub use get_report::{GetReportHandler, GetReportQuery};
