//! Assessment module - answers, navigation, results and recommendation.
//!
//! # Module Organization
//!
//! - `state` - The explicit state object and its reducer
//! - `validation` - Pure completion checks
//! - `results` - Per-capability averages (pure projection)
//! - `recommendation` - Weakest-capability recommendation
//! - `focus` - Cancellable focus requests for the UI layer
//! - `aggregate` - Identity and timestamps around the state
//! - `events` - Domain events published after each dispatch

mod aggregate;
mod events;
mod focus;
mod progress;
mod recommendation;
mod responses;
mod results;
mod state;
pub mod validation;

pub use aggregate::Assessment;
pub use events::{
    envelopes_for, AnswerRecorded, AssessmentStarted, AssessmentSubmitted, FocusRequested,
    NavigationBlocked, SectionChanged,
};
pub use focus::{FocusRequest, FocusRequestId, FocusTarget};
pub use progress::{AssessmentProgress, SectionProgress};
pub use recommendation::Recommendation;
pub use responses::Responses;
pub use results::{compute_results, CapabilityResult, IncompleteAssessment};
pub use state::{ActionOutcome, AssessmentAction, AssessmentState, Transition};
