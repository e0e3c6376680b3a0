//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors, events)
//! - `questionnaire` - The fixed catalog of sections, capabilities and questions
//! - `assessment` - Answer state, navigation reducer, results and recommendation
//! - `report` - Chart model and text rendering of submitted results

pub mod assessment;
pub mod foundation;
pub mod questionnaire;
pub mod report;
