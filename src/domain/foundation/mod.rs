//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, errors and event plumbing
//! that form the vocabulary of the assessment domain.

mod command;
mod errors;
mod events;
mod ids;
mod maturity_level;
mod timestamp;

pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{
    domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent,
};
pub use ids::{AssessmentId, QuestionId};
pub use maturity_level::MaturityLevel;
pub use timestamp::Timestamp;
