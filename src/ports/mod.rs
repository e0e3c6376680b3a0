//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AssessmentRepository` - Persistence of Assessment aggregates
//! - `EventPublisher` - Publishing of domain events

mod assessment_repository;
mod event_publisher;

pub use assessment_repository::AssessmentRepository;
pub use event_publisher::EventPublisher;
