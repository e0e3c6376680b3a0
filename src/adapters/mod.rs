//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `events` - Capturing event bus and log-only publisher
//! - `storage` - In-memory assessment repository
//! - `http` - Axum REST API

pub mod events;
pub mod http;
pub mod storage;

pub use events::{InMemoryEventBus, TracingEventPublisher};
pub use storage::InMemoryAssessmentRepository;
