//! Event bus adapters.
//!
//! - `InMemoryEventBus` - In-process bus that records envelopes for test assertions
//! - `TracingEventPublisher` - Log-only publisher used by the server binary

mod in_memory;
mod tracing_publisher;

pub use in_memory::InMemoryEventBus;
pub use tracing_publisher::TracingEventPublisher;
