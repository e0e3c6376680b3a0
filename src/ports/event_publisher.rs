//! EventPublisher port - Interface for publishing domain events.
//!
//! The domain publishes events without knowing about the transport.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for publishing domain events.
///
/// Implementations must ensure:
/// - Events of one call are delivered in the order given
/// - Errors are propagated to the caller
///
/// # Example
///
/// ```ignore
/// let envelope = AssessmentSubmitted { .. }.to_envelope();
/// publisher.publish(envelope).await?;
/// ```
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Publish multiple events in order.
    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError>;
}
