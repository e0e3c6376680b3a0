//! In-memory event bus.
//!
//! Records every published envelope in order and logs it. Assertions in
//! tests read the captured list back. The list is unbounded, so the server
//! binary publishes through `TracingEventPublisher` instead.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventPublisher;

/// In-memory event bus.
///
/// # Example
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::new());
/// bus.publish(envelope).await?;
///
/// assert_eq!(bus.event_count(), 1);
/// assert!(bus.has_event("assessment.submitted.v1"));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryEventBus {
    published: RwLock<Vec<EventEnvelope>>,
}

impl InMemoryEventBus {
    /// Creates a new empty event bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all published events.
    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.published
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Returns events of a specific type.
    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    /// Returns events for a specific aggregate.
    pub fn events_for_aggregate(&self, aggregate_id: &str) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.aggregate_id == aggregate_id)
            .collect()
    }

    /// Clears all published events.
    pub fn clear(&self) {
        self.published
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }

    /// Returns count of published events.
    pub fn event_count(&self) -> usize {
        self.published
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// Checks if a specific event type was published.
    pub fn has_event(&self, event_type: &str) -> bool {
        self.published
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .any(|e| e.event_type == event_type)
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        tracing::debug!(
            event_type = %event.event_type,
            aggregate_id = %event.aggregate_id,
            event_id = %event.event_id,
            "Domain event published"
        );
        self.published
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event);
        Ok(())
    }

    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}
