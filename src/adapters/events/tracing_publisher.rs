//! Log-only event publisher for the server binary.
//!
//! Nothing subscribes to assessment events in-process, so the server emits
//! each envelope as a structured log line and keeps no copy of it. Only a
//! running count is retained.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventPublisher;

/// Publisher that writes envelopes to `tracing` and drops them.
#[derive(Debug, Default)]
pub struct TracingEventPublisher {
    published: AtomicU64,
}

impl TracingEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of envelopes published since startup.
    pub fn published_count(&self) -> u64 {
        self.published.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl EventPublisher for TracingEventPublisher {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        let sequence = self.published.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::info!(
            sequence,
            event_type = %event.event_type,
            aggregate_id = %event.aggregate_id,
            event_id = %event.event_id,
            correlation_id = ?event.metadata.correlation_id,
            payload = %event.payload,
            "Domain event"
        );
        Ok(())
    }

    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}
