//! Command infrastructure for CQRS handlers.
//!
//! `CommandMetadata` carries correlation context from the API boundary
//! through command processing and into every published event.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::EventEnvelope;

/// Metadata context for command handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// Links related operations across a single user request.
    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,

    /// Source of this command (e.g., "api", "test").
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandMetadata {
    /// Creates empty command metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: Add correlation ID for request tracing.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Builder: Add source identifier.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the correlation ID, generating one if not set.
    pub fn correlation_id(&self) -> String {
        self.correlation_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }

    /// Returns the source if set.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Stamps an outgoing event envelope with this metadata.
    ///
    /// All envelopes of one command share `correlation_id`, so callers
    /// resolve it once and pass it in.
    pub fn stamp(&self, envelope: EventEnvelope, correlation_id: &str) -> EventEnvelope {
        let envelope = envelope.with_correlation_id(correlation_id);
        match self.source() {
            Some(source) => envelope.with_source(source),
            None => envelope,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correlation_id_is_generated_when_missing() {
        let metadata = CommandMetadata::new();
        let id = metadata.correlation_id();
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn correlation_id_is_preserved_when_set() {
        let metadata = CommandMetadata::new().with_correlation_id("req-42");
        assert_eq!(metadata.correlation_id(), "req-42");
    }

    #[test]
    fn source_builder_sets_value() {
        let metadata = CommandMetadata::new().with_source("api");
        assert_eq!(metadata.source(), Some("api"));
    }
}
