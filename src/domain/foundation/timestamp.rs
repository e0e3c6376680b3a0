//! UTC timestamps for assessment lifecycle fields and event envelopes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Point in time, serialized as an RFC 3339 string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Strictly later than `other`.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self > other
    }
}
