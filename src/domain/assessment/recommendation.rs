//! Recommendation - a single-sentence pointer at the weakest capability.

use serde::Serialize;

use crate::domain::foundation::MaturityLevel;

use super::CapabilityResult;

/// Outcome of comparing capability averages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recommendation {
    /// Every capability already scores the maximum.
    AllOptimized,
    /// The capability with the lowest average.
    Focus { capability: String, average: f64 },
}

impl Recommendation {
    /// Picks the capability with the minimum average.
    ///
    /// Ties go to the first capability in iteration order. Returns `None`
    /// for an empty result set.
    pub fn from_results(results: &[CapabilityResult]) -> Option<Self> {
        let weakest = results.iter().fold(None::<&CapabilityResult>, |lowest, r| match lowest {
            Some(l) if l.average <= r.average => Some(l),
            _ => Some(r),
        })?;

        if weakest.average >= MaturityLevel::MAX.value() as f64 {
            Some(Recommendation::AllOptimized)
        } else {
            Some(Recommendation::Focus {
                capability: weakest.capability.clone(),
                average: weakest.average,
            })
        }
    }

    /// The capability to focus on, if any.
    pub fn focus_capability(&self) -> Option<&str> {
        match self {
            Recommendation::AllOptimized => None,
            Recommendation::Focus { capability, .. } => Some(capability),
        }
    }

    /// Human-readable recommendation.
    pub fn message(&self) -> String {
        match self {
            Recommendation::AllOptimized => {
                "Congratulations! Every capability is operating at the Optimized level; \
                 keep investing in continuous improvement."
                    .to_string()
            }
            Recommendation::Focus {
                capability,
                average,
            } => format!(
                "Focus your next improvement efforts on {}, your least mature capability \
                 ({:.1}, {}).",
                capability,
                average,
                MaturityLevel::nearest(*average).label()
            ),
        }
    }
}
