//! Assessment aggregate - one respondent's questionnaire session.
//!
//! Wraps `AssessmentState` with identity and timestamps. The aggregate is
//! held in process memory only; restarting the process clears it.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AssessmentId, DomainError, Timestamp};
use crate::domain::questionnaire::Questionnaire;

use super::{AssessmentAction, AssessmentState, Transition};

/// Assessment aggregate.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `updated_at` only moves when an action changes the state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    id: AssessmentId,
    state: AssessmentState,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Assessment {
    /// Starts a new assessment at the first section.
    pub fn start(id: AssessmentId, emit_focus_requests: bool) -> Self {
        let state = if emit_focus_requests {
            AssessmentState::new()
        } else {
            AssessmentState::new().without_focus_requests()
        };
        let now = Timestamp::now();
        Self {
            id,
            state,
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> AssessmentId {
        self.id
    }

    pub fn state(&self) -> &AssessmentState {
        &self.state
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies one user action through the reducer.
    ///
    /// # Errors
    ///
    /// Propagates reducer errors (`QuestionNotFound`).
    pub fn dispatch(
        &mut self,
        catalog: &Questionnaire,
        action: AssessmentAction,
    ) -> Result<Transition, DomainError> {
        let transition = self.state.apply(catalog, action)?;
        if transition.changed_state() {
            self.updated_at = Timestamp::now();
        }
        Ok(transition)
    }
}
