//! AssessmentState - the explicit UI state object and its reducer.
//!
//! Every user input becomes an `AssessmentAction`; `AssessmentState::apply`
//! runs it to completion and reports what happened as a `Transition`.
//! Validation and aggregation are delegated to the pure functions in
//! `validation` and `results`.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, MaturityLevel, QuestionId};
use crate::domain::questionnaire::{Questionnaire, Section, SectionSequence};

use super::{
    compute_results, validation, AssessmentProgress, CapabilityResult, FocusRequest,
    FocusRequestId, FocusTarget, Responses,
};

/// A discrete user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssessmentAction {
    /// Select a maturity level for a question.
    RecordAnswer {
        question_id: QuestionId,
        level: MaturityLevel,
    },
    /// Move to the next section (gated on the active section being complete).
    Advance,
    /// Move to the previous section.
    Retreat,
    /// Finish the questionnaire (gated on every section being complete).
    Submit,
    /// The UI honored or dropped a focus request.
    ClearFocus { request_id: FocusRequestId },
}

/// What an action did to the state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActionOutcome {
    AnswerRecorded {
        question_id: QuestionId,
        level: MaturityLevel,
        previous: Option<MaturityLevel>,
    },
    SectionChanged {
        from: Section,
        to: Section,
    },
    /// Navigation or submission refused because questions are unanswered.
    Blocked {
        section: Section,
        missing: Vec<QuestionId>,
    },
    Submitted,
    FocusCleared {
        request_id: FocusRequestId,
    },
    /// Clamped navigation or stale focus id; nothing changed.
    Unchanged,
}

impl ActionOutcome {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            ActionOutcome::AnswerRecorded { .. } => "answer_recorded",
            ActionOutcome::SectionChanged { .. } => "section_changed",
            ActionOutcome::Blocked { .. } => "blocked",
            ActionOutcome::Submitted => "submitted",
            ActionOutcome::FocusCleared { .. } => "focus_cleared",
            ActionOutcome::Unchanged => "unchanged",
        }
    }
}

/// Result of applying one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub outcome: ActionOutcome,
    /// Focus request emitted by this action, if any.
    pub focus: Option<FocusRequest>,
    /// Pending request cancelled because `focus` replaced it.
    pub superseded: Option<FocusRequestId>,
}

impl Transition {
    fn plain(outcome: ActionOutcome) -> Self {
        Self {
            outcome,
            focus: None,
            superseded: None,
        }
    }

    /// Returns true if the action changed the state.
    pub fn changed_state(&self) -> bool {
        !matches!(self.outcome, ActionOutcome::Unchanged)
    }
}

/// Answers, navigation position and feedback flags of one assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentState {
    responses: Responses,
    step: usize,
    show_errors: bool,
    submitted: bool,
    pending_focus: Option<FocusRequest>,
    next_focus_id: u64,
    emit_focus: bool,
}

impl Default for AssessmentState {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentState {
    /// Fresh state at the first section with no answers.
    pub fn new() -> Self {
        Self {
            responses: Responses::new(),
            step: 0,
            show_errors: false,
            submitted: false,
            pending_focus: None,
            next_focus_id: 1,
            emit_focus: true,
        }
    }

    /// Disables focus requests; transitions then never carry one.
    pub fn without_focus_requests(mut self) -> Self {
        self.emit_focus = false;
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn responses(&self) -> &Responses {
        &self.responses
    }

    /// 0-based index of the active section.
    pub fn active_step(&self) -> usize {
        self.step
    }

    pub fn active_section(&self) -> Section {
        SectionSequence::at(self.step).unwrap_or_else(SectionSequence::last)
    }

    /// Set when navigation or submission was refused; cleared on success.
    pub fn show_errors(&self) -> bool {
        self.show_errors
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn pending_focus(&self) -> Option<&FocusRequest> {
        self.pending_focus.as_ref()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derived views
    // ─────────────────────────────────────────────────────────────────────────

    /// Unanswered questions of the active section.
    pub fn unanswered_in_active(&self, catalog: &Questionnaire) -> Vec<QuestionId> {
        validation::unanswered_in(catalog, &self.responses, self.active_section())
    }

    /// The question the UI should highlight, if errors are shown.
    pub fn highlighted_question(&self, catalog: &Questionnaire) -> Option<QuestionId> {
        if !self.show_errors {
            return None;
        }
        self.unanswered_in_active(catalog).into_iter().next()
    }

    pub fn progress(&self, catalog: &Questionnaire) -> AssessmentProgress {
        AssessmentProgress::compute(catalog, &self.responses)
    }

    /// Capability results, available once the assessment is submitted.
    pub fn results(&self, catalog: &Questionnaire) -> Option<Vec<CapabilityResult>> {
        if !self.submitted {
            return None;
        }
        compute_results(catalog, &self.responses).ok()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reducer
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies one action.
    ///
    /// # Errors
    ///
    /// - `QuestionNotFound` if `RecordAnswer` names a question outside the
    ///   catalog; the state is left untouched.
    pub fn apply(
        &mut self,
        catalog: &Questionnaire,
        action: AssessmentAction,
    ) -> Result<Transition, DomainError> {
        let transition = match action {
            AssessmentAction::RecordAnswer { question_id, level } => {
                self.record_answer(catalog, question_id, level)?
            }
            AssessmentAction::Advance => self.advance(catalog),
            AssessmentAction::Retreat => self.retreat(),
            AssessmentAction::Submit => self.submit(catalog),
            AssessmentAction::ClearFocus { request_id } => self.clear_focus(request_id),
        };
        Ok(transition)
    }

    fn record_answer(
        &mut self,
        catalog: &Questionnaire,
        question_id: QuestionId,
        level: MaturityLevel,
    ) -> Result<Transition, DomainError> {
        if !catalog.contains(&question_id) {
            return Err(DomainError::new(
                ErrorCode::QuestionNotFound,
                format!("Question {} is not part of this questionnaire", question_id),
            )
            .with_detail("question_id", question_id.as_str()));
        }

        let previous = self.responses.record(question_id.clone(), level);
        Ok(Transition::plain(ActionOutcome::AnswerRecorded {
            question_id,
            level,
            previous,
        }))
    }

    fn advance(&mut self, catalog: &Questionnaire) -> Transition {
        let current = self.active_section();
        let missing = self.unanswered_in_active(catalog);
        if !missing.is_empty() {
            return self.block(current, missing);
        }

        match SectionSequence::next(current) {
            Some(next) => self.move_to(current, next),
            None => Transition::plain(ActionOutcome::Unchanged),
        }
    }

    fn retreat(&mut self) -> Transition {
        let current = self.active_section();
        match SectionSequence::previous(current) {
            Some(previous) => self.move_to(current, previous),
            None => Transition::plain(ActionOutcome::Unchanged),
        }
    }

    fn submit(&mut self, catalog: &Questionnaire) -> Transition {
        let current = self.active_section();
        let missing = self.unanswered_in_active(catalog);
        if !missing.is_empty() {
            return self.block(current, missing);
        }

        // Another section is incomplete: jump to the one holding the first
        // unanswered question so the highlight is visible.
        if let Some((section, _)) = validation::first_unanswered(catalog, &self.responses) {
            self.step = SectionSequence::order_index(section);
            let missing = validation::unanswered_in(catalog, &self.responses, section);
            return self.block(section, missing);
        }

        self.submitted = true;
        self.show_errors = false;
        let (focus, superseded) = self.request_focus(FocusTarget::Results);
        Transition {
            outcome: ActionOutcome::Submitted,
            focus,
            superseded,
        }
    }

    fn clear_focus(&mut self, request_id: FocusRequestId) -> Transition {
        match &self.pending_focus {
            Some(pending) if pending.id == request_id => {
                self.pending_focus = None;
                Transition::plain(ActionOutcome::FocusCleared { request_id })
            }
            _ => Transition::plain(ActionOutcome::Unchanged),
        }
    }

    fn block(&mut self, section: Section, missing: Vec<QuestionId>) -> Transition {
        self.show_errors = true;
        let (focus, superseded) = match missing.first() {
            Some(first) => self.request_focus(FocusTarget::Question(first.clone())),
            None => (None, None),
        };
        Transition {
            outcome: ActionOutcome::Blocked { section, missing },
            focus,
            superseded,
        }
    }

    fn move_to(&mut self, from: Section, to: Section) -> Transition {
        self.step = SectionSequence::order_index(to);
        self.show_errors = false;
        let (focus, superseded) = self.request_focus(FocusTarget::SectionStart(to));
        Transition {
            outcome: ActionOutcome::SectionChanged { from, to },
            focus,
            superseded,
        }
    }

    fn request_focus(
        &mut self,
        target: FocusTarget,
    ) -> (Option<FocusRequest>, Option<FocusRequestId>) {
        if !self.emit_focus {
            return (None, None);
        }

        let request = FocusRequest {
            id: FocusRequestId::new(self.next_focus_id),
            target,
        };
        self.next_focus_id += 1;
        let superseded = self.pending_focus.replace(request.clone()).map(|old| old.id);
        (Some(request), superseded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Questionnaire {
        Questionnaire::embedded().unwrap()
    }

    fn answer_section(
        state: &mut AssessmentState,
        catalog: &Questionnaire,
        section: Section,
        level: MaturityLevel,
    ) {
        let ids: Vec<_> = catalog.questions_in(section).map(|q| q.id.clone()).collect();
        for question_id in ids {
            state
                .apply(catalog, AssessmentAction::RecordAnswer { question_id, level })
                .unwrap();
        }
    }

    fn answer_all(state: &mut AssessmentState, catalog: &Questionnaire, level: MaturityLevel) {
        for section in SectionSequence::all() {
            answer_section(state, catalog, *section, level);
        }
    }

    // ───────────────────────────────────────────────────────────────
    // RecordAnswer
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn record_answer_overwrites_previous_value() {
        let catalog = catalog();
        let mut state = AssessmentState::new();
        let id = QuestionId::new("0-0").unwrap();

        state
            .apply(
                &catalog,
                AssessmentAction::RecordAnswer {
                    question_id: id.clone(),
                    level: MaturityLevel::AdHoc,
                },
            )
            .unwrap();
        let transition = state
            .apply(
                &catalog,
                AssessmentAction::RecordAnswer {
                    question_id: id.clone(),
                    level: MaturityLevel::Optimized,
                },
            )
            .unwrap();

        assert_eq!(
            transition.outcome,
            ActionOutcome::AnswerRecorded {
                question_id: id.clone(),
                level: MaturityLevel::Optimized,
                previous: Some(MaturityLevel::AdHoc),
            }
        );
        assert_eq!(state.responses().get(&id), Some(MaturityLevel::Optimized));
        assert!(transition.focus.is_none());
    }

    #[test]
    fn record_answer_rejects_unknown_question() {
        let catalog = catalog();
        let mut state = AssessmentState::new();
        let before = state.clone();

        let err = state
            .apply(
                &catalog,
                AssessmentAction::RecordAnswer {
                    question_id: QuestionId::new("42-0").unwrap(),
                    level: MaturityLevel::Emerging,
                },
            )
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::QuestionNotFound);
        assert_eq!(state, before);
    }

    // ───────────────────────────────────────────────────────────────
    // Navigation
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn advance_with_unanswered_questions_is_blocked() {
        let catalog = catalog();
        let mut state = AssessmentState::new();
        state
            .apply(
                &catalog,
                AssessmentAction::RecordAnswer {
                    question_id: QuestionId::new("0-0").unwrap(),
                    level: MaturityLevel::Developing,
                },
            )
            .unwrap();

        let transition = state.apply(&catalog, AssessmentAction::Advance).unwrap();

        assert_eq!(state.active_section(), Section::Organizational);
        assert!(state.show_errors());
        match &transition.outcome {
            ActionOutcome::Blocked { section, missing } => {
                assert_eq!(*section, Section::Organizational);
                assert_eq!(missing.len(), 11);
                assert_eq!(missing[0].as_str(), "0-1");
            }
            other => panic!("Expected Blocked, got {:?}", other),
        }
        assert_eq!(
            transition.focus.unwrap().target,
            FocusTarget::Question(QuestionId::new("0-1").unwrap())
        );
        assert_eq!(
            state.highlighted_question(&catalog),
            Some(QuestionId::new("0-1").unwrap())
        );
    }

    #[test]
    fn advance_moves_forward_when_section_complete() {
        let catalog = catalog();
        let mut state = AssessmentState::new();
        state.apply(&catalog, AssessmentAction::Advance).unwrap();
        assert!(state.show_errors());

        answer_section(&mut state, &catalog, Section::Organizational, MaturityLevel::Emerging);
        let transition = state.apply(&catalog, AssessmentAction::Advance).unwrap();

        assert_eq!(
            transition.outcome,
            ActionOutcome::SectionChanged {
                from: Section::Organizational,
                to: Section::Contextual,
            }
        );
        assert_eq!(state.active_step(), 1);
        assert!(!state.show_errors());
        assert_eq!(state.highlighted_question(&catalog), None);
        assert_eq!(
            transition.focus.unwrap().target,
            FocusTarget::SectionStart(Section::Contextual)
        );
    }

    #[test]
    fn advance_from_last_complete_section_is_clamped() {
        let catalog = catalog();
        let mut state = AssessmentState::new();
        answer_all(&mut state, &catalog, MaturityLevel::Integrated);
        state.apply(&catalog, AssessmentAction::Advance).unwrap();
        state.apply(&catalog, AssessmentAction::Advance).unwrap();
        assert_eq!(state.active_section(), Section::Technical);

        let transition = state.apply(&catalog, AssessmentAction::Advance).unwrap();
        assert_eq!(transition.outcome, ActionOutcome::Unchanged);
        assert!(!transition.changed_state());
        assert_eq!(state.active_section(), Section::Technical);
    }

    #[test]
    fn retreat_from_first_section_is_clamped() {
        let catalog = catalog();
        let mut state = AssessmentState::new();
        let transition = state.apply(&catalog, AssessmentAction::Retreat).unwrap();

        assert_eq!(transition.outcome, ActionOutcome::Unchanged);
        assert_eq!(state.active_step(), 0);
        assert!(transition.focus.is_none());
    }

    #[test]
    fn retreat_is_not_gated_on_answers() {
        let catalog = catalog();
        let mut state = AssessmentState::new();
        answer_section(&mut state, &catalog, Section::Organizational, MaturityLevel::AdHoc);
        state.apply(&catalog, AssessmentAction::Advance).unwrap();

        let transition = state.apply(&catalog, AssessmentAction::Retreat).unwrap();
        assert_eq!(
            transition.outcome,
            ActionOutcome::SectionChanged {
                from: Section::Contextual,
                to: Section::Organizational,
            }
        );
    }

    // ───────────────────────────────────────────────────────────────
    // Submit
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn submit_with_incomplete_active_section_is_blocked() {
        let catalog = catalog();
        let mut state = AssessmentState::new();
        let transition = state.apply(&catalog, AssessmentAction::Submit).unwrap();

        assert!(matches!(transition.outcome, ActionOutcome::Blocked { .. }));
        assert!(!state.is_submitted());
        assert!(state.results(&catalog).is_none());
    }

    #[test]
    fn submit_jumps_to_section_with_first_missing_answer() {
        let catalog = catalog();
        let mut state = AssessmentState::new();
        answer_section(&mut state, &catalog, Section::Organizational, MaturityLevel::AdHoc);
        answer_section(&mut state, &catalog, Section::Technical, MaturityLevel::AdHoc);

        let transition = state.apply(&catalog, AssessmentAction::Submit).unwrap();

        assert_eq!(state.active_section(), Section::Contextual);
        assert!(state.show_errors());
        match transition.outcome {
            ActionOutcome::Blocked { section, missing } => {
                assert_eq!(section, Section::Contextual);
                assert_eq!(missing[0].as_str(), "4-0");
            }
            other => panic!("Expected Blocked, got {:?}", other),
        }
        assert_eq!(
            state.highlighted_question(&catalog),
            Some(QuestionId::new("4-0").unwrap())
        );
        assert!(!state.is_submitted());
    }

    #[test]
    fn submit_with_all_answers_produces_results() {
        let catalog = catalog();
        let mut state = AssessmentState::new();
        answer_all(&mut state, &catalog, MaturityLevel::Optimized);

        let transition = state.apply(&catalog, AssessmentAction::Submit).unwrap();

        assert_eq!(transition.outcome, ActionOutcome::Submitted);
        assert_eq!(transition.focus.unwrap().target, FocusTarget::Results);
        let results = state.results(&catalog).unwrap();
        assert_eq!(results.len(), 10);
        assert!(results.iter().all(|r| r.average == 5.0));
    }

    #[test]
    fn results_follow_answers_changed_after_submission() {
        let catalog = catalog();
        let mut state = AssessmentState::new();
        answer_all(&mut state, &catalog, MaturityLevel::Optimized);
        state.apply(&catalog, AssessmentAction::Submit).unwrap();

        state
            .apply(
                &catalog,
                AssessmentAction::RecordAnswer {
                    question_id: QuestionId::new("0-0").unwrap(),
                    level: MaturityLevel::Emerging,
                },
            )
            .unwrap();

        let results = state.results(&catalog).unwrap();
        assert_eq!(results[0].average, 12.0 / 3.0);
    }

    // ───────────────────────────────────────────────────────────────
    // Focus requests
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn new_focus_request_supersedes_pending_one() {
        let catalog = catalog();
        let mut state = AssessmentState::new();

        let first = state.apply(&catalog, AssessmentAction::Advance).unwrap();
        let second = state.apply(&catalog, AssessmentAction::Advance).unwrap();

        let first_id = first.focus.unwrap().id;
        let second_id = second.focus.unwrap().id;
        assert!(second_id > first_id);
        assert_eq!(second.superseded, Some(first_id));
        assert_eq!(state.pending_focus().unwrap().id, second_id);
    }

    #[test]
    fn clear_focus_only_cancels_matching_request() {
        let catalog = catalog();
        let mut state = AssessmentState::new();
        let id = state
            .apply(&catalog, AssessmentAction::Advance)
            .unwrap()
            .focus
            .unwrap()
            .id;

        let stale = state
            .apply(
                &catalog,
                AssessmentAction::ClearFocus {
                    request_id: FocusRequestId::new(id.value() + 10),
                },
            )
            .unwrap();
        assert_eq!(stale.outcome, ActionOutcome::Unchanged);
        assert!(state.pending_focus().is_some());

        let cleared = state
            .apply(&catalog, AssessmentAction::ClearFocus { request_id: id })
            .unwrap();
        assert_eq!(cleared.outcome, ActionOutcome::FocusCleared { request_id: id });
        assert!(state.pending_focus().is_none());
    }

    #[test]
    fn disabled_focus_requests_are_never_emitted() {
        let catalog = catalog();
        let mut state = AssessmentState::new().without_focus_requests();
        let transition = state.apply(&catalog, AssessmentAction::Advance).unwrap();

        assert!(matches!(transition.outcome, ActionOutcome::Blocked { .. }));
        assert!(transition.focus.is_none());
        assert!(state.pending_focus().is_none());
        assert!(state.show_errors());
    }
}
