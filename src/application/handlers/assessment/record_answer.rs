//! RecordAnswerHandler - Command handler for selecting a maturity level.

use std::sync::Arc;

use crate::domain::assessment::AssessmentAction;
use crate::domain::foundation::{AssessmentId, CommandMetadata, MaturityLevel, QuestionId};

use super::{AssessmentDispatcher, AssessmentHandlerError, DispatchResult};

/// Command to record (or overwrite) the answer to one question.
#[derive(Debug, Clone)]
pub struct RecordAnswerCommand {
    pub assessment_id: AssessmentId,
    pub question_id: QuestionId,
    pub level: MaturityLevel,
}

/// Handler for recording answers.
pub struct RecordAnswerHandler {
    dispatcher: Arc<AssessmentDispatcher>,
}

impl RecordAnswerHandler {
    pub fn new(dispatcher: Arc<AssessmentDispatcher>) -> Self {
        Self { dispatcher }
    }

    pub async fn handle(
        &self,
        cmd: RecordAnswerCommand,
        metadata: CommandMetadata,
    ) -> Result<DispatchResult, AssessmentHandlerError> {
        tracing::debug!(
            assessment_id = %cmd.assessment_id,
            question_id = %cmd.question_id,
            level = cmd.level.value(),
            "Recording answer"
        );
        self.dispatcher
            .dispatch(
                cmd.assessment_id,
                AssessmentAction::RecordAnswer {
                    question_id: cmd.question_id,
                    level: cmd.level,
                },
                &metadata,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::Fixture;
    use super::*;
    use crate::domain::assessment::ActionOutcome;
    use crate::domain::foundation::ErrorCode;
    use crate::ports::AssessmentRepository;

    #[tokio::test]
    async fn overwrite_reports_previous_level() {
        let fixture = Fixture::new();
        let id = fixture.start().await;
        let handler = RecordAnswerHandler::new(fixture.dispatcher.clone());
        let question_id = QuestionId::new("0-0").unwrap();

        for level in [MaturityLevel::Emerging, MaturityLevel::Optimized] {
            handler
                .handle(
                    RecordAnswerCommand {
                        assessment_id: id,
                        question_id: question_id.clone(),
                        level,
                    },
                    CommandMetadata::new(),
                )
                .await
                .unwrap();
        }

        let stored = fixture.repository.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(
            stored.state().responses().get(&question_id),
            Some(MaturityLevel::Optimized)
        );

        let events = fixture
            .event_bus
            .events_of_type("assessment.answer_recorded.v1");
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].payload["previous"], 2);
    }

    #[tokio::test]
    async fn unknown_question_leaves_assessment_unchanged() {
        let fixture = Fixture::new();
        let id = fixture.start().await;
        let handler = RecordAnswerHandler::new(fixture.dispatcher.clone());

        let err = handler
            .handle(
                RecordAnswerCommand {
                    assessment_id: id,
                    question_id: QuestionId::new("42-0").unwrap(),
                    level: MaturityLevel::AdHoc,
                },
                CommandMetadata::new(),
            )
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::QuestionNotFound);
        let stored = fixture.repository.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.state().responses().answered_count(), 0);
    }

    #[tokio::test]
    async fn answer_outcome_is_returned() {
        let fixture = Fixture::new();
        let id = fixture.start().await;

        let result = RecordAnswerHandler::new(fixture.dispatcher.clone())
            .handle(
                RecordAnswerCommand {
                    assessment_id: id,
                    question_id: QuestionId::new("5-1").unwrap(),
                    level: MaturityLevel::Developing,
                },
                CommandMetadata::new(),
            )
            .await
            .unwrap();

        assert!(matches!(
            result.transition.outcome,
            ActionOutcome::AnswerRecorded { previous: None, .. }
        ));
    }
}
