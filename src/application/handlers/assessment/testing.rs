//! Shared setup for handler tests.

use std::sync::Arc;

use crate::adapters::events::InMemoryEventBus;
use crate::adapters::storage::InMemoryAssessmentRepository;
use crate::domain::foundation::{AssessmentId, CommandMetadata, MaturityLevel, QuestionId};
use crate::domain::questionnaire::{Questionnaire, Section};

use super::{
    AssessmentDispatcher, RecordAnswerCommand, RecordAnswerHandler, StartAssessmentCommand,
    StartAssessmentHandler,
};

pub(crate) struct Fixture {
    pub repository: Arc<InMemoryAssessmentRepository>,
    pub event_bus: Arc<InMemoryEventBus>,
    pub catalog: Arc<Questionnaire>,
    pub dispatcher: Arc<AssessmentDispatcher>,
}

impl Fixture {
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryAssessmentRepository::new());
        let event_bus = Arc::new(InMemoryEventBus::new());
        let catalog = Arc::new(Questionnaire::embedded().unwrap());
        let dispatcher = Arc::new(AssessmentDispatcher::new(
            repository.clone(),
            event_bus.clone(),
            catalog.clone(),
        ));
        Self {
            repository,
            event_bus,
            catalog,
            dispatcher,
        }
    }

    pub async fn start(&self) -> AssessmentId {
        StartAssessmentHandler::new(
            self.repository.clone(),
            self.event_bus.clone(),
            self.catalog.clone(),
            true,
        )
        .handle(StartAssessmentCommand, CommandMetadata::new())
        .await
        .unwrap()
        .assessment
        .id()
    }

    pub async fn answer_section(&self, id: AssessmentId, section: Section, level: MaturityLevel) {
        let ids: Vec<QuestionId> = self
            .catalog
            .questions_in(section)
            .map(|q| q.id.clone())
            .collect();
        self.answer(id, ids, level).await;
    }

    pub async fn answer_all(&self, id: AssessmentId, level: MaturityLevel) {
        let ids: Vec<QuestionId> = self.catalog.questions().iter().map(|q| q.id.clone()).collect();
        self.answer(id, ids, level).await;
    }

    async fn answer(&self, id: AssessmentId, ids: Vec<QuestionId>, level: MaturityLevel) {
        let handler = RecordAnswerHandler::new(self.dispatcher.clone());
        for question_id in ids {
            handler
                .handle(
                    RecordAnswerCommand {
                        assessment_id: id,
                        question_id,
                        level,
                    },
                    CommandMetadata::new(),
                )
                .await
                .unwrap();
        }
    }
}
