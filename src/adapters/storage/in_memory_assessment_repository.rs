//! In-Memory Assessment Repository
//!
//! Keeps assessments in process memory. Nothing survives a restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assessment::Assessment;
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode};
use crate::ports::AssessmentRepository;

/// In-memory storage for assessments
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssessmentRepository {
    assessments: Arc<RwLock<HashMap<AssessmentId, Assessment>>>,
}

impl InMemoryAssessmentRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored assessments
    pub async fn count(&self) -> usize {
        self.assessments.read().await.len()
    }
}

fn not_found(id: &AssessmentId) -> DomainError {
    DomainError::new(
        ErrorCode::AssessmentNotFound,
        format!("Assessment not found: {}", id),
    )
    .with_detail("assessment_id", id.to_string())
}

#[async_trait]
impl AssessmentRepository for InMemoryAssessmentRepository {
    async fn save(&self, assessment: &Assessment) -> Result<(), DomainError> {
        let mut assessments = self.assessments.write().await;
        if assessments.contains_key(&assessment.id()) {
            return Err(DomainError::new(
                ErrorCode::StorageError,
                format!("Assessment already exists: {}", assessment.id()),
            ));
        }
        assessments.insert(assessment.id(), assessment.clone());
        Ok(())
    }

    async fn update(&self, assessment: &Assessment) -> Result<(), DomainError> {
        let mut assessments = self.assessments.write().await;
        match assessments.get_mut(&assessment.id()) {
            Some(existing) => {
                *existing = assessment.clone();
                Ok(())
            }
            None => Err(not_found(&assessment.id())),
        }
    }

    async fn find_by_id(&self, id: &AssessmentId) -> Result<Option<Assessment>, DomainError> {
        Ok(self.assessments.read().await.get(id).cloned())
    }

    async fn exists(&self, id: &AssessmentId) -> Result<bool, DomainError> {
        Ok(self.assessments.read().await.contains_key(id))
    }

    async fn delete(&self, id: &AssessmentId) -> Result<(), DomainError> {
        self.assessments
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }
}
