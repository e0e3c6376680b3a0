//! Assessment repository port.
//!
//! Defines the contract for storing and retrieving Assessment aggregates.
//! The shipped adapter keeps everything in process memory.

use async_trait::async_trait;

use crate::domain::assessment::Assessment;
use crate::domain::foundation::{AssessmentId, DomainError};

/// Repository port for Assessment aggregate persistence.
#[async_trait]
pub trait AssessmentRepository: Send + Sync {
    /// Save a new assessment.
    ///
    /// # Errors
    ///
    /// - `StorageError` if an assessment with the same id already exists
    async fn save(&self, assessment: &Assessment) -> Result<(), DomainError>;

    /// Replace an existing assessment.
    ///
    /// # Errors
    ///
    /// - `AssessmentNotFound` if the assessment doesn't exist
    async fn update(&self, assessment: &Assessment) -> Result<(), DomainError>;

    /// Find an assessment by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &AssessmentId) -> Result<Option<Assessment>, DomainError>;

    /// Check if an assessment exists.
    async fn exists(&self, id: &AssessmentId) -> Result<bool, DomainError>;

    /// Delete an assessment.
    ///
    /// # Errors
    ///
    /// - `AssessmentNotFound` if the assessment doesn't exist
    async fn delete(&self, id: &AssessmentId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn AssessmentRepository) {}
}
