//! Questionnaire definition - sections, capabilities and questions.

mod catalog;
mod section;

pub use catalog::{Capability, CatalogError, Question, Questionnaire};
pub use section::{Section, SectionSequence};
