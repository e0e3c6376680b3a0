//! Questionnaire catalog - the fixed set of sections, capabilities and questions.
//!
//! The definition ships inside the binary as YAML and is validated once at
//! startup. After construction the catalog is immutable.
//!
//! # Invariants
//!
//! - Every `Section` is present exactly once and has at least one capability
//! - Every capability has at least one question
//! - A capability name belongs to exactly one section
//! - Question ids are positional, hence unique

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::domain::foundation::QuestionId;

use super::{Section, SectionSequence};

const EMBEDDED_DEFINITION: &str = include_str!("../../../assets/questionnaire.yaml");

/// Errors raised while loading a questionnaire definition.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to parse questionnaire definition: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Unknown section '{0}'")]
    UnknownSection(String),

    #[error("Section '{0}' is declared more than once")]
    DuplicateSection(Section),

    #[error("Section '{0}' has no capabilities")]
    EmptySection(Section),

    #[error("Capability '{0}' has no questions")]
    EmptyCapability(String),

    #[error("Capability '{name}' appears in both {first} and {second}")]
    CapabilityInMultipleSections {
        name: String,
        first: Section,
        second: Section,
    },

    #[error("Question text for capability '{0}' is empty")]
    EmptyQuestionText(String),
}

#[derive(Debug, Deserialize)]
struct RawQuestionnaire {
    title: String,
    #[serde(default)]
    about: String,
    sections: Vec<RawSection>,
}

#[derive(Debug, Deserialize)]
struct RawSection {
    section: String,
    capabilities: Vec<RawCapability>,
}

#[derive(Debug, Deserialize)]
struct RawCapability {
    name: String,
    questions: Vec<String>,
}

/// A single diagnostic question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    /// 1-based display number across the whole questionnaire.
    pub number: usize,
    pub text: String,
    pub capability: String,
    pub section: Section,
}

impl Question {
    /// Text prefixed with its display number, e.g. `"Q4: ..."`.
    pub fn numbered_text(&self) -> String {
        format!("Q{}: {}", self.number, self.text)
    }
}

/// A named competency area and the questions that assess it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Capability {
    pub name: String,
    pub section: Section,
    pub question_ids: Vec<QuestionId>,
}

/// The validated, immutable questionnaire.
#[derive(Debug, Clone)]
pub struct Questionnaire {
    title: String,
    about: String,
    capabilities: Vec<Capability>,
    questions: Vec<Question>,
    index: HashMap<QuestionId, usize>,
}

impl Questionnaire {
    /// Loads the definition compiled into the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_yaml(EMBEDDED_DEFINITION)
    }

    /// Parses and validates a YAML definition.
    pub fn from_yaml(source: &str) -> Result<Self, CatalogError> {
        let raw: RawQuestionnaire = serde_yaml::from_str(source)?;
        Self::build(raw)
    }

    fn build(raw: RawQuestionnaire) -> Result<Self, CatalogError> {
        let mut by_section: HashMap<Section, Vec<RawCapability>> = HashMap::new();
        for raw_section in raw.sections {
            let section: Section = raw_section
                .section
                .parse()
                .map_err(|_| CatalogError::UnknownSection(raw_section.section.clone()))?;
            if by_section.contains_key(&section) {
                return Err(CatalogError::DuplicateSection(section));
            }
            by_section.insert(section, raw_section.capabilities);
        }

        let mut owners: HashMap<String, Section> = HashMap::new();
        let mut capabilities = Vec::new();
        let mut questions = Vec::new();

        // Iteration order is step order, then declaration order.
        for section in SectionSequence::all() {
            let raw_capabilities = by_section.remove(section).unwrap_or_default();
            if raw_capabilities.is_empty() {
                return Err(CatalogError::EmptySection(*section));
            }

            for raw_capability in raw_capabilities {
                if let Some(first) = owners.get(&raw_capability.name) {
                    return Err(CatalogError::CapabilityInMultipleSections {
                        name: raw_capability.name,
                        first: *first,
                        second: *section,
                    });
                }
                if raw_capability.questions.is_empty() {
                    return Err(CatalogError::EmptyCapability(raw_capability.name));
                }

                let capability_index = capabilities.len();
                let mut question_ids = Vec::with_capacity(raw_capability.questions.len());
                for (question_index, text) in raw_capability.questions.into_iter().enumerate() {
                    let text = text.trim().to_string();
                    if text.is_empty() {
                        return Err(CatalogError::EmptyQuestionText(raw_capability.name));
                    }
                    let id = QuestionId::for_position(capability_index, question_index);
                    question_ids.push(id.clone());
                    questions.push(Question {
                        id,
                        number: questions.len() + 1,
                        text,
                        capability: raw_capability.name.clone(),
                        section: *section,
                    });
                }

                owners.insert(raw_capability.name.clone(), *section);
                capabilities.push(Capability {
                    name: raw_capability.name,
                    section: *section,
                    question_ids,
                });
            }
        }

        let index = questions
            .iter()
            .enumerate()
            .map(|(idx, q)| (q.id.clone(), idx))
            .collect();

        Ok(Self {
            title: raw.title,
            about: raw.about.trim().to_string(),
            capabilities,
            questions,
            index,
        })
    }

    /// Questionnaire title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Introductory text about the framework.
    pub fn about(&self) -> &str {
        &self.about
    }

    /// All capabilities in iteration order.
    pub fn capabilities(&self) -> &[Capability] {
        &self.capabilities
    }

    /// Capabilities belonging to one section.
    pub fn capabilities_in(&self, section: Section) -> impl Iterator<Item = &Capability> {
        self.capabilities.iter().filter(move |c| c.section == section)
    }

    /// Looks up a capability by name.
    pub fn capability(&self, name: &str) -> Option<&Capability> {
        self.capabilities.iter().find(|c| c.name == name)
    }

    /// All questions in iteration order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Questions belonging to one section, in iteration order.
    pub fn questions_in(&self, section: Section) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| q.section == section)
    }

    /// Looks up a question by id.
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.index.get(id).map(|idx| &self.questions[*idx])
    }

    /// Returns true if the id names a question of this catalog.
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.index.contains_key(id)
    }

    /// Total number of questions.
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}
