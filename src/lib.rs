//! Capability Assessment - LLM capability maturity self-assessment
//!
//! A respondent rates thirty diagnostic questions on a five-level maturity
//! scale across three sections. The crate validates navigation between
//! sections, averages answers per capability, and recommends the weakest
//! capability for improvement.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
