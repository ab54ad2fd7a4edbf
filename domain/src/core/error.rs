//! Domain error types

use thiserror::Error;

/// Errors raised while configuring or answering questions
///
/// All variants are programmer or configuration errors rather than transient
/// conditions: they are reported synchronously to the caller and never
/// retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("A definition for question '{question}' is already present")]
    DuplicateDefinition { question: String },

    #[error(
        "Definition for question '{question}' evaluates expressions to '{found}', not '{expected}'"
    )]
    DefinitionTypeMismatch {
        question: String,
        expected: String,
        found: String,
    },

    #[error("No definition found for question '{question}'")]
    NoDefinition { question: String },

    #[error("No strategy defined for question '{question}'")]
    NoStrategy { question: String },

    #[error("No aggregator defined for question '{question}'")]
    NoAggregator { question: String },

    #[error("Aggregation with {aggregator} failed: {reason}")]
    Aggregation { aggregator: String, reason: String },
}

impl EngineError {
    /// Check if this error was raised while configuring an engine
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            EngineError::DuplicateDefinition { .. } | EngineError::DefinitionTypeMismatch { .. }
        )
    }

    /// Check if this error was raised while answering a question
    pub fn is_resolution_error(&self) -> bool {
        !self.is_configuration_error()
    }
}
