//! Error types for the irrigation and risk engines
//!
//! Engines only ever return these typed errors. Turning them into a
//! farmer-facing message is the job of the calling layer.

use thiserror::Error;

/// Engine error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Malformed or missing required input
    #[error("Validation error on {field}: {message}")]
    Validation { field: String, message: String },

    /// Stage name not present in the knowledge base for a planting method
    #[error("Unknown stage '{stage}' for planting method '{method}'")]
    UnknownStage { stage: String, method: String },

    /// Day count not covered by any stage bucket
    #[error("No stage defined for day {days}")]
    NoStageDefined { days: i64 },

    /// Planting method absent from the knowledge base
    #[error("Unknown planting method: {0}")]
    UnknownMethod(String),

    /// Knowledge base could not be loaded or is malformed
    #[error("Knowledge base error: {0}")]
    KnowledgeBase(String),
}

impl EngineError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
