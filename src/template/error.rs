// ABOUTME: Error types for template rendering operations
// ABOUTME: Separates store lookup failures from evaluation failures of the template text

use thiserror::Error;

use crate::store::LookupError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("Undefined name '{name}' at line {line}")]
    UndefinedName { name: String, line: usize },

    #[error("Undefined member '{path}' at line {line}")]
    UndefinedMember { path: String, line: usize },

    #[error("Malformed syntax at line {line}: {message}")]
    MalformedSyntax { message: String, line: usize },

    #[error("Invalid parameter name '{name}'")]
    InvalidParameterName { name: String },
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Template lookup failed: {0}")]
    Lookup(#[from] LookupError),

    #[error("Template evaluation failed: {0}")]
    Evaluation(#[from] EvaluationError),
}

impl RenderError {
    /// True when the identifier could not be resolved by the store
    pub fn is_lookup(&self) -> bool {
        matches!(self, RenderError::Lookup(_))
    }

    /// True when the template text or parameters were rejected
    pub fn is_evaluation(&self) -> bool {
        matches!(self, RenderError::Evaluation(_))
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
