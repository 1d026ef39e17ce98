//! Error types for task assignment.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised by assignment runs, level parsing, and document I/O.
#[derive(Error, Debug)]
pub enum AssignError {
    /// The dependency graph contains a cycle through `task_id`.
    #[error("Circular dependency detected: {task_id}")]
    CircularDependency { task_id: String },

    /// Strict-mode input validation failed.
    #[error("Invalid input ({} problem(s)): {}", .0.len(), summarize(.0))]
    Validation(Vec<ValidationError>),

    /// An ordinal level string did not match any known level.
    #[error("Unknown {kind} level: '{value}'")]
    UnknownLevel { kind: &'static str, value: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AssignError {
    /// Task id named by a circular dependency error.
    pub fn cycle_task_id(&self) -> Option<&str> {
        match self {
            Self::CircularDependency { task_id } => Some(task_id),
            _ => None,
        }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, AssignError>;
