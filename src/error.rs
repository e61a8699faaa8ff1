//! Error types for Deckhand
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::OrchestratorError;
use crate::domain::services::TemplateError;
use crate::domain::value_objects::ResourceField;

/// Result type alias for Deckhand operations
pub type DeckhandResult<T> = Result<T, DeckhandError>;

/// Main error type for workflow operations
#[derive(Error, Debug)]
pub enum DeckhandError {
    /// Wrong argument shape detected after CLI parsing
    #[error("usage: {0}")]
    Usage(String),

    /// Parameter, descriptor or template-context file could not be read
    #[error("cannot read {path}: {message}")]
    FileRead { path: PathBuf, message: String },

    /// Config file exists but cannot be parsed
    #[error("invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Template substitution failed
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Create collided with an existing application and force was not set
    #[error("application '{id}' already exists, consider using the --force flag to update when an application exists")]
    AlreadyExists { id: String },

    /// Non-numeric or out-of-range value where a number is expected
    #[error("invalid {field} value '{value}': {reason}")]
    InvalidArgument {
        field: ResourceField,
        value: String,
        reason: String,
    },

    /// Rollback requested without an explicit version and too little history
    #[error("cannot roll back '{id}': {available} recorded version(s), at least 2 are required (pass a version explicitly)")]
    InsufficientHistory { id: String, available: usize },

    /// Orchestrator reported a failure
    #[error(transparent)]
    Submission(#[from] OrchestratorError),

    /// Polling deployment status failed
    #[error("waiting for deployment '{handle}' failed: {source}")]
    Wait {
        handle: String,
        #[source]
        source: OrchestratorError,
    },

    /// The change was accepted by the orchestrator but waiting on it failed
    #[error("{action} of '{id}' was applied, but {source}")]
    Unconfirmed {
        action: &'static str,
        id: String,
        #[source]
        source: Box<DeckhandError>,
    },
}

impl DeckhandError {
    /// Whether this error was raised before any orchestrator call was made
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Usage(_)
                | Self::FileRead { .. }
                | Self::Config { .. }
                | Self::Template(_)
                | Self::InvalidArgument { .. }
        )
    }
}
