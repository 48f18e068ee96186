//! Error types for the Team actor.

use thiserror::Error;

/// Errors that can occur during team operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TeamError {
    /// The requested team was not found.
    #[error("Team not found: {0}")]
    NotFound(String),

    /// The team data provided is invalid.
    #[error("Team validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for TeamError {
    fn from(msg: String) -> Self {
        TeamError::ActorCommunicationError(msg)
    }
}
