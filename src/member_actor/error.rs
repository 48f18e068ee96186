//! Error types for the Member actor.

use crate::model::TeamId;
use thiserror::Error;

/// Errors that can occur during member operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MemberError {
    /// The requested member was not found.
    #[error("Member not found: {0}")]
    NotFound(String),

    /// The member references a team that does not exist.
    #[error("Team not found: {0}")]
    TeamNotFound(TeamId),

    /// The member data provided is invalid.
    #[error("Member validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for MemberError {
    fn from(msg: String) -> Self {
        MemberError::ActorCommunicationError(msg)
    }
}
