//! # Team Actor
//!
//! The simplest table in the schema: teams have no dependencies (Context = `()`)
//! and no foreign keys.
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Team`]
//! - [`error`] - [`TeamError`] type
//! - [`new()`] - Factory function that creates the actor and client

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::TeamClient;
use crate::framework::ResourceActor;
use crate::model::Team;

/// Creates a new Team actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Team>, TeamClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, TeamClient::new(generic_client))
}
