//! # Member Actor
//!
//! Members depend on the team table: the actor is started with a
//! [`TeamClient`](crate::clients::TeamClient) as its context, which the entity hooks use
//! to check the `team_id` foreign key.
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Member`]
//! - [`error`] - [`MemberError`] type
//! - [`new()`] - Factory function that creates the actor and client

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::MemberClient;
use crate::framework::ResourceActor;
use crate::model::Member;

/// Creates a new Member actor and its client.
///
/// The actor must be run with a `TeamClient`: `tokio::spawn(actor.run(team_client))`.
pub fn new(buffer_size: usize) -> (ResourceActor<Member>, MemberClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, MemberClient::new(generic_client))
}
