//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every table row type (Team, Member, …)
//! must implement to be managed by the generic `ResourceActor`. It specifies associated types
//! for IDs, DTOs, context, and errors, and provides lifecycle hooks (`on_create`, `on_update`,
//! `on_delete`).
//!
//! # Architecture Note
//! By defining a contract (`ActorEntity`) that all our row types must satisfy, we write the
//! `ResourceActor` logic *once* and reuse it for every table.
//!
//! We use "Associated Types" (type Id, type Create, etc.) to enforce type safety.
//! A `Member` requires a `MemberCreate` payload, and you can't accidentally send it
//! a `TeamCreate` payload.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! You do **not** need to implement these unless you want to customize behavior.
//! The default implementation does nothing (`Ok(())`).

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any row type must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks (e.g. a member
/// checking that its team exists). The `Context` type is injected into every hook, which
/// allows "Late Binding" of dependencies (passing clients to `run()` instead of `new()`).
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The primary key. Must be ordered so the actor can scan rows in key order, and
    /// convertible from `u64` for automatic ID generation.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u64>;

    /// The data required to create a new row (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing row.
    type Update: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity, shared by every operation.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full row from the ID and payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the row is constructed and before it is stored.
    /// Use this hook for validation against other actors (e.g. foreign keys).
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the row is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
