//! Generic actor framework for table management.
//!
//! This module provides the building blocks for running each table of the schema as an
//! isolated, type-safe resource actor with CRUD operations and an ordered scan.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that row types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns one table
//! - [`ResourceClient`] - Type-safe client used to talk to an actor
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
