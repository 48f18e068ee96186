//! # System Lifecycle & Orchestration
//!
//! This module starts, wires and stops the table actors, and hands out the search
//! repository that reads across them.
//!
//! ## The MemberSystem Pattern
//!
//! ```rust,ignore
//! impl MemberSystem {
//!     pub fn with_config(config: SystemConfig) -> Self {
//!         // 1. Create actors (no dependencies yet)
//!         let (team_actor, team_client) = team_actor::new(config.channel_buffer);
//!         let (member_actor, member_client) = member_actor::new(config.channel_buffer);
//!
//!         // 2. Start actors with their dependencies injected
//!         let team_handle = tokio::spawn(team_actor.run(()));
//!         let member_handle = tokio::spawn(member_actor.run(team_client.clone()));
//!
//!         // 3. Query layer reads both tables through their clients
//!         let store = ActorStore::new(member_client.clone(), team_client.clone());
//!         // ...
//!     }
//! }
//! ```
//!
//! ## Dependency Injection via Context
//!
//! Each table declares its dependencies as its `Context` associated type:
//!
//! ```rust,ignore
//! impl ActorEntity for Team {
//!     type Context = ();
//! }
//!
//! // Checks the team_id foreign key
//! impl ActorEntity for Member {
//!     type Context = TeamClient;
//! }
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - including the ones held by the query store
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - the team actor finishes once the member actor has dropped
//!    its `TeamClient`
//!
//! ## Configuration
//!
//! [`SystemConfig`] carries the channel buffer size and paging limits. Log levels come
//! from `RUST_LOG`, see [`tracing`].

pub mod config;
pub mod member_system;
pub mod tracing;

pub use config::*;
pub use member_system::*;
pub use tracing::*;
