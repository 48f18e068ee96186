//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod member_client;
pub mod team_client;

pub use actor_client::*;
pub use member_client::*;
pub use team_client::*;
