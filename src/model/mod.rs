//! Pure data structures (rows, DTOs and projections) for the Member/Team schema.
//!
//! [`Team`] and [`Member`] implement the [`ActorEntity`](crate::framework::ActorEntity)
//! trait (see [`team_actor`](crate::team_actor) and [`member_actor`](crate::member_actor)).
//! [`MemberTeam`] is the read-only projection produced by the query layer and
//! [`MemberSearch`] carries the optional search criteria of one request.

pub mod member;
pub mod member_team;
pub mod search;
pub mod team;

pub use member::*;
pub use member_team::*;
pub use search::*;
pub use team::*;
