use serde::{Deserialize, Serialize};

/// Primary key of the `team` table.
pub type TeamId = u64;

/// A team that members can belong to.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Team`](#impl-ActorEntity-for-Team) for details on:
/// - Creation parameters ([`TeamCreate`])
/// - Update parameters ([`TeamUpdate`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Payload for creating a new team.
#[derive(Debug, Clone)]
pub struct TeamCreate {
    pub name: String,
}

impl TeamCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Payload for updating an existing team.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamUpdate {
    pub name: Option<String>,
}
