use crate::model::TeamId;
use serde::{Deserialize, Serialize};

/// Primary key of the `member` table.
pub type MemberId = u64;

/// A member row.
///
/// The team relationship is an explicit, nullable foreign key; the join to
/// [`Team`](crate::model::Team) happens at query time. Members without a team (or without
/// a username) are valid rows and must survive the outer join.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
/// Its context is a [`TeamClient`](crate::clients::TeamClient), used to check the
/// foreign key on create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<TeamId>,
}

/// Payload for creating a new member.
///
/// ```
/// use query_recipe::model::MemberCreate;
///
/// let params = MemberCreate::new("MemberA", 20).in_team(1);
/// assert_eq!(params.team_id, Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct MemberCreate {
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<TeamId>,
}

impl MemberCreate {
    pub fn new(username: impl Into<String>, age: i32) -> Self {
        Self {
            username: Some(username.into()),
            age,
            team_id: None,
        }
    }

    /// A member with no username.
    pub fn anonymous(age: i32) -> Self {
        Self {
            username: None,
            age,
            team_id: None,
        }
    }

    pub fn in_team(mut self, team_id: TeamId) -> Self {
        self.team_id = Some(team_id);
        self
    }
}

/// Changes the team a member belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamAssignment {
    Join(TeamId),
    Leave,
}

/// Payload for updating an existing member.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberUpdate {
    pub username: Option<String>,
    pub age: Option<i32>,
    pub team: Option<TeamAssignment>,
}
