use crate::model::{Member, MemberId, Team, TeamId};
use serde::{Deserialize, Serialize};

/// Flattened, read-only view of a member joined with its team.
///
/// Produced only by the query layer, never persisted. `team_id` and `team_name` come
/// from the team side of the left outer join, so both are `None` when the member has
/// no team or its team row no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberTeam {
    pub member_id: MemberId,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<TeamId>,
    pub team_name: Option<String>,
}

impl MemberTeam {
    pub fn project(member: &Member, team: Option<&Team>) -> Self {
        Self {
            member_id: member.id,
            username: member.username.clone(),
            age: member.age,
            team_id: team.map(|t| t.id),
            team_name: team.map(|t| t.name.clone()),
        }
    }
}
