//! ActorEntity implementation for the Member row type.
//!
//! The member actor runs with a [`TeamClient`] as its context so the `team_id` foreign key
//! can be checked against the team table on create and update.

use crate::clients::{ActorClient, TeamClient};
use crate::framework::ActorEntity;
use crate::member_actor::MemberError;
use crate::model::{Member, MemberCreate, MemberId, MemberUpdate, TeamAssignment, TeamId};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl ActorEntity for Member {
    type Id = MemberId;
    type Create = MemberCreate;
    type Update = MemberUpdate;
    type Context = TeamClient;
    type Error = MemberError;

    fn from_create_params(id: MemberId, params: MemberCreate) -> Result<Self, MemberError> {
        validate_age(params.age)?;
        Ok(Self {
            id,
            username: params.username,
            age: params.age,
            team_id: params.team_id,
        })
    }

    async fn on_create(&mut self, teams: &TeamClient) -> Result<(), MemberError> {
        if let Some(team_id) = self.team_id {
            ensure_team(teams, team_id).await?;
        }
        Ok(())
    }

    /// Applies the update.
    ///
    /// # Fields Updated
    /// - `username`
    /// - `age`: must not be negative
    /// - `team`: joining a team checks that it exists, leaving clears the foreign key
    async fn on_update(&mut self, update: MemberUpdate, teams: &TeamClient) -> Result<(), MemberError> {
        if let Some(username) = update.username {
            self.username = Some(username);
        }
        if let Some(age) = update.age {
            validate_age(age)?;
            self.age = age;
        }
        match update.team {
            Some(TeamAssignment::Join(team_id)) => {
                ensure_team(teams, team_id).await?;
                self.team_id = Some(team_id);
            }
            Some(TeamAssignment::Leave) => self.team_id = None,
            None => {}
        }
        Ok(())
    }
}

fn validate_age(age: i32) -> Result<(), MemberError> {
    if age < 0 {
        return Err(MemberError::ValidationError(format!("age must not be negative: {}", age)));
    }
    Ok(())
}

async fn ensure_team(teams: &TeamClient, team_id: TeamId) -> Result<(), MemberError> {
    debug!(team_id, "Checking team reference");
    match teams.get(team_id).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(MemberError::TeamNotFound(team_id)),
        Err(e) => Err(MemberError::ActorCommunicationError(e.to_string())),
    }
}
