//! ActorEntity implementation for the Team row type.

use crate::framework::ActorEntity;
use crate::model::{has_text, Team, TeamCreate, TeamId, TeamUpdate};
use crate::team_actor::TeamError;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Team {
    type Id = TeamId;
    type Create = TeamCreate;
    type Update = TeamUpdate;
    type Context = ();
    type Error = TeamError;

    /// Creates a new Team; the name must not be blank.
    fn from_create_params(id: TeamId, params: TeamCreate) -> Result<Self, TeamError> {
        if !has_text(Some(params.name.as_str())) {
            return Err(TeamError::ValidationError("team name must not be blank".into()));
        }
        Ok(Team::new(id, params.name))
    }

    async fn on_update(&mut self, update: TeamUpdate, _ctx: &()) -> Result<(), TeamError> {
        if let Some(name) = update.name {
            if !has_text(Some(name.as_str())) {
                return Err(TeamError::ValidationError("team name must not be blank".into()));
            }
            self.name = name;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_team_name_rejected() {
        let err = Team::from_create_params(1, TeamCreate::new("  ")).unwrap_err();
        assert!(matches!(err, TeamError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_rename_team() {
        let mut team = Team::from_create_params(1, TeamCreate::new("TeamA")).unwrap();
        team.on_update(TeamUpdate { name: Some("TeamZ".into()) }, &())
            .await
            .unwrap();
        assert_eq!(team.name, "TeamZ");
    }
}
