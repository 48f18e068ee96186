//! # Team Client
//!
//! Repository-style API for the `Team` table. It wraps a `ResourceClient<Team>` and maps
//! framework errors onto [`TeamError`].
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Team, TeamCreate, TeamId, TeamUpdate};
use crate::team_actor::TeamError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Team actor.
#[derive(Clone)]
pub struct TeamClient {
    inner: ResourceClient<Team>,
}

impl TeamClient {
    pub fn new(inner: ResourceClient<Team>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_team(&self, params: TeamCreate) -> Result<TeamId, TeamError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn rename_team(&self, id: TeamId, name: String) -> Result<Team, TeamError> {
        debug!("Sending request");
        let update = TeamUpdate { name: Some(name) };
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Teams whose name equals `name` exactly.
    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<Team>, TeamError> {
        let teams = self.find_all().await?;
        Ok(teams.into_iter().filter(|t| t.name == name).collect())
    }
}

#[async_trait]
impl ActorClient<Team> for TeamClient {
    type Error = TeamError;

    fn inner(&self) -> &ResourceClient<Team> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => TeamError::NotFound(id),
            FrameworkError::EntityError(source) => match source.downcast::<TeamError>() {
                Ok(err) => *err,
                Err(other) => TeamError::ActorCommunicationError(other.to_string()),
            },
            other => TeamError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_scan, MockClient};

    #[tokio::test]
    async fn test_find_by_name_filters_scan() {
        let (client, mut receiver) = create_mock_client::<Team>(10);
        let team_client = TeamClient::new(client);

        let find_task = tokio::spawn(async move { team_client.find_by_name("TeamB").await });

        let responder = expect_scan(&mut receiver).await.expect("Expected Scan request");
        responder
            .send(Ok(vec![Team::new(1, "TeamA"), Team::new(2, "TeamB")]))
            .unwrap();

        let teams = find_task.await.unwrap().unwrap();
        assert_eq!(teams, vec![Team::new(2, "TeamB")]);
    }

    #[tokio::test]
    async fn test_entity_errors_keep_their_type() {
        let mut mock = MockClient::<Team>::new();
        mock.expect_create()
            .return_err(FrameworkError::EntityError(Box::new(TeamError::ValidationError(
                "blank".into(),
            ))));
        let team_client = TeamClient::new(mock.client());

        let err = team_client.create_team(TeamCreate::new(" ")).await.unwrap_err();
        assert_eq!(err, TeamError::ValidationError("blank".into()));
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_actor_is_communication_error() {
        let (client, receiver) = create_mock_client::<Team>(1);
        drop(receiver);
        let team_client = TeamClient::new(client);

        let err = team_client.find_all().await.unwrap_err();
        assert!(matches!(err, TeamError::ActorCommunicationError(_)));
    }
}
