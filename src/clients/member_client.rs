//! # Member Client
//!
//! Repository-style API for the `Member` table: save, find by id, find all and
//! find by username. Search with criteria and paging lives in
//! [`MemberQueryRepository`](crate::query::MemberQueryRepository).
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::member_actor::MemberError;
use crate::model::{Member, MemberCreate, MemberId, MemberUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Member actor.
#[derive(Clone)]
pub struct MemberClient {
    inner: ResourceClient<Member>,
}

impl MemberClient {
    pub fn new(inner: ResourceClient<Member>) -> Self {
        Self { inner }
    }

    /// Inserts a member. Fails with [`MemberError::TeamNotFound`] if `team_id` is dangling.
    #[instrument(skip(self))]
    pub async fn create_member(&self, params: MemberCreate) -> Result<MemberId, MemberError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_member(
        &self,
        id: MemberId,
        update: MemberUpdate,
    ) -> Result<Member, MemberError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Members whose username equals `username` exactly, in id order.
    #[instrument(skip(self))]
    pub async fn find_by_username(&self, username: &str) -> Result<Vec<Member>, MemberError> {
        let members = self.find_all().await?;
        Ok(members
            .into_iter()
            .filter(|m| m.username.as_deref() == Some(username))
            .collect())
    }
}

#[async_trait]
impl ActorClient<Member> for MemberClient {
    type Error = MemberError;

    fn inner(&self) -> &ResourceClient<Member> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => MemberError::NotFound(id),
            FrameworkError::EntityError(source) => match source.downcast::<MemberError>() {
                Ok(err) => *err,
                Err(other) => MemberError::ActorCommunicationError(other.to_string()),
            },
            other => MemberError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;

    fn member(id: MemberId, username: Option<&str>) -> Member {
        Member {
            id,
            username: username.map(str::to_string),
            age: 20,
            team_id: None,
        }
    }

    #[tokio::test]
    async fn test_find_by_username() {
        let mut mock = MockClient::<Member>::new();
        mock.expect_scan().return_ok(vec![
            member(1, Some("MemberA")),
            member(2, None),
            member(3, Some("MemberB")),
            member(4, Some("MemberA")),
        ]);
        let client = MemberClient::new(mock.client());

        let found = client.find_by_username("MemberA").await.unwrap();
        let ids: Vec<MemberId> = found.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 4]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_dangling_team_reference_surfaces() {
        let mut mock = MockClient::<Member>::new();
        mock.expect_create()
            .return_err(FrameworkError::EntityError(Box::new(MemberError::TeamNotFound(7))));
        let client = MemberClient::new(mock.client());

        let err = client
            .create_member(MemberCreate::new("MemberA", 20).in_team(7))
            .await
            .unwrap_err();
        assert_eq!(err, MemberError::TeamNotFound(7));
    }
}
