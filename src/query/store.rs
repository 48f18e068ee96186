//! # Query Store
//!
//! [`MemberQueryStore`] is the seam between the executor and whatever holds the rows.
//! [`ActorStore`] is the in-process implementation over the two table actors: it scans
//! both tables, performs the left outer join, filters, orders and windows in memory.
//!
//! Each call logs the SQL a relational store would run for the same request.

use crate::clients::actor_client::ActorClient;
use crate::clients::{MemberClient, TeamClient};
use crate::member_actor::MemberError;
use crate::model::{Member, MemberTeam, Team, TeamId};
use crate::query::column::JoinedRow;
use crate::query::error::StoreError;
use crate::query::predicate::Predicate;
use crate::query::sql::{count_sql, MemberQuery};
use crate::team_actor::TeamError;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Executes fetch and count requests over `member LEFT JOIN team`.
#[async_trait]
pub trait MemberQueryStore: Send + Sync {
    /// The rows of the window described by `query`, projected.
    async fn fetch(&self, query: &MemberQuery) -> Result<Vec<MemberTeam>, StoreError>;

    /// The number of joined rows matching `predicate`; `None` counts everything.
    async fn count(&self, predicate: Option<&Predicate>) -> Result<u64, StoreError>;
}

impl From<TeamError> for StoreError {
    fn from(err: TeamError) -> Self {
        match err {
            TeamError::ActorCommunicationError(msg) => StoreError::Unavailable(msg),
            other => StoreError::Failure(other.to_string()),
        }
    }
}

impl From<MemberError> for StoreError {
    fn from(err: MemberError) -> Self {
        match err {
            MemberError::ActorCommunicationError(msg) => StoreError::Unavailable(msg),
            other => StoreError::Failure(other.to_string()),
        }
    }
}

/// Store backed by the member and team actors.
#[derive(Clone)]
pub struct ActorStore {
    members: MemberClient,
    teams: TeamClient,
}

/// Both tables at one point in time.
struct Snapshot {
    members: Vec<Member>,
    teams: BTreeMap<TeamId, Team>,
}

impl Snapshot {
    /// Joined rows matching `predicate`, in member primary-key order.
    fn matching<'a>(&'a self, predicate: Option<&Predicate>) -> Vec<JoinedRow<'a>> {
        self.members
            .iter()
            .map(|m| JoinedRow::new(m, m.team_id.and_then(|id| self.teams.get(&id))))
            .filter(|row| predicate.map_or(true, |p| p.matches(row)))
            .collect()
    }
}

impl ActorStore {
    pub fn new(members: MemberClient, teams: TeamClient) -> Self {
        Self { members, teams }
    }

    async fn snapshot(&self) -> Result<Snapshot, StoreError> {
        let teams = self
            .teams
            .find_all()
            .await?
            .into_iter()
            .map(|t| (t.id, t))
            .collect();
        let members = self.members.find_all().await?;
        Ok(Snapshot { members, teams })
    }
}

#[async_trait]
impl MemberQueryStore for ActorStore {
    #[instrument(skip(self, query))]
    async fn fetch(&self, query: &MemberQuery) -> Result<Vec<MemberTeam>, StoreError> {
        debug!(sql = %query.to_sql(), "Fetching window");
        let snapshot = self.snapshot().await?;

        let mut rows = snapshot.matching(query.predicate.as_ref());
        if !query.sort.is_unsorted() {
            rows.sort_by(|a, b| query.sort.compare(a, b));
        }

        let skip = usize::try_from(query.offset).unwrap_or(usize::MAX);
        let take = query
            .limit
            .map_or(usize::MAX, |l| usize::try_from(l).unwrap_or(usize::MAX));
        let window: Vec<MemberTeam> = rows
            .iter()
            .skip(skip)
            .take(take)
            .map(JoinedRow::project)
            .collect();

        debug!(rows = window.len(), "Fetched window");
        Ok(window)
    }

    #[instrument(skip(self, predicate))]
    async fn count(&self, predicate: Option<&Predicate>) -> Result<u64, StoreError> {
        debug!(sql = %count_sql(predicate), "Counting");
        let snapshot = self.snapshot().await?;
        let total = snapshot.matching(predicate).len() as u64;
        debug!(total, "Counted");
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::framework::FrameworkError;
    use crate::query::path::{member, team};
    use crate::query::sort::Sort;

    fn teams() -> Vec<Team> {
        vec![Team::new(1, "TeamA"), Team::new(2, "TeamB")]
    }

    fn members() -> Vec<Member> {
        vec![
            Member { id: 1, username: Some("MemberA".into()), age: 20, team_id: Some(1) },
            Member { id: 2, username: Some("MemberB".into()), age: 30, team_id: Some(1) },
            Member { id: 3, username: None, age: 90, team_id: None },
            Member { id: 4, username: Some("MemberD".into()), age: 50, team_id: Some(7) },
        ]
    }

    fn store(member_mock: &MockClient<Member>, team_mock: &MockClient<Team>) -> ActorStore {
        ActorStore::new(
            MemberClient::new(member_mock.client()),
            TeamClient::new(team_mock.client()),
        )
    }

    #[tokio::test]
    async fn test_fetch_keeps_unmatched_members() {
        let mut member_mock = MockClient::<Member>::new();
        let mut team_mock = MockClient::<Team>::new();
        team_mock.expect_scan().return_ok(teams());
        member_mock.expect_scan().return_ok(members());

        let rows = store(&member_mock, &team_mock)
            .fetch(&MemberQuery::new(None))
            .await
            .unwrap();

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].team_name.as_deref(), Some("TeamA"));
        assert_eq!(rows[2].username, None);
        assert_eq!(rows[2].team_id, None);
        // dangling foreign key joins to no team
        assert_eq!(rows[3].team_id, None);
        assert_eq!(rows[3].team_name, None);

        member_mock.verify();
        team_mock.verify();
    }

    #[tokio::test]
    async fn test_fetch_filters_sorts_and_windows() {
        let mut member_mock = MockClient::<Member>::new();
        let mut team_mock = MockClient::<Team>::new();
        team_mock.expect_scan().return_ok(teams());
        member_mock.expect_scan().return_ok(members());

        let query = MemberQuery::new(Some(member::age().goe(30)))
            .with_sort(Sort::by(member::age().desc()))
            .window(1, 2);
        let rows = store(&member_mock, &team_mock).fetch(&query).await.unwrap();

        let ids: Vec<u64> = rows.iter().map(|r| r.member_id).collect();
        assert_eq!(ids, vec![4, 2]);
    }

    #[tokio::test]
    async fn test_count_uses_outer_join() {
        let mut member_mock = MockClient::<Member>::new();
        let mut team_mock = MockClient::<Team>::new();
        team_mock.expect_scan().return_ok(teams());
        member_mock.expect_scan().return_ok(members());
        team_mock.expect_scan().return_ok(teams());
        member_mock.expect_scan().return_ok(members());

        let store = store(&member_mock, &team_mock);
        assert_eq!(store.count(Some(&team::name().is_null())).await.unwrap(), 2);
        assert_eq!(store.count(None).await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_actor_failure_surfaces_as_unavailable() {
        let member_mock = MockClient::<Member>::new();
        let mut team_mock = MockClient::<Team>::new();
        team_mock.expect_scan().return_err(FrameworkError::ActorClosed);

        let err = store(&member_mock, &team_mock)
            .count(None)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
    }
}
