//! # Paginated Query Executor
//!
//! [`MemberQueryRepository`] turns search criteria and a page request into a
//! [`Page<MemberTeam>`]. It owns no data: every read goes through a
//! [`MemberQueryStore`].
//!
//! ## Variants
//!
//! | Method | Paging | Count query |
//! |--------|--------|-------------|
//! | [`search_list`](MemberQueryRepository::search_list) | none | never |
//! | [`search_page_simple`](MemberQueryRepository::search_page_simple) | yes | always |
//! | [`search_page_complex`](MemberQueryRepository::search_page_complex) | yes | only when the window does not imply the total |
//! | [`search`](MemberQueryRepository::search) | yes, raw offset/limit | as `search_page_complex` |
//! | [`find_page`](MemberQueryRepository::find_page) | yes, arbitrary filter | as `search_page_complex` |
//!
//! Page requests are validated before the store is touched. Store failures are
//! returned as [`SearchError::Store`] with no partial page.

use crate::model::{MemberSearch, MemberTeam};
use crate::query::error::SearchError;
use crate::query::page::{Page, PageRequest};
use crate::query::predicate::Predicate;
use crate::query::search::composed;
use crate::query::sql::MemberQuery;
use crate::query::store::MemberQueryStore;
use crate::query::total::{total_strategy, TotalStrategy};
use tracing::{debug, instrument};

/// Largest page size accepted unless configured otherwise.
pub const DEFAULT_MAX_PAGE_SIZE: u64 = 2000;

/// Member search over a [`MemberQueryStore`].
pub struct MemberQueryRepository<S> {
    store: S,
    max_page_size: u64,
}

impl<S: MemberQueryStore> MemberQueryRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }

    pub fn with_max_page_size(mut self, max_page_size: u64) -> Self {
        self.max_page_size = max_page_size;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Every member matching `criteria`, joined with its team, in id order.
    #[instrument(skip(self))]
    pub async fn search_list(&self, criteria: &MemberSearch) -> Result<Vec<MemberTeam>, SearchError> {
        let query = MemberQuery::new(composed(criteria));
        let rows = self.store.fetch(&query).await?;
        debug!(rows = rows.len(), "Search complete");
        Ok(rows)
    }

    /// One page starting at `offset` with at most `limit` rows, total count elided
    /// where the window implies it.
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        criteria: &MemberSearch,
        offset: i64,
        limit: i64,
    ) -> Result<Page<MemberTeam>, SearchError> {
        let request = PageRequest::new(offset, limit)?;
        self.search_page_complex(criteria, &request).await
    }

    /// One page; always issues the count query.
    #[instrument(skip(self))]
    pub async fn search_page_simple(
        &self,
        criteria: &MemberSearch,
        request: &PageRequest,
    ) -> Result<Page<MemberTeam>, SearchError> {
        self.page(composed(criteria), request, false).await
    }

    /// One page; skips the count query when the window implies the total.
    #[instrument(skip(self))]
    pub async fn search_page_complex(
        &self,
        criteria: &MemberSearch,
        request: &PageRequest,
    ) -> Result<Page<MemberTeam>, SearchError> {
        self.page(composed(criteria), request, true).await
    }

    /// One page for an arbitrary filter; `None` matches every member.
    #[instrument(skip(self))]
    pub async fn find_page(
        &self,
        predicate: Option<Predicate>,
        request: &PageRequest,
    ) -> Result<Page<MemberTeam>, SearchError> {
        self.page(predicate, request, true).await
    }

    async fn page(
        &self,
        predicate: Option<Predicate>,
        request: &PageRequest,
        elide_count: bool,
    ) -> Result<Page<MemberTeam>, SearchError> {
        if request.limit() > self.max_page_size {
            return Err(SearchError::InvalidPage(format!(
                "limit {} exceeds maximum page size {}",
                request.limit(),
                self.max_page_size
            )));
        }

        let query = MemberQuery::new(predicate)
            .with_sort(request.sort().clone())
            .window(request.offset(), request.limit());
        let content = self.store.fetch(&query).await?;

        let window = content.len() as u64;
        let strategy = if elide_count {
            total_strategy(request.offset(), request.limit(), window)
        } else {
            TotalStrategy::NeedsQuery
        };
        let total = match strategy {
            TotalStrategy::Known(total) => {
                debug!(total, "Total implied by window");
                total
            }
            TotalStrategy::NeedsQuery => self.store.count(query.predicate.as_ref()).await?,
        };

        debug!(window, total, offset = request.offset(), "Page complete");
        Ok(Page::new(content, request.offset(), request.limit(), total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Member, Team};
    use crate::query::column::JoinedRow;
    use crate::query::error::StoreError;
    use crate::query::path::member;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory store that records how often each operation is called.
    struct CountingStore {
        teams: Vec<Team>,
        members: Vec<Member>,
        fetches: AtomicUsize,
        counts: AtomicUsize,
    }

    impl CountingStore {
        fn scenario() -> Self {
            let teams = vec![Team::new(1, "TeamA"), Team::new(2, "TeamB")];
            let members = [("MemberA", 20, 1), ("MemberB", 30, 1), ("MemberC", 40, 2), ("MemberD", 50, 2)]
                .into_iter()
                .zip(1u64..)
                .map(|((name, age, team_id), id)| Member {
                    id,
                    username: Some(name.to_string()),
                    age,
                    team_id: Some(team_id),
                })
                .collect();
            Self {
                teams,
                members,
                fetches: AtomicUsize::new(0),
                counts: AtomicUsize::new(0),
            }
        }

        fn rows(&self, predicate: Option<&Predicate>) -> Vec<MemberTeam> {
            self.members
                .iter()
                .map(|m| JoinedRow::new(m, self.teams.iter().find(|t| Some(t.id) == m.team_id)))
                .filter(|row| predicate.map_or(true, |p| p.matches(row)))
                .map(|row| row.project())
                .collect()
        }
    }

    #[async_trait]
    impl MemberQueryStore for CountingStore {
        async fn fetch(&self, query: &MemberQuery) -> Result<Vec<MemberTeam>, StoreError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .rows(query.predicate.as_ref())
                .into_iter()
                .skip(query.offset as usize)
                .take(query.limit.unwrap_or(u64::MAX) as usize)
                .collect())
        }

        async fn count(&self, predicate: Option<&Predicate>) -> Result<u64, StoreError> {
            self.counts.fetch_add(1, Ordering::SeqCst);
            Ok(self.rows(predicate).len() as u64)
        }
    }

    struct FailingStore;

    #[async_trait]
    impl MemberQueryStore for FailingStore {
        async fn fetch(&self, _query: &MemberQuery) -> Result<Vec<MemberTeam>, StoreError> {
            Err(StoreError::Unavailable("connection refused".into()))
        }

        async fn count(&self, _predicate: Option<&Predicate>) -> Result<u64, StoreError> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
    }

    /// Serves rows normally but cannot count them.
    struct CountFailsStore(CountingStore);

    #[async_trait]
    impl MemberQueryStore for CountFailsStore {
        async fn fetch(&self, query: &MemberQuery) -> Result<Vec<MemberTeam>, StoreError> {
            self.0.fetch(query).await
        }

        async fn count(&self, _predicate: Option<&Predicate>) -> Result<u64, StoreError> {
            Err(StoreError::Unavailable("down".into()))
        }
    }

    #[tokio::test]
    async fn test_full_first_page_issues_count() {
        let repo = MemberQueryRepository::new(CountingStore::scenario());

        let page = repo.search(&MemberSearch::default(), 0, 3).await.unwrap();

        assert_eq!(page.content.len(), 3);
        assert_eq!(page.total, 4);
        assert_eq!(repo.store().counts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_short_last_page_elides_count() {
        let repo = MemberQueryRepository::new(CountingStore::scenario());

        let page = repo.search(&MemberSearch::default(), 3, 3).await.unwrap();

        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].username.as_deref(), Some("MemberD"));
        assert_eq!(page.total, 4);
        assert_eq!(repo.store().counts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_offset_past_end_still_counts() {
        let repo = MemberQueryRepository::new(CountingStore::scenario());

        let page = repo.search(&MemberSearch::default(), 10, 3).await.unwrap();

        assert!(page.content.is_empty());
        assert_eq!(page.total, 4);
        assert_eq!(repo.store().counts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_simple_variant_always_counts() {
        let repo = MemberQueryRepository::new(CountingStore::scenario());
        let request = PageRequest::new(3, 3).unwrap();

        let page = repo
            .search_page_simple(&MemberSearch::default(), &request)
            .await
            .unwrap();

        assert_eq!(page.total, 4);
        assert_eq!(repo.store().counts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_elided_total_matches_counted_total() {
        let repo = MemberQueryRepository::new(CountingStore::scenario());
        let criteria = [
            MemberSearch::default(),
            MemberSearch::default().team_name("TeamA"),
            MemberSearch::default().age_goe(30).age_loe(50),
            MemberSearch::default().username("nobody"),
        ];

        for criteria in &criteria {
            for offset in 0..6 {
                for limit in 1..6 {
                    let request = PageRequest::new(offset, limit).unwrap();
                    let elided = repo.search_page_complex(criteria, &request).await.unwrap();
                    let counted = repo.search_page_simple(criteria, &request).await.unwrap();
                    assert_eq!(elided, counted, "{:?} offset={} limit={}", criteria, offset, limit);
                }
            }
        }
    }

    #[tokio::test]
    async fn test_scenario_team_and_range() {
        let repo = MemberQueryRepository::new(CountingStore::scenario());
        let criteria = MemberSearch::default().age_goe(30).age_loe(40).team_name("TeamB");

        let page = repo.search(&criteria, 0, 20).await.unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.content[0].username.as_deref(), Some("MemberC"));
        assert_eq!(page.content[0].age, 40);
        assert_eq!(page.content[0].team_name.as_deref(), Some("TeamB"));
    }

    #[tokio::test]
    async fn test_search_list_and_find_page() {
        let repo = MemberQueryRepository::new(CountingStore::scenario());

        let all = repo.search_list(&MemberSearch::default()).await.unwrap();
        assert_eq!(all.len(), 4);

        let request = PageRequest::new(0, 10).unwrap();
        let page = repo
            .find_page(Some(member::age().gt(30)), &request)
            .await
            .unwrap();
        assert_eq!(page.total, 2);
    }

    #[tokio::test]
    async fn test_invalid_page_rejected_before_store_call() {
        let repo = MemberQueryRepository::new(CountingStore::scenario()).with_max_page_size(10);

        assert!(matches!(
            repo.search(&MemberSearch::default(), -1, 3).await,
            Err(SearchError::InvalidPage(_))
        ));
        assert!(matches!(
            repo.search(&MemberSearch::default(), 0, 0).await,
            Err(SearchError::InvalidPage(_))
        ));
        assert!(matches!(
            repo.search(&MemberSearch::default(), 0, 11).await,
            Err(SearchError::InvalidPage(_))
        ));
        assert_eq!(repo.store().fetches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let repo = MemberQueryRepository::new(FailingStore);

        let err = repo.search(&MemberSearch::default(), 0, 3).await.unwrap_err();
        assert_eq!(
            err,
            SearchError::Store(StoreError::Unavailable("connection refused".into()))
        );
    }

    #[tokio::test]
    async fn test_count_failure_after_full_window_returns_no_page() {
        let repo = MemberQueryRepository::new(CountFailsStore(CountingStore::scenario()));

        let result = repo.search(&MemberSearch::default(), 0, 3).await;

        assert!(matches!(result, Err(SearchError::Store(StoreError::Unavailable(_)))));
        assert_eq!(repo.store().0.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_short_window_never_reaches_failing_count() {
        let repo = MemberQueryRepository::new(CountFailsStore(CountingStore::scenario()));

        let page = repo.search(&MemberSearch::default(), 0, 10).await.unwrap();

        assert_eq!(page.total, 4);
    }
}
