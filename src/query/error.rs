use thiserror::Error;

/// Failures reported by a [`MemberQueryStore`](crate::query::MemberQueryStore).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached (actor stopped, connection lost).
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Store failure: {0}")]
    Failure(String),
}

/// Errors returned by [`MemberQueryRepository`](crate::query::MemberQueryRepository).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Invalid page request: {0}")]
    InvalidPage(String),

    #[error("Invalid sort: {0}")]
    InvalidSort(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
