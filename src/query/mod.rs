//! Dynamic member search.
//!
//! # Main Components
//!
//! - [`path`] - Typed column paths (`member::age()`, `team::name()`)
//! - [`Predicate`] - Composable filter tree with SQL NULL semantics
//! - [`search`] - [`MemberSearch`](crate::model::MemberSearch) to filter
//! - [`Sort`], [`PageRequest`], [`Page`] - Ordering and windowing
//! - [`total_strategy`] - Count elision decision
//! - [`MemberQuery`] - Store-facing fetch, renderable to SQL
//! - [`MemberQueryStore`] / [`ActorStore`] - Store seam and its actor-backed implementation
//! - [`MemberQueryRepository`] - Paginated executor

pub mod column;
pub mod error;
pub mod executor;
pub mod page;
pub mod path;
pub mod predicate;
pub mod search;
pub mod sort;
pub mod sql;
pub mod store;
pub mod total;

pub use column::{Column, JoinedRow, Table, Value};
pub use error::{SearchError, StoreError};
pub use executor::{MemberQueryRepository, DEFAULT_MAX_PAGE_SIZE};
pub use page::{Page, PageParams, PageRequest};
pub use predicate::{all_of, CompareOp, Predicate, PredicateBuilder};
pub use sort::{Direction, NullHandling, OrderSpecifier, Sort};
pub use sql::{count_sql, MemberQuery};
pub use store::{ActorStore, MemberQueryStore};
pub use total::{total_strategy, TotalStrategy};
