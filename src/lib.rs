#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Query Recipe
//!
//! > **Dynamic, paginated search over resource-oriented actors.**
//!
//! Two tables, `member` and `team`, each owned by a Tokio actor. On top of them sits a
//! search layer that turns optional criteria into a filter, runs it over
//! `member LEFT JOIN team`, and returns one page of flattened rows with a total count,
//! skipping the count query when the page itself implies the total.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Absent means unconstrained
//! Every search criterion is optional. Criteria become an ordered list of *optional*
//! filter fragments; absent fragments are dropped and the rest are ANDed. Nothing is
//! ever turned into an always-true placeholder.
//!
//! ### Relationships are foreign keys
//! A member stores a nullable `team_id`. The join happens at query time, and it is an
//! outer join: members without a team still show up, with empty team columns.
//!
//! ### Count only when needed
//! [`total_strategy`](query::total_strategy) is a pure decision table. A short first page
//! or a short later page already tells you the total; anything else issues a count with
//! the same filter and join.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each layer has its own `thiserror` enum ([`TeamError`](team_actor::TeamError),
//! [`MemberError`](member_actor::MemberError), [`StoreError`](query::StoreError),
//! [`SearchError`](query::SearchError)). Store errors convert into search errors with
//! `#[from]`.
//!
//! ### 2. Async Context Injection
//! The member actor receives a `TeamClient` through `run()` and uses it to check
//! foreign keys.
//!
//! ### 3. Concurrency Model
//! Each `ResourceActor` processes its messages sequentially; filter composition is pure
//! and synchronous.
//!
//! ### 4. Observability
//! `tracing` everywhere; searches log the equivalent SQL at debug level.
//! See the [`lifecycle::tracing`] module for details.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>` that owns one table, and the mock utilities.
//!
//! ### 2. The Orchestrator ([`lifecycle`])
//! [`MemberSystem`](lifecycle::MemberSystem) starts and wires the actors and builds the
//! search repository; [`SystemConfig`](lifecycle::SystemConfig) holds its settings.
//!
//! ### 3. The Interface ([`clients`])
//! [`TeamClient`](clients::TeamClient) and [`MemberClient`](clients::MemberClient) wrap
//! the generic client with table-specific errors.
//!
//! ### 4. The Tables ([`team_actor`], [`member_actor`], [`model`])
//! Row types, payloads and their `ActorEntity` implementations.
//!
//! ### 5. The Search ([`query`])
//! Paths, predicates, sorting, paging, SQL rendering, the store seam and
//! [`MemberQueryRepository`](query::MemberQueryRepository).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # See the generated SQL
//! RUST_LOG=debug cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod member_actor;
pub mod model;
pub mod query;
pub mod team_actor;
