//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate for the whole
//! system: both table actors, the clients and the query layer.
//!
//! ## Configuration
//!
//! Compact format without the module prefix (`with_target(false)`). Levels come from
//! `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run                        # lifecycle and row counts
//! RUST_LOG=debug cargo run                       # criteria, SQL, window sizes
//! RUST_LOG=query_recipe::query=debug cargo run   # query layer only
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, shutdown and final table size
//! - **Table Operations**: Create, Get, Update, Delete and Scan
//! - **Searches**: criteria, page request, the SQL a relational store would run, and
//!   whether the total was implied by the window or counted
//!
//! ## Search Trace Example
//!
//! **With `RUST_LOG=debug`**:
//!
//! ```text
//! DEBUG search_page_complex:fetch: Fetching window sql=SELECT "member"."id" AS "member_id", ... LIMIT 3 OFFSET 3
//! DEBUG Scan entity_type="Team" rows=2
//! DEBUG Scan entity_type="Member" rows=4
//! DEBUG search_page_complex:fetch: Fetched window rows=1
//! DEBUG search_page_complex: Total implied by window total=4
//! DEBUG search_page_complex: Page complete window=1 total=4 offset=3
//! ```
//!
//! A first page that comes back full logs a `count` span with `SELECT COUNT(*) ...`
//! instead of `Total implied by window`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
