//! # Search Criteria to Filter
//!
//! Two ways of turning a [`MemberSearch`] into a filter. Both are pure, and both return
//! `None` when nothing constrains the query.
//!
//! - [`composed`] builds an ordered list of optional fragments and folds it with
//!   [`all_of`]. The age range is emitted only when **both** bounds are present.
//! - [`accumulated`] feeds each criterion into a [`PredicateBuilder`] one at a time and
//!   applies each age bound on its own.
//!
//! The executor uses [`composed`].

use crate::model::{has_text, MemberSearch};
use crate::query::path::{member, team};
use crate::query::predicate::{all_of, Predicate, PredicateBuilder};

fn username_eq(username: Option<&str>) -> Option<Predicate> {
    username
        .filter(|u| has_text(Some(*u)))
        .map(|u| member::username().eq(u))
}

fn team_name_eq(team_name: Option<&str>) -> Option<Predicate> {
    team_name
        .filter(|t| has_text(Some(*t)))
        .map(|t| team::name().eq(t))
}

fn age_between(goe: Option<i32>, loe: Option<i32>) -> Option<Predicate> {
    match (goe, loe) {
        (Some(goe), Some(loe)) => Some(member::age().between(goe, loe)),
        _ => None,
    }
}

/// Filter for `criteria`, with a single age bound ignored.
pub fn composed(criteria: &MemberSearch) -> Option<Predicate> {
    all_of([
        username_eq(criteria.username.as_deref()),
        team_name_eq(criteria.team_name.as_deref()),
        age_between(criteria.age_goe, criteria.age_loe),
    ])
}

/// Filter for `criteria`, with each age bound applied independently.
pub fn accumulated(criteria: &MemberSearch) -> Option<Predicate> {
    let mut builder = PredicateBuilder::new();
    builder
        .and_opt(username_eq(criteria.username.as_deref()))
        .and_opt(team_name_eq(criteria.team_name.as_deref()))
        .and_opt(criteria.age_goe.map(|age| member::age().goe(age)))
        .and_opt(criteria.age_loe.map(|age| member::age().loe(age)));
    builder.build()
}
