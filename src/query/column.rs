//! Columns of the joined `member LEFT JOIN team` relation, the values they hold, and the
//! row type predicates and sorts are evaluated against.

use crate::model::{Member, MemberTeam, Team};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// The two tables of the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Member,
    Team,
}

impl Table {
    pub fn name(self) -> &'static str {
        match self {
            Table::Member => "member",
            Table::Team => "team",
        }
    }
}

/// A column of the joined relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    MemberId,
    MemberUsername,
    MemberAge,
    /// The foreign key as stored on the member row.
    MemberTeamId,
    TeamId,
    TeamName,
}

impl Column {
    pub fn table(self) -> Table {
        match self {
            Column::MemberId | Column::MemberUsername | Column::MemberAge | Column::MemberTeamId => {
                Table::Member
            }
            Column::TeamId | Column::TeamName => Table::Team,
        }
    }

    /// Column name within its table.
    pub fn name(self) -> &'static str {
        match self {
            Column::MemberId | Column::TeamId => "id",
            Column::MemberUsername => "username",
            Column::MemberAge => "age",
            Column::MemberTeamId => "team_id",
            Column::TeamName => "name",
        }
    }

    /// Resolves a request-level property name (as used in sort parameters) to a column.
    ///
    /// Accepts the projection's camelCase names (`memberId`, `teamName`, …) and the
    /// dotted path form (`team.name`).
    pub fn from_property(property: &str) -> Option<Column> {
        match property {
            "id" | "memberId" | "member.id" => Some(Column::MemberId),
            "username" | "member.username" => Some(Column::MemberUsername),
            "age" | "member.age" => Some(Column::MemberAge),
            "member.teamId" => Some(Column::MemberTeamId),
            "teamId" | "team.id" => Some(Column::TeamId),
            "teamName" | "team.name" => Some(Column::TeamName),
            _ => None,
        }
    }

    /// Reads this column from a joined row. `None` is SQL NULL.
    pub fn read(self, row: &JoinedRow<'_>) -> Option<Value> {
        match self {
            Column::MemberId => Some(Value::from(row.member.id)),
            Column::MemberUsername => row.member.username.clone().map(Value::Text),
            Column::MemberAge => Some(Value::from(row.member.age)),
            Column::MemberTeamId => row.member.team_id.map(Value::from),
            Column::TeamId => row.team.map(|t| Value::from(t.id)),
            Column::TeamName => row.team.map(|t| Value::Text(t.name.clone())),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.table().name(), self.name())
    }
}

/// A literal compared against a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Text(String),
}

impl Value {
    /// Compares two values of the same kind. Mixed kinds are incomparable.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Int(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Text(v) => write!(f, "'{}'", v),
        }
    }
}

/// One row of `member LEFT JOIN team ON member.team_id = team.id`.
///
/// `team` is `None` when the member has no team or the referenced team is gone.
#[derive(Debug, Clone, Copy)]
pub struct JoinedRow<'a> {
    pub member: &'a Member,
    pub team: Option<&'a Team>,
}

impl<'a> JoinedRow<'a> {
    pub fn new(member: &'a Member, team: Option<&'a Team>) -> Self {
        Self { member, team }
    }

    pub fn project(&self) -> MemberTeam {
        MemberTeam::project(self.member, self.team)
    }
}
