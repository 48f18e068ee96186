//! Typed column paths.
//!
//! A path is a handle on one column that knows its value kind, so a string column only
//! offers string operators and a number column only number operators. Every operator
//! returns a [`Predicate`] (or an [`OrderSpecifier`] for `asc`/`desc`).
//!
//! ```
//! use query_recipe::query::path::{member, team};
//!
//! let filter = team::name().eq("TeamB").and(member::age().between(30, 40));
//! let order = member::age().desc();
//! # let _ = (filter, order);
//! ```

use crate::query::column::{Column, Value};
use crate::query::predicate::{escape_like, CompareOp, Predicate};
use crate::query::sort::OrderSpecifier;

/// A text-valued column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringPath(Column);

/// An integer-valued column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberPath(Column);

macro_rules! common_ops {
    ($path:ty, $arg:ty) => {
        impl $path {
            pub fn column(&self) -> Column {
                self.0
            }

            fn compare(&self, op: CompareOp, value: $arg) -> Predicate {
                Predicate::Compare {
                    column: self.0,
                    op,
                    value: Value::from(value),
                }
            }

            pub fn eq(&self, value: $arg) -> Predicate {
                self.compare(CompareOp::Eq, value)
            }

            pub fn ne(&self, value: $arg) -> Predicate {
                self.compare(CompareOp::Ne, value)
            }

            pub fn in_<I, V>(&self, values: I) -> Predicate
            where
                I: IntoIterator<Item = V>,
                V: Into<Value>,
            {
                Predicate::In {
                    column: self.0,
                    values: values.into_iter().map(Into::into).collect(),
                }
            }

            pub fn is_null(&self) -> Predicate {
                Predicate::IsNull(self.0)
            }

            pub fn is_not_null(&self) -> Predicate {
                Predicate::IsNotNull(self.0)
            }

            pub fn asc(&self) -> OrderSpecifier {
                OrderSpecifier::asc(self.0)
            }

            pub fn desc(&self) -> OrderSpecifier {
                OrderSpecifier::desc(self.0)
            }
        }
    };
}

common_ops!(StringPath, &str);
common_ops!(NumberPath, i64);

impl StringPath {
    /// Raw LIKE pattern; `%` and `_` are wildcards.
    pub fn like(&self, pattern: &str) -> Predicate {
        Predicate::Like {
            column: self.0,
            pattern: pattern.to_string(),
        }
    }

    /// Substring match; wildcards in `text` match literally.
    pub fn contains(&self, text: &str) -> Predicate {
        self.like(&format!("%{}%", escape_like(text)))
    }

    pub fn starts_with(&self, text: &str) -> Predicate {
        self.like(&format!("{}%", escape_like(text)))
    }
}

impl NumberPath {
    fn bound(&self, op: CompareOp, value: impl Into<i64>) -> Predicate {
        self.compare(op, value.into())
    }

    /// `>=`
    pub fn goe(&self, value: impl Into<i64>) -> Predicate {
        self.bound(CompareOp::Goe, value)
    }

    /// `<=`
    pub fn loe(&self, value: impl Into<i64>) -> Predicate {
        self.bound(CompareOp::Loe, value)
    }

    pub fn gt(&self, value: impl Into<i64>) -> Predicate {
        self.bound(CompareOp::Gt, value)
    }

    pub fn lt(&self, value: impl Into<i64>) -> Predicate {
        self.bound(CompareOp::Lt, value)
    }

    /// Inclusive range.
    pub fn between(&self, low: impl Into<i64>, high: impl Into<i64>) -> Predicate {
        Predicate::Between {
            column: self.0,
            low: Value::Int(low.into()),
            high: Value::Int(high.into()),
        }
    }
}

/// Paths over the `member` table.
pub mod member {
    use super::{NumberPath, StringPath};
    use crate::query::column::Column;

    pub fn id() -> NumberPath {
        NumberPath(Column::MemberId)
    }

    pub fn username() -> StringPath {
        StringPath(Column::MemberUsername)
    }

    pub fn age() -> NumberPath {
        NumberPath(Column::MemberAge)
    }

    /// The stored foreign key, independent of whether the team row exists.
    pub fn team_id() -> NumberPath {
        NumberPath(Column::MemberTeamId)
    }
}

/// Paths over the `team` table, as seen through the outer join.
pub mod team {
    use super::{NumberPath, StringPath};
    use crate::query::column::Column;

    pub fn id() -> NumberPath {
        NumberPath(Column::TeamId)
    }

    pub fn name() -> StringPath {
        StringPath(Column::TeamName)
    }
}
