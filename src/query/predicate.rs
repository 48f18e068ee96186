//! # Filter Expressions
//!
//! [`Predicate`] is a tagged-variant filter tree over the joined member/team relation.
//! Predicates are built from typed column paths (see [`path`](crate::query::path)),
//! combined with `and` / `or` / `not`, and either evaluated in-process
//! ([`Predicate::matches`]) or rendered to SQL ([`sql`](crate::query::sql)).
//!
//! ## Optional fragments
//!
//! Dynamic queries produce a list of *optional* fragments: one per search criterion,
//! `None` when the criterion is absent. [`all_of`] drops the absent ones and folds the rest
//! with AND, so an absent criterion is omitted from the filter instead of turning into an
//! always-true condition. [`PredicateBuilder`] does the same incrementally.
//!
//! ## NULL semantics
//!
//! Evaluation follows SQL three-valued logic: a comparison involving NULL is *unknown*,
//! unknown propagates through `NOT`, and only rows whose filter is *true* match. A member
//! without a team therefore never matches `team.name = 'TeamA'`, nor
//! `NOT (team.name = 'TeamA')`.

use crate::query::column::{Column, JoinedRow, Value};
use std::cmp::Ordering;

/// Binary comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    /// Greater or equal.
    Goe,
    /// Less or equal.
    Loe,
    Gt,
    Lt,
}

impl CompareOp {
    fn holds(self, ordering: Ordering) -> bool {
        match self {
            CompareOp::Eq => ordering == Ordering::Equal,
            CompareOp::Ne => ordering != Ordering::Equal,
            CompareOp::Goe => ordering != Ordering::Less,
            CompareOp::Loe => ordering != Ordering::Greater,
            CompareOp::Gt => ordering == Ordering::Greater,
            CompareOp::Lt => ordering == Ordering::Less,
        }
    }
}

/// A composable boolean condition over the joined relation.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Compare {
        column: Column,
        op: CompareOp,
        value: Value,
    },
    /// Inclusive on both ends.
    Between {
        column: Column,
        low: Value,
        high: Value,
    },
    In {
        column: Column,
        values: Vec<Value>,
    },
    /// SQL `LIKE`: `%` matches any run, `_` one character, `\` escapes.
    Like {
        column: Column,
        pattern: String,
    },
    IsNull(Column),
    IsNotNull(Column),
    And(Vec<Predicate>),
    Or(Vec<Predicate>),
    Not(Box<Predicate>),
}

impl Predicate {
    /// `self AND other`, flattening nested conjunctions.
    pub fn and(self, other: Predicate) -> Predicate {
        match (self, other) {
            (Predicate::And(mut left), Predicate::And(right)) => {
                left.extend(right);
                Predicate::And(left)
            }
            (Predicate::And(mut left), right) => {
                left.push(right);
                Predicate::And(left)
            }
            (left, Predicate::And(mut right)) => {
                right.insert(0, left);
                Predicate::And(right)
            }
            (left, right) => Predicate::And(vec![left, right]),
        }
    }

    /// `self AND other`, or `self` unchanged when `other` is absent.
    pub fn and_opt(self, other: Option<Predicate>) -> Predicate {
        match other {
            Some(other) => self.and(other),
            None => self,
        }
    }

    /// `self OR other`, flattening nested disjunctions.
    pub fn or(self, other: Predicate) -> Predicate {
        match (self, other) {
            (Predicate::Or(mut left), Predicate::Or(right)) => {
                left.extend(right);
                Predicate::Or(left)
            }
            (Predicate::Or(mut left), right) => {
                left.push(right);
                Predicate::Or(left)
            }
            (left, right) => Predicate::Or(vec![left, right]),
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Predicate {
        match self {
            Predicate::Not(inner) => *inner,
            other => Predicate::Not(Box::new(other)),
        }
    }

    /// True only when the filter evaluates to *true* (not false, not unknown) for `row`.
    pub fn matches(&self, row: &JoinedRow<'_>) -> bool {
        self.eval(row) == Some(true)
    }

    /// Three-valued evaluation; `None` is SQL UNKNOWN.
    pub fn eval(&self, row: &JoinedRow<'_>) -> Option<bool> {
        match self {
            Predicate::Compare { column, op, value } => {
                let actual = column.read(row)?;
                actual.compare(value).map(|ord| op.holds(ord))
            }
            Predicate::Between { column, low, high } => {
                let actual = column.read(row)?;
                let above = actual.compare(low)? != Ordering::Less;
                let below = actual.compare(high)? != Ordering::Greater;
                Some(above && below)
            }
            Predicate::In { column, values } => {
                let actual = column.read(row)?;
                let found = values
                    .iter()
                    .any(|v| actual.compare(v) == Some(Ordering::Equal));
                Some(found)
            }
            Predicate::Like { column, pattern } => match column.read(row)? {
                Value::Text(text) => Some(like_matches(&text, pattern)),
                Value::Int(n) => Some(like_matches(&n.to_string(), pattern)),
            },
            Predicate::IsNull(column) => Some(column.read(row).is_none()),
            Predicate::IsNotNull(column) => Some(column.read(row).is_some()),
            Predicate::And(parts) => {
                let mut unknown = false;
                for part in parts {
                    match part.eval(row) {
                        Some(false) => return Some(false),
                        None => unknown = true,
                        Some(true) => {}
                    }
                }
                if unknown {
                    None
                } else {
                    Some(true)
                }
            }
            Predicate::Or(parts) => {
                let mut unknown = false;
                for part in parts {
                    match part.eval(row) {
                        Some(true) => return Some(true),
                        None => unknown = true,
                        Some(false) => {}
                    }
                }
                if unknown {
                    None
                } else {
                    Some(false)
                }
            }
            Predicate::Not(inner) => inner.eval(row).map(|b| !b),
        }
    }
}

/// Folds optional fragments with AND, skipping absent ones.
///
/// Returns `None` (no constraint) when every fragment is absent.
pub fn all_of<I>(fragments: I) -> Option<Predicate>
where
    I: IntoIterator<Item = Option<Predicate>>,
{
    fragments
        .into_iter()
        .flatten()
        .reduce(|acc, next| acc.and(next))
}

/// Accumulates a filter one fragment at a time.
///
/// ```
/// use query_recipe::query::path::member;
/// use query_recipe::query::PredicateBuilder;
///
/// let mut builder = PredicateBuilder::new();
/// builder.and(member::age().goe(30));
/// builder.and_opt(None);
/// assert!(builder.has_value());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PredicateBuilder {
    predicate: Option<Predicate>,
}

impl PredicateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn and(&mut self, right: Predicate) -> &mut Self {
        self.predicate = Some(match self.predicate.take() {
            Some(left) => left.and(right),
            None => right,
        });
        self
    }

    pub fn and_opt(&mut self, right: Option<Predicate>) -> &mut Self {
        if let Some(right) = right {
            self.and(right);
        }
        self
    }

    pub fn or(&mut self, right: Predicate) -> &mut Self {
        self.predicate = Some(match self.predicate.take() {
            Some(left) => left.or(right),
            None => right,
        });
        self
    }

    pub fn has_value(&self) -> bool {
        self.predicate.is_some()
    }

    pub fn build(self) -> Option<Predicate> {
        self.predicate
    }
}

/// Escapes `%`, `_` and `\` so `text` matches literally inside a LIKE pattern.
pub(crate) fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

enum Token {
    Any,
    One,
    Lit(char),
}

fn like_matches(text: &str, pattern: &str) -> bool {
    let mut tokens = Vec::new();
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        tokens.push(match c {
            '%' => Token::Any,
            '_' => Token::One,
            '\\' => Token::Lit(chars.next().unwrap_or('\\')),
            c => Token::Lit(c),
        });
    }
    let text: Vec<char> = text.chars().collect();

    // matched[j]: the first i chars of text match the first j tokens
    let mut matched = vec![false; tokens.len() + 1];
    matched[0] = true;
    for (j, token) in tokens.iter().enumerate() {
        if matches!(token, Token::Any) {
            matched[j + 1] = matched[j];
        }
    }
    for &c in &text {
        let mut next = vec![false; tokens.len() + 1];
        for (j, token) in tokens.iter().enumerate() {
            next[j + 1] = match token {
                Token::Any => next[j] || matched[j + 1],
                Token::One => matched[j],
                Token::Lit(l) => matched[j] && *l == c,
            };
        }
        matched = next;
    }
    matched[tokens.len()]
}
