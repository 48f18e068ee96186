//! # SQL Rendering
//!
//! [`MemberQuery`] is the store-facing description of one fetch: filter, order and
//! window. It renders to the PostgreSQL statement a relational store would run:
//!
//! ```sql
//! SELECT "member"."id" AS "member_id", "member"."username" AS "username", ...
//!   FROM "member" LEFT JOIN "team" ON "member"."team_id" = "team"."id"
//!  WHERE ... ORDER BY ... LIMIT ... OFFSET ...
//! ```
//!
//! [`count_sql`] renders the matching count statement: same join and filter, no window.
//! The in-process store does not execute SQL; it logs these statements at debug level.

use crate::query::column::{Column, Value};
use crate::query::predicate::{CompareOp, Predicate};
use crate::query::sort::{Direction, NullHandling, OrderSpecifier, Sort};
use sea_query::{
    Asterisk, Cond, Condition, Expr, Func, Iden, LikeExpr, NullOrdering, Order,
    PostgresQueryBuilder, Query, SelectStatement, SimpleExpr, Values,
};

#[derive(Debug, Clone, Copy)]
struct Ident(&'static str);

impl Iden for Ident {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        let _ = s.write_str(self.0);
    }
}

fn column_ref(column: Column) -> (Ident, Ident) {
    (Ident(column.table().name()), Ident(column.name()))
}

fn literal(value: &Value) -> SimpleExpr {
    match value {
        Value::Int(n) => Expr::val(*n).into(),
        Value::Text(s) => Expr::val(s.as_str()).into(),
    }
}

fn leaf(predicate: &Predicate) -> Option<SimpleExpr> {
    let expr = match predicate {
        Predicate::Compare { column, op, value } => {
            let col = Expr::col(column_ref(*column));
            let rhs = literal(value);
            match op {
                CompareOp::Eq => col.eq(rhs),
                CompareOp::Ne => col.ne(rhs),
                CompareOp::Goe => col.gte(rhs),
                CompareOp::Loe => col.lte(rhs),
                CompareOp::Gt => col.gt(rhs),
                CompareOp::Lt => col.lt(rhs),
            }
        }
        Predicate::Between { column, low, high } => {
            Expr::col(column_ref(*column)).between(literal(low), literal(high))
        }
        Predicate::In { column, values } => {
            Expr::col(column_ref(*column)).is_in(values.iter().map(literal))
        }
        Predicate::Like { column, pattern } => {
            Expr::col(column_ref(*column)).like(LikeExpr::new(pattern.as_str()).escape('\\'))
        }
        Predicate::IsNull(column) => Expr::col(column_ref(*column)).is_null(),
        Predicate::IsNotNull(column) => Expr::col(column_ref(*column)).is_not_null(),
        Predicate::And(_) | Predicate::Or(_) | Predicate::Not(_) => return None,
    };
    Some(expr)
}

/// Converts a filter tree into a sea-query condition.
pub fn condition(predicate: &Predicate) -> Condition {
    match predicate {
        Predicate::And(parts) => parts
            .iter()
            .fold(Cond::all(), |cond, part| cond.add(condition(part))),
        Predicate::Or(parts) => parts
            .iter()
            .fold(Cond::any(), |cond, part| cond.add(condition(part))),
        Predicate::Not(inner) => condition(inner).not(),
        other => match leaf(other) {
            Some(expr) => Cond::all().add(expr),
            None => Cond::all(),
        },
    }
}

fn joined_from(select: &mut SelectStatement) {
    select.from(Ident("member")).left_join(
        Ident("team"),
        Expr::col(column_ref(Column::MemberTeamId)).equals(column_ref(Column::TeamId)),
    );
}

fn order_term(select: &mut SelectStatement, order: &OrderSpecifier) {
    let direction = match order.direction {
        Direction::Asc => Order::Asc,
        Direction::Desc => Order::Desc,
    };
    let col = column_ref(order.column);
    match order.nulls {
        NullHandling::Native => {
            select.order_by(col, direction);
        }
        NullHandling::NullsFirst => {
            select.order_by_with_nulls(col, direction, NullOrdering::First);
        }
        NullHandling::NullsLast => {
            select.order_by_with_nulls(col, direction, NullOrdering::Last);
        }
    }
}

/// One fetch against the joined relation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberQuery {
    pub predicate: Option<Predicate>,
    pub sort: Sort,
    pub offset: u64,
    /// `None` fetches every matching row.
    pub limit: Option<u64>,
}

impl MemberQuery {
    pub fn new(predicate: Option<Predicate>) -> Self {
        Self {
            predicate,
            ..Self::default()
        }
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }

    pub fn window(mut self, offset: u64, limit: u64) -> Self {
        self.offset = offset;
        self.limit = Some(limit);
        self
    }

    /// The fetch as a sea-query statement.
    ///
    /// Rows are ordered by the sort terms, then by `member.id`.
    pub fn statement(&self) -> SelectStatement {
        let mut select = Query::select();
        select
            .expr_as(Expr::col(column_ref(Column::MemberId)), Ident("member_id"))
            .expr_as(Expr::col(column_ref(Column::MemberUsername)), Ident("username"))
            .expr_as(Expr::col(column_ref(Column::MemberAge)), Ident("age"))
            .expr_as(Expr::col(column_ref(Column::TeamId)), Ident("team_id"))
            .expr_as(Expr::col(column_ref(Column::TeamName)), Ident("team_name"));
        joined_from(&mut select);

        if let Some(predicate) = &self.predicate {
            select.cond_where(condition(predicate));
        }

        for order in self.sort.orders() {
            order_term(&mut select, order);
        }
        select.order_by(column_ref(Column::MemberId), Order::Asc);

        if let Some(limit) = self.limit {
            select.limit(limit);
        }
        if self.offset > 0 {
            select.offset(self.offset);
        }
        select
    }

    /// Values inlined; for logging.
    pub fn to_sql(&self) -> String {
        self.statement().to_string(PostgresQueryBuilder)
    }

    /// Parameterized statement and its bind values.
    pub fn build(&self) -> (String, Values) {
        self.statement().build(PostgresQueryBuilder)
    }
}

/// The count statement for `predicate` over the joined relation.
pub fn count_sql(predicate: Option<&Predicate>) -> String {
    let mut select = Query::select();
    select.expr(Func::count(Expr::col(Asterisk)));
    joined_from(&mut select);
    if let Some(predicate) = predicate {
        select.cond_where(condition(predicate));
    }
    select.to_string(PostgresQueryBuilder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::path::{member, team};

    #[test]
    fn test_fetch_sql_joins_and_windows() {
        let query = MemberQuery::new(Some(
            team::name().eq("TeamB").and(member::age().between(30, 40)),
        ))
        .window(3, 3);
        let sql = query.to_sql();

        assert!(sql.contains(r#"LEFT JOIN "team" ON "member"."team_id" = "team"."id""#), "{}", sql);
        assert!(sql.contains(r#""team"."name" = 'TeamB'"#), "{}", sql);
        assert!(sql.contains(r#""member"."age" BETWEEN 30 AND 40"#), "{}", sql);
        assert!(sql.contains("LIMIT 3"), "{}", sql);
        assert!(sql.contains("OFFSET 3"), "{}", sql);
        assert!(sql.contains(r#"AS "team_name""#), "{}", sql);
    }

    #[test]
    fn test_unfiltered_fetch_has_no_where() {
        let sql = MemberQuery::new(None).to_sql();
        assert!(!sql.contains("WHERE"), "{}", sql);
        assert!(!sql.contains("LIMIT"), "{}", sql);
        assert!(sql.ends_with(r#"ORDER BY "member"."id" ASC"#), "{}", sql);
    }

    #[test]
    fn test_sort_renders_before_key_tiebreak() {
        let sql = MemberQuery::new(None)
            .with_sort(Sort::by(team::name().desc().nulls_last()))
            .to_sql();
        assert!(
            sql.contains(r#"ORDER BY "team"."name" DESC NULLS LAST, "member"."id" ASC"#),
            "{}",
            sql
        );
    }

    #[test]
    fn test_build_binds_values() {
        let (sql, values) = MemberQuery::new(Some(member::username().eq("MemberA"))).build();
        assert!(sql.contains(r#""member"."username" = $1"#), "{}", sql);
        assert_eq!(values.0.len(), 1);
    }

    #[test]
    fn test_count_sql() {
        let sql = count_sql(Some(&team::name().is_null().or(member::age().lt(18))));
        assert!(sql.starts_with("SELECT COUNT(*)"), "{}", sql);
        assert!(sql.contains("LEFT JOIN"), "{}", sql);
        assert!(sql.contains(r#""team"."name" IS NULL OR "member"."age" < 18"#), "{}", sql);
        assert!(!sql.contains("LIMIT"), "{}", sql);
    }

    #[test]
    fn test_not_renders_negation() {
        let sql = count_sql(Some(&team::name().eq("TeamA").not()));
        assert!(sql.contains("NOT"), "{}", sql);
    }
}
