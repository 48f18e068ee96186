//! Sort orders passed through to the store.

use crate::query::column::{Column, JoinedRow};
use crate::query::error::SearchError;
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    fn parse(s: &str) -> Option<Direction> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Some(Direction::Asc),
            "desc" => Some(Direction::Desc),
            _ => None,
        }
    }
}

/// Where NULLs go in the ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NullHandling {
    /// PostgreSQL default: NULLs sort as larger than any value (last ascending, first
    /// descending).
    #[default]
    Native,
    NullsFirst,
    NullsLast,
}

/// One ordering term: a column, a direction and a NULL placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSpecifier {
    pub column: Column,
    pub direction: Direction,
    pub nulls: NullHandling,
}

impl OrderSpecifier {
    pub fn asc(column: Column) -> Self {
        Self {
            column,
            direction: Direction::Asc,
            nulls: NullHandling::Native,
        }
    }

    pub fn desc(column: Column) -> Self {
        Self {
            column,
            direction: Direction::Desc,
            nulls: NullHandling::Native,
        }
    }

    pub fn nulls_first(mut self) -> Self {
        self.nulls = NullHandling::NullsFirst;
        self
    }

    pub fn nulls_last(mut self) -> Self {
        self.nulls = NullHandling::NullsLast;
        self
    }

    pub fn compare(&self, a: &JoinedRow<'_>, b: &JoinedRow<'_>) -> Ordering {
        let (left, right) = (self.column.read(a), self.column.read(b));
        match (left, right) {
            (Some(l), Some(r)) => {
                let ord = l.compare(&r).unwrap_or(Ordering::Equal);
                match self.direction {
                    Direction::Asc => ord,
                    Direction::Desc => ord.reverse(),
                }
            }
            (None, None) => Ordering::Equal,
            (None, Some(_)) => self.null_ordering(),
            (Some(_), None) => self.null_ordering().reverse(),
        }
    }

    // ordering of a NULL relative to a non-NULL
    fn null_ordering(&self) -> Ordering {
        match (self.nulls, self.direction) {
            (NullHandling::NullsFirst, _) => Ordering::Less,
            (NullHandling::NullsLast, _) => Ordering::Greater,
            (NullHandling::Native, Direction::Asc) => Ordering::Greater,
            (NullHandling::Native, Direction::Desc) => Ordering::Less,
        }
    }
}

impl fmt::Display for OrderSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir = match self.direction {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        };
        write!(f, "{} {}", self.column, dir)?;
        match self.nulls {
            NullHandling::Native => Ok(()),
            NullHandling::NullsFirst => write!(f, " NULLS FIRST"),
            NullHandling::NullsLast => write!(f, " NULLS LAST"),
        }
    }
}

/// An ordered list of [`OrderSpecifier`]s. Empty means unsorted (primary-key order).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sort {
    orders: Vec<OrderSpecifier>,
}

impl Sort {
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn by(order: OrderSpecifier) -> Self {
        Self {
            orders: vec![order],
        }
    }

    pub fn then(mut self, order: OrderSpecifier) -> Self {
        self.orders.push(order);
        self
    }

    pub fn is_unsorted(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn orders(&self) -> &[OrderSpecifier] {
        &self.orders
    }

    /// Parses request-style sort strings, each `"property"` or `"property,direction"`.
    ///
    /// ```
    /// use query_recipe::query::{Direction, Sort};
    ///
    /// let sort = Sort::parse(["age,desc", "username"]).unwrap();
    /// assert_eq!(sort.orders()[0].direction, Direction::Desc);
    /// assert_eq!(sort.orders()[1].direction, Direction::Asc);
    /// ```
    pub fn parse<I, S>(terms: I) -> Result<Self, SearchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sort = Sort::unsorted();
        for term in terms {
            let term = term.as_ref();
            let mut parts = term.split(',').map(str::trim);
            let property = parts.next().unwrap_or_default();
            let column = Column::from_property(property)
                .ok_or_else(|| SearchError::InvalidSort(format!("unknown property '{}'", property)))?;
            let direction = match parts.next() {
                None | Some("") => Direction::Asc,
                Some(d) => Direction::parse(d)
                    .ok_or_else(|| SearchError::InvalidSort(format!("unknown direction '{}'", d)))?,
            };
            if parts.next().is_some() {
                return Err(SearchError::InvalidSort(format!("malformed sort '{}'", term)));
            }
            sort = sort.then(OrderSpecifier {
                column,
                direction,
                nulls: NullHandling::Native,
            });
        }
        Ok(sort)
    }

    /// Compares two rows term by term; ties fall through to the next term.
    pub fn compare(&self, a: &JoinedRow<'_>, b: &JoinedRow<'_>) -> Ordering {
        self.orders
            .iter()
            .map(|o| o.compare(a, b))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

impl From<OrderSpecifier> for Sort {
    fn from(order: OrderSpecifier) -> Self {
        Sort::by(order)
    }
}
