//! Filter model shared by every store.
//!
//! A list query becomes a [`Filter`]: one typed clause per filter field the
//! client supplied, joined by an [`Operation`]. The same clause list is
//! evaluated row by row in memory or rendered into a SQL `WHERE` clause.

use chrono::{DateTime, Utc};
use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

use crate::models::{CategoryLabel, MapRow, PointRow};

/// Boolean combinator applied across the clauses of a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operation {
    #[default]
    And,
    Or,
    Nor,
}

impl Operation {
    /// Fold clause results. An empty filter matches everything.
    pub fn combine<I>(self, results: I) -> bool
    where
        I: IntoIterator<Item = bool>,
    {
        let mut results = results.into_iter().peekable();
        if results.peek().is_none() {
            return true;
        }
        match self {
            Operation::And => results.all(|r| r),
            Operation::Or => results.any(|r| r),
            Operation::Nor => !results.any(|r| r),
        }
    }

    fn joiner(self) -> &'static str {
        match self {
            Operation::And => " AND ",
            Operation::Or | Operation::Nor => " OR ",
        }
    }
}

/// A single predicate over one kind of row.
pub trait Clause {
    type Row;

    fn matches(&self, row: &Self::Row) -> bool;

    /// Append this predicate as a SQL boolean expression.
    fn push_sql(&self, query: &mut QueryBuilder<'_, Postgres>);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Filter<C> {
    pub operation: Operation,
    pub clauses: Vec<C>,
}

impl<C> Default for Filter<C> {
    fn default() -> Self {
        Self {
            operation: Operation::default(),
            clauses: Vec::new(),
        }
    }
}

impl<C: Clause> Filter<C> {
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            clauses: Vec::new(),
        }
    }

    pub fn with(mut self, clause: C) -> Self {
        self.clauses.push(clause);
        self
    }

    pub fn push(&mut self, clause: C) {
        self.clauses.push(clause);
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn matches(&self, row: &C::Row) -> bool {
        self.operation
            .combine(self.clauses.iter().map(|clause| clause.matches(row)))
    }

    /// Append ` WHERE ...` for the clauses, or nothing when there are none.
    pub fn push_where(&self, query: &mut QueryBuilder<'_, Postgres>) {
        if self.clauses.is_empty() {
            return;
        }

        query.push(" WHERE ");
        if self.operation == Operation::Nor {
            query.push("NOT ");
        }
        query.push("(");
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                query.push(self.operation.joiner());
            }
            query.push("(");
            clause.push_sql(query);
            query.push(")");
        }
        query.push(")");
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MapClause {
    Id(Uuid),
    MapName(String),
    CreatorName(String),
    /// `created_at >= ...`
    CreatedFrom(DateTime<Utc>),
    /// `created_at <= ...`
    CreatedUntil(DateTime<Utc>),
}

pub type MapFilter = Filter<MapClause>;

impl Clause for MapClause {
    type Row = MapRow;

    fn matches(&self, row: &MapRow) -> bool {
        match self {
            MapClause::Id(id) => row.id == *id,
            MapClause::MapName(name) => row.map_name.as_deref() == Some(name.as_str()),
            MapClause::CreatorName(name) => row.creator_name.as_deref() == Some(name.as_str()),
            MapClause::CreatedFrom(from) => row.created_at >= *from,
            MapClause::CreatedUntil(until) => row.created_at <= *until,
        }
    }

    fn push_sql(&self, query: &mut QueryBuilder<'_, Postgres>) {
        // Nullable columns compare with IS NOT DISTINCT FROM so NOR never sees NULL.
        match self {
            MapClause::Id(id) => {
                query.push("id = ").push_bind(*id);
            }
            MapClause::MapName(name) => {
                query
                    .push("map_name IS NOT DISTINCT FROM ")
                    .push_bind(name.clone());
            }
            MapClause::CreatorName(name) => {
                query
                    .push("creator_name IS NOT DISTINCT FROM ")
                    .push_bind(name.clone());
            }
            MapClause::CreatedFrom(from) => {
                query.push("created_at >= ").push_bind(*from);
            }
            MapClause::CreatedUntil(until) => {
                query.push("created_at <= ").push_bind(*until);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PointClause {
    Id(Uuid),
    MapId(Uuid),
    /// Exact location.
    At { x: i32, y: i32 },
    /// Euclidean distance from `(x, y)` at most `radius`, inclusive.
    Within { x: i32, y: i32, radius: i32 },
    CreatorName(String),
    Category(CategoryLabel),
}

pub type PointFilter = Filter<PointClause>;

impl Clause for PointClause {
    type Row = PointRow;

    fn matches(&self, row: &PointRow) -> bool {
        match self {
            PointClause::Id(id) => row.id == *id,
            PointClause::MapId(map_id) => row.map_id == *map_id,
            PointClause::At { x, y } => row.x == *x && row.y == *y,
            PointClause::Within { x, y, radius } => {
                let dx = i128::from(row.x) - i128::from(*x);
                let dy = i128::from(row.y) - i128::from(*y);
                let r = i128::from(*radius);
                dx * dx + dy * dy <= r * r
            }
            PointClause::CreatorName(name) => row.creator_name.as_deref() == Some(name.as_str()),
            PointClause::Category(label) => row.category.as_deref() == Some(label.as_str()),
        }
    }

    fn push_sql(&self, query: &mut QueryBuilder<'_, Postgres>) {
        match self {
            PointClause::Id(id) => {
                query.push("id = ").push_bind(*id);
            }
            PointClause::MapId(map_id) => {
                query.push("map_id = ").push_bind(*map_id);
            }
            PointClause::At { x, y } => {
                query
                    .push("x = ")
                    .push_bind(*x)
                    .push(" AND y = ")
                    .push_bind(*y);
            }
            PointClause::Within { x, y, radius } => {
                // numeric: the squared span of two i32 values overflows bigint.
                let (x, y, r) = (i64::from(*x), i64::from(*y), i64::from(*radius));
                query
                    .push("(x::numeric - ")
                    .push_bind(x)
                    .push(") * (x::numeric - ")
                    .push_bind(x)
                    .push(") + (y::numeric - ")
                    .push_bind(y)
                    .push(") * (y::numeric - ")
                    .push_bind(y)
                    .push(") <= ")
                    .push_bind(r * r);
            }
            PointClause::CreatorName(name) => {
                query
                    .push("creator_name IS NOT DISTINCT FROM ")
                    .push_bind(name.clone());
            }
            PointClause::Category(label) => {
                query
                    .push("category IS NOT DISTINCT FROM ")
                    .push_bind(label.as_str());
            }
        }
    }
}
