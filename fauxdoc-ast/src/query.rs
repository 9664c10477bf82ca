use std::fmt;

use fauxdoc_core::PropertyPath;

use crate::expr::Expr;

/// A fully parsed query: `SELECT ... FROM ... WHERE ... ORDER BY ... LIMIT ...`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Query {
    /// The `SELECT` clause (`*` or a projection list, with optional `TOP`).
    pub select: SelectClause,
    /// The `FROM` clause, if present.
    pub from: Option<FromClause>,
    /// The `WHERE` clause, if present.
    pub r#where: Option<WhereClause>,
    /// The `ORDER BY` clause, if present.
    pub order_by: Option<OrderByClause>,
    /// The `LIMIT` clause, if present.
    pub limit: Option<LimitClause>,
}

impl Query {
    /// Returns the alias bound by the `FROM` clause, if any.
    pub fn alias(&self) -> Option<&str> {
        self.from.as_ref().and_then(|f| f.alias.as_deref())
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.select)?;
        if let Some(from) = &self.from {
            write!(f, " {from}")?;
        }
        if let Some(where_clause) = &self.r#where {
            write!(f, " {where_clause}")?;
        }
        if let Some(order_by) = &self.order_by {
            write!(f, " {order_by}")?;
        }
        if let Some(limit) = &self.limit {
            write!(f, " {limit}")?;
        }
        Ok(())
    }
}

/// The `SELECT` clause: either `*` or an ordered list of projection items,
/// plus an optional `TOP n`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectClause {
    /// `TOP n`, if present.
    pub top: Option<u64>,
    /// The projection: `All` for `SELECT *`, or an explicit item list.
    pub items: SelectItem,
}

impl fmt::Display for SelectClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT ")?;
        if let Some(top) = self.top {
            write!(f, "TOP {top} ")?;
        }
        write!(f, "{}", self.items)
    }
}

/// The projection list of a `SELECT` clause.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectItem {
    /// `SELECT *`.
    All,
    /// `SELECT a, b, c`: an ordered, non-empty list of property paths.
    Paths(Vec<PropertyPath>),
}

impl fmt::Display for SelectItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectItem::All => f.write_str("*"),
            SelectItem::Paths(paths) => {
                for (i, path) in paths.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{path}")?;
                }
                Ok(())
            }
        }
    }
}

/// The `FROM` clause: a source identifier plus an optional alias.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FromClause {
    /// The source identifier, e.g. the container name.
    pub source: String,
    /// The bound alias, e.g. `c` in `FROM Users AS c` or `FROM Users c`.
    pub alias: Option<String>,
}

impl fmt::Display for FromClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FROM {}", self.source)?;
        if let Some(alias) = &self.alias {
            write!(f, " {alias}")?;
        }
        Ok(())
    }
}

/// The `WHERE` clause: a single predicate expression.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WhereClause {
    /// The predicate.
    pub predicate: Expr,
}

impl fmt::Display for WhereClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WHERE {}", self.predicate)
    }
}

/// The `ORDER BY` clause: an ordered, non-empty list of sort keys.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderByClause {
    /// Sort keys, primary key first.
    pub items: Vec<OrderItem>,
}

impl fmt::Display for OrderByClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ORDER BY ")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

/// One `property [ASC|DESC]` sort key.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderItem {
    /// The sort key's property path.
    pub path: PropertyPath,
    /// Sort direction; `ASC` is the default when omitted in source.
    pub direction: Direction,
}

impl fmt::Display for OrderItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.path, self.direction)
    }
}

/// Sort direction.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Ascending (the default).
    #[default]
    Ascending,
    /// Descending.
    Descending,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Ascending => "ASC",
            Direction::Descending => "DESC",
        })
    }
}

/// The `LIMIT` clause.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LimitClause {
    /// The non-negative row cap.
    pub count: u64,
}

impl fmt::Display for LimitClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LIMIT {}", self.count)
    }
}
