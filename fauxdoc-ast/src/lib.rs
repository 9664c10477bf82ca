//! # fauxdoc-ast
//!
//! Abstract syntax tree for the query dialect the fake document store
//! accepts: `SELECT [TOP n] projection FROM source [AS alias] [WHERE expr]
//! [ORDER BY ...] [LIMIT n]`.
//!
//! The AST is immutable and owned by whoever parsed it; `fauxdoc-eval` and
//! `fauxdoc-query` only ever borrow it.

#![deny(missing_docs)]
#![warn(unused_imports)]

mod expr;
mod query;

pub use self::{
    expr::{BetweenBounds, BinaryOp, Expr, FunctionCall, UnaryOp},
    query::{
        Direction, FromClause, LimitClause, OrderByClause, OrderItem, Query, SelectClause,
        SelectItem, WhereClause,
    },
};
