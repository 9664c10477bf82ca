use std::fmt;

use fauxdoc_core::{PropertyPath, Value};

/// A query expression.
///
/// Mirrors the grammar's `Expr` production directly: each variant is one
/// production, and evaluation (in `fauxdoc-eval`) is a single `match` over
/// this enum rather than a per-variant strategy type.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    /// A literal constant, e.g. `'Alice'`, `30`, `TRUE`, `NULL`.
    Constant(Value),
    /// A (possibly dotted, possibly aliased) property path, e.g. `c.Name`.
    Property(PropertyPath),
    /// A `@name` parameter reference (name stored without the leading `@`).
    Parameter(String),
    /// `NOT expr`.
    Unary(UnaryOp, Box<Expr>),
    /// `lhs op rhs`.
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
    /// `expr BETWEEN lower AND upper`.
    Between(Box<Expr>, Box<BetweenBounds>),
    /// A built-in function call, e.g. `CONTAINS(c.Name, 'a', true)`.
    Function(FunctionCall),
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(v) => write!(f, "{v}"),
            Expr::Property(p) => write!(f, "{p}"),
            Expr::Parameter(name) => write!(f, "@{name}"),
            Expr::Unary(op, expr) => write!(f, "{op} {expr}"),
            Expr::Binary(op, lhs, rhs) => write!(f, "{lhs} {op} {rhs}"),
            Expr::Between(expr, bounds) => write!(f, "{expr} BETWEEN {bounds}"),
            Expr::Function(call) => write!(f, "{call}"),
        }
    }
}

/// The bounds of a `BETWEEN ... AND ...` expression.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BetweenBounds {
    /// The lower bound (inclusive).
    pub lower: Expr,
    /// The upper bound (inclusive).
    pub upper: Expr,
}

impl fmt::Display for BetweenBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} AND {}", self.lower, self.upper)
    }
}

/// Unary operators.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOp {
    /// Logical negation; defined only on boolean operands.
    Not,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NOT")
    }
}

/// Binary operators.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    /// `=`
    Equal,
    /// `!=` / `<>`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEq,
    /// `>`
    Greater,
    /// `>=`
    GreaterEq,
    /// `AND`
    And,
    /// `OR`
    Or,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BinaryOp::Equal => "=",
            BinaryOp::NotEqual => "!=",
            BinaryOp::Less => "<",
            BinaryOp::LessEq => "<=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEq => ">=",
            BinaryOp::And => "AND",
            BinaryOp::Or => "OR",
        })
    }
}

/// A call to one of the dialect's built-in functions.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionCall {
    /// Function name, exactly as it appeared in the query text (comparison
    /// is case-insensitive and happens in the evaluator).
    pub name: String,
    /// Argument expressions, in source order.
    pub args: Vec<Expr>,
}

impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(")")
    }
}
