#![deny(missing_docs)]
#![warn(unused_imports)]

//! Tree-walking evaluator for [`fauxdoc_ast::Expr`] over [`fauxdoc_core::Value`]
//! documents: property resolution, type coercion, comparison, and the
//! dialect's built-in functions.

mod coercion;
mod error;
mod eval;
mod functions;
mod resolve;
mod value;

pub use error::EvalError;
pub use eval::eval;
pub use value::{EvalValue, Params};
