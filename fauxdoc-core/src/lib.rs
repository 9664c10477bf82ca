//! # fauxdoc-core
//!
//! Core value model shared by every other `fauxdoc` crate: the dynamic,
//! JSON-like [`Value`] used as both stored document and intermediate
//! evaluation result, and [`PropertyPath`], the owned representation of a
//! dotted property path with an optional leading alias.

#![deny(missing_docs)]
#![warn(unused_imports)]

mod path;
mod value;

pub use self::{
    path::PropertyPath,
    value::{Value, ID_FIELD},
};
