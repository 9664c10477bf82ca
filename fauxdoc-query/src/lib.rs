#![deny(missing_docs)]
#![warn(unused_imports)]

//! Query execution: the WHERE → ORDER BY → TOP/LIMIT → projection pipeline
//! ([`run`]) and the continuation-token [`Paginator`] that slices a
//! materialized result into pages.

mod error;
mod paginator;
mod pipeline;

pub use error::QueryError;
pub use paginator::Paginator;
pub use pipeline::run;
