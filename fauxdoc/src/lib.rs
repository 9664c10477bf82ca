#![deny(missing_docs)]
#![warn(unused_imports)]

//! # fauxdoc
//!
//! An in-process fake of a cloud document database's SQL-over-JSON query
//! surface: a client/database/container façade backed entirely by
//! in-memory state, for use as a test double. Nothing here touches a
//! network; every `async fn` on the façade resolves without suspending.

mod adapter;
mod client;
mod error;
mod feed;
mod options;

pub use adapter::Adapter;
pub use client::{FauxClient, FauxContainer, FauxDatabase};
pub use error::FauxError;
pub use feed::{FeedIterator, FeedPage, ItemResponse};
pub use options::QueryRequestOptions;

pub use fauxdoc_core::Value;
