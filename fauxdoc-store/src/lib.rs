#![deny(missing_docs)]
#![warn(unused_imports)]

//! In-memory document store: a registry of named databases and
//! containers, each holding an insertion-ordered document list, with
//! upsert/read/query operations and `(id, partition-key)` document
//! identity.

mod container;
mod error;
mod partition;
mod registry;

pub use container::{Container, StoredDocument};
pub use error::StoreError;
pub use partition::PartitionKeyPath;
pub use registry::{Registry, DEFAULT_DATABASE};
