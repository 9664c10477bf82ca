use thiserror::Error;

/// Failure from a registry operation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// `read` of a missing `(id, partition-key)` pair.
    #[error("no document with id {id:?} and partition key {partition_key:?}")]
    NotFound {
        /// The requested id.
        id: String,
        /// The requested partition-key value, if any.
        partition_key: Option<String>,
    },
    /// An operation named a container the registry doesn't know about.
    #[error("container {container:?} does not exist in database {database:?}")]
    ContainerMissing {
        /// The database name.
        database: String,
        /// The missing container name.
        container: String,
    },
    /// `upsert` of a value with no usable `id`.
    #[error("{reason}")]
    InvalidDocument {
        /// Human-readable explanation (missing `id`, or conflicting
        /// `id`/`Id` values).
        reason: String,
    },
    /// The query text failed to parse.
    #[error(transparent)]
    Parse(#[from] fauxdoc_parser::ParserError),
    /// The query failed at evaluation time.
    #[error(transparent)]
    Query(#[from] fauxdoc_query::QueryError),
}
