use std::sync::Arc;

use fauxdoc_core::Value;
use fauxdoc_store::{Container, Registry, DEFAULT_DATABASE};
use uuid::Uuid;

use crate::{error::FauxError, feed::{FeedIterator, ItemResponse}, options::QueryRequestOptions};

/// Top-level handle onto an in-memory registry of databases and
/// containers. Cheap to clone (an `Arc` internally); every `.database(...)`
/// call returns a lightweight handle rather than allocating a new registry.
#[derive(Clone)]
pub struct FauxClient {
    registry: Arc<Registry>,
}

impl FauxClient {
    /// Creates a client over a fresh, empty registry.
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Registry::new()),
        }
    }

    /// Returns a handle to the named database (created lazily on first
    /// `create_container` call; naming it here doesn't allocate anything).
    pub fn database(&self, name: &str) -> FauxDatabase {
        FauxDatabase {
            registry: self.registry.clone(),
            name: name.to_string(),
        }
    }

    /// Returns a handle to the default, unnamed database.
    pub fn default_database(&self) -> FauxDatabase {
        self.database(DEFAULT_DATABASE)
    }
}

impl Default for FauxClient {
    fn default() -> Self {
        Self::new()
    }
}

/// A handle to one named database.
#[derive(Clone)]
pub struct FauxDatabase {
    registry: Arc<Registry>,
    name: String,
}

impl FauxDatabase {
    /// Creates a container, idempotently. Re-creating an existing
    /// container ignores `partition_key_path` and returns the original.
    #[tracing::instrument(skip(self), fields(database = %self.name))]
    pub async fn create_container(&self, name: &str, partition_key_path: &str) -> FauxContainer {
        let container = self
            .registry
            .create_container(&self.name, name, partition_key_path);
        FauxContainer {
            container,
            name: name.to_string(),
        }
    }

    /// Looks up an existing container.
    pub fn container(&self, name: &str) -> Result<FauxContainer, FauxError> {
        let container = self.registry.container(&self.name, name)?;
        Ok(FauxContainer {
            container,
            name: name.to_string(),
        })
    }
}

/// A handle to one named container.
#[derive(Clone)]
pub struct FauxContainer {
    container: Arc<Container>,
    name: String,
}

impl FauxContainer {
    /// Inserts or replaces a document by `(id, partition-key)` identity.
    #[tracing::instrument(skip(self, document), fields(container = %self.name))]
    pub async fn upsert(
        &self,
        document: Value,
        partition_key: Option<&str>,
    ) -> Result<ItemResponse<Value>, FauxError> {
        let stored = self.container.upsert(document, partition_key)?;
        tracing::debug!(etag = %stored.etag, "upserted document");
        Ok(ItemResponse {
            value: stored.value,
            etag: stored.etag,
        })
    }

    /// Reads a document by `(id, partition-key)`.
    #[tracing::instrument(skip(self), fields(container = %self.name))]
    pub async fn read(&self, id: &str, partition_key: Option<&str>) -> Result<ItemResponse<Value>, FauxError> {
        let value = self.container.read(id, partition_key)?;
        Ok(ItemResponse {
            value,
            etag: Uuid::new_v4().to_string(),
        })
    }

    /// Parses and executes `text`, materializing the full result and
    /// wrapping it in a page-sized [`FeedIterator`].
    #[tracing::instrument(skip(self, options), fields(container = %self.name, rows = tracing::field::Empty))]
    pub async fn query_items(
        &self,
        text: &str,
        options: QueryRequestOptions,
    ) -> Result<FeedIterator, FauxError> {
        let rows = self.container.query(text, &options.parameters)?;
        tracing::Span::current().record("rows", rows.len());
        Ok(FeedIterator::new(
            Arc::new(rows),
            options.page_size.unwrap_or(usize::MAX),
            options.continuation_token,
        ))
    }
}
