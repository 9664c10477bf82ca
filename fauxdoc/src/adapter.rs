use async_trait::async_trait;
use fauxdoc_core::Value;
use fauxdoc_eval::Params;
use fauxdoc_store::StoredDocument;

use crate::error::FauxError;

/// The boundary a real-Service-backed implementation would satisfy instead
/// of this crate's in-memory [`crate::FauxClient`]. Only the in-memory
/// implementation ships here; this trait exists so callers can depend on
/// an abstraction rather than the concrete fake.
#[async_trait]
pub trait Adapter: Send + Sync {
    /// See [`fauxdoc_store::Registry::create_container`].
    async fn create_container(&self, database: &str, name: &str, partition_key_path: &str);

    /// See [`fauxdoc_store::Container::upsert`].
    async fn upsert(
        &self,
        database: &str,
        container: &str,
        document: Value,
        partition_key: Option<&str>,
    ) -> Result<StoredDocument, FauxError>;

    /// See [`fauxdoc_store::Container::read`].
    async fn read(
        &self,
        database: &str,
        container: &str,
        id: &str,
        partition_key: Option<&str>,
    ) -> Result<Value, FauxError>;

    /// See [`fauxdoc_store::Container::query`].
    async fn query(
        &self,
        database: &str,
        container: &str,
        text: &str,
        params: &Params,
    ) -> Result<Vec<Value>, FauxError>;
}
