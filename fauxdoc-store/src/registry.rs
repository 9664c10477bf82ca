use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;

use crate::{container::Container, error::StoreError, partition::PartitionKeyPath};

/// The name of the database used when callers address a container without
/// naming one explicitly — just another named database, per spec's
/// "container equivalence note".
pub const DEFAULT_DATABASE: &str = "_default";

/// Top-level registry: a map of named databases, each a map of named
/// containers.
///
/// Structural changes (new database, new container) take the registry-wide
/// lock; row-level mutation (`upsert`) only takes the affected container's
/// own lock, so concurrent queries against other containers are never
/// blocked by an unrelated write.
pub struct Registry {
    databases: RwLock<HashMap<String, HashMap<String, Arc<Container>>>>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            databases: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a container, idempotently: if `name` already exists in
    /// `database`, returns the existing container unchanged (the supplied
    /// partition-key path is ignored on re-creation).
    pub fn create_container(
        &self,
        database: &str,
        name: &str,
        partition_key_path: &str,
    ) -> Arc<Container> {
        let mut databases = self.databases.write();
        let db = databases.entry(database.to_string()).or_default();
        db.entry(name.to_string())
            .or_insert_with(|| Arc::new(Container::new(PartitionKeyPath::parse(partition_key_path))))
            .clone()
    }

    /// Looks up an existing container, without creating it.
    pub fn container(&self, database: &str, name: &str) -> Result<Arc<Container>, StoreError> {
        let databases = self.databases.read();
        databases
            .get(database)
            .and_then(|db| db.get(name))
            .cloned()
            .ok_or_else(|| StoreError::ContainerMissing {
                database: database.to_string(),
                container: name.to_string(),
            })
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fauxdoc_core::Value;

    #[test]
    fn create_container_is_idempotent() {
        let registry = Registry::new();
        let a = registry.create_container(DEFAULT_DATABASE, "items", "/id");
        let b = registry.create_container(DEFAULT_DATABASE, "items", "/OtherPath");
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn missing_container_is_an_error() {
        let registry = Registry::new();
        assert!(matches!(
            registry.container(DEFAULT_DATABASE, "nope"),
            Err(StoreError::ContainerMissing { .. })
        ));
    }

    #[test]
    fn containers_in_different_databases_are_independent() {
        let registry = Registry::new();
        let a = registry.create_container("db1", "items", "/id");
        a.upsert(
            {
                let mut doc = Value::object();
                doc.as_object_mut().unwrap().insert("id".into(), Value::String("1".into()));
                doc
            },
            None,
        )
        .unwrap();

        let b = registry.create_container("db2", "items", "/id");
        assert_eq!(b.snapshot().len(), 0);
    }
}
