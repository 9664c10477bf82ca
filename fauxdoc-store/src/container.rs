use std::sync::Arc;

use fauxdoc_core::{Value, ID_FIELD};
use fauxdoc_eval::Params;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::{error::StoreError, partition::PartitionKeyPath};

/// One named container: a document list plus its partition-key path.
///
/// Mutation is guarded by a single `RwLock` so an upsert is observable
/// either fully or not at all, per spec's "no partial mutations".
pub struct Container {
    partition_key_path: PartitionKeyPath,
    rows: RwLock<Vec<Value>>,
}

/// The stored form of a document plus its synthetic etag.
pub struct StoredDocument {
    /// The stored document (always an `Object` with a lowercase `id`).
    pub value: Value,
    /// A fresh opaque identifier minted on every write.
    pub etag: String,
}

impl Container {
    pub(crate) fn new(partition_key_path: PartitionKeyPath) -> Self {
        Self {
            partition_key_path,
            rows: RwLock::new(Vec::new()),
        }
    }

    pub(crate) fn partition_key_path(&self) -> &PartitionKeyPath {
        &self.partition_key_path
    }

    /// Inserts or replaces a document, keyed by `(id, partition-key value)`.
    pub fn upsert(
        &self,
        document: Value,
        partition_key: Option<&str>,
    ) -> Result<StoredDocument, StoreError> {
        let normalized = normalize_id(document)?;
        let supplied_pk = crate::partition::normalize_supplied(partition_key);
        let doc_pk = self.partition_key_path.resolve(&normalized).map(|v| v.stringify());
        let identity_pk = supplied_pk.map(str::to_string).or(doc_pk);

        let id = normalized
            .id_field()
            .expect("normalize_id guarantees a string id field")
            .to_string();

        let mut rows = self.rows.write();
        let existing = rows.iter_mut().find(|row| {
            row.id_field() == Some(id.as_str())
                && self.partition_key_path.resolve(row).map(|v| v.stringify()) == identity_pk
        });

        match existing {
            Some(slot) => *slot = normalized.clone(),
            None => rows.push(normalized.clone()),
        }

        Ok(StoredDocument {
            value: normalized,
            etag: Uuid::new_v4().to_string(),
        })
    }

    /// Looks up a document by `(id, partition-key value)`.
    pub fn read(&self, id: &str, partition_key: Option<&str>) -> Result<Value, StoreError> {
        let supplied_pk = crate::partition::normalize_supplied(partition_key).map(str::to_string);

        let rows = self.rows.read();
        rows.iter()
            .find(|row| {
                row.id_field() == Some(id)
                    && match &supplied_pk {
                        Some(pk) => {
                            self.partition_key_path.resolve(row).map(|v| v.stringify()).as_deref()
                                == Some(pk.as_str())
                        }
                        None => true,
                    }
            })
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                id: id.to_string(),
                partition_key: supplied_pk,
            })
    }

    /// Runs a parsed query against a snapshot of this container's rows.
    pub fn query(&self, text: &str, params: &Params) -> Result<Vec<Value>, StoreError> {
        let query = fauxdoc_parser::parse(text)?;
        let snapshot: Vec<Value> = self.rows.read().clone();
        let rows = fauxdoc_query::run(&snapshot, &query, params)?;
        Ok(rows)
    }

    /// Returns a fresh `Arc` snapshot of this container's rows, for
    /// callers (the façade's `FeedIterator`) that need to materialize once
    /// and page repeatedly over the same snapshot.
    pub fn snapshot(&self) -> Arc<Vec<Value>> {
        Arc::new(self.rows.read().clone())
    }
}

/// Validates and canonicalizes the document's id field: accepts `id` or
/// `Id`, requires the two to agree if both are present, and always stores
/// under lowercase `id`.
fn normalize_id(mut document: Value) -> Result<Value, StoreError> {
    let Some(map) = document.as_object_mut() else {
        return Err(StoreError::InvalidDocument {
            reason: "document must be a JSON object".into(),
        });
    };

    let lower = map.get(ID_FIELD).cloned();
    let capitalized = map.get("Id").cloned();

    let id = match (lower, capitalized) {
        (Some(a), Some(b)) if a == b => {
            map.shift_remove("Id");
            a
        }
        (Some(_), Some(_)) => {
            return Err(StoreError::InvalidDocument {
                reason: "document has conflicting id and Id values".into(),
            })
        }
        (Some(a), None) => a,
        (None, Some(b)) => {
            map.shift_remove("Id");
            b
        }
        (None, None) => {
            return Err(StoreError::InvalidDocument {
                reason: "document is missing an id field".into(),
            })
        }
    };

    if id.as_str().is_none() {
        return Err(StoreError::InvalidDocument {
            reason: "id must be a string".into(),
        });
    }

    let map = document.as_object_mut().expect("still an Object");
    map.insert(ID_FIELD.to_string(), id);
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_id(key: &str, id: &str) -> Value {
        let mut obj = Value::object();
        obj.as_object_mut().unwrap().insert(key.into(), Value::String(id.into()));
        obj
    }

    #[test]
    fn upsert_requires_id() {
        let container = Container::new(PartitionKeyPath::default_id());
        let err = container.upsert(Value::object(), None).unwrap_err();
        assert!(matches!(err, StoreError::InvalidDocument { .. }));
    }

    #[test]
    fn upsert_accepts_capitalized_id() {
        let container = Container::new(PartitionKeyPath::default_id());
        let stored = container.upsert(doc_with_id("Id", "1"), None).unwrap();
        assert_eq!(stored.value.id_field(), Some("1"));
        assert!(stored.value.as_object().unwrap().get("Id").is_none());
    }

    #[test]
    fn upsert_rejects_conflicting_id_and_id_capitalized() {
        let mut doc = doc_with_id("id", "1");
        doc.as_object_mut().unwrap().insert("Id".into(), Value::String("2".into()));
        let container = Container::new(PartitionKeyPath::default_id());
        assert!(container.upsert(doc, None).is_err());
    }

    #[test]
    fn upsert_replaces_existing_by_id() {
        let container = Container::new(PartitionKeyPath::default_id());
        container.upsert(doc_with_id("id", "1"), None).unwrap();
        let mut updated = doc_with_id("id", "1");
        updated.as_object_mut().unwrap().insert("Name".into(), Value::String("Alice".into()));
        container.upsert(updated, None).unwrap();

        let read = container.read("1", None).unwrap();
        assert_eq!(
            read.as_object().unwrap().get("Name"),
            Some(&Value::String("Alice".into()))
        );
        assert_eq!(container.snapshot().len(), 1);
    }

    #[test]
    fn read_missing_is_not_found() {
        let container = Container::new(PartitionKeyPath::default_id());
        assert!(matches!(
            container.read("missing", None),
            Err(StoreError::NotFound { .. })
        ));
    }
}
