use std::{
    collections::BTreeMap,
    io::ErrorKind,
    path::PathBuf,
    sync::RwLock,
};

use async_trait::async_trait;
use fractic_server_error::ServerError;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::debug;

use crate::{
    entities::RecordId,
    errors::{InvalidJson, ReadError, RecordNotFound, StoreUnavailable, WriteError},
};

/// A schemaless collection/document store, shaped after hosted document
/// databases: documents are JSON values keyed by a store-assigned id.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents of a collection, ordered by id.
    async fn list(&self, collection: &str) -> Result<Vec<(RecordId, Value)>, ServerError>;

    /// Documents whose top-level `field` equals `value`.
    async fn query_eq(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<(RecordId, Value)>, ServerError> {
        Ok(self
            .list(collection)
            .await?
            .into_iter()
            .filter(|(_, document)| document.get(field) == Some(value))
            .collect())
    }

    async fn get(&self, collection: &str, id: &RecordId) -> Result<Option<Value>, ServerError> {
        Ok(self
            .list(collection)
            .await?
            .into_iter()
            .find(|(doc_id, _)| doc_id == id)
            .map(|(_, document)| document))
    }

    async fn add(&self, collection: &str, document: Value) -> Result<RecordId, ServerError>;

    /// Overwrite an existing document. Fails with `RecordNotFound` if `id` is
    /// not in the collection.
    async fn set(&self, collection: &str, id: &RecordId, document: Value)
        -> Result<(), ServerError>;

    /// Remove a document. Removing a missing document is not an error.
    async fn delete(&self, collection: &str, id: &RecordId) -> Result<(), ServerError>;
}

fn new_record_id() -> RecordId {
    RecordId(uuid::Uuid::new_v4().simple().to_string())
}

type Collection = BTreeMap<RecordId, Value>;

// In-memory.
// ---

#[derive(Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<BTreeMap<String, Collection>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn list(&self, collection: &str) -> Result<Vec<(RecordId, Value)>, ServerError> {
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreUnavailable::new("in-memory store lock poisoned"))?;
        Ok(collections
            .get(collection)
            .map(|docs| docs.iter().map(|(id, doc)| (id.clone(), doc.clone())).collect())
            .unwrap_or_default())
    }

    async fn add(&self, collection: &str, document: Value) -> Result<RecordId, ServerError> {
        let id = new_record_id();
        self.collections
            .write()
            .map_err(|_| StoreUnavailable::new("in-memory store lock poisoned"))?
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), document);
        debug!(collection, %id, "added document");
        Ok(id)
    }

    async fn set(
        &self,
        collection: &str,
        id: &RecordId,
        document: Value,
    ) -> Result<(), ServerError> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreUnavailable::new("in-memory store lock poisoned"))?;
        let existing = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(id))
            .ok_or_else(|| RecordNotFound::new(collection, id.as_str()))?;
        *existing = document;
        debug!(collection, %id, "updated document");
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &RecordId) -> Result<(), ServerError> {
        let removed = self
            .collections
            .write()
            .map_err(|_| StoreUnavailable::new("in-memory store lock poisoned"))?
            .get_mut(collection)
            .and_then(|docs| docs.remove(id));
        debug!(collection, %id, removed = removed.is_some(), "deleted document");
        Ok(())
    }
}

// JSON files.
// ---

/// Keeps each collection in `<dir>/<collection>.json` as an object mapping
/// ids to documents. Writes rewrite the whole file through a temporary file
/// renamed into place; intended for local use by a single process.
pub struct JsonFileDocumentStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileDocumentStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn path(&self, collection: &str) -> PathBuf {
        self.dir.join(format!("{}.json", collection))
    }

    fn tmp_path(&self, collection: &str) -> PathBuf {
        self.dir.join(format!("{}.json.tmp", collection))
    }

    async fn read_collection(&self, collection: &str) -> Result<Collection, ServerError> {
        match tokio::fs::read_to_string(self.path(collection)).await {
            Ok(s) => serde_json::from_str(&s).map_err(|e| InvalidJson::with_debug(collection, &e)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Collection::new()),
            Err(e) => Err(ReadError::with_debug(&e)),
        }
    }

    async fn write_collection(
        &self,
        collection: &str,
        docs: &Collection,
    ) -> Result<(), ServerError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| WriteError::with_debug(&e))?;
        let s = serde_json::to_string_pretty(docs)
            .map_err(|e| InvalidJson::with_debug(collection, &e))?;
        let tmp_path = self.tmp_path(collection);
        tokio::fs::write(&tmp_path, s)
            .await
            .map_err(|e| WriteError::with_debug(&e))?;
        tokio::fs::rename(&tmp_path, self.path(collection))
            .await
            .map_err(|e| WriteError::with_debug(&e))
    }
}

#[async_trait]
impl DocumentStore for JsonFileDocumentStore {
    async fn list(&self, collection: &str) -> Result<Vec<(RecordId, Value)>, ServerError> {
        Ok(self.read_collection(collection).await?.into_iter().collect())
    }

    async fn add(&self, collection: &str, document: Value) -> Result<RecordId, ServerError> {
        let _guard = self.write_lock.lock().await;
        let mut docs = self.read_collection(collection).await?;
        let id = new_record_id();
        docs.insert(id.clone(), document);
        self.write_collection(collection, &docs).await?;
        debug!(collection, %id, path = %self.path(collection).display(), "added document");
        Ok(id)
    }

    async fn set(
        &self,
        collection: &str,
        id: &RecordId,
        document: Value,
    ) -> Result<(), ServerError> {
        let _guard = self.write_lock.lock().await;
        let mut docs = self.read_collection(collection).await?;
        let existing = docs
            .get_mut(id)
            .ok_or_else(|| RecordNotFound::new(collection, id.as_str()))?;
        *existing = document;
        self.write_collection(collection, &docs).await?;
        debug!(collection, %id, "updated document");
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &RecordId) -> Result<(), ServerError> {
        let _guard = self.write_lock.lock().await;
        let mut docs = self.read_collection(collection).await?;
        if docs.remove(id).is_some() {
            self.write_collection(collection, &docs).await?;
            debug!(collection, %id, "deleted document");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn in_memory_store_round_trips_documents() {
        let store = InMemoryDocumentStore::new();
        let a = store.add("bills", json!({"waybillNo": "1"})).await.unwrap();
        let b = store.add("bills", json!({"waybillNo": "2"})).await.unwrap();
        assert_ne!(a, b);

        let matches = store
            .query_eq("bills", "waybillNo", &json!("2"))
            .await
            .unwrap();
        assert_eq!(matches, vec![(b.clone(), json!({"waybillNo": "2"}))]);

        store.set("bills", &b, json!({"waybillNo": "3"})).await.unwrap();
        assert_eq!(store.get("bills", &b).await.unwrap(), Some(json!({"waybillNo": "3"})));

        store.delete("bills", &a).await.unwrap();
        store.delete("bills", &a).await.unwrap();
        assert_eq!(store.list("bills").await.unwrap().len(), 1);
        assert!(store.list("profits").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn in_memory_set_requires_existing_document() {
        let store = InMemoryDocumentStore::new();
        assert!(store
            .set("bills", &RecordId::new("missing"), json!({}))
            .await
            .is_err());
    }
}
