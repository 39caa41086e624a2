//! InMemoryRecordStore - RwLock-backed record store for testing and development.

use std::sync::{Arc, RwLock};

use super::{Collection, RecordStore};
use crate::error::StoreError;
use crate::record::{Fields, StudentRecord};

/// In-memory record store with the same semantics as the file store.
///
/// Clone-friendly via Arc: clones share one collection.
#[derive(Clone, Default)]
pub struct InMemoryRecordStore {
    collection: Arc<RwLock<Collection>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(collection: Collection) -> Self {
        Self {
            collection: Arc::new(RwLock::new(collection)),
        }
    }
}

impl RecordStore for InMemoryRecordStore {
    fn load_all(&self) -> Collection {
        // A poisoned lock reads as an empty collection, like an unreadable file.
        self.collection
            .read()
            .map(|collection| collection.clone())
            .unwrap_or_default()
    }

    fn insert(&self, fields: Fields) -> Result<StudentRecord, StoreError> {
        let mut collection = self
            .collection
            .write()
            .map_err(|_| StoreError::LockPoisoned("insert"))?;
        collection.insert(fields)
    }

    fn update_by_id(&self, id: &str, patch: Fields) -> Result<StudentRecord, StoreError> {
        let mut collection = self
            .collection
            .write()
            .map_err(|_| StoreError::LockPoisoned("update"))?;
        collection
            .update(id, patch)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    fn delete_by_id(&self, id: &str) -> Result<StudentRecord, StoreError> {
        let mut collection = self
            .collection
            .write()
            .map_err(|_| StoreError::LockPoisoned("delete"))?;
        collection
            .remove(id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }
}
