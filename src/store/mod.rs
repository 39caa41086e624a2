//! Record stores - whole-collection CRUD over student records.
//!
//! A store owns the persisted collection. Every operation reads the full
//! collection first, so the store always reflects the last successful write;
//! mutations then write the full collection back.
//!
//! ## Example
//!
//! ```ignore
//! use student_records::{JsonFileStore, RecordStore};
//! use serde_json::json;
//!
//! let store = JsonFileStore::new("data/students.json");
//! let fields = json!({ "name": "Ada", "age": 16, "className": "10A" });
//! let created = store.insert(fields.as_object().unwrap().clone())?;
//! assert_eq!(store.find_by_id("1"), Some(created));
//! ```

mod collection;
mod in_memory;
mod json_file;

pub use collection::Collection;
pub use in_memory::InMemoryRecordStore;
pub use json_file::{JsonFileStore, LoadFailure};

use std::sync::Arc;

use crate::error::StoreError;
use crate::record::{Fields, StudentRecord};

/// Whole-collection CRUD storage for student records.
pub trait RecordStore: Send + Sync {
    /// Load the full collection.
    ///
    /// Never fails: a collection that cannot be loaded is empty.
    fn load_all(&self) -> Collection;

    /// Get a record by id (loose equality, first match).
    fn find_by_id(&self, id: &str) -> Option<StudentRecord> {
        self.load_all().get(id).cloned()
    }

    /// Assign the next id, append the record and persist.
    fn insert(&self, fields: Fields) -> Result<StudentRecord, StoreError>;

    /// Shallow-merge `patch` onto an existing record and persist.
    fn update_by_id(&self, id: &str, patch: Fields) -> Result<StudentRecord, StoreError>;

    /// Remove a record and persist. Returns the removed record.
    fn delete_by_id(&self, id: &str) -> Result<StudentRecord, StoreError>;
}

impl<S: RecordStore + ?Sized> RecordStore for Arc<S> {
    fn load_all(&self) -> Collection {
        (**self).load_all()
    }

    fn find_by_id(&self, id: &str) -> Option<StudentRecord> {
        (**self).find_by_id(id)
    }

    fn insert(&self, fields: Fields) -> Result<StudentRecord, StoreError> {
        (**self).insert(fields)
    }

    fn update_by_id(&self, id: &str, patch: Fields) -> Result<StudentRecord, StoreError> {
        (**self).update_by_id(id, patch)
    }

    fn delete_by_id(&self, id: &str) -> Result<StudentRecord, StoreError> {
        (**self).delete_by_id(id)
    }
}
