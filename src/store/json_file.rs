//! JsonFileStore - the collection as one pretty-printed JSON array in one file.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tracing::{debug, error, warn};

use super::{Collection, RecordStore};
use crate::error::StoreError;
use crate::record::{Fields, StudentRecord};

/// Why the backing file could not be turned into a collection.
///
/// Every variant is downgraded to an empty collection by
/// [`RecordStore::load_all`]; [`JsonFileStore::read`] exposes them.
#[derive(Debug)]
pub enum LoadFailure {
    /// The file does not exist yet.
    Missing,
    /// The file exists but could not be read.
    Unreadable(io::Error),
    /// The file was read but is not a JSON array.
    Corrupt(serde_json::Error),
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadFailure::Missing => write!(f, "file does not exist"),
            LoadFailure::Unreadable(e) => write!(f, "file could not be read: {}", e),
            LoadFailure::Corrupt(e) => write!(f, "file is not a JSON array: {}", e),
        }
    }
}

impl std::error::Error for LoadFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadFailure::Missing => None,
            LoadFailure::Unreadable(e) => Some(e),
            LoadFailure::Corrupt(e) => Some(e),
        }
    }
}

/// Flat-file record store.
///
/// Reads and rewrites the whole file on every operation. Mutations from this
/// process are serialized behind one writer lock so that two requests cannot
/// interleave their read-modify-write cycles (no lost updates, no duplicate
/// ids). Other processes writing the same file are not coordinated with.
///
/// A missing parent directory is not created; writes into it fail with
/// [`StoreError::Storage`].
pub struct JsonFileStore {
    path: PathBuf,
    writer: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            writer: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Strict read: the collection, or the reason it could not be loaded.
    pub fn read(&self) -> Result<Collection, LoadFailure> {
        let bytes = fs::read(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => LoadFailure::Missing,
            _ => LoadFailure::Unreadable(e),
        })?;
        Collection::from_json(&bytes).map_err(LoadFailure::Corrupt)
    }

    fn persist(&self, collection: &Collection) -> Result<(), StoreError> {
        let text = collection.to_pretty_json()?;
        fs::write(&self.path, text).map_err(|e| {
            error!(path = %self.path.display(), error = %e, "failed to write student collection");
            StoreError::storage(&self.path, e)
        })
    }

    /// One read-modify-write cycle under the writer lock. Nothing is written
    /// when `change` fails.
    fn mutate<T, F>(&self, change: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Collection) -> Result<T, StoreError>,
    {
        // The lock guards no data; every cycle rereads the file.
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);

        let mut collection = self.load_all();
        let outcome = change(&mut collection)?;
        self.persist(&collection)?;
        Ok(outcome)
    }
}

impl RecordStore for JsonFileStore {
    /// Any load failure yields an empty collection; callers cannot tell
    /// "no students" from "could not read the file".
    fn load_all(&self) -> Collection {
        match self.read() {
            Ok(collection) => collection,
            Err(LoadFailure::Missing) => {
                debug!(path = %self.path.display(), "student file missing, starting empty");
                Collection::new()
            }
            Err(failure) => {
                warn!(
                    path = %self.path.display(),
                    error = %failure,
                    "could not load student file, treating as empty"
                );
                Collection::new()
            }
        }
    }

    fn insert(&self, fields: Fields) -> Result<StudentRecord, StoreError> {
        self.mutate(|collection| collection.insert(fields))
    }

    fn update_by_id(&self, id: &str, patch: Fields) -> Result<StudentRecord, StoreError> {
        self.mutate(|collection| {
            collection
                .update(id, patch)
                .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
        })
    }

    fn delete_by_id(&self, id: &str) -> Result<StudentRecord, StoreError> {
        self.mutate(|collection| {
            collection
                .remove(id)
                .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
        })
    }
}
