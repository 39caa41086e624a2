use std::fmt;
use std::path::PathBuf;

/// Error type for record store operations.
///
/// Read failures never show up here: a collection that cannot be loaded is
/// treated as empty (see `store::LoadFailure`). Only a missing record and a
/// failed write are surfaced to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record with this id exists in the collection.
    NotFound { id: String },
    /// Persisting the collection failed (disk full, permission denied, ...).
    Storage { path: PathBuf, message: String },
    /// The largest id in the collection is `u64::MAX`; no next id exists.
    IdsExhausted,
    /// The collection could not be serialized.
    Serde(String),
    /// A thread panicked while holding the store lock.
    LockPoisoned(&'static str),
}

impl StoreError {
    pub(crate) fn storage(path: impl Into<PathBuf>, err: impl fmt::Display) -> Self {
        StoreError::Storage {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            StoreError::NotFound { .. } => 404,
            StoreError::Storage { .. } => 500,
            StoreError::IdsExhausted => 500,
            StoreError::Serde(_) => 500,
            StoreError::LockPoisoned(_) => 500,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound { id } => write!(f, "student not found: {}", id),
            StoreError::Storage { path, message } => {
                write!(f, "failed to write {}: {}", path.display(), message)
            }
            StoreError::IdsExhausted => write!(f, "no id left after {}", u64::MAX),
            StoreError::Serde(msg) => write!(f, "collection serialization error: {}", msg),
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serde(err.to_string())
    }
}
