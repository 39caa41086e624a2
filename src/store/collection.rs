//! Collection - the full ordered list of records a store reads and writes.
//!
//! Every store operation loads a whole `Collection`, applies one change, and
//! (for mutations) writes the whole thing back. File order is insertion
//! order.
//!
//! Array elements that are not objects (`null`, numbers, stray strings) are
//! kept verbatim in place. They are listed and written back, but they are not
//! records: lookups and id assignment skip them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StoreError;
use crate::record::{next_id, Fields, StudentRecord, ID_FIELD};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
enum Entry {
    Record(StudentRecord),
    Other(Value),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    entries: Vec<Entry>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a collection from a JSON array.
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Pretty-printed JSON (2-space indent), the on-disk format.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Number of array elements, records or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The records, in file order.
    pub fn iter(&self) -> impl Iterator<Item = &StudentRecord> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Record(record) => Some(record),
            Entry::Other(_) => None,
        })
    }

    /// Every array element as JSON, in file order.
    pub fn into_values(self) -> Vec<Value> {
        self.entries
            .into_iter()
            .map(|entry| match entry {
                Entry::Record(record) => Value::from(record),
                Entry::Other(value) => value,
            })
            .collect()
    }

    /// Index of the first record whose id loosely equals `id`.
    fn position(&self, id: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| matches!(entry, Entry::Record(record) if record.has_id(id)))
    }

    fn record_mut(&mut self, index: usize) -> Option<&mut StudentRecord> {
        match self.entries.get_mut(index) {
            Some(Entry::Record(record)) => Some(record),
            _ => None,
        }
    }

    pub fn get(&self, id: &str) -> Option<&StudentRecord> {
        self.iter().find(|record| record.has_id(id))
    }

    pub fn next_id(&self) -> Result<String, StoreError> {
        next_id(self.iter().filter_map(|record| record.get(ID_FIELD)))
            .ok_or(StoreError::IdsExhausted)
    }

    /// Assign the next id, append, and return the stored record.
    pub fn insert(&mut self, fields: Fields) -> Result<StudentRecord, StoreError> {
        let record = StudentRecord::with_id(fields, self.next_id()?);
        self.entries.push(Entry::Record(record.clone()));
        Ok(record)
    }

    /// Shallow-merge `patch` onto the record in place. `None` if absent.
    pub fn update(&mut self, id: &str, patch: Fields) -> Option<StudentRecord> {
        let index = self.position(id)?;
        let record = self.record_mut(index)?;
        record.merge(patch);
        Some(record.clone())
    }

    /// Remove the first matching record. `None` if absent.
    pub fn remove(&mut self, id: &str) -> Option<StudentRecord> {
        let index = self.position(id)?;
        match self.entries.remove(index) {
            Entry::Record(record) => Some(record),
            Entry::Other(_) => None,
        }
    }
}
