//! Student records.
//!
//! A record is a JSON object with at least `id`, `name`, `age` and
//! `className`. Any other field a caller attaches is kept verbatim, so the
//! record wraps the raw object instead of a fixed struct.
//!
//! ## Example
//!
//! ```ignore
//! use serde_json::json;
//! use student_records::StudentRecord;
//!
//! let mut record = StudentRecord::try_from(json!({
//!     "id": "1", "name": "Ada", "age": 16, "className": "10A"
//! }))?;
//! record.merge(json!({ "age": 17 }).as_object().unwrap().clone());
//! assert_eq!(record.age(), Some(17.0));
//! ```

mod id;

pub use id::{id_matches, next_id, normalize_id};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const ID_FIELD: &str = "id";
pub const NAME_FIELD: &str = "name";
pub const AGE_FIELD: &str = "age";
pub const CLASS_NAME_FIELD: &str = "className";

/// Caller-supplied fields for an insert or a shallow-merge patch.
pub type Fields = Map<String, Value>;

/// One student, stored as a JSON object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentRecord {
    fields: Fields,
}

impl StudentRecord {
    pub fn new(fields: Fields) -> Self {
        Self { fields }
    }

    /// Build a record from caller fields and an assigned id.
    ///
    /// The id overwrites any `id` the caller sent.
    pub fn with_id(mut fields: Fields, id: impl Into<String>) -> Self {
        fields.insert(ID_FIELD.to_string(), Value::String(id.into()));
        Self { fields }
    }

    /// Normalized id, if the record has a usable one.
    pub fn id(&self) -> Option<String> {
        self.fields.get(ID_FIELD).and_then(normalize_id)
    }

    /// Loose id comparison (see [`id_matches`]).
    pub fn has_id(&self, id: &str) -> bool {
        self.fields
            .get(ID_FIELD)
            .is_some_and(|stored| id_matches(stored, id))
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get(NAME_FIELD).and_then(Value::as_str)
    }

    pub fn age(&self) -> Option<f64> {
        self.fields.get(AGE_FIELD).and_then(Value::as_f64)
    }

    pub fn class_name(&self) -> Option<&str> {
        self.fields.get(CLASS_NAME_FIELD).and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Shallow merge: patch fields overwrite same-named fields, everything
    /// else is retained. The id is never reassigned by a patch.
    pub fn merge(&mut self, patch: Fields) {
        for (key, value) in patch {
            if key == ID_FIELD {
                continue;
            }
            self.fields.insert(key, value);
        }
    }
}

impl From<Fields> for StudentRecord {
    fn from(fields: Fields) -> Self {
        Self::new(fields)
    }
}

impl TryFrom<Value> for StudentRecord {
    type Error = serde_json::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        serde_json::from_value(value)
    }
}

impl From<StudentRecord> for Value {
    fn from(record: StudentRecord) -> Self {
        Value::Object(record.fields)
    }
}
