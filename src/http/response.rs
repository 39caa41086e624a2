//! Response bodies for the students API.
//!
//! Every non-list response is a small JSON object with a `message`, plus
//! `data` (the affected record) or `error` (the underlying failure text).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use crate::error::StoreError;
use crate::record::StudentRecord;
use crate::store::Collection;

pub const NOT_FOUND: &str = "Not Found";
pub const STUDENT_ADDED: &str = "Student added";
pub const UPDATED: &str = "Updated successfully";
pub const DELETED: &str = "Deleted successfully";
pub const CREATE_FAILED: &str = "Failed to save student";
pub const UPDATE_FAILED: &str = "Failed to save after update";
pub const DELETE_FAILED: &str = "Failed to save after delete";
pub const INVALID_BODY: &str = "Invalid request body";
pub const INTERNAL_ERROR: &str = "Internal Server Error";

/// The response returned by a students handler.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// JSON response body.
    pub body: Value,
}

impl ApiResponse {
    fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// 200 with the full collection as a JSON array.
    pub fn list(collection: Collection) -> Self {
        Self::new(200, Value::Array(collection.into_values()))
    }

    /// 200 with a bare record.
    pub fn record(record: StudentRecord) -> Self {
        Self::new(200, Value::from(record))
    }

    /// 200 with `{ message, data }`.
    pub fn with_data(message: &str, record: StudentRecord) -> Self {
        Self::new(200, json!({ "message": message, "data": Value::from(record) }))
    }

    pub fn message(status: u16, message: &str) -> Self {
        Self::new(status, json!({ "message": message }))
    }

    pub fn not_found() -> Self {
        Self::message(404, NOT_FOUND)
    }

    /// 400 for a body that is not a JSON object.
    pub fn invalid_body(error: impl ToString) -> Self {
        Self::new(
            400,
            json!({ "message": INVALID_BODY, "error": error.to_string() }),
        )
    }

    /// Map a failed create. Storage failures carry the error text.
    pub fn create_failed(err: &StoreError) -> Self {
        Self::new(
            err.status_code(),
            json!({ "message": CREATE_FAILED, "error": err.to_string() }),
        )
    }

    /// Map a failed update or delete: 404 when the record is absent,
    /// otherwise the operation's failure message.
    pub fn mutation_failed(err: &StoreError, failure_message: &str) -> Self {
        if err.is_not_found() {
            Self::not_found()
        } else {
            Self::message(err.status_code(), failure_message)
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.body)).into_response()
    }
}
