//! Request handlers: one per REST operation, each a thin mapping from the
//! request onto a single store call.
//!
//! Store calls do blocking file I/O, so they run on tokio's blocking pool
//! rather than on the async worker threads.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::json;
use tracing::{error, info, warn};

use super::response::{self, ApiResponse};
use crate::record::Fields;
use crate::store::RecordStore;

/// `GET /health`: returns `{ "ok": true }`.
pub(super) async fn health() -> Json<serde_json::Value> {
    Json(json!({ "ok": true }))
}

/// `GET /students`: the full collection. Read failures yield `[]`.
pub(super) async fn list_students<S: RecordStore + 'static>(
    State(store): State<Arc<S>>,
) -> ApiResponse {
    match on_store(store, |store| store.load_all()).await {
        Ok(collection) => ApiResponse::list(collection),
        Err(resp) => resp,
    }
}

/// `GET /students/:id`
pub(super) async fn get_student<S: RecordStore + 'static>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> ApiResponse {
    match on_store(store, move |store| store.find_by_id(&id)).await {
        Ok(Some(record)) => ApiResponse::record(record),
        Ok(None) => ApiResponse::not_found(),
        Err(resp) => resp,
    }
}

/// `POST /students`: assigns the id and returns `{ message, data }`.
pub(super) async fn create_student<S: RecordStore + 'static>(
    State(store): State<Arc<S>>,
    payload: Result<Json<Fields>, JsonRejection>,
) -> ApiResponse {
    let fields = match payload {
        Ok(Json(fields)) => fields,
        Err(rejection) => return rejected(rejection),
    };

    match on_store(store, move |store| store.insert(fields)).await {
        Ok(Ok(record)) => {
            info!(id = %record.id().unwrap_or_default(), "student created");
            ApiResponse::with_data(response::STUDENT_ADDED, record)
        }
        Ok(Err(e)) => ApiResponse::create_failed(&e),
        Err(resp) => resp,
    }
}

/// `PUT /students/:id`: shallow-merges the body onto the record.
pub(super) async fn update_student<S: RecordStore + 'static>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
    payload: Result<Json<Fields>, JsonRejection>,
) -> ApiResponse {
    let patch = match payload {
        Ok(Json(patch)) => patch,
        Err(rejection) => return rejected(rejection),
    };

    let target = id.clone();
    match on_store(store, move |store| store.update_by_id(&target, patch)).await {
        Ok(Ok(record)) => {
            info!(id = %id, "student updated");
            ApiResponse::with_data(response::UPDATED, record)
        }
        Ok(Err(e)) => ApiResponse::mutation_failed(&e, response::UPDATE_FAILED),
        Err(resp) => resp,
    }
}

/// `DELETE /students/:id`
pub(super) async fn delete_student<S: RecordStore + 'static>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> ApiResponse {
    let target = id.clone();
    match on_store(store, move |store| store.delete_by_id(&target)).await {
        Ok(Ok(_)) => {
            info!(id = %id, "student deleted");
            ApiResponse::message(200, response::DELETED)
        }
        Ok(Err(e)) => ApiResponse::mutation_failed(&e, response::DELETE_FAILED),
        Err(resp) => resp,
    }
}

/// Run one store call on the blocking pool. A panicking call becomes a 500.
async fn on_store<S, T, F>(store: Arc<S>, call: F) -> Result<T, ApiResponse>
where
    S: RecordStore + 'static,
    T: Send + 'static,
    F: FnOnce(&S) -> T + Send + 'static,
{
    tokio::task::spawn_blocking(move || call(&store))
        .await
        .map_err(|e| {
            error!(error = %e, "store call did not complete");
            ApiResponse::message(500, response::INTERNAL_ERROR)
        })
}

fn rejected(rejection: JsonRejection) -> ApiResponse {
    warn!(error = %rejection.body_text(), "rejected request body");
    ApiResponse::invalid_body(rejection.body_text())
}
