//! HTTP transport for the record store.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /students`: the full collection as a JSON array.
//! - `POST /students`: create; body = JSON object of fields.
//! - `GET /students/:id`: one record, or 404 `{ "message": "Not Found" }`.
//! - `PUT /students/:id`: shallow-merge the body onto the record.
//! - `DELETE /students/:id`: remove the record.
//! - `GET /health`: `{ "ok": true }`.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use student_records::{http, JsonFileStore};
//!
//! let store = Arc::new(JsonFileStore::new("data/students.json"));
//!
//! // Get the router to compose with other axum routes
//! let app = http::router(store.clone());
//!
//! // Or serve directly
//! http::serve(store, "0.0.0.0:3000").await?;
//! ```

mod handlers;
mod response;

pub use response::ApiResponse;

use std::future::Future;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::{TcpListener, ToSocketAddrs};
use tracing::info;

use crate::store::RecordStore;

/// Build an axum `Router` serving the students API from the given store.
pub fn router<S: RecordStore + 'static>(store: Arc<S>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/students",
            get(handlers::list_students::<S>).post(handlers::create_student::<S>),
        )
        .route(
            "/students/:id",
            get(handlers::get_student::<S>)
                .put(handlers::update_student::<S>)
                .delete(handlers::delete_student::<S>),
        )
        .with_state(store)
}

/// Serve the students API at the given address (e.g. `"0.0.0.0:3000"`).
pub async fn serve<S: RecordStore + 'static>(
    store: Arc<S>,
    addr: impl ToSocketAddrs,
) -> Result<(), std::io::Error> {
    serve_with_shutdown(store, addr, std::future::pending()).await
}

/// Serve until `shutdown` resolves, then drain in-flight requests.
pub async fn serve_with_shutdown<S, F>(
    store: Arc<S>,
    addr: impl ToSocketAddrs,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    S: RecordStore + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(store);
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "students API listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
