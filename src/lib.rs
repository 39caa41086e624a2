mod config;
mod error;
mod record;
mod store;
mod telemetry;

#[cfg(feature = "http")]
pub mod http;

pub use config::{Config, ConfigError};
pub use error::StoreError;
pub use record::{Fields, StudentRecord};
pub use store::{Collection, InMemoryRecordStore, JsonFileStore, LoadFailure, RecordStore};
pub use telemetry::init_tracing;
