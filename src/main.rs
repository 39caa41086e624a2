#![forbid(unsafe_code)]

use std::error::Error;
use std::sync::Arc;

use student_records::{http, init_tracing, Config, JsonFileStore, RecordStore};
use tracing::{info, warn};

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                warn!("could not register signal handlers, falling back to ctrl-c");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;
    init_tracing(config.log_json);

    let store = Arc::new(JsonFileStore::new(&config.data_file));
    info!(
        data_file = %config.data_file.display(),
        students = store.load_all().len(),
        "student store ready"
    );

    http::serve_with_shutdown(store, config.bind_addr, wait_for_shutdown_signal()).await?;
    Ok(())
}
