//! Shared application state for the UI server.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Mutex;

/// Shared state accessible from all request handlers.
///
/// The tool is single-user, but two browser tabs can still race a
/// read-modify-write of the data file; `write_lock` serializes those cycles.
#[derive(Clone)]
pub struct AppState {
    /// Path to the city data JSON file.
    pub data_path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(data_path: PathBuf) -> Self {
        Self {
            data_path,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Hold the returned guard across a load → mutate → save cycle.
    pub async fn lock_store(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }
}
