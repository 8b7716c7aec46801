#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum_test::TestServer;
use chrono::{DateTime, TimeZone, Utc};
use tempfile::TempDir;

use linkreg::application::services::Registry;
use linkreg::domain::clock::ManualClock;
use linkreg::infrastructure::persistence::JsonFileStore;
use linkreg::routes::app_router;
use linkreg::state::AppState;
use linkreg::utils::code::RandomCodes;

pub const BASE_URL: &str = "http://localhost:3000";

/// Fixed starting instant so expiry behavior is reproducible.
pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
}

/// Test fixture: real file store in a temp dir, manually advanced clock.
pub struct TestContext {
    pub state: AppState,
    pub clock: Arc<ManualClock>,
    pub store_path: PathBuf,
    // Held so the store directory outlives the test.
    _store_dir: TempDir,
}

pub async fn create_test_state() -> TestContext {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("entries.json");

    let clock = Arc::new(ManualClock::new(start_time()));
    let registry = Registry::init(
        Arc::new(JsonFileStore::new(&path)),
        clock.clone(),
        Arc::new(RandomCodes),
        30,
    )
    .await
    .unwrap();

    TestContext {
        state: AppState::new(Arc::new(registry), BASE_URL.to_string()),
        clock,
        store_path: path,
        _store_dir: dir,
    }
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(app_router(state)).unwrap()
}

/// Reopens a registry on an existing store file, as after a restart.
pub async fn reopen_registry(path: &Path, clock: Arc<ManualClock>) -> Registry<JsonFileStore> {
    Registry::init(
        Arc::new(JsonFileStore::new(path)),
        clock,
        Arc::new(RandomCodes),
        30,
    )
    .await
    .unwrap()
}
