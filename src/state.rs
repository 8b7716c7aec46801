//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::Registry;
use crate::infrastructure::persistence::JsonFileStore;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry<JsonFileStore>>,
    pub base_url: String,
}

impl AppState {
    pub fn new(registry: Arc<Registry<JsonFileStore>>, base_url: String) -> Self {
        Self { registry, base_url }
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}
