//! File-backed blob store: the whole entry collection in one JSON document.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::entities::Entry;
use crate::domain::store::{EntryStore, StoreError};

/// Stores the ordered entry collection as a single pretty-printed JSON file.
///
/// The file is rewritten whole on every save; timestamps serialize as
/// RFC 3339 with full precision, so a load reproduces the saved collection
/// field for field. A missing file reads as the empty collection.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl EntryStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<Entry>, StoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Store file absent, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let entries = serde_json::from_str(&content)?;
        Ok(entries)
    }

    async fn save(&self, entries: &[Entry]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(entries)?;
        tokio::fs::write(&self.path, json).await?;
        debug!(path = %self.path.display(), count = entries.len(), "Entries saved");
        Ok(())
    }
}
