//! Persistence collaborator for the entry collection.

use crate::domain::entities::Entry;
use async_trait::async_trait;

/// Errors surfaced by a store implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("store serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Blob store holding the whole ordered entry collection under a single key.
///
/// The registry calls [`EntryStore::load`] once at initialization and
/// [`EntryStore::save`] after every mutating operation and after every
/// cleanup pass that removed entries. Implementations must round-trip all
/// entry and click fields losslessly, including timestamp precision.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonFileStore`] - single JSON file
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Loads the persisted collection. An absent store reads as empty.
    async fn load(&self) -> Result<Vec<Entry>, StoreError>;

    /// Replaces the persisted collection with `entries`.
    async fn save(&self, entries: &[Entry]) -> Result<(), StoreError>;
}
