//! The short-code registry: creation, resolution, listing, retention cleanup.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::domain::clock::Clock;
use crate::domain::entities::{ClickEvent, Entry};
use crate::domain::store::EntryStore;
use crate::error::AppError;
use crate::utils::code::{CodeGenerator, GENERATED_CODE_LENGTH, MAX_CODE_LENGTH, validate_requested_code};
use crate::utils::target::validate_target;

/// Uniqueness draws at a given code length before widening by one character.
const MAX_ATTEMPTS_PER_LENGTH: usize = 16;

/// Owner of the entry collection and sole writer to the store.
///
/// All operations serialize behind one async mutex, so no two callers can
/// observe a partial read-modify-write of the collection or of an entry's
/// click sequence. The store is loaded once at initialization and saved
/// after every mutation; on a failed save the in-memory state stays
/// authoritative and the error is surfaced to the caller, so memory and the
/// durable store may diverge until the next successful save.
pub struct Registry<S: EntryStore> {
    store: Arc<S>,
    clock: Arc<dyn Clock>,
    codes: Arc<dyn CodeGenerator>,
    default_validity_minutes: i64,
    entries: Mutex<Vec<Entry>>,
}

impl<S: EntryStore> Registry<S> {
    /// Loads the persisted collection and constructs the registry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the store cannot be read.
    pub async fn init(
        store: Arc<S>,
        clock: Arc<dyn Clock>,
        codes: Arc<dyn CodeGenerator>,
        default_validity_minutes: i64,
    ) -> Result<Self, AppError> {
        let entries = store.load().await.map_err(|e| {
            error!(error = %e, "Failed to load entries from store");
            AppError::from(e)
        })?;

        info!(count = entries.len(), "Loaded entries from store");

        Ok(Self {
            store,
            clock,
            codes,
            default_validity_minutes,
            entries: Mutex::new(entries),
        })
    }

    /// Current time as seen by the registry's clock.
    ///
    /// Read-time expiry marking in callers must use this rather than the
    /// system clock so listings agree with resolution behavior.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Number of entries currently held, live and expired-retained alike.
    pub async fn entry_count(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// Registers a target under a new or caller-requested short code.
    ///
    /// `validity_minutes` defaults to the configured policy value when absent.
    /// A requested code is used verbatim after validation and a uniqueness
    /// check; a generated code is redrawn until it is free. The new entry is
    /// saved to the store before this returns.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] - malformed target, non-positive validity,
    ///   or malformed requested code; no side effect.
    /// - [`AppError::Conflict`] - requested code already exists.
    /// - [`AppError::Persistence`] - save failed; the entry is kept in memory.
    pub async fn shorten(
        &self,
        target: String,
        validity_minutes: Option<i64>,
        requested_code: Option<String>,
    ) -> Result<Entry, AppError> {
        info!(target = %target, "Shorten request");

        validate_target(&target)?;

        let validity_minutes = validity_minutes.unwrap_or(self.default_validity_minutes);
        if validity_minutes <= 0 {
            return Err(AppError::bad_request(
                "Validity must be a positive number of minutes",
                json!({ "validity_minutes": validity_minutes }),
            ));
        }

        if let Some(ref code) = requested_code {
            validate_requested_code(code)?;
        }

        let mut entries = self.entries.lock().await;

        let code = if let Some(code) = requested_code {
            if entries.iter().any(|e| e.code == code) {
                warn!(code = %code, "Requested code already exists");
                return Err(AppError::conflict(
                    "Requested code already exists",
                    json!({ "code": code }),
                ));
            }
            info!(code = %code, "Using requested code");
            code
        } else {
            let code = self.generate_unique_code(&entries)?;
            info!(code = %code, "Generated code");
            code
        };

        let entry = Entry::new(code, target, self.clock.now(), validity_minutes);

        entries.push(entry.clone());
        self.persist(&entries).await?;

        info!(code = %entry.code, target = %entry.target, "Entry created");
        Ok(entry)
    }

    /// Resolves a short code to its target, recording the click.
    ///
    /// Returns `Ok(None)` when the code is absent or expired; callers cannot
    /// distinguish the two, but each case is logged separately. On success
    /// the click is appended and the collection saved before returning.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the save fails; the click is
    /// kept in memory.
    pub async fn resolve(
        &self,
        code: &str,
        source: String,
        location: String,
        agent: String,
    ) -> Result<Option<String>, AppError> {
        let mut entries = self.entries.lock().await;
        let now = self.clock.now();

        let Some(entry) = entries.iter_mut().find(|e| e.code == code) else {
            warn!(code = %code, "Resolve failed: code not found");
            return Ok(None);
        };

        if entry.is_expired_at(now) {
            warn!(code = %code, expires_at = %entry.expires_at, "Resolve failed: code expired");
            return Ok(None);
        }

        entry.clicks.push(ClickEvent {
            timestamp: now,
            source,
            location,
            agent,
        });

        let target = entry.target.clone();
        let clicks = entry.clicks.len();

        self.persist(&entries).await?;

        info!(code = %code, clicks, "Click recorded");
        Ok(Some(target))
    }

    /// Returns all retained entries, most recently created first.
    ///
    /// Runs the retention cleanup pass first: entries expired for longer
    /// than the retention window are removed and the reduced collection is
    /// saved, freeing their codes for reuse. Entries expired for less than
    /// the window remain listed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the post-cleanup save fails;
    /// the purge is kept in memory.
    pub async fn list(&self) -> Result<Vec<Entry>, AppError> {
        let mut entries = self.entries.lock().await;
        let now = self.clock.now();

        let before = entries.len();
        entries.retain(|e| !e.is_purgeable_at(now));
        let removed = before - entries.len();

        if removed > 0 {
            info!(removed, "Cleaned up expired entries past retention");
            self.persist(&entries).await?;
        }

        let mut listed = entries.clone();
        listed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listed)
    }

    /// Draws candidate codes until one is free, widening on exhaustion.
    ///
    /// Starts at the default generated length; after a fixed number of
    /// colliding draws the length grows by one, up to the code-length
    /// ceiling. With a 62-character alphabet the widening path is
    /// unreachable outside pathological namespace exhaustion.
    fn generate_unique_code(&self, entries: &[Entry]) -> Result<String, AppError> {
        let mut length = GENERATED_CODE_LENGTH;

        loop {
            for _ in 0..MAX_ATTEMPTS_PER_LENGTH {
                let code = self.codes.generate(length);
                if !entries.iter().any(|e| e.code == code) {
                    return Ok(code);
                }
            }

            if length >= MAX_CODE_LENGTH {
                error!(length, "Code namespace exhausted");
                return Err(AppError::internal(
                    "Failed to generate a unique code",
                    json!({ "max_length": MAX_CODE_LENGTH }),
                ));
            }

            length += 1;
            warn!(length, "Too many code collisions, widening generated code");
        }
    }

    async fn persist(&self, entries: &[Entry]) -> Result<(), AppError> {
        self.store.save(entries).await.map_err(|e| {
            error!(error = %e, "Failed to save entries; in-memory state kept");
            AppError::from(e)
        })
    }
}
