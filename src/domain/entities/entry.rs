//! Entry entity representing one shortened target and its access history.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// How long an expired entry stays listed before the cleanup pass removes it.
pub const RETENTION_HOURS: i64 = 24;

/// A registered short code with its target and recorded clicks.
///
/// `expires_at` is computed once at creation from `created_at` and
/// `validity_minutes` and never recomputed. Whether the entry is currently
/// expired is always derived at read time via [`Entry::is_expired_at`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub code: String,
    pub target: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub validity_minutes: i64,
    #[serde(default)]
    pub clicks: Vec<ClickEvent>,
}

impl Entry {
    /// Creates a new entry with `expires_at = created_at + validity_minutes`.
    pub fn new(
        code: String,
        target: String,
        created_at: DateTime<Utc>,
        validity_minutes: i64,
    ) -> Self {
        Self {
            code,
            target,
            created_at,
            expires_at: created_at + Duration::minutes(validity_minutes),
            validity_minutes,
            clicks: Vec::new(),
        }
    }

    /// Returns true if the entry has passed its expiry time as of `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Returns true once the entry has been expired for longer than the
    /// retention window and may be removed by the cleanup pass.
    pub fn is_purgeable_at(&self, now: DateTime<Utc>) -> bool {
        self.is_expired_at(now) && self.expires_at < now - Duration::hours(RETENTION_HOURS)
    }

    /// Number of successful resolutions recorded while the entry was live.
    pub fn click_count(&self) -> usize {
        self.clicks.len()
    }
}

/// One recorded access of a short code.
///
/// `source` and `location` are categorical labels supplied by the caller's
/// environment; `agent` is the opaque client-identifying string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClickEvent {
    pub timestamp: DateTime<Utc>,
    pub source: String,
    pub location: String,
    pub agent: String,
}
