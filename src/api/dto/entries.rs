//! DTOs for the entry listing endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{ClickEvent, Entry};

/// Listing of all retained entries, most recent first.
#[derive(Debug, Serialize)]
pub struct EntryListResponse {
    pub total: usize,
    pub items: Vec<EntryResponse>,
}

/// One entry with its computed expiry status and full click detail.
#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub code: String,
    pub target: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub validity_minutes: i64,
    /// Computed against the registry clock at read time, never stored.
    pub expired: bool,
    pub click_count: usize,
    pub clicks: Vec<ClickResponse>,
}

#[derive(Debug, Serialize)]
pub struct ClickResponse {
    pub timestamp: DateTime<Utc>,
    pub source: String,
    pub location: String,
    pub agent: String,
}

impl EntryResponse {
    pub fn from_entry(entry: &Entry, now: DateTime<Utc>, short_url: String) -> Self {
        Self {
            code: entry.code.clone(),
            target: entry.target.clone(),
            short_url,
            created_at: entry.created_at,
            expires_at: entry.expires_at,
            validity_minutes: entry.validity_minutes,
            expired: entry.is_expired_at(now),
            click_count: entry.click_count(),
            clicks: entry.clicks.iter().map(ClickResponse::from_click).collect(),
        }
    }
}

impl ClickResponse {
    fn from_click(click: &ClickEvent) -> Self {
        Self {
            timestamp: click.timestamp,
            source: click.source.clone(),
            location: click.location.clone(),
            agent: click.agent.clone(),
        }
    }
}
