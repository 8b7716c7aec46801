//! Handler for the entry listing endpoint.

use axum::{Json, extract::State};

use crate::api::dto::entries::{EntryListResponse, EntryResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all retained entries with click detail, most recent first.
///
/// # Endpoint
///
/// `GET /api/entries`
///
/// Triggers the retention cleanup pass before listing, so entries expired
/// for longer than the retention window disappear here. Entries still inside
/// the window are returned with `expired: true`.
///
/// # Errors
///
/// Returns 503 Service Unavailable if a cleanup-triggered save fails.
pub async fn entries_handler(
    State(state): State<AppState>,
) -> Result<Json<EntryListResponse>, AppError> {
    let entries = state.registry.list().await?;
    let now = state.registry.now();

    let items: Vec<EntryResponse> = entries
        .iter()
        .map(|entry| EntryResponse::from_entry(entry, now, state.short_url(&entry.code)))
        .collect();

    Ok(Json(EntryListResponse {
        total: items.len(),
        items,
    }))
}
