//! Handler for the shorten endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{
    BatchSummary, ShortenRequest, ShortenResponse, ShortenResultItem, UrlItem,
};
use crate::error::AppError;
use crate::state::AppState;

/// Registers short codes for one or more target URLs.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Batch Processing
///
/// Accepts 1-5 URLs and processes them independently. If one fails, others
/// continue processing; each result carries either success data or error
/// information.
///
/// # Request Body
///
/// ```json
/// {
///   "urls": [
///     {
///       "url": "https://example.com",
///       "validity_minutes": 30,     // optional, defaults to policy value
///       "requested_code": "promo1"  // optional
///     }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the envelope fails validation.
/// Individual URL errors are returned in the response items array.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let total = payload.urls.len();
    let mut items = Vec::with_capacity(total);
    let mut successful = 0;
    let mut failed = 0;

    for item in payload.urls {
        let url = item.url.clone();

        match process_single_url(&state, item).await {
            Ok(item) => {
                successful += 1;
                items.push(item);
            }
            Err(err) => {
                failed += 1;
                items.push(ShortenResultItem::Error {
                    url,
                    error: err.to_error_info(),
                });
            }
        }
    }

    Ok(Json(ShortenResponse {
        summary: BatchSummary {
            total,
            successful,
            failed,
        },
        items,
    }))
}

/// Registers a single URL and shapes the success payload.
async fn process_single_url(
    state: &AppState,
    item: UrlItem,
) -> Result<ShortenResultItem, AppError> {
    let entry = state
        .registry
        .shorten(item.url, item.validity_minutes, item.requested_code)
        .await?;

    Ok(ShortenResultItem::Success {
        url: entry.target.clone(),
        short_url: state.short_url(&entry.code),
        code: entry.code,
        created_at: entry.created_at,
        expires_at: entry.expires_at,
        validity_minutes: entry.validity_minutes,
    })
}
