//! Handler for short code redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, header},
    response::Redirect,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::click_meta::{classify_source, fallback_location};

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Click Recording
///
/// Click metadata is derived here, in the caller environment, and handed to
/// the registry: `source` is classified from the `Referer` header,
/// `location` comes from the fallback enumeration (real geolocation is out
/// of scope), and `agent` is the raw `User-Agent` value.
///
/// # Errors
///
/// Returns 404 Not Found when the code is unknown or expired; the two cases
/// are deliberately indistinguishable in the response.
/// Returns 503 Service Unavailable if recording the click cannot be saved.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Redirect, AppError> {
    let referer = headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok());
    let agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let source = classify_source(referer);
    let location = fallback_location();

    match state.registry.resolve(&code, source, location, agent).await? {
        Some(target) => Ok(Redirect::temporary(&target)),
        None => Err(AppError::not_found(
            "Unknown or expired short code",
            json!({ "code": code }),
        )),
    }
}
