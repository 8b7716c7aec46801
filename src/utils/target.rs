//! Target URL validation.
//!
//! The registry stores the caller's target string untouched; this module only
//! checks that it is a well-formed absolute HTTP(S) URI. Dangerous schemes
//! (`javascript:`, `data:`, `file:`, ...) are rejected by the scheme allowlist.

use crate::error::AppError;
use serde_json::json;
use url::Url;

/// Validates that `target` is a non-empty absolute http/https URL.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for malformed input or non-HTTP schemes.
pub fn validate_target(target: &str) -> Result<(), AppError> {
    if target.is_empty() {
        return Err(AppError::bad_request(
            "Target URL must not be empty",
            json!({}),
        ));
    }

    let url = Url::parse(target)
        .map_err(|e| AppError::bad_request("Invalid target URL", json!({ "reason": e.to_string() })))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(AppError::bad_request(
            "Target URL must use http or https",
            json!({ "scheme": scheme }),
        )),
    }
}
