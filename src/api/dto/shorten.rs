//! DTOs for the shorten endpoint.

use crate::error::ErrorInfo;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for requested-code validation.
static REQUESTED_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{1,20}$").unwrap());

/// Request to shorten one or more URLs.
///
/// Mirrors the shorten form, which accepts up to five URLs at once.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(length(min = 1, max = 5, message = "Provide between 1 and 5 URLs"))]
    #[validate(nested)]
    pub urls: Vec<UrlItem>,
}

/// Individual URL to be shortened.
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct UrlItem {
    /// The target URL to register (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Optional validity period; the configured default applies when absent.
    #[validate(range(min = 1, message = "Validity must be a positive number of minutes"))]
    pub validity_minutes: Option<i64>,

    /// Optional caller-requested short code.
    #[validate(regex(
        path = "*REQUESTED_CODE_REGEX",
        message = "Requested code must be 1-20 alphanumeric characters"
    ))]
    pub requested_code: Option<String>,
}

/// Response containing batch processing results.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub summary: BatchSummary,
    pub items: Vec<ShortenResultItem>,
}

/// Individual result for a URL in the batch.
///
/// Uses untagged enum for cleaner JSON structure (no discriminator field).
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ShortenResultItem {
    Success {
        url: String,
        code: String,
        short_url: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
        validity_minutes: i64,
    },
    Error {
        url: String,
        error: ErrorInfo,
    },
}

/// Summary statistics for batch processing.
#[derive(Debug, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(url: &str, validity: Option<i64>, code: Option<&str>) -> UrlItem {
        UrlItem {
            url: url.to_string(),
            validity_minutes: validity,
            requested_code: code.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        let request = ShortenRequest {
            urls: vec![item("https://example.com", Some(30), Some("abc123"))],
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_batch_rejected() {
        let request = ShortenRequest { urls: vec![] };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_oversized_batch_rejected() {
        let request = ShortenRequest {
            urls: (0..6).map(|_| item("https://example.com", None, None)).collect(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_invalid_url_rejected() {
        let request = ShortenRequest {
            urls: vec![item("not-a-url", None, None)],
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_zero_validity_rejected() {
        let request = ShortenRequest {
            urls: vec![item("https://example.com", Some(0), None)],
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_malformed_requested_code_rejected() {
        let too_long = "a".repeat(21);
        for code in ["with space", "hyphen-ated", too_long.as_str()] {
            let request = ShortenRequest {
                urls: vec![item("https://example.com", None, Some(code))],
            };
            assert!(request.validate().is_err(), "code {code:?} should fail");
        }
    }
}
