//! Short code generation and validation.
//!
//! Generated codes are drawn uniformly from the 62-character alphanumeric
//! alphabet, one independent draw per position. Uniqueness against the
//! registry is the caller's responsibility; the registry retries generation
//! until a free code comes out.

use crate::error::AppError;
use rand::Rng;
use rand::distr::Alphanumeric;
use serde_json::json;

/// Length of generated codes before any collision-driven widening.
pub const GENERATED_CODE_LENGTH: usize = 6;

/// Upper bound on code length, generated or requested.
pub const MAX_CODE_LENGTH: usize = 20;

/// Source of candidate short codes.
pub trait CodeGenerator: Send + Sync {
    /// Produces one candidate code of exactly `length` characters.
    fn generate(&self, length: usize) -> String;
}

/// Default generator drawing alphanumeric characters from the thread RNG.
pub struct RandomCodes;

impl CodeGenerator for RandomCodes {
    fn generate(&self, length: usize) -> String {
        let mut rng = rand::rng();
        (0..length)
            .map(|_| rng.sample(Alphanumeric) as char)
            .collect()
    }
}

/// Validates a caller-requested short code: 1-20 alphanumeric characters.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the code is empty, too long, or
/// contains anything outside `[A-Za-z0-9]`.
pub fn validate_requested_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() || code.len() > MAX_CODE_LENGTH {
        return Err(AppError::bad_request(
            "Requested code must be 1-20 characters",
            json!({ "provided_length": code.len() }),
        ));
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::bad_request(
            "Requested code may only contain letters and digits",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
